use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::Result;
use crate::models::{GroceryItem, MealPlan, PantryItem};

const MEAL_PLAN_FILE: &str = "meal_plans.json";
const GROCERY_LIST_FILE: &str = "grocery_list.json";
const PANTRY_FILE: &str = "pantry.json";

/// Read a JSON document, or the default value when the file does not exist yet.
fn load_or_default<T, P>(path: P) -> Result<T>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if !path.exists() {
        return Ok(T::default());
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn save_pretty<T: Serialize + ?Sized, P: AsRef<Path>>(path: P, value: &T) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    info!(path = %path.display(), "saved");
    Ok(())
}

/// Load a meal plan, filling in any day or slot the file lacks.
pub fn load_meal_plan<P: AsRef<Path>>(path: P) -> Result<MealPlan> {
    let mut plan: MealPlan = load_or_default(&path)?;
    let created = plan.ensure_all_slots();
    if created > 0 && path.as_ref().exists() {
        warn!(created, "meal plan was missing slots; treated as empty");
    }
    Ok(plan)
}

pub fn save_meal_plan<P: AsRef<Path>>(path: P, plan: &MealPlan) -> Result<()> {
    save_pretty(path, plan)
}

/// Load the last saved grocery lines. The file holds a bare JSON array.
pub fn load_grocery_list<P: AsRef<Path>>(path: P) -> Result<Vec<GroceryItem>> {
    load_or_default(path)
}

pub fn save_grocery_list<P: AsRef<Path>>(path: P, items: &[GroceryItem]) -> Result<()> {
    save_pretty(path, items)
}

pub fn load_pantry<P: AsRef<Path>>(path: P) -> Result<Vec<PantryItem>> {
    load_or_default(path)
}

pub fn save_pantry<P: AsRef<Path>>(path: P, items: &[PantryItem]) -> Result<()> {
    save_pretty(path, items)
}

/// Well-known file locations under one data directory.
#[derive(Debug, Clone)]
pub struct DataPaths {
    root: PathBuf,
}

impl DataPaths {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn meal_plan(&self) -> PathBuf {
        self.root.join(MEAL_PLAN_FILE)
    }

    pub fn grocery_list(&self) -> PathBuf {
        self.root.join(GROCERY_LIST_FILE)
    }

    pub fn pantry(&self) -> PathBuf {
        self.root.join(PANTRY_FILE)
    }
}
