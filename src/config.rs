use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::Result;
use crate::grocery::{CostConfig, FALLBACK_UNIT_PRICE};
use crate::nutrition::NutritionGoals;

/// Settings file read from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "meal_planner.toml";

/// Prefix of environment overrides, e.g. `MEAL_PLANNER__GOALS__CALORIES=1800`.
pub const ENV_PREFIX: &str = "MEAL_PLANNER";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Directory holding the plan, grocery list and pantry JSON files.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_fallback_unit_price")]
    pub fallback_unit_price: f64,

    #[serde(default)]
    pub goals: NutritionGoals,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_fallback_unit_price() -> f64 {
    FALLBACK_UNIT_PRICE
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            fallback_unit_price: default_fallback_unit_price(),
            goals: NutritionGoals::default(),
        }
    }
}

impl Settings {
    /// Layer the settings file (optional unless named explicitly) and the
    /// environment over the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = path.unwrap_or(Path::new(DEFAULT_CONFIG_FILE));
        let settings = Config::builder()
            .add_source(File::from(file).required(path.is_some()))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    pub fn cost_config(&self) -> CostConfig {
        CostConfig {
            fallback_unit_price: self.fallback_unit_price,
        }
    }
}
