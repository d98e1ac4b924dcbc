mod summary;

pub use summary::{
    daily_breakdown, macro_distribution, progress, summarize, MacroShare, NutritionGoals,
    NutritionProgress,
};
