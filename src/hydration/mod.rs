//! Hydration core: goal calculation, intake ledger and the daily session

mod goal;
mod ledger;
mod progress;
mod session;

pub use goal::{
    compute_goal, GoalBreakdown, ACTIVITY_BLOCK_MINUTES, ACTIVITY_BLOCK_OUNCES, HEAT_BONUS_RATIO,
    HOT_THRESHOLD_C,
};
pub use ledger::IntakeLedger;
pub use progress::{greeting_for_hour, DrinkPreset, PlantStage, Progress, DRINK_PRESETS};
pub use session::{DailySession, HistoryEntry};
