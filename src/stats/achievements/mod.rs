//! Trophies for goal streaks
//!
//! Static catalog, unlock checks and the manager that applies them to a profile.

mod checker;
mod definitions;
mod manager;

pub use checker::{evaluate_unlocks, merge_unlocks, UnlockMap};
pub use definitions::{Achievement, AchievementId, ACHIEVEMENTS};
pub use manager::{AchievementManager, AchievementReport, UnlockedAchievement};
