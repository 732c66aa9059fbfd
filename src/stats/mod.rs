//! Streaks and achievements
//!
//! ```text
//! IntakeLedger ──daily totals──▶ streaks ──max streak──▶ achievements
//!                                                         │
//!                                  profile.achievements ◀─┘ (one-way merge)
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let manager = AchievementManager::new(StreakEvaluator::new(MissingDayPolicy::Strict));
//! let report = manager.check(&mut profile, &ledger, goal.daily_goal, goal.unit, today);
//! if report.has_unlocks() {
//!     store.save_profile(&profile)?;
//! }
//! ```

pub mod achievements;
pub mod streaks;

pub use achievements::{
    evaluate_unlocks, merge_unlocks, Achievement, AchievementId, AchievementManager,
    AchievementReport, UnlockMap, UnlockedAchievement, ACHIEVEMENTS,
};
pub use streaks::{
    current_streak, evaluate, evaluate_with, fill_missing_days, max_streak, MissingDayPolicy,
    StreakEvaluator, StreakPoint,
};
