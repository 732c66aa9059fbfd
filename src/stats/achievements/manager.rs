//! Achievement Manager - ties streaks and trophies together
//!
//! Runs ledger -> daily totals -> streak series -> unlocks -> merge into the
//! profile. Persisting the profile afterwards is up to the caller.

use chrono::NaiveDate;

use super::checker::{evaluate_unlocks, merge_unlocks};
use super::definitions::{Achievement, AchievementId};
use crate::domain::{Profile, VolumeUnit};
use crate::hydration::IntakeLedger;
use crate::stats::streaks::{current_streak, max_streak, StreakEvaluator, StreakPoint};

/// An achievement that was just unlocked
#[derive(Debug, Clone)]
pub struct UnlockedAchievement {
    pub achievement: &'static Achievement,
    pub unlocked_on: NaiveDate,
}

/// Outcome of one evaluation pass
#[derive(Debug, Clone, Default)]
pub struct AchievementReport {
    pub streaks: Vec<StreakPoint>,
    pub max_streak: u32,
    pub current_streak: u32,
    pub newly_unlocked: Vec<UnlockedAchievement>,
}

impl AchievementReport {
    /// True when the profile changed and needs saving
    pub fn has_unlocks(&self) -> bool {
        !self.newly_unlocked.is_empty()
    }
}

/// Main manager for streaks and trophies
#[derive(Debug, Clone, Copy, Default)]
pub struct AchievementManager {
    evaluator: StreakEvaluator,
}

impl AchievementManager {
    pub fn new(evaluator: StreakEvaluator) -> Self {
        Self { evaluator }
    }

    /// Evaluate streaks against `goal` and merge any new trophies into `profile`.
    ///
    /// Every past day is converted into `goal_unit` and judged against the same goal.
    pub fn check(
        &self,
        profile: &mut Profile,
        ledger: &IntakeLedger,
        goal: f64,
        goal_unit: VolumeUnit,
        today: NaiveDate,
    ) -> AchievementReport {
        let totals = ledger.daily_totals_in(goal_unit);
        let streaks = self.evaluator.evaluate(&totals, goal);
        let max = max_streak(&streaks);

        let candidates = evaluate_unlocks(&profile.achievements, max, today);
        let added = merge_unlocks(&mut profile.achievements, &candidates);

        let newly_unlocked: Vec<UnlockedAchievement> = added
            .iter()
            .filter_map(|id| AchievementId::from_str(id))
            .map(|id| UnlockedAchievement {
                achievement: Achievement::get(id),
                unlocked_on: today,
            })
            .collect();

        for unlocked in &newly_unlocked {
            tracing::info!(
                "Achievement unlocked: {} ({} day streak)",
                unlocked.achievement.name,
                unlocked.achievement.streak_threshold
            );
        }

        tracing::debug!(
            "Evaluated {} days under {} policy: max streak {}, {} new trophies",
            totals.len(),
            self.evaluator.policy(),
            max,
            newly_unlocked.len()
        );

        AchievementReport {
            current_streak: current_streak(&streaks, today),
            max_streak: max,
            streaks,
            newly_unlocked,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{IntakeEvent, UnitSystem};
    use crate::stats::streaks::MissingDayPolicy;
    use chrono::NaiveTime;

    fn profile() -> Profile {
        Profile::new(
            UnitSystem::Metric,
            70.0,
            NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
            "Test",
            0,
        )
        .unwrap()
    }

    fn ledger_with_days(days: u32, amount: f64) -> IntakeLedger {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let mut ledger = IntakeLedger::new();
        for offset in 0..days {
            let ts = (start + chrono::Days::new(offset as u64))
                .and_hms_opt(10, 0, 0)
                .unwrap();
            ledger
                .append(IntakeEvent::new(ts, amount, VolumeUnit::Liters))
                .unwrap();
        }
        ledger
    }

    #[test]
    fn test_week_of_goals_unlocks_weekly() {
        let mut profile = profile();
        let ledger = ledger_with_days(7, 3.0);
        let today = NaiveDate::from_ymd_opt(2025, 1, 7).unwrap();

        let manager = AchievementManager::new(StreakEvaluator::new(MissingDayPolicy::Strict));
        let report = manager.check(&mut profile, &ledger, 2.5, VolumeUnit::Liters, today);

        assert_eq!(report.max_streak, 7);
        assert_eq!(report.current_streak, 7);
        assert_eq!(report.newly_unlocked.len(), 1);
        assert_eq!(report.newly_unlocked[0].achievement.id, AchievementId::Weekly);
        assert_eq!(profile.achievements.get("weekly"), Some(&today));

        // Second pass unlocks nothing
        let again = manager.check(&mut profile, &ledger, 2.5, VolumeUnit::Liters, today);
        assert!(!again.has_unlocks());
    }

    #[test]
    fn test_missed_goal_never_revokes() {
        let mut profile = profile();
        let earned = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        profile.achievements.insert("weekly".to_string(), earned);

        let ledger = ledger_with_days(3, 1.0);
        let today = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
        let report = AchievementManager::default().check(
            &mut profile,
            &ledger,
            2.5,
            VolumeUnit::Liters,
            today,
        );

        assert_eq!(report.max_streak, 0);
        assert_eq!(profile.achievements.get("weekly"), Some(&earned));
    }

    #[test]
    fn test_ounce_days_judged_in_liters() {
        let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let mut ledger = IntakeLedger::new();
        for offset in 0..7 {
            let ts = (start + chrono::Days::new(offset))
                .and_hms_opt(10, 0, 0)
                .unwrap();
            ledger
                .append(IntakeEvent::new(ts, 10.0, VolumeUnit::Ounces))
                .unwrap();
        }

        let mut profile = profile();
        let today = NaiveDate::from_ymd_opt(2025, 1, 7).unwrap();
        let manager = AchievementManager::default();
        let report = manager.check(&mut profile, &ledger, 2.2819, VolumeUnit::Liters, today);

        assert_eq!(report.max_streak, 0);
        assert!(profile.achievements.is_empty());

        // The same days do meet a 9 oz goal
        let report = manager.check(&mut profile, &ledger, 9.0, VolumeUnit::Ounces, today);
        assert_eq!(report.max_streak, 7);
    }
}
