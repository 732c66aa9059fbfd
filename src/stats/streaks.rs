//! Goal-attainment streaks
//!
//! A streak counts consecutive days on which the daily total met the goal.
//! The evaluation is a single pass: +1 on a day at or above the goal,
//! back to 0 on a day below it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::DailyTotal;

/// Streak length at the end of one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StreakPoint {
    pub date: NaiveDate,
    pub streak: u32,
}

/// How days without any logged intake are treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MissingDayPolicy {
    /// An unlogged day between two logged days breaks the streak
    #[default]
    Strict,
    /// Unlogged days are skipped; the streak carries over them
    Lenient,
}

impl std::str::FromStr for MissingDayPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            _ => Err(format!("unknown missing-day policy '{}'", s)),
        }
    }
}

impl MissingDayPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        }
    }
}

impl std::fmt::Display for MissingDayPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Streak series over exactly the days given, judged against one goal
pub fn evaluate(daily_totals: &[DailyTotal], goal: f64) -> Vec<StreakPoint> {
    evaluate_with(daily_totals, |_| goal)
}

/// Streak series with a goal chosen per day
pub fn evaluate_with<F>(daily_totals: &[DailyTotal], goal_for: F) -> Vec<StreakPoint>
where
    F: Fn(NaiveDate) -> f64,
{
    let mut current = 0u32;
    daily_totals
        .iter()
        .map(|day| {
            if day.amount >= goal_for(day.date) {
                current += 1;
            } else {
                current = 0;
            }
            StreakPoint {
                date: day.date,
                streak: current,
            }
        })
        .collect()
}

/// Longest streak in the series, 0 when empty
pub fn max_streak(points: &[StreakPoint]) -> u32 {
    points.iter().map(|p| p.streak).max().unwrap_or(0)
}

/// Streak that is still alive on `today`.
///
/// The last evaluated day must be today or yesterday; today not being over
/// yet does not break the streak.
pub fn current_streak(points: &[StreakPoint], today: NaiveDate) -> u32 {
    let Some(last) = points.last() else {
        return 0;
    };

    let days_since = (today - last.date).num_days();
    if (0..=1).contains(&days_since) {
        last.streak
    } else {
        0
    }
}

/// Insert zero-valued totals for every unlogged day between the first and last entry
pub fn fill_missing_days(daily_totals: &[DailyTotal]) -> Vec<DailyTotal> {
    let mut filled: Vec<DailyTotal> = Vec::with_capacity(daily_totals.len());

    for day in daily_totals {
        if let Some(prev) = filled.last().copied() {
            let mut gap = prev.date.succ_opt();
            while let Some(date) = gap {
                if date >= day.date {
                    break;
                }
                filled.push(DailyTotal::new(date, 0.0, prev.unit));
                gap = date.succ_opt();
            }
        }
        filled.push(*day);
    }

    filled
}

/// Streak evaluation with a configured missing-day policy
#[derive(Debug, Clone, Copy, Default)]
pub struct StreakEvaluator {
    policy: MissingDayPolicy,
}

impl StreakEvaluator {
    pub fn new(policy: MissingDayPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> MissingDayPolicy {
        self.policy
    }

    pub fn evaluate(&self, daily_totals: &[DailyTotal], goal: f64) -> Vec<StreakPoint> {
        self.evaluate_with(daily_totals, |_| goal)
    }

    pub fn evaluate_with<F>(&self, daily_totals: &[DailyTotal], goal_for: F) -> Vec<StreakPoint>
    where
        F: Fn(NaiveDate) -> f64,
    {
        match self.policy {
            MissingDayPolicy::Strict => evaluate_with(&fill_missing_days(daily_totals), goal_for),
            MissingDayPolicy::Lenient => evaluate_with(daily_totals, goal_for),
        }
    }
}
