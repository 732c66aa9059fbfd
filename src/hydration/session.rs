//! Running total for the current day

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{ValidationError, VolumeUnit};

/// Snapshot of one finished day, archived when the session rolls over
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: NaiveDate,
    pub total_intake: f64,
    pub unit: VolumeUnit,
    /// Goal that was in effect on that day, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<f64>,
}

/// Today's running intake, keyed by date.
///
/// Moving to a new day goes through [`DailySession::roll_over`], which hands
/// back the finished day so it can be archived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySession {
    date: NaiveDate,
    total: f64,
    unit: VolumeUnit,
    #[serde(default)]
    goal: Option<f64>,
    #[serde(default)]
    goal_reached: bool,
}

impl DailySession {
    pub fn new(date: NaiveDate, unit: VolumeUnit) -> Self {
        Self {
            date,
            total: 0.0,
            unit,
            goal: None,
            goal_reached: false,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    pub fn unit(&self) -> VolumeUnit {
        self.unit
    }

    pub fn goal(&self) -> Option<f64> {
        self.goal
    }

    pub fn goal_reached(&self) -> bool {
        self.goal_reached
    }

    /// Remember the goal in effect today so it is archived with the day
    pub fn set_goal(&mut self, goal: f64) {
        self.goal = Some(goal);
        self.update_goal_flag();
    }

    /// Add a drink to today's total.
    ///
    /// Returns true only on the call that first brings the total up to the goal.
    pub fn record(&mut self, amount: f64, goal: f64) -> Result<bool, ValidationError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ValidationError::NonPositiveAmount(amount));
        }
        self.total += amount;
        self.goal = Some(goal);
        Ok(self.update_goal_flag())
    }

    /// Re-express the running total and goal in `unit`
    pub fn convert_to(&mut self, unit: VolumeUnit) {
        if unit == self.unit {
            return;
        }
        let from = self.unit;
        self.total = from.convert(self.total, unit);
        self.goal = self.goal.map(|g| from.convert(g, unit));
        self.unit = unit;
    }

    /// Zero today's total. The intake log is not touched.
    pub fn reset(&mut self) {
        self.total = 0.0;
        self.goal_reached = false;
    }

    /// Move the session to `new_date`.
    ///
    /// Returns the archived previous day, or `None` if the date did not change.
    pub fn roll_over(&mut self, new_date: NaiveDate) -> Option<HistoryEntry> {
        if new_date == self.date {
            return None;
        }

        let archived = HistoryEntry {
            date: self.date,
            total_intake: self.total,
            unit: self.unit,
            goal: self.goal,
        };

        tracing::debug!(
            "Rolling session over from {} to {} (archived {:.2} {})",
            self.date,
            new_date,
            self.total,
            self.unit
        );

        *self = Self::new(new_date, self.unit);
        Some(archived)
    }

    /// Returns true when the flag flipped from unreached to reached
    fn update_goal_flag(&mut self) -> bool {
        let Some(goal) = self.goal else {
            return false;
        };

        if self.total >= goal {
            let newly = !self.goal_reached;
            self.goal_reached = true;
            newly
        } else {
            self.goal_reached = false;
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LITERS_PER_OUNCE;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    #[test]
    fn test_goal_reached_fires_once() {
        let mut session = DailySession::new(day(1), VolumeUnit::Liters);
        assert!(!session.record(1.0, 2.0).unwrap());
        assert!(session.record(1.0, 2.0).unwrap());
        assert!(!session.record(0.5, 2.0).unwrap());
        assert!(session.goal_reached());
    }

    #[test]
    fn test_reset_rearms_goal() {
        let mut session = DailySession::new(day(1), VolumeUnit::Liters);
        session.record(2.5, 2.0).unwrap();
        session.reset();
        assert_eq!(session.total(), 0.0);
        assert!(!session.goal_reached());
        assert!(session.record(2.0, 2.0).unwrap());
    }

    #[test]
    fn test_record_rejects_non_positive() {
        let mut session = DailySession::new(day(1), VolumeUnit::Ounces);
        assert!(session.record(0.0, 64.0).is_err());
        assert!(session.record(-8.0, 64.0).is_err());
        assert_eq!(session.total(), 0.0);
    }

    #[test]
    fn test_roll_over_archives_previous_day() {
        let mut session = DailySession::new(day(1), VolumeUnit::Liters);
        session.record(1.25, 2.4).unwrap();

        assert!(session.roll_over(day(1)).is_none());
        assert_eq!(session.total(), 1.25);

        let archived = session.roll_over(day(2)).unwrap();
        assert_eq!(archived.date, day(1));
        assert_eq!(archived.total_intake, 1.25);
        assert_eq!(archived.goal, Some(2.4));

        assert_eq!(session.date(), day(2));
        assert_eq!(session.total(), 0.0);
        assert!(!session.goal_reached());
        assert_eq!(session.goal(), None);
    }

    #[test]
    fn test_convert_to_keeps_volume() {
        let mut session = DailySession::new(day(1), VolumeUnit::Liters);
        session.record(0.295735, 2.0).unwrap();

        session.convert_to(VolumeUnit::Ounces);
        assert_eq!(session.unit(), VolumeUnit::Ounces);
        assert!((session.total() - 10.0).abs() < 1e-9);
        assert!((session.goal().unwrap() - 2.0 / LITERS_PER_OUNCE).abs() < 1e-9);

        session.record(5.0, 64.0).unwrap();
        assert!((session.total() - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_day_is_still_archived() {
        let mut session = DailySession::new(day(1), VolumeUnit::Liters);
        let archived = session.roll_over(day(3)).unwrap();
        assert_eq!(archived.total_intake, 0.0);
    }
}
