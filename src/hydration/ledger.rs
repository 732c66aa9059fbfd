//! Append-only intake ledger

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::{DailyTotal, IntakeEvent, ValidationError, VolumeUnit};

/// Append-only record of intake events.
///
/// Events keep their insertion order and are never edited or reordered.
#[derive(Debug, Clone, Default)]
pub struct IntakeLedger {
    events: Vec<IntakeEvent>,
}

impl IntakeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger from persisted events.
    ///
    /// Events that would be rejected by [`IntakeLedger::append`] are dropped.
    pub fn from_events(events: impl IntoIterator<Item = IntakeEvent>) -> Self {
        let mut ledger = Self::new();
        for event in events {
            if let Err(e) = ledger.append(event) {
                tracing::warn!("Skipping invalid intake event: {}", e);
            }
        }
        ledger
    }

    /// Record an event. Non-positive amounts are rejected and leave the ledger unchanged.
    pub fn append(&mut self, event: IntakeEvent) -> Result<(), ValidationError> {
        let amount = event.amount();
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ValidationError::NonPositiveAmount(amount));
        }
        self.events.push(event);
        Ok(())
    }

    pub fn events(&self) -> &[IntakeEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Per-day totals in ascending date order.
    ///
    /// Days without events are absent. Each day is expressed in the unit of its
    /// first event; later events in another unit are converted into it.
    pub fn daily_totals(&self) -> Vec<DailyTotal> {
        let mut by_day: BTreeMap<NaiveDate, DailyTotal> = BTreeMap::new();

        for event in &self.events {
            let entry = by_day
                .entry(event.date())
                .or_insert_with(|| DailyTotal::new(event.date(), 0.0, event.unit()));
            entry.amount += event.unit().convert(event.amount(), entry.unit);
        }

        by_day.into_values().collect()
    }

    /// Per-day totals with every day converted into `unit`
    pub fn daily_totals_in(&self, unit: VolumeUnit) -> Vec<DailyTotal> {
        self.daily_totals()
            .into_iter()
            .map(|t| DailyTotal::new(t.date, t.unit.convert(t.amount, unit), unit))
            .collect()
    }

    /// Total logged on a single day, if anything was logged
    pub fn total_on(&self, date: NaiveDate) -> Option<DailyTotal> {
        self.daily_totals().into_iter().find(|t| t.date == date)
    }
}
