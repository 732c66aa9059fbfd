use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::unit::VolumeUnit;

/// A single logged drink. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeEvent {
    #[serde(rename = "datetime", with = "minute_precision")]
    timestamp: NaiveDateTime,
    amount: f64,
    unit: VolumeUnit,
}

impl IntakeEvent {
    pub fn new(timestamp: NaiveDateTime, amount: f64, unit: VolumeUnit) -> Self {
        Self {
            timestamp,
            amount,
            unit,
        }
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Calendar day the drink counts towards
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn unit(&self) -> VolumeUnit {
        self.unit
    }
}

/// Sum of all intake on one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub amount: f64,
    pub unit: VolumeUnit,
}

impl DailyTotal {
    pub fn new(date: NaiveDate, amount: f64, unit: VolumeUnit) -> Self {
        Self { date, amount, unit }
    }
}

/// Timestamps are stored as "YYYY-MM-DD HH:MM" in local time
mod minute_precision {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M";

    pub fn serialize<S: Serializer>(ts: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&ts.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(&raw, "%Y-%m-%d %H:%M:%S"))
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serializes_minute_precision() {
        let ts = NaiveDate::from_ymd_opt(2025, 4, 30)
            .unwrap()
            .and_hms_opt(9, 15, 42)
            .unwrap();
        let event = IntakeEvent::new(ts, 0.275, VolumeUnit::Liters);
        let line = serde_json::to_string(&event).unwrap();
        assert_eq!(
            line,
            r#"{"datetime":"2025-04-30 09:15","amount":0.275,"unit":"liters"}"#
        );

        let parsed: IntakeEvent = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed.date(), ts.date());
        assert_eq!(parsed.amount(), 0.275);
    }
}
