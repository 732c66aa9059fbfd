use serde::{Deserialize, Serialize};

use super::validation::ValidationError;

/// Liters in one US fluid ounce
pub const LITERS_PER_OUNCE: f64 = 0.0295735;

/// Pounds in one kilogram
pub const POUNDS_PER_KG: f64 = 2.20462;

/// Measurement system chosen in the profile.
///
/// Stored on disk by the weight unit the user picked ("kg" / "lbs").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum UnitSystem {
    /// Weight in kilograms, volumes in liters
    #[default]
    #[serde(rename = "kg", alias = "metric")]
    Metric,
    /// Weight in pounds, volumes in fluid ounces
    #[serde(rename = "lbs", alias = "imperial")]
    Imperial,
}

impl std::str::FromStr for UnitSystem {
    type Err = ValidationError;

    /// Parse a unit system from a string (supports short aliases)
    /// - metric: kg, metric, m
    /// - imperial: lbs, lb, imperial, i
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "kg" | "metric" | "m" => Ok(Self::Metric),
            "lbs" | "lb" | "imperial" | "i" => Ok(Self::Imperial),
            _ => Err(ValidationError::UnknownUnit(s.to_string())),
        }
    }
}

impl UnitSystem {
    /// Get the canonical string representation (the weight unit)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Metric => "kg",
            Self::Imperial => "lbs",
        }
    }

    /// Volume unit that goals and intake are expressed in
    pub fn volume_unit(&self) -> VolumeUnit {
        match self {
            Self::Metric => VolumeUnit::Liters,
            Self::Imperial => VolumeUnit::Ounces,
        }
    }
}

impl std::fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unit a volume of water is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum VolumeUnit {
    #[serde(rename = "oz")]
    Ounces,
    #[default]
    #[serde(rename = "liters", alias = "l", alias = "L")]
    Liters,
}

impl VolumeUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ounces => "oz",
            Self::Liters => "liters",
        }
    }

    /// Short label for compact output
    pub fn short(&self) -> &'static str {
        match self {
            Self::Ounces => "oz",
            Self::Liters => "L",
        }
    }

    /// Convert `amount` expressed in `self` into `target`
    pub fn convert(&self, amount: f64, target: VolumeUnit) -> f64 {
        match (self, target) {
            (Self::Ounces, VolumeUnit::Liters) => amount * LITERS_PER_OUNCE,
            (Self::Liters, VolumeUnit::Ounces) => amount / LITERS_PER_OUNCE,
            _ => amount,
        }
    }
}

impl std::fmt::Display for VolumeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_system_aliases() {
        assert_eq!("KG".parse::<UnitSystem>(), Ok(UnitSystem::Metric));
        assert_eq!("imperial".parse::<UnitSystem>(), Ok(UnitSystem::Imperial));
        assert_eq!(
            "stone".parse::<UnitSystem>(),
            Err(ValidationError::UnknownUnit("stone".to_string()))
        );
    }

    #[test]
    fn test_unit_system_serializes_as_weight_unit() {
        assert_eq!(serde_json::to_string(&UnitSystem::Imperial).unwrap(), "\"lbs\"");
        let parsed: UnitSystem = serde_json::from_str("\"metric\"").unwrap();
        assert_eq!(parsed, UnitSystem::Metric);
    }

    #[test]
    fn test_volume_conversion() {
        let liters = VolumeUnit::Ounces.convert(12.0, VolumeUnit::Liters);
        assert!((liters - 0.354882).abs() < 1e-9);
        let back = VolumeUnit::Liters.convert(liters, VolumeUnit::Ounces);
        assert!((back - 12.0).abs() < 1e-9);
        assert_eq!(VolumeUnit::Liters.convert(1.5, VolumeUnit::Liters), 1.5);
    }
}
