//! Progress towards the daily goal, drink presets and the plant metaphor

use crate::domain::{UnitSystem, VolumeUnit};

/// A quick-pick drink size
#[derive(Debug, Clone)]
pub struct DrinkPreset {
    pub key: &'static str,
    pub name: &'static str,
    pub liters: f64,
    pub icon: &'static str,
}

impl DrinkPreset {
    /// Volume of this preset in the profile's unit
    pub fn amount_for(&self, unit: UnitSystem) -> f64 {
        VolumeUnit::Liters.convert(self.liters, unit.volume_unit())
    }

    /// Look up a preset by key or display name (case-insensitive)
    pub fn find(query: &str) -> Option<&'static DrinkPreset> {
        let query = query.trim().to_lowercase();
        DRINK_PRESETS
            .iter()
            .find(|p| p.key == query || p.name.to_lowercase() == query)
    }
}

pub static DRINK_PRESETS: &[DrinkPreset] = &[
    DrinkPreset {
        key: "half-cup",
        name: "Half cup",
        liters: 0.275,
        icon: "🥃",
    },
    DrinkPreset {
        key: "cup",
        name: "Whole cup",
        liters: 0.55,
        icon: "🥛",
    },
    DrinkPreset {
        key: "half-bottle",
        name: "Half bottle",
        liters: 0.75,
        icon: "🥤",
    },
    DrinkPreset {
        key: "bottle",
        name: "Water bottle",
        liters: 1.5,
        icon: "🍶",
    },
];

/// Growth stage of the plant that is "watered" by drinking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlantStage {
    Seed,
    Growth,
    Flourishing,
}

impl PlantStage {
    /// Stage for a progress fraction in [0, 1]
    pub fn for_progress(progress: f64) -> Self {
        if progress < 0.34 {
            Self::Seed
        } else if progress < 0.67 {
            Self::Growth
        } else {
            Self::Flourishing
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Seed => "Seed",
            Self::Growth => "Growth",
            Self::Flourishing => "Flourishing",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Seed => "🌱",
            Self::Growth => "🌿",
            Self::Flourishing => "🪴",
        }
    }
}

/// Snapshot of today's progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub total: f64,
    pub goal: f64,
    /// Fraction of the goal reached, capped at 1.0
    pub fraction: f64,
    pub remaining: f64,
    pub stage: PlantStage,
}

impl Progress {
    pub fn new(total: f64, goal: f64) -> Self {
        let fraction = if goal > 0.0 {
            (total / goal).clamp(0.0, 1.0)
        } else {
            1.0
        };
        Self {
            total,
            goal,
            fraction,
            remaining: (goal - total).max(0.0),
            stage: PlantStage::for_progress(fraction),
        }
    }

    pub fn percent(&self) -> u32 {
        (self.fraction * 100.0) as u32
    }

    pub fn is_complete(&self) -> bool {
        self.total >= self.goal
    }
}

/// Greeting for the hour of day (0-23)
pub fn greeting_for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        "Good Morning, have a great start into the day, your plant waits to be watered!"
    } else if hour < 18 {
        "Good Afternoon, let's keep track of your water drinking habits and grow a plant!"
    } else {
        "Good Evening, you almost reached your goal, keep going and water your plant!"
    }
}
