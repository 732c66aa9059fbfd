//! Achievement definitions and metadata
//!
//! The trophy catalog is fixed: four streak milestones.

/// Unique identifier for each achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AchievementId {
    Weekly,
    Biweekly,
    Monthly,
    Semiannual,
}

impl AchievementId {
    /// Get the string ID used in the profile
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Biweekly => "biweekly",
            Self::Monthly => "monthly",
            Self::Semiannual => "semiannual",
        }
    }

    /// Parse from the profile string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "weekly" => Some(Self::Weekly),
            "biweekly" => Some(Self::Biweekly),
            "monthly" => Some(Self::Monthly),
            "semiannual" => Some(Self::Semiannual),
            _ => None,
        }
    }

    /// Get all achievement IDs
    pub fn all() -> &'static [AchievementId] {
        &[
            Self::Weekly,
            Self::Biweekly,
            Self::Monthly,
            Self::Semiannual,
        ]
    }
}

impl std::fmt::Display for AchievementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Achievement definition with all metadata
#[derive(Debug, Clone)]
pub struct Achievement {
    pub id: AchievementId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Display color of the trophy once earned
    pub color: &'static str,
    /// Streak length in days that unlocks it
    pub streak_threshold: u32,
}

/// All achievement definitions, ordered by threshold
pub static ACHIEVEMENTS: &[Achievement] = &[
    Achievement {
        id: AchievementId::Weekly,
        name: "1 Week Champion",
        description: "Reach your goal 7 days in a row",
        icon: "🏆",
        color: "blue",
        streak_threshold: 7,
    },
    Achievement {
        id: AchievementId::Biweekly,
        name: "2 Week Master",
        description: "Reach your goal 14 days in a row",
        icon: "🎖️",
        color: "green",
        streak_threshold: 14,
    },
    Achievement {
        id: AchievementId::Monthly,
        name: "Monthly Hydrator",
        description: "Reach your goal 30 days in a row",
        icon: "🥇",
        color: "orange",
        streak_threshold: 30,
    },
    Achievement {
        id: AchievementId::Semiannual,
        name: "6 Month Legend",
        description: "Reach your goal 180 days in a row",
        icon: "🏅",
        color: "red",
        streak_threshold: 180,
    },
];

impl Achievement {
    /// Get achievement definition by ID
    pub fn get(id: AchievementId) -> &'static Achievement {
        ACHIEVEMENTS
            .iter()
            .find(|a| a.id == id)
            .expect("All achievements should be defined")
    }

    /// Get total number of achievements
    pub fn total_count() -> usize {
        ACHIEVEMENTS.len()
    }

    /// The next trophy still out of reach for a given streak
    pub fn next_for_streak(streak: u32) -> Option<&'static Achievement> {
        ACHIEVEMENTS.iter().find(|a| a.streak_threshold > streak)
    }
}
