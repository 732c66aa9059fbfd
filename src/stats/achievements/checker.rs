//! Achievement checking logic
//!
//! Unlocks only ever grow: checking never removes an entry, and merging is a
//! one-way union that keeps the first recorded date.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::definitions::ACHIEVEMENTS;

/// Unlocked achievements: achievement id -> date earned
pub type UnlockMap = BTreeMap<String, NaiveDate>;

/// Achievements whose streak threshold is reached and which are not unlocked yet.
///
/// `current` is not modified; the caller merges the result with [`merge_unlocks`].
pub fn evaluate_unlocks(current: &UnlockMap, max_streak: u32, today: NaiveDate) -> UnlockMap {
    ACHIEVEMENTS
        .iter()
        .filter(|a| max_streak >= a.streak_threshold && !current.contains_key(a.id.as_str()))
        .map(|a| (a.id.as_str().to_string(), today))
        .collect()
}

/// Add `new` to `current` without replacing or removing anything.
///
/// Returns the ids that were actually added.
pub fn merge_unlocks(current: &mut UnlockMap, new: &UnlockMap) -> Vec<String> {
    let mut added = Vec::new();
    for (id, date) in new {
        if !current.contains_key(id) {
            current.insert(id.clone(), *date);
            added.push(id.clone());
        }
    }
    added
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, d).unwrap()
    }

    #[test]
    fn test_below_threshold_unlocks_nothing() {
        assert!(evaluate_unlocks(&UnlockMap::new(), 3, day(1)).is_empty());
        assert!(evaluate_unlocks(&UnlockMap::new(), 6, day(1)).is_empty());
    }

    #[test]
    fn test_threshold_reached_unlocks_today() {
        let unlocked = evaluate_unlocks(&UnlockMap::new(), 7, day(1));
        assert_eq!(unlocked.len(), 1);
        assert_eq!(unlocked.get("weekly"), Some(&day(1)));
    }

    #[test]
    fn test_long_streak_unlocks_all_reached() {
        let unlocked = evaluate_unlocks(&UnlockMap::new(), 31, day(1));
        let ids: Vec<&str> = unlocked.keys().map(|k| k.as_str()).collect();
        assert_eq!(ids, vec!["biweekly", "monthly", "weekly"]);
    }

    #[test]
    fn test_idempotent_after_merge() {
        let mut current = UnlockMap::new();
        let first = evaluate_unlocks(&current, 14, day(1));
        merge_unlocks(&mut current, &first);

        let second = evaluate_unlocks(&current, 14, day(2));
        assert!(second.is_empty());
        assert_eq!(current.get("weekly"), Some(&day(1)));
    }

    #[test]
    fn test_regressed_streak_keeps_unlocks() {
        let mut current = UnlockMap::new();
        current.insert("weekly".to_string(), day(1));

        let unlocked = evaluate_unlocks(&current, 0, day(5));
        assert!(unlocked.is_empty());
        assert_eq!(current.len(), 1);
    }

    #[test]
    fn test_merge_never_overwrites() {
        let mut current = UnlockMap::new();
        current.insert("weekly".to_string(), day(1));
        current.insert("legacy_badge".to_string(), day(2));

        let mut incoming = UnlockMap::new();
        incoming.insert("weekly".to_string(), day(9));
        incoming.insert("biweekly".to_string(), day(9));

        let added = merge_unlocks(&mut current, &incoming);
        assert_eq!(added, vec!["biweekly".to_string()]);
        assert_eq!(current.get("weekly"), Some(&day(1)));
        assert_eq!(current.get("legacy_badge"), Some(&day(2)));
        assert_eq!(current.len(), 3);
    }
}
