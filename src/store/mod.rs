//! Flat-file persistence
//!
//! Everything lives in one data directory (`~/.smartsip/` by default):
//!
//! ```text
//! profile.json        profile and earned trophies (rewritten atomically)
//! intake_log.jsonl    one intake event per line (append-only)
//! history.jsonl       one archived day per line (append-only)
//! session.json        today's running total
//! ```
//!
//! Files that fail to parse are treated as absent: the app starts over as if
//! there was no profile, no events or no session yet.

mod atomic;
mod jsonl;

pub use atomic::write_atomic;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::domain::{IntakeEvent, Profile, VolumeUnit};
use crate::hydration::{DailySession, HistoryEntry, IntakeLedger};

const PROFILE_FILE: &str = "profile.json";
const LOG_FILE: &str = "intake_log.jsonl";
const HISTORY_FILE: &str = "history.jsonl";
const SESSION_FILE: &str = "session.json";

/// Data directory handle
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn profile_path(&self) -> PathBuf {
        self.dir.join(PROFILE_FILE)
    }

    pub fn log_path(&self) -> PathBuf {
        self.dir.join(LOG_FILE)
    }

    pub fn history_path(&self) -> PathBuf {
        self.dir.join(HISTORY_FILE)
    }

    pub fn session_path(&self) -> PathBuf {
        self.dir.join(SESSION_FILE)
    }

    // ========================================
    // PROFILE
    // ========================================

    /// Load the profile; `None` if there is none yet or it cannot be used
    pub fn load_profile(&self) -> Option<Profile> {
        let path = self.profile_path();
        if !path.exists() {
            return None;
        }

        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!("Failed to read profile {}: {}", path.display(), e);
                return None;
            }
        };

        let profile: Profile = match serde_json::from_str(&content) {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!("Corrupt profile {}: {}; starting fresh", path.display(), e);
                return None;
            }
        };

        if let Err(e) = profile.validate() {
            tracing::warn!("Stored profile is invalid: {}; starting fresh", e);
            return None;
        }

        Some(profile)
    }

    /// Validate and save the profile. Invalid profiles are never written.
    pub fn save_profile(&self, profile: &Profile) -> Result<()> {
        profile.validate()?;

        let content =
            serde_json::to_string_pretty(profile).with_context(|| "Failed to serialize profile")?;
        write_atomic(&self.profile_path(), content.as_bytes())?;

        tracing::debug!("Saved profile to {}", self.profile_path().display());
        Ok(())
    }

    // ========================================
    // INTAKE LOG
    // ========================================

    /// Append an event to the intake log
    pub fn append_intake(&self, event: &IntakeEvent) -> Result<()> {
        jsonl::append_line(&self.log_path(), event)
    }

    /// Rebuild the ledger from the intake log
    pub fn load_ledger(&self) -> IntakeLedger {
        IntakeLedger::from_events(jsonl::read_lines::<IntakeEvent>(&self.log_path()))
    }

    // ========================================
    // HISTORY
    // ========================================

    pub fn append_history(&self, entry: &HistoryEntry) -> Result<()> {
        jsonl::append_line(&self.history_path(), entry)
    }

    /// Archived days in the order they were written
    pub fn load_history(&self) -> Vec<HistoryEntry> {
        jsonl::read_lines(&self.history_path())
    }

    // ========================================
    // SESSION
    // ========================================

    /// Stored session, if one exists and parses
    pub fn load_session(&self) -> Option<DailySession> {
        let path = self.session_path();
        if !path.exists() {
            return None;
        }

        match std::fs::read_to_string(&path)
            .map_err(anyhow::Error::from)
            .and_then(|c| serde_json::from_str(&c).map_err(anyhow::Error::from))
        {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!("Corrupt session {}: {}; starting fresh", path.display(), e);
                None
            }
        }
    }

    pub fn save_session(&self, session: &DailySession) -> Result<()> {
        let content =
            serde_json::to_string_pretty(session).with_context(|| "Failed to serialize session")?;
        write_atomic(&self.session_path(), content.as_bytes())
    }

    /// Load today's session in `unit`, rolling over and archiving a stale one.
    ///
    /// A session kept in another unit is converted. The result is saved so the
    /// rollover happens only once.
    pub fn open_session(&self, today: NaiveDate, unit: VolumeUnit) -> Result<DailySession> {
        let mut session = match self.load_session() {
            Some(s) => s,
            None => {
                let session = DailySession::new(today, unit);
                self.save_session(&session)?;
                return Ok(session);
            }
        };

        let mut changed = false;
        if let Some(archived) = session.roll_over(today) {
            self.append_history(&archived)?;
            tracing::info!(
                "Archived {}: {:.2} {}",
                archived.date,
                archived.total_intake,
                archived.unit
            );
            changed = true;
        }

        if session.unit() != unit {
            tracing::debug!("Converting session from {} to {}", session.unit(), unit);
            session.convert_to(unit);
            changed = true;
        }

        if changed {
            self.save_session(&session)?;
        }

        Ok(session)
    }

    /// Record a drink in `session` and the intake log.
    ///
    /// The session is saved before the log is appended. If the append fails the
    /// previous session is written back, so the running total never includes a
    /// drink the log does not have. Returns true when the goal was just reached.
    pub fn record_intake(
        &self,
        session: &mut DailySession,
        event: &IntakeEvent,
        goal: f64,
    ) -> Result<bool> {
        let previous = session.clone();
        let amount = event.unit().convert(event.amount(), session.unit());
        let reached = session.record(amount, goal)?;

        if let Err(e) = self.save_session(session) {
            *session = previous;
            return Err(e);
        }

        if let Err(e) = self.append_intake(event) {
            *session = previous;
            if let Err(restore) = self.save_session(session) {
                tracing::warn!("Failed to restore session after log error: {}", restore);
            }
            return Err(e);
        }

        Ok(reached)
    }
}
