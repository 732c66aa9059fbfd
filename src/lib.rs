//! SmartSip - personal hydration tracker
//!
//! SmartSip records every drink, works out a daily water goal from body
//! weight, outdoor temperature and exercise, and rewards goal streaks with
//! trophies that are never taken away again.
//!
//! ## Layout
//!
//! - [`hydration`]: goal calculation, the append-only intake ledger and the
//!   running daily session
//! - [`stats`]: goal streaks and the trophy catalog
//! - [`weather`]: temperature lookup that degrades to "unknown" on failure
//! - [`store`]: flat-file persistence in the data directory
//! - [`config`]: `~/.smartsip/config.toml`

pub mod config;
pub mod domain;
pub mod hydration;
pub mod stats;
pub mod store;
pub mod weather;

pub use domain::*;
