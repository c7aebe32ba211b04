//! # wellspring-core
//!
//! Core library for wellspring - a personal wellness analytics toolkit.
//!
//! This library provides:
//! - Domain types for moods, journals, goals, and habits
//! - A pure analytics engine: summary statistics, a 7-day mood
//!   series, category distribution, trend classification, and
//!   rule-based insights
//! - Habit completion lifecycle with streak calculation
//! - Configuration management
//! - Logging infrastructure
//!
//! ## Architecture
//!
//! The engine is a leaf module: a data-access layer loads one user's
//! records, the engine derives aggregates from them, and a thin outer
//! layer (HTTP handler or the report CLI) serializes the result. The
//! engine performs no I/O and never reads the clock; the reference
//! day is always an explicit parameter.
//!
//! ## Example
//!
//! ```rust
//! use wellspring_core::analytics::dashboard_report;
//! use wellspring_core::types::RecordSet;
//!
//! let records = RecordSet::default();
//! let today = chrono::Utc::now().date_naive();
//! let report = dashboard_report(&records, today);
//! assert_eq!(report.weekly_mood.len(), 7);
//! ```

// Re-export commonly used items at the crate root
pub use config::Config;
pub use error::{Error, Result};
pub use types::*;

// Public modules
pub mod analytics;
pub mod config;
pub mod error;
pub mod habits;
pub mod logging;
pub mod types;
