//! # growth-core
//!
//! Core domain types for the GDP growth chart.
//! Implements Strategy pattern for value formatting.

pub mod dataset;
pub mod table;

pub use dataset::*;
pub use table::*;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// STRATEGY PATTERN: Formatters
// ============================================================================

/// Strategy trait for axis value formatting
pub trait ValueFormatter: Send + Sync {
    fn format(&self, value: f64) -> String;
}

/// Growth-rate formatter: plain number with a `%` suffix
#[derive(Debug, Clone, Copy, Default)]
pub struct PercentFormatter;

impl ValueFormatter for PercentFormatter {
    fn format(&self, value: f64) -> String {
        format!("{}%", trim_float(value))
    }
}

/// Shortest decimal rendering, rounded to 6 places so tick arithmetic
/// artifacts (`0.30000000000000004`) and negative zero never reach a label.
/// Magnitudes past 1e15 have no fractional digits left and are not rounded.
pub fn trim_float(value: f64) -> String {
    let rounded = if value.abs() < 1e15 {
        (value * 1e6).round() / 1e6
    } else {
        value
    };
    format!("{}", rounded + 0.0)
}

// ============================================================================
// CORE VALUE TYPES
// ============================================================================

/// Year label used to pick a growth column (e.g. "2012")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Year(pub String);

/// Year labels offered by the year toggle
pub const YEARS: [&str; 5] = ["2012", "2013", "2014", "2015", "2016"];

impl Year {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Column key holding this year's growth rates (e.g. "y2012")
    pub fn column(&self) -> String {
        format!("y{}", self.0)
    }

    /// All selectable years, oldest first
    pub fn all() -> Vec<Self> {
        YEARS.iter().map(|y| Self::new(*y)).collect()
    }
}

impl std::fmt::Display for Year {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Year {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

// ============================================================================
// ERRORS
// ============================================================================

/// Errors raised while loading the raw growth table
#[derive(Error, Debug)]
pub enum DataError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),
}

pub type DataResult<T> = Result<T, DataError>;

// ============================================================================
// COLOR CONSTANTS
// ============================================================================

pub mod colors {
    pub const POSITIVE: &str = "steelblue";
    pub const NEGATIVE: &str = "#d9534f";
    pub const AXIS: &str = "#333333";
    pub const TEXT_MUTED: &str = "#666666";
    pub const BACKGROUND: &str = "#ffffff";
}
