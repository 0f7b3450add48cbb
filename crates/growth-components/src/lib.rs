//! # growth-components
//!
//! Leptos UI components for the GDP growth chart: the year toggle and the
//! page layout around the chart.

pub mod dashboard;
pub mod year_toggle;

pub use dashboard::*;
pub use year_toggle::*;
