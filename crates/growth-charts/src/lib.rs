//! # growth-charts
//!
//! D3.js-style SVG bar charting built with Leptos.
//! Renders signed growth rates as bars anchored on a shared zero baseline.
//!
//! ## Architecture
//!
//! Uses Strategy pattern for:
//! - Scale computation (linear, band)
//! - Tick mounting (DOM node, static SVG scene)
//!
//! Rendering is two-phase: the declarative scene (bars plus empty axis
//! mount points) is committed first, then axes are attached to the
//! committed mount points.
//!
//! ## Modules
//!
//! - `chartkit` - Core primitives: scales, path builder
//! - `bars` - Bar geometry from a dataset and two scales
//! - `axis` - Tick layout and attachment to mount points
//! - `config` - Chart configuration and validation
//! - `view` - `ChartView` state machine
//! - `svg` - Static SVG scene (render tree + mount points)
//! - `growth_chart` - Leptos component

pub mod axis;
pub mod bars;
pub mod chartkit;
pub mod config;
pub mod error;
pub mod growth_chart;
pub mod svg;
pub mod view;

pub use axis::*;
pub use bars::*;
pub use chartkit::*;
pub use config::*;
pub use error::*;
pub use growth_chart::*;
pub use svg::*;
pub use view::*;

pub use growth_core::colors;

use serde::{Deserialize, Serialize};

/// Chart margin configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl ChartMargin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    pub const fn uniform(margin: f64) -> Self {
        Self::new(margin, margin, margin, margin)
    }

    /// Room for a bottom value axis and a left category axis
    pub const fn standard() -> Self {
        Self::new(20.0, 30.0, 40.0, 30.0)
    }
}

impl Default for ChartMargin {
    fn default() -> Self {
        Self::standard()
    }
}

/// Chart dimensions with margin handling
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartDimensions {
    pub width: f64,
    pub height: f64,
    pub margin: ChartMargin,
}

impl ChartDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: ChartMargin::default(),
        }
    }

    pub fn with_margin(mut self, margin: ChartMargin) -> Self {
        self.margin = margin;
        self
    }

    /// Inner width (excluding margins)
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    /// Inner height (excluding margins)
    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }

    /// SVG transform for inner chart area
    pub fn inner_transform(&self) -> String {
        format!("translate({}, {})", self.margin.left, self.margin.top)
    }

    /// ViewBox string for SVG
    pub fn viewbox(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

impl Default for ChartDimensions {
    fn default() -> Self {
        Self::new(700.0, 500.0)
    }
}
