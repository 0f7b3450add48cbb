//! Chart configuration, fixed per chart instance

use crate::{ChartDimensions, ChartError, ChartMargin, ChartResult, MAX_TICK_COUNT, Orientation};
use serde::{Deserialize, Serialize};

/// Growth chart configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub margin: ChartMargin,
    pub orientation: Orientation,
    /// Fixed value-axis domain, shared across datasets so bar lengths stay
    /// comparable between years
    pub continuous_domain: (f64, f64),
    /// Fraction of each category step left as gap
    pub band_padding: f64,
    pub tick_size: f64,
    pub tick_padding: f64,
    pub value_tick_count: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 700.0,
            height: 500.0,
            margin: ChartMargin::standard(),
            orientation: Orientation::VerticalBars,
            continuous_domain: (-3.5, 3.5),
            band_padding: 0.1,
            tick_size: 6.0,
            tick_padding: 3.0,
            value_tick_count: 10,
        }
    }
}

impl ChartConfig {
    /// Column chart: categories along the bottom, values vertical
    pub fn columns() -> Self {
        Self {
            orientation: Orientation::HorizontalBars,
            margin: ChartMargin::new(20.0, 30.0, 40.0, 50.0),
            ..Default::default()
        }
    }

    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_margin(mut self, margin: ChartMargin) -> Self {
        self.margin = margin;
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn domain(mut self, min: f64, max: f64) -> Self {
        self.continuous_domain = (min, max);
        self
    }

    pub fn padding(mut self, padding: f64) -> Self {
        self.band_padding = padding;
        self
    }

    /// Parse from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> ChartResult<Self> {
        serde_json::from_str(json).map_err(|e| ChartError::InvalidConfig(e.to_string()))
    }

    pub fn dimensions(&self) -> ChartDimensions {
        ChartDimensions::new(self.width, self.height).with_margin(self.margin)
    }

    /// Reject configurations that cannot produce a chart
    pub fn validate(&self) -> ChartResult<()> {
        let dims = self.dimensions();
        if !(dims.inner_width() > 0.0 && dims.inner_height() > 0.0)
            || !dims.inner_width().is_finite()
            || !dims.inner_height().is_finite()
        {
            return Err(ChartError::InvalidConfig(format!(
                "render area must be positive, got {}x{} inside margins",
                dims.inner_width(),
                dims.inner_height()
            )));
        }

        let (min, max) = self.continuous_domain;
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ChartError::InvalidConfig(format!(
                "continuous domain must be finite and ordered, got [{}, {}]",
                min, max
            )));
        }

        if !(0.0..1.0).contains(&self.band_padding) {
            return Err(ChartError::InvalidConfig(format!(
                "band padding must be in [0, 1), got {}",
                self.band_padding
            )));
        }

        if !(self.tick_size >= 0.0 && self.tick_padding >= 0.0) {
            return Err(ChartError::InvalidConfig(
                "tick size and padding must be non-negative".to_string(),
            ));
        }

        if !(1..=MAX_TICK_COUNT).contains(&self.value_tick_count) {
            return Err(ChartError::InvalidConfig(format!(
                "value tick count must be in 1..={}, got {}",
                MAX_TICK_COUNT, self.value_tick_count
            )));
        }

        Ok(())
    }
}
