//! # chartkit
//!
//! Core chart primitives: scales and the SVG path builder.
//! Scales are immutable once fitted; a render pass fits fresh ones.

use crate::{ChartError, ChartResult};
use std::collections::HashSet;
use std::fmt::Write;

// ============================================================================
// STRATEGY PATTERN: Scale Trait
// ============================================================================

/// Strategy trait for continuous scales (maps domain values to range values)
pub trait Scale: Send + Sync {
    /// Scale a value from domain to range
    fn scale(&self, value: f64) -> f64;

    /// Map a range position back to the domain
    fn invert(&self, pixel: f64) -> f64;

    /// Representative tick values inside the domain
    fn ticks(&self, count: usize) -> Vec<f64>;

    /// Domain value bars grow away from
    fn baseline(&self) -> f64;
}

// ============================================================================
// LINEAR SCALE
// ============================================================================

/// Upper bound on requested tick counts
pub const MAX_TICK_COUNT: usize = 100;

/// Linear scale (D3-style continuous scale)
#[derive(Debug, Clone, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new() -> Self {
        Self {
            domain: (0.0, 1.0),
            range: (0.0, 1.0),
        }
    }

    /// Fit a scale mapping `domain` onto `range`. The range may be inverted
    /// (`range.1 < range.0`) to flip the axis direction.
    pub fn fit(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self::new().domain(domain.0, domain.1).range(range.0, range.1)
    }

    pub fn domain(mut self, min: f64, max: f64) -> Self {
        self.domain = (min, max);
        self
    }

    pub fn range(mut self, start: f64, end: f64) -> Self {
        self.range = (start, end);
        self
    }

    /// Get range bounds
    pub fn range_bounds(&self) -> (f64, f64) {
        self.range
    }

    fn ordered_domain(&self) -> (f64, f64) {
        let (a, b) = self.domain;
        if a <= b { (a, b) } else { (b, a) }
    }

    /// Generate "nice" tick values (rounded to clean numbers) inside the domain
    pub fn nice_ticks(&self, count: usize) -> Vec<f64> {
        let (min, max) = self.ordered_domain();
        let span = max - min;

        if !(span > 0.0) || !span.is_finite() || count == 0 {
            return vec![min];
        }
        let count = count.min(MAX_TICK_COUNT);

        let rough_step = span / count as f64;
        let magnitude = 10.0_f64.powf(rough_step.log10().floor());
        let residual = rough_step / magnitude;

        let nice_step = if residual <= 1.0 {
            magnitude
        } else if residual <= 2.0 {
            2.0 * magnitude
        } else if residual <= 5.0 {
            5.0 * magnitude
        } else {
            10.0 * magnitude
        };

        // Ticks are k * step, computed by index so no error accumulates
        let first = (min / nice_step - 1e-9).ceil() as i64;
        let last = (max / nice_step + 1e-9).floor() as i64;
        if last.saturating_sub(first) > 2 * MAX_TICK_COUNT as i64 {
            return vec![min, max];
        }


        (first..=last).map(|k| k as f64 * nice_step).collect()
    }
}

impl Default for LinearScale {
    fn default() -> Self {
        Self::new()
    }
}

impl Scale for LinearScale {
    fn scale(&self, value: f64) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_start, r_end) = self.range;

        // Degenerate domain: everything collapses onto the range start
        if d_max == d_min {
            return r_start;
        }

        let normalized = (value - d_min) / (d_max - d_min);
        r_start + normalized * (r_end - r_start)
    }

    fn invert(&self, pixel: f64) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_start, r_end) = self.range;

        if r_end == r_start {
            return d_min;
        }

        let normalized = (pixel - r_start) / (r_end - r_start);
        d_min + normalized * (d_max - d_min)
    }

    fn ticks(&self, count: usize) -> Vec<f64> {
        self.nice_ticks(count)
    }

    /// Zero, clamped into the domain when the domain excludes it
    fn baseline(&self) -> f64 {
        let (min, max) = self.ordered_domain();
        if min > 0.0 {
            min
        } else if max < 0.0 {
            max
        } else {
            0.0
        }
    }
}

// ============================================================================
// BAND SCALE (for categorical data like country names)
// ============================================================================

/// Band scale for categorical data. The range is split into one equal step
/// per category; `padding` is the fraction of each step left as gap, split
/// evenly on both sides of the band.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale {
    domain: Vec<String>,
    range: (f64, f64),
    padding: f64,
}

impl BandScale {
    /// Fit bands for `categories` (duplicates collapse to first occurrence).
    pub fn fit<I, S>(categories: I, range: (f64, f64), padding: f64) -> ChartResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !(0.0..1.0).contains(&padding) {
            return Err(ChartError::InvalidConfig(format!(
                "band padding must be in [0, 1), got {}",
                padding
            )));
        }

        let mut seen = HashSet::new();
        let domain: Vec<String> = categories
            .into_iter()
            .map(Into::into)
            .filter(|c: &String| seen.insert(c.clone()))
            .collect();

        if domain.is_empty() {
            return Err(ChartError::Domain(
                "band scale needs at least one category".to_string(),
            ));
        }

        Ok(Self {
            domain,
            range,
            padding,
        })
    }

    /// Categories in band order
    pub fn domain(&self) -> &[String] {
        &self.domain
    }

    pub fn range_bounds(&self) -> (f64, f64) {
        self.range
    }

    /// Get step size (band + gap)
    pub fn step(&self) -> f64 {
        (self.range.1 - self.range.0).abs() / self.domain.len() as f64
    }

    /// Get band width (usable, non-gap width of each band)
    pub fn bandwidth(&self) -> f64 {
        self.step() * (1.0 - self.padding)
    }

    /// Gap between neighbouring bands
    pub fn gap(&self) -> f64 {
        self.step() * self.padding
    }

    pub fn index_of(&self, category: &str) -> Option<usize> {
        self.domain.iter().position(|c| c == category)
    }

    /// Band start coordinate for `category`; `None` for unknown categories
    pub fn scale(&self, category: &str) -> Option<f64> {
        let index = self.index_of(category)?;
        let n = self.domain.len();
        let (start, end) = self.range;

        // An inverted range puts the first category at the high end
        let slot = if end >= start { index } else { n - 1 - index };
        let low = start.min(end);

        Some(low + self.step() * (slot as f64 + self.padding / 2.0))
    }

    /// Center position for `category` (where its tick goes)
    pub fn scale_center(&self, category: &str) -> Option<f64> {
        self.scale(category).map(|start| start + self.bandwidth() / 2.0)
    }
}

// ============================================================================
// PATH BUILDER (fluent API)
// ============================================================================

/// SVG path builder with fluent API
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    commands: String,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self {
            commands: String::with_capacity(64),
        }
    }

    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        let _ = write!(self.commands, "M{:.2},{:.2}", x, y);
        self
    }

    pub fn horizontal_to(mut self, x: f64) -> Self {
        let _ = write!(self.commands, "H{:.2}", x);
        self
    }

    pub fn vertical_to(mut self, y: f64) -> Self {
        let _ = write!(self.commands, "V{:.2}", y);
        self
    }

    pub fn build(self) -> String {
        self.commands
    }
}

// ============================================================================
// TESTS
// ============================================================================
