//! Bar geometry: one rectangle per data point, anchored on the baseline
//!
//! Positive and negative values extend in opposite directions from the
//! pixel position of the continuous scale's baseline.

use crate::chartkit::{BandScale, Scale};
use growth_core::{colors, Dataset};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Bar layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// Value axis horizontal, categories stacked vertically (ranked bars)
    #[default]
    #[serde(rename = "bars-vertical")]
    VerticalBars,
    /// Categories along the horizontal axis, values vertical
    #[serde(rename = "bars-horizontal")]
    HorizontalBars,
}

impl Orientation {
    pub fn label(&self) -> &'static str {
        match self {
            Self::VerticalBars => "bars-vertical",
            Self::HorizontalBars => "bars-horizontal",
        }
    }
}

/// Bar styling, decided by the sign of the value alone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarStyle {
    NonNegative,
    Negative,
}

impl BarStyle {
    /// Zero counts as non-negative
    pub fn for_value(value: f64) -> Self {
        if value < 0.0 {
            Self::Negative
        } else {
            Self::NonNegative
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Self::NonNegative => "bar bar-positive",
            Self::Negative => "bar bar-negative",
        }
    }

    pub fn fill(&self) -> &'static str {
        match self {
            Self::NonNegative => colors::POSITIVE,
            Self::Negative => colors::NEGATIVE,
        }
    }
}

/// Rectangle descriptor for one data point
#[derive(Debug, Clone, PartialEq)]
pub struct BarGeometry {
    /// Equals the category; stable identity across re-renders
    pub key: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub style: BarStyle,
}

/// Build one bar per finite data point, in dataset order.
///
/// Points with a non-finite value, or whose category is missing from the
/// band scale, are skipped rather than producing NaN coordinates. Keys are
/// unique: only the first point of a repeated category is considered.
pub fn build_bars<S: Scale>(
    dataset: &Dataset,
    continuous: &S,
    banded: &BandScale,
    orientation: Orientation,
) -> Vec<BarGeometry> {
    let baseline = continuous.baseline();
    let baseline_px = continuous.scale(baseline);
    let bandwidth = banded.bandwidth();
    let mut seen = HashSet::with_capacity(dataset.len());

    dataset
        .iter()
        .filter_map(|point| {
            if !seen.insert(point.category.as_str()) {
                tracing::trace!("Skipping {}: repeated category", point.category);
                return None;
            }
            if !point.value.is_finite() {
                tracing::trace!("Skipping {}: non-finite value", point.category);
                return None;
            }
            let Some(band) = banded.scale(&point.category) else {
                tracing::trace!("Skipping {}: not in band domain", point.category);
                return None;
            };

            let value = point.value;
            let length = (continuous.scale(value) - baseline_px).abs();

            let (x, y, width, height) = match orientation {
                Orientation::VerticalBars => {
                    let x = continuous.scale(value.min(baseline));
                    (x, band, length, bandwidth)
                }
                Orientation::HorizontalBars => {
                    let y = continuous.scale(value.max(baseline));
                    (band, y, bandwidth, length)
                }
            };

            Some(BarGeometry {
                key: point.category.clone(),
                x,
                y,
                width,
                height,
                style: BarStyle::for_value(value),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chartkit::LinearScale;
    use growth_core::DataPoint;

    fn sample() -> Dataset {
        Dataset::from(vec![DataPoint::new("A", 2.0), DataPoint::new("B", -1.0)])
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_vertical_bars_extend_left_and_right() {
        let data = sample();
        let x = LinearScale::fit((-3.5, 3.5), (0.0, 100.0));
        let y = BandScale::fit(data.categories(), (0.0, 100.0), 0.1).unwrap();
        let bars = build_bars(&data, &x, &y, Orientation::VerticalBars);
        let zero = x.scale(0.0);

        assert_eq!(bars.len(), 2);
        // A grows rightward from zero
        assert!(close(bars[0].x, zero));
        assert!(close(bars[0].x + bars[0].width, x.scale(2.0)));
        // B grows leftward and ends at zero
        assert!(close(bars[1].x, x.scale(-1.0)));
        assert!(close(bars[1].x + bars[1].width, zero));
        assert!(close(bars[0].height, y.bandwidth()));
    }

    #[test]
    fn test_horizontal_bars_extend_up_and_down() {
        let data = sample();
        let x = BandScale::fit(data.categories(), (0.0, 100.0), 0.1).unwrap();
        let y = LinearScale::fit((-3.5, 3.5), (100.0, 0.0));
        let bars = build_bars(&data, &y, &x, Orientation::HorizontalBars);
        let zero = y.scale(0.0);

        // A grows upward: its bottom edge sits on zero
        assert!(close(bars[0].y + bars[0].height, zero));
        assert!(close(bars[0].y, y.scale(2.0)));
        // B grows downward: its top edge sits on zero
        assert!(close(bars[1].y, zero));
        assert!(close(bars[1].y + bars[1].height, y.scale(-1.0)));
        assert!(close(bars[1].width, x.bandwidth()));
    }

    #[test]
    fn test_zero_value_is_non_negative() {
        let data = Dataset::from(vec![DataPoint::new("Z", 0.0)]);
        let x = LinearScale::fit((-3.5, 3.5), (0.0, 100.0));
        let y = BandScale::fit(data.categories(), (0.0, 100.0), 0.1).unwrap();
        let bars = build_bars(&data, &x, &y, Orientation::VerticalBars);

        assert_eq!(bars[0].style, BarStyle::NonNegative);
        assert_eq!(bars[0].width, 0.0);
    }

    #[test]
    fn test_nan_points_are_skipped() {
        let data = Dataset::from(vec![
            DataPoint::new("A", f64::NAN),
            DataPoint::new("B", 1.0),
            DataPoint::new("C", f64::INFINITY),
        ]);
        let x = LinearScale::fit((-3.5, 3.5), (0.0, 100.0));
        let y = BandScale::fit(data.categories(), (0.0, 100.0), 0.1).unwrap();
        let bars = build_bars(&data, &x, &y, Orientation::VerticalBars);

        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].key, "B");
        assert!(bars.iter().all(|b| b.x.is_finite() && b.y.is_finite()));
    }

    #[test]
    fn test_repeated_category_keeps_first_point() {
        let data = Dataset::from(vec![
            DataPoint::new("A", 1.0),
            DataPoint::new("B", 2.0),
            DataPoint::new("A", -3.0),
        ]);
        let x = LinearScale::fit((-3.5, 3.5), (0.0, 100.0));
        let y = BandScale::fit(data.categories(), (0.0, 100.0), 0.1).unwrap();
        let bars = build_bars(&data, &x, &y, Orientation::VerticalBars);

        let keys: Vec<_> = bars.iter().map(|b| b.key.as_str()).collect();
        assert_eq!(keys, vec!["A", "B"]);
        assert_eq!(bars[0].style, BarStyle::NonNegative);
        assert!(close(bars[0].x + bars[0].width, x.scale(1.0)));
    }

    #[test]
    fn test_keys_follow_dataset_order() {
        let data = Dataset::from(vec![
            DataPoint::new("C", 1.0),
            DataPoint::new("A", -2.0),
            DataPoint::new("B", 3.0),
        ]);
        let x = LinearScale::fit((-3.5, 3.5), (0.0, 100.0));
        let y = BandScale::fit(data.categories(), (0.0, 90.0), 0.1).unwrap();
        let keys: Vec<_> = build_bars(&data, &x, &y, Orientation::VerticalBars)
            .into_iter()
            .map(|b| b.key)
            .collect();

        assert_eq!(keys, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_asymmetric_domain_anchors_on_nearest_edge() {
        let data = Dataset::from(vec![DataPoint::new("A", 3.0)]);
        let x = LinearScale::fit((1.0, 5.0), (0.0, 100.0));
        let y = BandScale::fit(data.categories(), (0.0, 100.0), 0.1).unwrap();
        let bars = build_bars(&data, &x, &y, Orientation::VerticalBars);

        assert_eq!(bars[0].x, 0.0);
        assert_eq!(bars[0].width, 50.0);
    }
}
