//! Chart input: ordered growth values keyed by country

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single bar's worth of data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Category label, unique per dataset (country name)
    pub category: String,
    /// Signed growth rate in percent; NaN when the source cell is missing
    pub value: f64,
}

impl DataPoint {
    pub fn new(category: impl Into<String>, value: f64) -> Self {
        Self {
            category: category.into(),
            value,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
    }
}

/// Ordered sequence of data points. Order decides bar order on the
/// category axis.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub points: Vec<DataPoint>,
}

impl Dataset {
    pub fn new(points: Vec<DataPoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DataPoint> {
        self.points.iter()
    }

    /// Number of points that can produce geometry
    pub fn finite_len(&self) -> usize {
        self.points.iter().filter(|p| p.is_finite()).count()
    }

    /// Distinct categories in first-occurrence order
    pub fn categories(&self) -> Vec<String> {
        let mut seen = HashSet::with_capacity(self.points.len());
        self.points
            .iter()
            .filter(|p| seen.insert(p.category.as_str()))
            .map(|p| p.category.clone())
            .collect()
    }

    /// Copy sorted by value, largest growth first. Stable; non-finite
    /// values sink to the end.
    pub fn ranked(&self) -> Self {
        let mut points = self.points.clone();
        points.sort_by(|a, b| match (a.is_finite(), b.is_finite()) {
            (true, true) => b.value.total_cmp(&a.value),
            (true, false) => std::cmp::Ordering::Less,
            (false, true) => std::cmp::Ordering::Greater,
            (false, false) => std::cmp::Ordering::Equal,
        });
        Self { points }
    }
}

impl From<Vec<DataPoint>> for Dataset {
    fn from(points: Vec<DataPoint>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<DataPoint> for Dataset {
    fn from_iter<I: IntoIterator<Item = DataPoint>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a DataPoint;
    type IntoIter = std::slice::Iter<'a, DataPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
