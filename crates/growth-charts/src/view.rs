//! ChartView: the orchestrating state machine
//!
//! `Empty` until the first dataset arrives, then `Ready` with a scene that
//! is rebuilt from scratch on every dataset change. Axis ticks are attached
//! in a separate post-commit step.

use crate::axis::{AxisLayout, AxisOrientation, AxisRenderer, AxisScale, AxisSpec, TickMount};
use crate::bars::{BarGeometry, Orientation, build_bars};
use crate::chartkit::{BandScale, LinearScale, Scale};
use crate::{ChartConfig, ChartDimensions, ChartResult};
use growth_core::{Dataset, PercentFormatter, ValueFormatter};
use std::sync::Arc;

/// Mount points the committed render tree exposes for axis ticks
pub trait AxisMounts {
    /// Mount for the axis on `side`; `None` while it is not committed
    fn mount(&mut self, side: AxisOrientation) -> Option<&mut dyn TickMount>;
}

/// Everything derived from one dataset for one render pass
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub continuous: LinearScale,
    /// Absent when the dataset has no categories
    pub banded: Option<BandScale>,
    pub bars: Vec<BarGeometry>,
    /// Points that produced no bar (non-finite value or repeated category)
    pub skipped: usize,
}

impl Scene {
    pub fn bar(&self, key: &str) -> Option<&BarGeometry> {
        self.bars.iter().find(|b| b.key == key)
    }

    pub fn keys(&self) -> Vec<String> {
        self.bars.iter().map(|b| b.key.clone()).collect()
    }

    /// Pixel position of the baseline on the value axis
    pub fn baseline_px(&self) -> f64 {
        self.continuous.scale(self.continuous.baseline())
    }
}

/// Chart lifecycle state
#[derive(Debug, Clone, PartialEq)]
pub enum ChartState {
    /// No dataset received yet
    Empty,
    /// Dataset present (possibly zero-length)
    Ready(Scene),
}

/// Bar chart view driven by dataset-changed notifications
#[derive(Clone)]
pub struct ChartView {
    config: ChartConfig,
    tick_format: Arc<dyn ValueFormatter>,
    state: ChartState,
    revision: u64,
}

impl ChartView {
    /// Fails fast on a configuration that cannot produce a chart
    pub fn new(config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            tick_format: Arc::new(PercentFormatter),
            state: ChartState::Empty,
            revision: 0,
        })
    }

    /// Replace the value-axis label strategy
    pub fn with_tick_format(mut self, format: impl ValueFormatter + 'static) -> Self {
        self.tick_format = Arc::new(format);
        self
    }

    pub fn dimensions(&self) -> ChartDimensions {
        self.config.dimensions()
    }

    pub fn state(&self) -> &ChartState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, ChartState::Ready(_))
    }

    pub fn scene(&self) -> Option<&Scene> {
        match &self.state {
            ChartState::Ready(scene) => Some(scene),
            ChartState::Empty => None,
        }
    }

    /// Number of dataset changes seen so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn bar(&self, key: &str) -> Option<&BarGeometry> {
        self.scene().and_then(|s| s.bar(key))
    }

    pub fn bar_keys(&self) -> Vec<String> {
        self.scene().map(Scene::keys).unwrap_or_default()
    }

    /// Rebuild scales and geometry for a new dataset and enter `Ready`.
    /// The previous scene is discarded entirely.
    pub fn on_data_changed(&mut self, dataset: &Dataset) {
        let dims = self.dimensions();
        let (iw, ih) = (dims.inner_width(), dims.inner_height());
        let orientation = self.config.orientation;

        let (continuous_range, band_range) = match orientation {
            Orientation::VerticalBars => ((0.0, iw), (0.0, ih)),
            Orientation::HorizontalBars => ((ih, 0.0), (0.0, iw)),
        };

        let continuous = LinearScale::fit(self.config.continuous_domain, continuous_range);

        let banded = if dataset.is_empty() {
            None
        } else {
            match BandScale::fit(dataset.categories(), band_range, self.config.band_padding) {
                Ok(scale) => Some(scale),
                Err(e) => {
                    tracing::warn!("Category axis unavailable: {}", e);
                    None
                }
            }
        };

        let bars = banded
            .as_ref()
            .map(|b| build_bars(dataset, &continuous, b, orientation))
            .unwrap_or_default();
        let skipped = dataset.len() - bars.len();

        tracing::debug!(
            "Chart scene rebuilt: {} bars, {} skipped ({})",
            bars.len(),
            skipped,
            orientation.label()
        );

        self.revision += 1;
        self.state = ChartState::Ready(Scene {
            continuous,
            banded,
            bars,
            skipped,
        });
    }

    /// Attach axis ticks to the committed mount points. No-op while
    /// `Empty`. Returns the number of axes attached.
    pub fn on_after_commit(&self, mounts: &mut dyn AxisMounts) -> usize {
        let Some(scene) = self.scene() else {
            return 0;
        };

        let (value_side, category_side) = match self.config.orientation {
            Orientation::VerticalBars => (AxisOrientation::Bottom, AxisOrientation::Left),
            Orientation::HorizontalBars => (AxisOrientation::Left, AxisOrientation::Bottom),
        };

        let value_spec = self.axis_spec(AxisScale::Continuous(&scene.continuous), value_side);
        let mut attached = usize::from(AxisRenderer::render(&value_spec, mounts.mount(value_side)));

        let category_attached = match &scene.banded {
            Some(banded) => {
                let spec = self.axis_spec(AxisScale::Banded(banded), category_side);
                AxisRenderer::render(&spec, mounts.mount(category_side))
            }
            // Clear ticks left over from a previous, non-empty dataset
            None => AxisRenderer::attach(
                &AxisLayout::empty(category_side),
                mounts.mount(category_side),
            ),
        };
        attached += usize::from(category_attached);

        attached
    }

    fn axis_spec<'a>(&'a self, mapper: AxisScale<'a>, side: AxisOrientation) -> AxisSpec<'a> {
        AxisSpec {
            mapper,
            orientation: side,
            tick_format: &*self.tick_format,
            tick_size: self.config.tick_size,
            tick_padding: self.config.tick_padding,
            tick_count: self.config.value_tick_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::TickMark;
    use crate::{ChartError, ChartMargin};
    use growth_core::DataPoint;

    #[derive(Default)]
    struct Slot(Vec<TickMark>);

    impl TickMount for Slot {
        fn replace_ticks(&mut self, layout: &AxisLayout) {
            self.0 = layout.ticks.clone();
        }
    }

    #[derive(Default)]
    struct Mounts {
        committed: bool,
        bottom: Slot,
        left: Slot,
    }

    impl Mounts {
        fn committed() -> Self {
            Self {
                committed: true,
                ..Default::default()
            }
        }
    }

    impl AxisMounts for Mounts {
        fn mount(&mut self, side: AxisOrientation) -> Option<&mut dyn TickMount> {
            if !self.committed {
                return None;
            }
            match side {
                AxisOrientation::Bottom => Some(&mut self.bottom),
                AxisOrientation::Left => Some(&mut self.left),
            }
        }
    }

    fn square(orientation: Orientation) -> ChartView {
        let config = ChartConfig::default()
            .size(100.0, 100.0)
            .with_margin(ChartMargin::uniform(0.0))
            .orientation(orientation);
        ChartView::new(config).unwrap()
    }

    fn sample() -> Dataset {
        Dataset::from(vec![DataPoint::new("A", 2.0), DataPoint::new("B", -1.0)])
    }

    #[test]
    fn test_starts_empty() {
        let view = square(Orientation::VerticalBars);
        let mut mounts = Mounts::committed();

        assert_eq!(view.state(), &ChartState::Empty);
        assert_eq!(view.on_after_commit(&mut mounts), 0);
        assert!(view.bar_keys().is_empty());
    }

    #[test]
    fn test_empty_dataset_is_ready_with_no_bars() {
        let mut view = square(Orientation::VerticalBars);
        view.on_data_changed(&Dataset::default());

        let scene = view.scene().unwrap();
        assert!(scene.bars.is_empty());
        assert!(scene.banded.is_none());
        assert!(view.is_ready());
    }

    #[test]
    fn test_invalid_config_fails_fast() {
        let config = ChartConfig::default().size(0.0, 0.0);
        assert!(matches!(ChartView::new(config), Err(ChartError::InvalidConfig(_))));
    }

    #[test]
    fn test_orientation_symmetry() {
        let data = sample();

        let mut vertical = square(Orientation::VerticalBars);
        vertical.on_data_changed(&data);
        let scene = vertical.scene().unwrap();
        let zero = scene.baseline_px();
        let a = scene.bar("A").unwrap();
        let b = scene.bar("B").unwrap();
        assert_eq!(zero, 50.0);
        assert_eq!(a.x, zero);
        assert!(a.width > 0.0);
        assert!((b.x + b.width - zero).abs() < 1e-9);
        assert!(b.x < zero);

        let mut horizontal = square(Orientation::HorizontalBars);
        horizontal.on_data_changed(&data);
        let scene = horizontal.scene().unwrap();
        let zero = scene.baseline_px();
        let a = scene.bar("A").unwrap();
        let b = scene.bar("B").unwrap();
        assert_eq!(zero, 50.0);
        assert!((a.y + a.height - zero).abs() < 1e-9);
        assert!(a.y < zero);
        assert_eq!(b.y, zero);
        assert!(b.height > 0.0);
    }

    #[test]
    fn test_dataset_replacement_rebuilds_domain() {
        let mut view = square(Orientation::VerticalBars);
        view.on_data_changed(&sample());
        view.on_data_changed(&Dataset::from(vec![
            DataPoint::new("C", 1.0),
            DataPoint::new("A", 0.5),
        ]));

        let scene = view.scene().unwrap();
        let domain = scene.banded.as_ref().unwrap().domain();
        assert_eq!(domain, ["C".to_string(), "A".to_string()]);
        assert_eq!(view.bar_keys(), vec!["C", "A"]);
        assert_eq!(view.revision(), 2);
    }

    #[test]
    fn test_axes_attach_after_commit() {
        let mut view = square(Orientation::VerticalBars);
        view.on_data_changed(&sample());

        let mut pending = Mounts::default();
        assert_eq!(view.on_after_commit(&mut pending), 0);

        let mut mounts = Mounts::committed();
        assert_eq!(view.on_after_commit(&mut mounts), 2);

        assert!(mounts.bottom.0.iter().any(|t| t.label == "0%"));
        let left: Vec<_> = mounts.left.0.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(left, vec!["A", "B"]);
    }

    #[test]
    fn test_category_ticks_cleared_for_empty_dataset() {
        let mut view = square(Orientation::HorizontalBars);
        let mut mounts = Mounts::committed();

        view.on_data_changed(&sample());
        view.on_after_commit(&mut mounts);
        assert_eq!(mounts.bottom.0.len(), 2);

        view.on_data_changed(&Dataset::default());
        assert_eq!(view.on_after_commit(&mut mounts), 2);
        assert!(mounts.bottom.0.is_empty());
        assert!(!mounts.left.0.is_empty());
    }

    #[test]
    fn test_custom_tick_format() {
        struct Ratio;
        impl ValueFormatter for Ratio {
            fn format(&self, value: f64) -> String {
                format!("{:.2}", value / 100.0)
            }
        }

        let mut view = square(Orientation::VerticalBars).with_tick_format(Ratio);
        view.on_data_changed(&sample());
        let mut mounts = Mounts::committed();
        view.on_after_commit(&mut mounts);

        assert!(mounts.bottom.0.iter().any(|t| t.label == "0.01"));
        assert!(mounts.bottom.0.iter().all(|t| !t.label.ends_with('%')));
    }

    #[test]
    fn test_nan_point_keeps_slot_without_bar() {
        let mut view = square(Orientation::VerticalBars);
        view.on_data_changed(&Dataset::from(vec![
            DataPoint::new("X", f64::NAN),
            DataPoint::new("Y", 1.0),
        ]));

        let scene = view.scene().unwrap();
        assert_eq!(scene.skipped, 1);
        assert_eq!(view.bar_keys(), vec!["Y"]);
        assert_eq!(scene.banded.as_ref().unwrap().domain().len(), 2);
    }
}
