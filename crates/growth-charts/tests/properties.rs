use growth_charts::{
    AxisRenderer, AxisScale, AxisSpec, AxisOrientation, BandScale, ChartConfig, ChartMargin,
    ChartView, LinearScale, Orientation, Scale, SvgDocument, build_bars,
};
use growth_core::{DataPoint, Dataset, PercentFormatter};
use proptest::prelude::*;

fn dataset_strategy() -> impl Strategy<Value = Dataset> {
    proptest::collection::vec(
        prop_oneof![
            8 => -6.0f64..6.0,
            1 => Just(0.0),
            1 => Just(f64::NAN),
        ],
        0..24,
    )
    .prop_map(|values| {
        values
            .into_iter()
            .enumerate()
            .map(|(i, v)| DataPoint::new(format!("C{i}"), v))
            .collect()
    })
}

fn orientation_strategy() -> impl Strategy<Value = Orientation> {
    prop_oneof![Just(Orientation::VerticalBars), Just(Orientation::HorizontalBars)]
}

proptest! {
    #[test]
    fn bars_share_the_zero_baseline(data in dataset_strategy(), orientation in orientation_strategy()) {
        let config = ChartConfig::default().orientation(orientation);
        let mut view = ChartView::new(config).expect("valid config");
        view.on_data_changed(&data);

        let scene = view.scene().expect("ready");
        let zero = scene.continuous.scale(0.0);

        prop_assert_eq!(scene.bars.len(), data.finite_len());
        for (bar, point) in scene.bars.iter().zip(data.iter().filter(|p| p.is_finite())) {
            prop_assert_eq!(&bar.key, &point.category);
            prop_assert!(bar.x.is_finite() && bar.y.is_finite());
            prop_assert!(bar.width >= 0.0 && bar.height >= 0.0);

            let (near, far) = match orientation {
                Orientation::VerticalBars => (bar.x, bar.x + bar.width),
                Orientation::HorizontalBars => (bar.y, bar.y + bar.height),
            };
            let touches = (near - zero).abs() < 1e-9 || (far - zero).abs() < 1e-9;
            prop_assert!(touches, "bar {} does not touch baseline {}", bar.key, zero);
        }
    }

    #[test]
    fn bands_tile_the_range_exactly(
        data in dataset_strategy(),
        width in 10.0f64..2000.0,
        padding in 0.0f64..0.9,
    ) {
        prop_assume!(!data.is_empty());
        let scale = BandScale::fit(data.categories(), (0.0, width), padding).expect("bands");

        let categories = data.categories();
        prop_assert_eq!(scale.domain(), categories.as_slice());
        let total = (scale.bandwidth() + scale.gap()) * scale.domain().len() as f64;
        prop_assert!((total - width).abs() < 1e-6 * width);

        // Bands are ordered and never overlap
        let starts: Vec<f64> = scale.domain().iter().filter_map(|c| scale.scale(c)).collect();
        for pair in starts.windows(2) {
            prop_assert!(pair[1] - pair[0] >= scale.bandwidth() - 1e-9);
        }
    }

    #[test]
    fn axis_render_is_idempotent(min in -50.0f64..-0.1, max in 0.1f64..50.0, extent in 50.0f64..1000.0) {
        let scale = LinearScale::fit((min, max), (0.0, extent));
        let spec = AxisSpec {
            mapper: AxisScale::Continuous(&scale),
            orientation: AxisOrientation::Bottom,
            tick_format: &PercentFormatter,
            tick_size: 6.0,
            tick_padding: 3.0,
            tick_count: 10,
        };

        let first = AxisRenderer::layout(&spec);
        let second = AxisRenderer::layout(&spec);
        prop_assert_eq!(&first, &second);
        prop_assert!(!first.ticks.is_empty());
        prop_assert!(first.ticks.iter().all(|t| t.position >= -1e-9 && t.position <= extent + 1e-9));
    }

    #[test]
    fn scene_markup_has_one_rect_per_finite_point(data in dataset_strategy()) {
        let mut view = ChartView::new(ChartConfig::default()).expect("valid config");
        view.on_data_changed(&data);

        let markup = SvgDocument::render(&view).to_markup();
        prop_assert_eq!(markup.matches("<rect class=\"bar").count(), data.finite_len());
        prop_assert!(!markup.contains("NaN"));
    }
}

#[test]
fn empty_dataset_builds_no_geometry() {
    let x = LinearScale::fit((-3.5, 3.5), (0.0, 100.0));
    let data = Dataset::default();
    assert!(BandScale::fit(data.categories(), (0.0, 100.0), 0.1).is_err());

    let mut view = ChartView::new(ChartConfig::default()).expect("valid config");
    assert!(SvgDocument::render(&view).is_placeholder());
    view.on_data_changed(&data);
    assert!(!SvgDocument::render(&view).is_placeholder());
    assert!(view.scene().expect("ready").bars.is_empty());

    // Baseline pixel does not depend on data
    assert_eq!(x.scale(0.0), 50.0);
}

#[test]
fn year_switch_skips_missing_column() {
    let table = growth_core::GrowthTable::from_json(r#"[{"country": "X", "y2012": "1.5"}]"#)
        .expect("valid rows");
    let config = ChartConfig::default()
        .size(100.0, 100.0)
        .with_margin(ChartMargin::uniform(0.0));
    let mut view = ChartView::new(config).expect("valid config");

    view.on_data_changed(&table.select_year(&"2012".into()));
    assert_eq!(view.bar_keys(), vec!["X"]);

    view.on_data_changed(&table.select_year(&"2013".into()));
    assert!(view.bar_keys().is_empty());
    assert_eq!(view.scene().expect("ready").skipped, 1);
}

#[test]
fn fixed_domain_keeps_bar_lengths_comparable() {
    let config = ChartConfig::default();
    let mut view = ChartView::new(config).expect("valid config");

    view.on_data_changed(&Dataset::from(vec![DataPoint::new("A", 1.0)]));
    let small = view.bar("A").expect("bar").width;

    view.on_data_changed(&Dataset::from(vec![
        DataPoint::new("A", 1.0),
        DataPoint::new("B", 3.0),
    ]));
    let same = view.bar("A").expect("bar").width;

    assert!((small - same).abs() < 1e-9);
    let x = LinearScale::fit((-3.5, 3.5), (0.0, 640.0));
    let y = BandScale::fit(["A"], (0.0, 440.0), 0.1).expect("bands");
    let bars = build_bars(
        &Dataset::from(vec![DataPoint::new("A", 1.0)]),
        &x,
        &y,
        Orientation::VerticalBars,
    );
    assert!((bars[0].width - small).abs() < 1e-9);
}
