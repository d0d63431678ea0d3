use waterfall_rs::core::{
    AxisScale, LinearScale, Margin, Orientation, ScaleLayout, Series, StackedPoint, Viewport,
    resolve_scales, value_extent,
};

fn scenario_data() -> Vec<Series> {
    vec![
        Series::new("A", vec![StackedPoint::new(0.0, 10.0, 10.0)]),
        Series::new("B", vec![StackedPoint::new(10.0, -4.0, -4.0)]),
        Series::new("C", vec![StackedPoint::new(0.0, 6.0, 6.0)]),
    ]
}

fn layout(orientation: Orientation) -> ScaleLayout {
    ScaleLayout {
        viewport: Viewport::new(400, 300),
        margin: Margin::default(),
        orientation,
        band_padding: 0.3,
    }
}

#[test]
fn vertical_configure_builds_band_x_and_linear_y() {
    let (x, y) = resolve_scales(&scenario_data(), &layout(Orientation::Vertical), None, None)
        .expect("configure");

    let band = x.as_band().expect("x must be ordinal");
    let domain: Vec<&str> = band.domain().collect();
    assert_eq!(domain, vec!["A", "B", "C"]);
    assert_eq!(band.band_width(), 85.0);

    let linear = y.as_linear().expect("y must be linear");
    assert_eq!(linear.domain(), (0.0, 10.0));
    // Screen y grows downward, so the value range is reversed.
    assert_eq!(linear.range(), (300.0, 0.0));
    assert!(linear.is_clamped());
}

#[test]
fn horizontal_configure_swaps_scale_roles() {
    let (x, y) = resolve_scales(&scenario_data(), &layout(Orientation::Horizontal), None, None)
        .expect("configure");

    let linear = x.as_linear().expect("x must be linear");
    assert_eq!(linear.domain(), (0.0, 10.0));
    assert_eq!(linear.range(), (0.0, 400.0));

    let band = y.as_band().expect("y must be ordinal");
    let domain: Vec<&str> = band.domain().collect();
    assert_eq!(domain, vec!["A", "B", "C"]);
}

#[test]
fn value_domain_lower_bound_includes_zero() {
    let all_positive = vec![
        Series::new("A", vec![StackedPoint::new(0.0, 5.0, 5.0)]),
        Series::new("B", vec![StackedPoint::new(5.0, 3.0, 3.0)]),
    ];
    assert_eq!(value_extent(&all_positive), (0.0, 8.0));

    let dips_negative = vec![
        Series::new("A", vec![StackedPoint::new(0.0, -5.0, -5.0)]),
        Series::new("B", vec![StackedPoint::new(-5.0, 2.0, 2.0)]),
    ];
    assert_eq!(value_extent(&dips_negative), (-5.0, -3.0));
}

#[test]
fn configure_is_idempotent_once_scales_are_set() {
    let data = scenario_data();
    let layout = layout(Orientation::Vertical);

    let (x, y) = resolve_scales(&data, &layout, None, None).expect("first configure");
    let (x2, y2) = resolve_scales(&data, &layout, Some(x.clone()), Some(y.clone()))
        .expect("second configure");

    assert_eq!(x, x2);
    assert_eq!(y.as_linear().expect("linear").domain(), y2.as_linear().expect("linear").domain());
    assert_eq!(y.as_linear().expect("linear").range(), y2.as_linear().expect("linear").range());
}

#[test]
fn preset_linear_scale_keeps_its_domain_but_tracks_range() {
    let preset = AxisScale::Linear(LinearScale::new((0.0, 20.0)).expect("scale"));
    let (_, y) = resolve_scales(
        &scenario_data(),
        &layout(Orientation::Vertical),
        None,
        Some(preset),
    )
    .expect("configure");

    let linear = y.as_linear().expect("linear");
    assert_eq!(linear.domain(), (0.0, 20.0));
    assert_eq!(linear.range(), (300.0, 0.0));
    assert!(linear.is_clamped());
}

#[test]
fn preset_scale_of_wrong_kind_is_rejected() {
    let preset = AxisScale::Linear(LinearScale::new((0.0, 20.0)).expect("scale"));
    let err = resolve_scales(
        &scenario_data(),
        &layout(Orientation::Vertical),
        Some(preset),
        None,
    )
    .expect_err("linear in the category slot must fail");
    assert!(format!("{err}").contains("category axis slot"));
}

#[test]
fn configure_rejects_empty_and_malformed_data() {
    let layout = layout(Orientation::Vertical);

    let err = resolve_scales(&[], &layout, None, None).expect_err("empty data");
    assert!(format!("{err}").contains("at least one series"));

    let bad = vec![Series::new("A", vec![StackedPoint::new(0.0, f64::NAN, 1.0)])];
    let err = resolve_scales(&bad, &layout, None, None).expect_err("non-finite point");
    assert!(format!("{err}").contains("non-finite"));
}

#[test]
fn configure_rejects_margins_that_swallow_the_plot() {
    let mut layout = layout(Orientation::Vertical);
    layout.margin = Margin::new(200.0, 0.0, 200.0, 0.0);

    let err = resolve_scales(&scenario_data(), &layout, None, None)
        .expect_err("no plot area left");
    assert!(format!("{err}").contains("plot area"));
}
