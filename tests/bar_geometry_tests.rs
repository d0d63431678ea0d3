use approx::assert_abs_diff_eq;
use waterfall_rs::core::{
    BandScale, BarDirection, LinearScale, Orientation, Series, StackedPoint, classify,
    project_waterfall_bars,
};

fn scenario_data() -> Vec<Series> {
    vec![
        Series::new("A", vec![StackedPoint::new(0.0, 10.0, 10.0)]),
        Series::new("B", vec![StackedPoint::new(10.0, -4.0, -4.0)]),
        Series::new("C", vec![StackedPoint::new(0.0, 6.0, 6.0)]),
    ]
}

fn vertical_scales() -> (BandScale, LinearScale) {
    let band = BandScale::new(["A", "B", "C"], (0.0, 400.0), 0.3).expect("band");
    let linear = LinearScale::new((0.0, 10.0))
        .expect("linear")
        .with_range((300.0, 0.0))
        .expect("range")
        .with_clamp(true);
    (band, linear)
}

fn horizontal_scales() -> (BandScale, LinearScale) {
    let band = BandScale::new(["A", "B", "C"], (0.0, 300.0), 0.3).expect("band");
    let linear = LinearScale::new((0.0, 10.0))
        .expect("linear")
        .with_range((0.0, 400.0))
        .expect("range")
        .with_clamp(true);
    (band, linear)
}

#[test]
fn vertical_bars_use_the_sign_aware_outer_edge() {
    let (band, linear) = vertical_scales();
    let bars = project_waterfall_bars(&scenario_data(), Orientation::Vertical, &band, &linear)
        .expect("project");
    assert_eq!(bars.len(), 3);

    // A: positive delta from zero; top edge at scale(10), full height.
    assert_abs_diff_eq!(bars[0].x, 37.0, epsilon = 1e-9);
    assert_abs_diff_eq!(bars[0].y, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(bars[0].width, 85.0, epsilon = 1e-9);
    assert_abs_diff_eq!(bars[0].height, 300.0, epsilon = 1e-9);

    // B: negative delta; the outer edge stays at the baseline scale(10).
    assert_abs_diff_eq!(bars[1].x, 158.0, epsilon = 1e-9);
    assert_abs_diff_eq!(bars[1].y, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(bars[1].height, 120.0, epsilon = 1e-9);

    // C: subtotal back to the zero baseline, top at scale(6).
    assert_abs_diff_eq!(bars[2].x, 279.0, epsilon = 1e-9);
    assert_abs_diff_eq!(bars[2].y, 120.0, epsilon = 1e-9);
    assert_abs_diff_eq!(bars[2].height, 180.0, epsilon = 1e-9);
}

#[test]
fn horizontal_bars_anchor_on_the_lower_stacked_bound() {
    let (band, linear) = horizontal_scales();
    let bars = project_waterfall_bars(&scenario_data(), Orientation::Horizontal, &band, &linear)
        .expect("project");

    // A: spans the full 0..10 domain.
    assert_abs_diff_eq!(bars[0].x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(bars[0].y, 29.0, epsilon = 1e-9);
    assert_abs_diff_eq!(bars[0].width, 400.0, epsilon = 1e-9);
    assert_abs_diff_eq!(bars[0].height, 63.0, epsilon = 1e-9);

    // B: negative delta; the left edge is the running total scale(6).
    assert_abs_diff_eq!(bars[1].x, 240.0, epsilon = 1e-9);
    assert_abs_diff_eq!(bars[1].y, 119.0, epsilon = 1e-9);
    assert_abs_diff_eq!(bars[1].width, 160.0, epsilon = 1e-9);

    // C: subtotal from zero out to scale(6).
    assert_abs_diff_eq!(bars[2].x, 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(bars[2].y, 209.0, epsilon = 1e-9);
    assert_abs_diff_eq!(bars[2].width, 240.0, epsilon = 1e-9);
}

#[test]
fn bar_classes_carry_index_status_and_key() {
    let (band, linear) = vertical_scales();
    let bars = project_waterfall_bars(&scenario_data(), Orientation::Vertical, &band, &linear)
        .expect("project");

    assert_eq!(bars[0].class, "bar fill item0 positive A");
    assert_eq!(bars[1].class, "bar fill item1 negative B");
    assert_eq!(bars[2].class, "bar fill item2 subtotal C");
}

#[test]
fn zero_baseline_is_only_a_subtotal_past_the_first_bar() {
    let rises = StackedPoint::new(0.0, 6.0, 6.0);
    let falls = StackedPoint::new(0.0, -6.0, -6.0);

    assert_eq!(classify(0, &rises), BarDirection::Positive);
    assert_eq!(classify(0, &falls), BarDirection::Negative);
    assert_eq!(classify(1, &rises), BarDirection::Subtotal);
    assert_eq!(classify(1, &falls), BarDirection::Subtotal);
    assert_eq!(classify(2, &StackedPoint::new(3.0, -1.0, -1.0)), BarDirection::Negative);
}

#[test]
fn orientation_flip_mirrors_the_outer_edge_rule() {
    let data = scenario_data();
    let (v_band, v_linear) = vertical_scales();
    let (h_band, h_linear) = horizontal_scales();

    let vertical =
        project_waterfall_bars(&data, Orientation::Vertical, &v_band, &v_linear).expect("vertical");
    let horizontal = project_waterfall_bars(&data, Orientation::Horizontal, &h_band, &h_linear)
        .expect("horizontal");

    for (series, (v, h)) in data.iter().zip(vertical.iter().zip(horizontal.iter())) {
        let point = series.values[0];
        let total = point.y0 + point.y;

        // Vertical picks the higher stacked bound, horizontal the lower one.
        let v_outer = v_linear.map(total - point.y.min(0.0)).expect("map");
        let h_leading = h_linear.map(total - point.y.max(0.0)).expect("map");
        assert!((v.y - v_outer).abs() <= 1e-9);
        assert!((h.x - h_leading).abs() <= 1e-9);

        // The bar extent along the value axis agrees between orientations
        // up to the two ranges' pixel-per-unit factors (300/10 vs 400/10).
        assert!((v.height / 30.0 - h.width / 40.0).abs() <= 1e-9);
    }
}
