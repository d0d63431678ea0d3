use waterfall_rs::core::BandScale;

#[test]
fn band_scale_splits_range_into_equal_rounded_bands() {
    let scale = BandScale::new(["A", "B", "C"], (0.0, 400.0), 0.3).expect("band scale");

    // step = floor(400 / 3.3) = 121, band = round(121 * 0.7) = 85.
    assert_eq!(scale.step(), 121.0);
    assert_eq!(scale.band_width(), 85.0);
    assert_eq!(scale.position("A").expect("A"), 37.0);
    assert_eq!(scale.position("B").expect("B"), 158.0);
    assert_eq!(scale.position("C").expect("C"), 279.0);
}

#[test]
fn band_scale_centers_are_half_a_band_from_positions() {
    let scale = BandScale::new(["A", "B", "C"], (0.0, 400.0), 0.3).expect("band scale");

    let center = scale.center("B").expect("center");
    let position = scale.position("B").expect("position");
    assert!((center - position - scale.band_width() / 2.0).abs() <= 1e-9);
}

#[test]
fn band_scale_keeps_domain_insertion_order() {
    let scale = BandScale::new(["q4", "q1", "q3"], (0.0, 300.0), 0.1).expect("band scale");

    let domain: Vec<&str> = scale.domain().collect();
    assert_eq!(domain, vec!["q4", "q1", "q3"]);
    assert!(scale.position("q4").expect("q4") < scale.position("q1").expect("q1"));
}

#[test]
fn band_scale_rejects_unknown_keys() {
    let scale = BandScale::new(["A", "B"], (0.0, 200.0), 0.3).expect("band scale");

    let err = scale.position("missing").expect_err("must reject unknown key");
    assert!(format!("{err}").contains("missing"));
}

#[test]
fn band_scale_rejects_duplicate_keys() {
    let err =
        BandScale::new(["A", "B", "A"], (0.0, 200.0), 0.3).expect_err("must reject duplicates");
    assert!(format!("{err}").contains("duplicate"));
}

#[test]
fn band_scale_rejects_descending_range_and_bad_padding() {
    assert!(BandScale::new(["A"], (200.0, 0.0), 0.3).is_err());
    assert!(BandScale::new(["A"], (0.0, 200.0), 1.0).is_err());
    assert!(BandScale::new(["A"], (0.0, 200.0), -0.1).is_err());
}

#[test]
fn band_scale_rejects_range_too_small_for_bands() {
    let err = BandScale::new(["A", "B", "C", "D"], (0.0, 3.0), 0.3)
        .expect_err("must reject degenerate bands");
    assert!(format!("{err}").contains("too small"));
}

#[test]
fn band_scale_without_padding_tiles_the_range() {
    let scale = BandScale::new(["A", "B", "C", "D"], (0.0, 400.0), 0.0).expect("band scale");

    assert_eq!(scale.step(), 100.0);
    assert_eq!(scale.band_width(), 100.0);
    assert_eq!(scale.position("A").expect("A"), 0.0);
    assert_eq!(scale.position("D").expect("D"), 300.0);
}
