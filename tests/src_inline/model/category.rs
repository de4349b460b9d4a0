use super::*;

#[test]
fn test_classify_bands() {
    assert_eq!(classify(0.0), AqiCategory::Good);
    assert_eq!(classify(25.0), AqiCategory::Good);
    assert_eq!(classify(75.0), AqiCategory::Satisfactory);
    assert_eq!(classify(150.0), AqiCategory::Moderate);
    assert_eq!(classify(250.0), AqiCategory::Poor);
    assert_eq!(classify(350.0), AqiCategory::VeryPoor);
    assert_eq!(classify(450.0), AqiCategory::Severe);
    assert_eq!(classify(1.0e9), AqiCategory::Severe);
}

#[test]
fn test_classify_upper_bounds_inclusive() {
    assert_eq!(classify(50.0), AqiCategory::Good);
    assert_eq!(classify(50.0001), AqiCategory::Satisfactory);
    assert_eq!(classify(50.01), AqiCategory::Satisfactory);
    assert_eq!(classify(100.0), AqiCategory::Satisfactory);
    assert_eq!(classify(100.0001), AqiCategory::Moderate);
    assert_eq!(classify(200.0), AqiCategory::Moderate);
    assert_eq!(classify(300.0), AqiCategory::Poor);
    assert_eq!(classify(400.0), AqiCategory::VeryPoor);
    assert_eq!(classify(400.0001), AqiCategory::Severe);
}

#[test]
fn test_classify_label_and_color_pairs() {
    let expected = [
        (10.0, "Good", ColorTag::Green),
        (60.0, "Satisfactory", ColorTag::Yellow),
        (160.0, "Moderate", ColorTag::Orange),
        (260.0, "Poor", ColorTag::Red),
        (360.0, "Very Poor", ColorTag::Purple),
        (460.0, "Severe", ColorTag::Brown),
    ];
    for (v, label, color) in expected {
        let c = classify(v);
        assert_eq!(c.label(), label);
        assert_eq!(c.color(), color);
    }
}

#[test]
fn test_classify_is_total() {
    assert_eq!(classify(-5.0), AqiCategory::Good);
    assert_eq!(classify(f64::NEG_INFINITY), AqiCategory::Good);
    assert_eq!(classify(f64::INFINITY), AqiCategory::Severe);
    assert_eq!(classify(f64::NAN), AqiCategory::Severe);
}

#[test]
fn test_classify_repeatable() {
    for v in [-5.0, 50.0, 123.4, 400.0, 999.0] {
        assert_eq!(classify(v), classify(v));
    }
}

#[test]
fn test_bounds_chain() {
    assert_eq!(AqiCategory::Good.lower_bound(), None);
    assert_eq!(AqiCategory::Satisfactory.lower_bound(), Some(50.0));
    assert_eq!(AqiCategory::Severe.lower_bound(), Some(400.0));
    assert_eq!(AqiCategory::Severe.upper_bound(), None);
}

#[test]
fn test_gauge_bands_cover_axis() {
    let bands = gauge_bands();
    assert_eq!(bands.len(), 6);
    assert_eq!(bands[0].start, GAUGE_MIN);
    assert_eq!(bands[5].end, GAUGE_MAX);
    for pair in bands.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
    let colors: Vec<&str> = bands.iter().map(|b| b.category.color().name()).collect();
    assert_eq!(
        colors,
        vec!["green", "yellow", "orange", "red", "purple", "brown"]
    );
}
