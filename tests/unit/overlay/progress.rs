use super::*;

#[test]
fn climbs_in_steps_and_caps() {
    assert_eq!(progress_fraction(Millis(0)), Some(0.0));
    assert_eq!(progress_fraction(Millis(49)), Some(0.0));
    assert_eq!(progress_fraction(Millis(50)), Some(0.15));
    let at_250 = progress_fraction(Millis(250)).unwrap();
    assert!((at_250 - 0.75).abs() < 1e-9);
    let at_299 = progress_fraction(Millis(299)).unwrap();
    assert!(at_299 <= PROGRESS_CAP);
}

#[test]
fn completes_then_hides() {
    assert_eq!(progress_fraction(Millis(300)), Some(1.0));
    assert_eq!(progress_fraction(Millis(499)), Some(1.0));
    assert_eq!(progress_fraction(Millis(500)), None);
}

#[test]
fn layer_spans_fraction_of_width() {
    let vp = Viewport::new(800.0, 600.0).unwrap();
    assert!(progress_layer(Millis(0), vp, &Theme::default()).is_none());
    let layer = progress_layer(Millis(320), vp, &Theme::default()).unwrap();
    assert_eq!(layer.bounds.width(), 800.0);
    assert_eq!(layer.bounds.height(), PROGRESS_BAR_HEIGHT);
    assert!(!layer.is_interactive());
}
