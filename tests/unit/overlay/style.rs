use super::*;

fn vp() -> Viewport {
    Viewport::new(1000.0, 500.0).unwrap()
}

#[test]
fn parse_aliases_and_unknowns() {
    assert_eq!(parse_wipe_style("split").unwrap(), WipeStyle::SplitPanels);
    assert_eq!(parse_wipe_style(" Diagonal ").unwrap(), WipeStyle::DiagonalCut);
    assert_eq!("radial_burst".parse::<WipeStyle>().unwrap(), WipeStyle::RadialBurst);
    assert!(matches!(
        parse_wipe_style("zoom"),
        Err(RouteFxError::Config(_))
    ));
    assert!(parse_wipe_style("  ").is_err());
}

#[test]
fn zero_coverage_draws_nothing() {
    for style in [
        WipeStyle::SplitPanels,
        WipeStyle::DiagonalCut,
        WipeStyle::RadialBurst,
    ] {
        assert!(style.background_layers(0.0, vp(), &Theme::default()).is_empty());
    }
}

#[test]
fn split_panels_meet_in_the_middle_at_full_coverage() {
    let layers = WipeStyle::SplitPanels.background_layers(1.0, vp(), &Theme::default());
    assert_eq!(layers.len(), 2);
    let left = layers[0].transform.transform_rect_bbox(layers[0].bounds);
    let right = layers[1].transform.transform_rect_bbox(layers[1].bounds);
    assert_eq!(left, Rect::new(0.0, 0.0, 500.0, 500.0));
    assert_eq!(right, Rect::new(500.0, 0.0, 1000.0, 500.0));
}

#[test]
fn split_panels_start_off_screen() {
    let layers = WipeStyle::SplitPanels.background_layers(0.01, vp(), &Theme::default());
    let left = layers[0].transform.transform_rect_bbox(layers[0].bounds);
    assert!(left.x1 < 10.0);
}

#[test]
fn diagonal_full_coverage_is_whole_viewport() {
    let layers = WipeStyle::DiagonalCut.background_layers(1.0, vp(), &Theme::default());
    let Some(ClipShape::Polygon { points }) = &layers[0].clip else {
        panic!("expected polygon clip");
    };
    assert_eq!(points.len(), 4);
}

#[test]
fn diagonal_half_coverage_is_a_triangle_below_the_corner() {
    let points = clip_viewport_diagonal(1000.0, 500.0, 1.0);
    assert_eq!(
        points,
        vec![
            Point::new(0.0, 0.0),
            Point::new(1000.0, 0.0),
            Point::new(0.0, 500.0)
        ]
    );
}

#[test]
fn radial_burst_radius_reaches_corners() {
    let layers = WipeStyle::RadialBurst.background_layers(1.0, vp(), &Theme::default());
    let Some(ClipShape::Circle { center, radius }) = layers[0].clip else {
        panic!("expected circle clip");
    };
    assert_eq!(center, Point::new(500.0, 250.0));
    assert!((radius - (500.0f64.hypot(250.0))).abs() < 1e-9);
}
