use super::*;
use crate::{
    foundation::core::SessionId, overlay::style::WipeStyle, particles::field::Particle,
    timeline::model::Timeline,
};

fn spark(id: u32) -> Particle {
    Particle {
        id,
        angle_rad: 0.0,
        distance: 100.0,
        delay: Millis(0),
        duration: Millis(600),
        size: 1.0,
    }
}

fn session_at(phase: Phase) -> TransitionSession {
    let particles = vec![spark(0), spark(1)];
    let mut s = TransitionSession::new(SessionId(3), "/gallery".to_string(), Millis(0), particles);
    let tl = Timeline::canonical();
    s.start(&tl);
    let idx = tl.phases.iter().position(|p| p.phase == phase).unwrap();
    for i in 0..idx {
        s.advance_past(i, &tl);
    }
    s
}

fn count(frame: &OverlayFrame, pred: impl Fn(&LayerKind) -> bool) -> usize {
    frame.layers_of(pred).count()
}

#[test]
fn nothing_without_a_live_session() {
    let cfg = OverlayConfig::default();
    assert!(compose(None, Millis(100), &cfg).is_empty());

    let mut s = session_at(Phase::Hold);
    s.active = false;
    assert!(compose(Some(&s), Millis(400), &cfg).is_empty());

    s.complete();
    let frame = compose(Some(&s), Millis(400), &cfg);
    assert!(frame.is_empty());
    assert_eq!(frame.session, None);
}

#[test]
fn hold_is_the_full_cover_window() {
    let cfg = OverlayConfig::default();
    let s = session_at(Phase::Hold);
    let frame = compose(Some(&s), Millis(400), &cfg);
    assert_eq!(frame.phase, Some(Phase::Hold));
    assert!(frame.covers_viewport());
    assert_eq!(count(&frame, |k| matches!(k, LayerKind::Panel { .. })), 2);
    assert_eq!(count(&frame, |k| matches!(k, LayerKind::Gear { .. })), 3);
    assert_eq!(count(&frame, |k| matches!(k, LayerKind::Corner { .. })), 4);
    assert_eq!(count(&frame, |k| matches!(k, LayerKind::Particle { .. })), 2);
    assert_eq!(count(&frame, |k| *k == LayerKind::Emblem), 1);
}

#[test]
fn stacking_order_is_background_particles_emblem_corners() {
    let cfg = OverlayConfig::default();
    let s = session_at(Phase::Hold);
    let frame = compose(Some(&s), Millis(350), &cfg);
    assert!(frame.layers.windows(2).all(|w| w[0].z <= w[1].z));
    let z_of = |pred: fn(&LayerKind) -> bool| frame.layers_of(pred).next().unwrap().z;
    let panel = z_of(|k| matches!(k, LayerKind::Panel { .. }));
    let particle = z_of(|k| matches!(k, LayerKind::Particle { .. }));
    let emblem = z_of(|k| *k == LayerKind::Emblem);
    let corner = z_of(|k| matches!(k, LayerKind::Corner { .. }));
    assert!(panel < particle && particle < emblem && emblem < corner);
}

#[test]
fn cover_is_partial_and_reveal_ends_empty() {
    let cfg = OverlayConfig::default();
    let cover = compose(Some(&session_at(Phase::Cover)), Millis(150), &cfg);
    assert!(!cover.is_empty());
    assert!(!cover.covers_viewport());

    let reveal = session_at(Phase::Reveal);
    assert!(!compose(Some(&reveal), Millis(600), &cfg).is_empty());
    // Boundary timer missed: the final pose of reveal is fully transparent.
    assert!(compose(Some(&reveal), Millis(5_000), &cfg).is_empty());
}

#[test]
fn no_layer_is_hit_testable() {
    let cfg = OverlayConfig::default();
    for (phase, now) in [(Phase::Cover, 200), (Phase::Hold, 400), (Phase::Reveal, 600)] {
        let frame = compose(Some(&session_at(phase)), Millis(now), &cfg);
        assert!(frame.layers.iter().all(|l| !l.is_interactive()));
        assert!(!frame.blocks_input());
        assert!(frame.hit_test(cfg.viewport.center()).is_none());
    }
}

#[test]
fn composition_is_deterministic() {
    let cfg = OverlayConfig::default();
    let s = session_at(Phase::Hold);
    assert_eq!(compose(Some(&s), Millis(420), &cfg), compose(Some(&s), Millis(420), &cfg));
}

#[test]
fn alternative_styles_share_the_same_upper_layers() {
    let s = session_at(Phase::Hold);
    for style in [WipeStyle::DiagonalCut, WipeStyle::RadialBurst] {
        let cfg = OverlayConfig {
            style,
            ..OverlayConfig::default()
        };
        let frame = compose(Some(&s), Millis(400), &cfg);
        assert!(frame.covers_viewport());
        assert_eq!(count(&frame, |k| matches!(k, LayerKind::Panel { .. })), 1);
        assert_eq!(count(&frame, |k| *k == LayerKind::Ring), 1);
    }
}

#[test]
fn progress_bar_is_opt_in() {
    let s = session_at(Phase::Cover);
    let without = compose(Some(&s), Millis(200), &OverlayConfig::default());
    assert_eq!(count(&without, |k| *k == LayerKind::ProgressBar), 0);
    let cfg = OverlayConfig {
        progress_bar: true,
        ..OverlayConfig::default()
    };
    let with = compose(Some(&s), Millis(200), &cfg);
    assert_eq!(count(&with, |k| *k == LayerKind::ProgressBar), 1);
}

#[test]
fn gears_rotate_over_time() {
    let cfg = OverlayConfig::default();
    let s = session_at(Phase::Hold);
    let a = compose(Some(&s), Millis(320), &cfg);
    let b = compose(Some(&s), Millis(420), &cfg);
    let gear = |f: &OverlayFrame| {
        f.layers_of(|k| *k == LayerKind::Gear { index: 0 })
            .next()
            .unwrap()
            .transform
    };
    assert_ne!(gear(&a), gear(&b));
}
