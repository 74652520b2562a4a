use std::f64::consts::TAU;

use crate::{
    animation::ease::Ease,
    config::OverlayConfig,
    foundation::core::{Affine, Millis, Point, Rect, Vec2},
    overlay::layers::{
        ClipShape, Corner, Fill, Layer, LayerKind, OverlayFrame, Z_BACKGROUND, Z_CORNERS,
        Z_EMBLEM, Z_PARTICLES,
    },
    overlay::progress::progress_layer,
    session::state::{SessionPhase, TransitionSession},
    timeline::model::{Phase, PhaseSample},
};

const CENTER_FADE_DELAY: Millis = Millis(100);
const CENTER_FADE: Millis = Millis(200);
const EMBLEM_DIAMETER: f64 = 48.0;
const EMBLEM_POP: Millis = Millis(200);
const RING_PERIOD: Millis = Millis(800);
const RING_INSET: f64 = 6.0;
const CORNER_SIZE: f64 = 48.0;
const CORNER_INSET: f64 = 16.0;
const PARTICLE_BASE_SIZE: f64 = 6.0;
const GRID_OPACITY: f64 = 0.1;

struct Gear {
    diameter: f64,
    offset: Vec2,
    period: Millis,
    clockwise: bool,
    alpha: f64,
    accent: bool,
}

const GEARS: [Gear; 3] = [
    Gear {
        diameter: 80.0,
        offset: Vec2::new(0.0, 0.0),
        period: Millis(2000),
        clockwise: true,
        alpha: 0.2,
        accent: false,
    },
    Gear {
        diameter: 40.0,
        offset: Vec2::new(34.0, -34.0),
        period: Millis(1500),
        clockwise: false,
        alpha: 0.4,
        accent: true,
    },
    Gear {
        diameter: 28.0,
        offset: Vec2::new(-30.0, 30.0),
        period: Millis(1000),
        clockwise: true,
        alpha: 0.3,
        accent: true,
    },
];

/// Layer tree for `session` at host time `now`.
///
/// Pure: the result depends only on the session's phase, its start time, its
/// particles and `now`. Anything but a live session yields an empty frame.
pub fn compose(
    session: Option<&TransitionSession>,
    now: Millis,
    cfg: &OverlayConfig,
) -> OverlayFrame {
    let Some(session) = session.filter(|s| s.is_live()) else {
        return OverlayFrame::empty();
    };
    let phase = match session.phase {
        SessionPhase::Running(p) => p,
        SessionPhase::Created => match cfg.timeline.phases.first() {
            Some(first) => first.phase,
            None => return OverlayFrame::empty(),
        },
        SessionPhase::Completed => return OverlayFrame::empty(),
    };
    // Sampled in the session's current phase, so a late or missing boundary
    // timer holds the phase's final pose.
    let Some(PhaseSample {
        spec,
        local,
        progress,
        ..
    }) = cfg.timeline.sample(phase, session.elapsed(now))
    else {
        return OverlayFrame::empty();
    };

    let (coverage, center) = match phase {
        Phase::Cover => (
            progress,
            ramp(local.saturating_sub(CENTER_FADE_DELAY), CENTER_FADE),
        ),
        Phase::Hold => (1.0, 1.0),
        Phase::Reveal => (1.0 - progress, 1.0 - ramp(local, CENTER_FADE)),
    };
    let session_elapsed = spec.offset.saturating_add(local);

    let mut layers = cfg
        .style
        .background_layers(coverage, cfg.viewport, &cfg.theme);
    layers.push(
        Layer::new(
            LayerKind::Grid,
            Z_BACKGROUND + 1,
            cfg.viewport.rect(),
            Fill::Solid {
                color: cfg.theme.grid,
            },
        )
        .with_opacity(GRID_OPACITY * center),
    );
    particle_layers(session, session_elapsed, phase, progress, cfg, &mut layers);
    emblem_layers(session_elapsed, center, cfg, &mut layers);
    corner_layers(center, cfg, &mut layers);
    if cfg.progress_bar {
        layers.extend(progress_layer(session_elapsed, cfg.viewport, &cfg.theme));
    }

    OverlayFrame::new(session.id, phase, layers, coverage >= 1.0)
}

fn ramp(t: Millis, over: Millis) -> f64 {
    (t.as_f64() / over.as_f64().max(1.0)).clamp(0.0, 1.0)
}

fn rotation(elapsed: Millis, period: Millis, clockwise: bool) -> f64 {
    let turns = (elapsed.0 % period.0.max(1)) as f64 / period.0.max(1) as f64;
    let angle = turns * TAU;
    if clockwise { angle } else { -angle }
}

fn particle_layers(
    session: &TransitionSession,
    elapsed: Millis,
    phase: Phase,
    progress: f64,
    cfg: &OverlayConfig,
    out: &mut Vec<Layer>,
) {
    let origin = cfg.viewport.center();
    let fade = if phase == Phase::Reveal {
        1.0 - progress
    } else {
        1.0
    };
    for p in session.particles() {
        let opacity = p.opacity_at(elapsed) * fade;
        if opacity <= 0.0 {
            continue;
        }
        let at = origin + p.offset_at(elapsed);
        let d = PARTICLE_BASE_SIZE * p.size;
        out.push(
            Layer::new(
                LayerKind::Particle { id: p.id },
                Z_PARTICLES,
                Rect::from_center_size(at, (d, d)),
                Fill::Solid {
                    color: cfg.theme.primary,
                },
            )
            .with_clip(ClipShape::Circle {
                center: at,
                radius: d * 0.5,
            })
            .with_opacity(opacity),
        );
    }
}

fn emblem_layers(elapsed: Millis, center: f64, cfg: &OverlayConfig, out: &mut Vec<Layer>) {
    let c = cfg.viewport.center();
    for (index, gear) in GEARS.iter().enumerate() {
        let at = c + gear.offset;
        let color = if gear.accent {
            cfg.theme.primary
        } else {
            cfg.theme.muted
        };
        out.push(
            Layer::new(
                LayerKind::Gear { index: index as u8 },
                Z_EMBLEM,
                Rect::from_center_size(at, (gear.diameter, gear.diameter)),
                Fill::Stroke {
                    color: color.with_alpha_factor(gear.alpha),
                    width: 1.5,
                },
            )
            .with_transform(Affine::rotate_about(
                rotation(elapsed, gear.period, gear.clockwise),
                at,
            ))
            .with_opacity(center),
        );
    }

    let scale = 0.8 + 0.2 * Ease::OutQuad.apply(ramp(elapsed, EMBLEM_POP));
    out.push(
        Layer::new(
            LayerKind::Emblem,
            Z_EMBLEM + 1,
            Rect::from_center_size(c, (EMBLEM_DIAMETER, EMBLEM_DIAMETER)),
            Fill::LinearGradient {
                from: cfg.theme.emblem_light,
                to: cfg.theme.emblem_dark,
                angle_deg: 145.0,
            },
        )
        .with_clip(ClipShape::Circle {
            center: c,
            radius: EMBLEM_DIAMETER * 0.5,
        })
        .with_transform(Affine::scale_about(scale, c))
        .with_opacity(center),
    );

    let ring = EMBLEM_DIAMETER + 2.0 * RING_INSET;
    out.push(
        Layer::new(
            LayerKind::Ring,
            Z_EMBLEM + 2,
            Rect::from_center_size(c, (ring, ring)),
            Fill::Stroke {
                color: cfg.theme.primary.with_alpha_factor(0.3),
                width: 2.0,
            },
        )
        .with_transform(
            Affine::scale_about(scale, c)
                * Affine::rotate_about(rotation(elapsed, RING_PERIOD, true), c),
        )
        .with_opacity(center),
    );
}

fn corner_layers(center: f64, cfg: &OverlayConfig, out: &mut Vec<Layer>) {
    let (w, h) = (cfg.viewport.width, cfg.viewport.height);
    for corner in Corner::ALL {
        let origin = match corner {
            Corner::TopLeft => Point::new(CORNER_INSET, CORNER_INSET),
            Corner::TopRight => Point::new(w - CORNER_INSET - CORNER_SIZE, CORNER_INSET),
            Corner::BottomLeft => Point::new(CORNER_INSET, h - CORNER_INSET - CORNER_SIZE),
            Corner::BottomRight => Point::new(
                w - CORNER_INSET - CORNER_SIZE,
                h - CORNER_INSET - CORNER_SIZE,
            ),
        };
        out.push(
            Layer::new(
                LayerKind::Corner { corner },
                Z_CORNERS,
                Rect::from_origin_size(origin, (CORNER_SIZE, CORNER_SIZE)),
                Fill::Stroke {
                    color: cfg.theme.primary.with_alpha_factor(0.2),
                    width: 2.0,
                },
            )
            .with_opacity(center),
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/compositor.rs"]
mod tests;
