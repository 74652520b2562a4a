//! Thin route-progress bar along the top edge.
//!
//! The bar climbs in fixed steps while the route settles, snaps to full once
//! the cover is complete and then disappears.

use crate::{
    foundation::core::{Millis, Rect, Viewport},
    overlay::layers::{Fill, Layer, LayerKind, Z_CORNERS},
    overlay::theme::Theme,
};

pub const PROGRESS_TICK: Millis = Millis(50);
pub const PROGRESS_STEP: f64 = 0.15;
pub const PROGRESS_CAP: f64 = 0.90;
pub const PROGRESS_COMPLETE_AT: Millis = Millis(300);
pub const PROGRESS_HIDE_AT: Millis = Millis(500);
pub const PROGRESS_BAR_HEIGHT: f64 = 4.0;

/// Filled fraction at session-relative `elapsed`; `None` once hidden.
pub fn progress_fraction(elapsed: Millis) -> Option<f64> {
    if elapsed >= PROGRESS_HIDE_AT {
        return None;
    }
    if elapsed >= PROGRESS_COMPLETE_AT {
        return Some(1.0);
    }
    let ticks = elapsed.0 / PROGRESS_TICK.0;
    Some((ticks as f64 * PROGRESS_STEP).min(PROGRESS_CAP))
}

pub fn progress_layer(elapsed: Millis, viewport: Viewport, theme: &Theme) -> Option<Layer> {
    let fraction = progress_fraction(elapsed)?;
    if fraction <= 0.0 {
        return None;
    }
    Some(Layer::new(
        LayerKind::ProgressBar,
        Z_CORNERS,
        Rect::new(0.0, 0.0, viewport.width * fraction, PROGRESS_BAR_HEIGHT),
        Fill::Solid {
            color: theme.primary,
        },
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/progress.rs"]
mod tests;
