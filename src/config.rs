//! Compile-time constants for the transition overlay and the [`OverlayConfig`]
//! bundle that carries them through the orchestrator.
//!
//! [`OverlayConfig::default`] is built entirely from the constants below. The
//! JSON loader exists for the preview tool, which replays alternative styles
//! and timings without recompiling.

use crate::{
    foundation::core::{Millis, Viewport},
    foundation::error::{RouteFxError, RouteFxResult},
    overlay::style::WipeStyle,
    overlay::theme::Theme,
    particles::field::ParticleBounds,
    timeline::model::Timeline,
};

pub const COVER_DURATION: Millis = Millis(300);
pub const HOLD_DURATION: Millis = Millis(200);
pub const REVEAL_DURATION: Millis = Millis(300);
/// Trigger to full reveal.
pub const TOTAL_DURATION: Millis = Millis(800);

pub const PARTICLE_COUNT: u32 = 12;
pub const PARTICLE_DELAY_MAX: Millis = Millis(300);
pub const PARTICLE_DURATION_MIN: Millis = Millis(400);
pub const PARTICLE_DURATION_MAX: Millis = Millis(800);
pub const PARTICLE_SIZE_MIN: f64 = 0.5;
pub const PARTICLE_SIZE_MAX: f64 = 1.5;
pub const PARTICLE_DISTANCE_MIN: f64 = 60.0;
pub const PARTICLE_DISTANCE_MAX: f64 = 180.0;

/// Stacking priority of the overlay root above page content.
pub const OVERLAY_Z_INDEX: i32 = 9998;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub particle_count: u32,
    pub particle_bounds: ParticleBounds,
    pub timeline: Timeline,
    pub style: WipeStyle,
    pub theme: Theme,
    pub viewport: Viewport,
    /// Draw the thin route progress bar along the top edge. Opt-in; off by default.
    pub progress_bar: bool,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            particle_bounds: ParticleBounds::default(),
            timeline: Timeline::canonical(),
            style: WipeStyle::SplitPanels,
            theme: Theme::default(),
            viewport: Viewport::default(),
            progress_bar: false,
        }
    }
}

impl OverlayConfig {
    pub fn from_json_str(s: &str) -> RouteFxResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> RouteFxResult<()> {
        if self.particle_count == 0 {
            return Err(RouteFxError::validation("particle_count must be > 0"));
        }
        self.particle_bounds.validate()?;
        self.timeline.validate()?;
        Viewport::new(self.viewport.width, self.viewport.height)?;
        if self.timeline.spec(crate::timeline::model::Phase::Hold).is_none() {
            return Err(RouteFxError::config(
                "timeline must contain a 'hold' phase (the full-cover window)",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
