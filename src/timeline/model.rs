use crate::{
    animation::ease::Ease,
    config,
    foundation::core::Millis,
    foundation::error::{RouteFxError, RouteFxResult},
};

/// Named segment of a transition run.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Panels sweep in over the outgoing view.
    Cover,
    /// Viewport fully covered; the route swap happens underneath.
    Hold,
    /// Panels sweep out, revealing the new view.
    Reveal,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cover => "cover",
            Self::Hold => "hold",
            Self::Reveal => "reveal",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PhaseSpec {
    pub phase: Phase,
    pub offset: Millis,   // from session start
    pub duration: Millis, // > 0
    pub ease: Ease,
}

impl PhaseSpec {
    pub fn end(&self) -> Millis {
        self.offset.saturating_add(self.duration)
    }

    /// Eased progress in `[0, 1]` at a session-relative `elapsed`.
    pub fn progress(&self, elapsed: Millis) -> f64 {
        let local = elapsed.saturating_sub(self.offset).as_f64();
        let t = (local / self.duration.as_f64().max(1.0)).clamp(0.0, 1.0);
        self.ease.apply(t)
    }
}

/// A phase evaluated at a point in time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseSample {
    pub index: usize,
    pub spec: PhaseSpec,
    /// Milliseconds since the phase began, clamped to `[0, duration]`.
    pub local: Millis,
    /// Eased phase progress in `[0, 1]`.
    pub progress: f64,
}

/// Static, ordered phase schedule shared by every session.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Timeline {
    pub phases: Vec<PhaseSpec>,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::canonical()
    }
}

impl Timeline {
    /// Cover 0-300ms, hold 300-500ms, reveal 500-800ms.
    pub fn canonical() -> Self {
        Self {
            phases: vec![
                PhaseSpec {
                    phase: Phase::Cover,
                    offset: Millis::ZERO,
                    duration: config::COVER_DURATION,
                    ease: Ease::WIPE,
                },
                PhaseSpec {
                    phase: Phase::Hold,
                    offset: config::COVER_DURATION,
                    duration: config::HOLD_DURATION,
                    ease: Ease::Linear,
                },
                PhaseSpec {
                    phase: Phase::Reveal,
                    offset: config::COVER_DURATION.saturating_add(config::HOLD_DURATION),
                    duration: config::REVEAL_DURATION,
                    ease: Ease::WIPE,
                },
            ],
        }
    }

    pub fn validate(&self) -> RouteFxResult<()> {
        let Some(first) = self.phases.first() else {
            return Err(RouteFxError::validation("timeline must have at least one phase"));
        };
        if first.offset != Millis::ZERO {
            return Err(RouteFxError::validation("first phase must start at offset 0"));
        }
        for (i, p) in self.phases.iter().enumerate() {
            if p.duration == Millis::ZERO {
                return Err(RouteFxError::validation(format!(
                    "phase '{}' must have duration > 0",
                    p.phase.as_str()
                )));
            }
            if self.phases[..i].iter().any(|q| q.phase == p.phase) {
                return Err(RouteFxError::validation(format!(
                    "phase '{}' appears more than once",
                    p.phase.as_str()
                )));
            }
        }
        if !self.phases.windows(2).all(|w| w[0].end() == w[1].offset) {
            return Err(RouteFxError::validation(
                "phases must be contiguous (each offset equals the previous end)",
            ));
        }
        Ok(())
    }

    pub fn total_duration(&self) -> Millis {
        self.phases.last().map(PhaseSpec::end).unwrap_or(Millis::ZERO)
    }

    pub fn spec(&self, phase: Phase) -> Option<&PhaseSpec> {
        self.phases.iter().find(|p| p.phase == phase)
    }

    /// Evaluate `phase` at session-relative `elapsed`. Times outside the
    /// phase clamp to its first or last pose.
    pub fn sample(&self, phase: Phase, elapsed: Millis) -> Option<PhaseSample> {
        let index = self.phases.iter().position(|p| p.phase == phase)?;
        let spec = self.phases[index];
        Some(PhaseSample {
            index,
            spec,
            local: Millis(elapsed.saturating_sub(spec.offset).0.min(spec.duration.0)),
            progress: spec.progress(elapsed),
        })
    }

    /// Boundary instants relative to session start: every phase end, in order.
    /// The last entry is the completion instant.
    pub fn boundaries(&self) -> impl Iterator<Item = (usize, Millis)> + '_ {
        self.phases.iter().enumerate().map(|(i, p)| (i, p.end()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/model.rs"]
mod tests;
