use crate::{
    foundation::core::{Millis, SessionId},
    particles::field::Particle,
    timeline::model::{Phase, Timeline},
};

/// Lifecycle position of one session. `Idle` is the absence of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "state", content = "phase", rename_all = "snake_case")]
pub enum SessionPhase {
    Created,
    Running(Phase),
    Completed,
}

/// One run of the overlay, bound to one navigation event.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TransitionSession {
    pub id: SessionId,
    pub trigger_path: String,
    pub started_at: Millis,
    pub phase: SessionPhase,
    particles: Vec<Particle>,
    pub active: bool,
}

impl TransitionSession {
    pub(crate) fn new(
        id: SessionId,
        trigger_path: String,
        started_at: Millis,
        particles: Vec<Particle>,
    ) -> Self {
        Self {
            id,
            trigger_path,
            started_at,
            phase: SessionPhase::Created,
            particles,
            active: true,
        }
    }

    /// Fixed at creation; never regenerated.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn elapsed(&self, now: Millis) -> Millis {
        now.saturating_sub(self.started_at)
    }

    /// Renderable: active and not yet completed.
    pub fn is_live(&self) -> bool {
        self.active && self.phase != SessionPhase::Completed
    }

    pub(crate) fn start(&mut self, timeline: &Timeline) {
        if let Some(first) = timeline.phases.first() {
            self.phase = SessionPhase::Running(first.phase);
        } else {
            self.complete();
        }
    }

    /// Apply the boundary at the end of phase `phase_index`: move to the next
    /// phase, or complete after the last one. Boundaries that would move the
    /// session backwards are ignored.
    pub(crate) fn advance_past(&mut self, phase_index: usize, timeline: &Timeline) -> bool {
        if !self.is_live() {
            return false;
        }
        let current = match self.phase {
            SessionPhase::Running(p) => timeline.phases.iter().position(|s| s.phase == p),
            _ => None,
        };
        if current.is_some_and(|c| phase_index < c) {
            return false;
        }
        match timeline.phases.get(phase_index + 1) {
            Some(next) => self.phase = SessionPhase::Running(next.phase),
            None => self.complete(),
        }
        true
    }

    pub(crate) fn complete(&mut self) {
        self.phase = SessionPhase::Completed;
        self.active = false;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/state.rs"]
mod tests;
