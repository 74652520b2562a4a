use rand::{SeedableRng, rngs::SmallRng};

use crate::{
    config::OverlayConfig,
    foundation::core::{Millis, SessionId},
    foundation::error::RouteFxResult,
    overlay::compositor::compose,
    overlay::content::{ContentMotion, content_motion},
    overlay::layers::OverlayFrame,
    particles::field::generate_with,
    route::bridge::RouteBridge,
    session::state::TransitionSession,
    session::timers::{TimerEvent, TimerHandle, TimerQueue, VirtualTimers},
};

/// Owner of the single "current session" slot.
///
/// Every navigation replaces the slot; phase boundaries arrive as
/// [`TimerEvent`]s carrying the id of the session that scheduled them and are
/// applied only while that session is still the live one.
pub struct Orchestrator<Q: TimerQueue = VirtualTimers> {
    config: OverlayConfig,
    timers: Q,
    rng: SmallRng,
    bridge: RouteBridge,
    current: Option<TransitionSession>,
    // handles scheduled for `current` that have not fired yet
    pending: Vec<TimerHandle>,
    next_id: u64,
    sessions_started: u64,
}

impl<Q: TimerQueue> Orchestrator<Q> {
    pub fn new(config: OverlayConfig, timers: Q) -> RouteFxResult<Self> {
        Self::with_rng(config, timers, SmallRng::from_rng(&mut rand::rng()))
    }

    /// Same as [`Orchestrator::new`] with reproducible particle fields.
    pub fn with_seed(config: OverlayConfig, timers: Q, seed: u64) -> RouteFxResult<Self> {
        Self::with_rng(config, timers, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(config: OverlayConfig, timers: Q, rng: SmallRng) -> RouteFxResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            timers,
            rng,
            bridge: RouteBridge::new(),
            current: None,
            pending: Vec::new(),
            next_id: 1,
            sessions_started: 0,
        })
    }

    pub fn config(&self) -> &OverlayConfig {
        &self.config
    }

    pub fn timers(&self) -> &Q {
        &self.timers
    }

    /// Most recent session, live or finished. `None` before the first
    /// navigation and after [`Orchestrator::dispose`].
    pub fn current(&self) -> Option<&TransitionSession> {
        self.current.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.current.as_ref().is_some_and(TransitionSession::is_live)
    }

    pub fn sessions_started(&self) -> u64 {
        self.sessions_started
    }

    /// Timers scheduled for the current session that have not fired.
    pub fn pending_timers(&self) -> usize {
        self.pending.len()
    }

    /// Route-bridge entry point: starts a session only when `path` differs
    /// from the last path observed (the first observation always does).
    pub fn observe_path(&mut self, path: &str, now: Millis) -> Option<SessionId> {
        let changed = self.bridge.observe(path)?;
        Some(self.on_navigate(&changed.path, now))
    }

    /// Supersede whatever is running and start a fresh session at `now`.
    #[tracing::instrument(skip(self))]
    pub fn on_navigate(&mut self, path: &str, now: Millis) -> SessionId {
        self.supersede();
        self.bridge.record(path);

        let id = SessionId(self.next_id);
        self.next_id += 1;

        let particles = generate_with(
            self.config.particle_count,
            &self.config.particle_bounds,
            &mut self.rng,
        );
        let mut session = TransitionSession::new(id, path.to_string(), now, particles);
        session.start(&self.config.timeline);

        for (phase_index, end) in self.config.timeline.boundaries() {
            let handle = self.timers.schedule(
                now.saturating_add(end),
                TimerEvent {
                    session: id,
                    phase_index,
                },
            );
            self.pending.push(handle);
        }

        tracing::debug!(
            %id,
            path,
            particles = session.particles().len(),
            timers = self.pending.len(),
            "transition session started"
        );
        self.current = Some(session);
        self.sessions_started += 1;
        id
    }

    /// Apply a fired phase-boundary timer. Events whose session is no longer
    /// the live one are dropped without effect. Returns whether it applied.
    pub fn on_timer(&mut self, event: TimerEvent) -> bool {
        let Some(session) = self
            .current
            .as_mut()
            .filter(|s| s.active && s.id == event.session)
        else {
            return false;
        };
        if !session.advance_past(event.phase_index, &self.config.timeline) {
            return false;
        }
        tracing::trace!(id = %session.id, phase = ?session.phase, "phase boundary");
        if !session.is_live() {
            tracing::debug!(id = %session.id, "transition session completed");
            for handle in self.pending.drain(..) {
                self.timers.cancel(handle);
            }
        }
        true
    }

    /// Deliver every timer due at or before `now`, in order. Returns how many
    /// were applied.
    pub fn advance_to(&mut self, now: Millis) -> usize {
        let mut applied = 0;
        while let Some((handle, event)) = self.timers.pop_due(now) {
            self.pending.retain(|h| *h != handle);
            if self.on_timer(event) {
                applied += 1;
            }
        }
        applied
    }

    /// Tear down: cancel every pending timer and drop the session.
    pub fn dispose(&mut self) {
        let cancelled = self.pending.len();
        for handle in self.pending.drain(..) {
            self.timers.cancel(handle);
        }
        if let Some(session) = self.current.take() {
            tracing::debug!(id = %session.id, cancelled, "orchestrator disposed");
        }
    }

    /// Overlay layer tree at `now`.
    pub fn frame(&self, now: Millis) -> OverlayFrame {
        compose(self.current.as_ref(), now, &self.config)
    }

    /// Motion for the incoming page view at `now`.
    pub fn content_motion(&self, now: Millis) -> ContentMotion {
        content_motion(self.current.as_ref(), now, &self.config.timeline)
    }

    fn supersede(&mut self) {
        for handle in self.pending.drain(..) {
            self.timers.cancel(handle);
        }
        if let Some(old) = self.current.as_mut().filter(|s| s.is_live()) {
            old.complete();
            tracing::debug!(id = %old.id, path = %old.trigger_path, "transition session superseded");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/orchestrator.rs"]
mod tests;
