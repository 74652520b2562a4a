use crate::{
    animation::ease::Ease,
    foundation::core::Millis,
    session::state::TransitionSession,
    timeline::model::{Phase, Timeline},
};

pub const CONTENT_ENTER_DURATION: Millis = Millis(400);
pub const CONTENT_ENTER_OFFSET_Y: f64 = 20.0;

/// Motion the host applies to the incoming page view.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ContentMotion {
    pub opacity: f64,
    /// Vertical offset in px; positive is below the resting position.
    pub offset_y: f64,
}

impl ContentMotion {
    pub fn settled() -> Self {
        Self {
            opacity: 1.0,
            offset_y: 0.0,
        }
    }
}

/// The new view stays hidden while the panels close, then rises into place
/// starting at the full-cover window.
pub fn content_motion(
    session: Option<&TransitionSession>,
    now: Millis,
    timeline: &Timeline,
) -> ContentMotion {
    let Some(session) = session.filter(|s| s.is_live()) else {
        return ContentMotion::settled();
    };
    let start = timeline
        .spec(Phase::Hold)
        .map(|p| p.offset)
        .unwrap_or(Millis::ZERO);
    let elapsed = session.elapsed(now);
    if elapsed < start {
        return ContentMotion {
            opacity: 0.0,
            offset_y: CONTENT_ENTER_OFFSET_Y,
        };
    }
    let t = elapsed.saturating_sub(start).as_f64() / CONTENT_ENTER_DURATION.as_f64();
    let e = Ease::Anticipate.apply(t);
    ContentMotion {
        opacity: e.clamp(0.0, 1.0),
        offset_y: CONTENT_ENTER_OFFSET_Y * (1.0 - e),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/content.rs"]
mod tests;
