//! routefx plays a timed overlay over every in-app navigation: panels sweep in,
//! sparks burst from a spinning emblem, and the new view is revealed.
//!
//! # Lifecycle
//!
//! 1. **Observe**: the host router reports its current path
//!    (`Orchestrator::observe_path`); a changed path starts a session.
//! 2. **Schedule**: the session registers one timer per phase boundary on the
//!    host's [`TimerQueue`], each tagged with the session's [`SessionId`].
//! 3. **Advance**: fired timers go through `Orchestrator::on_timer`, which only
//!    applies them while their session is still the live one.
//! 4. **Compose**: `Orchestrator::frame(now)` returns an [`OverlayFrame`]; it is
//!    empty whenever no session is running.
//!
//! Constraints:
//!
//! - **At most one live session**: a new navigation synchronously completes the
//!   previous session and cancels its timers before anything else happens.
//! - **Pure rendering**: composition reads the session and never mutates it.
//! - **Never blocks input**: overlay layers are not hit-testable.
#![forbid(unsafe_code)]

pub mod config;

mod animation;
mod foundation;
mod overlay;
mod particles;
mod route;
mod session;
mod timeline;

pub use animation::ease::Ease;
pub use config::OverlayConfig;
pub use foundation::core::{Affine, Millis, Point, Rect, Rgba8, SessionId, Vec2, Viewport};
pub use foundation::error::{RouteFxError, RouteFxResult};
pub use overlay::compositor::compose;
pub use overlay::content::{ContentMotion, content_motion};
pub use overlay::layers::{
    ClipShape, Corner, Fill, Layer, LayerKind, OverlayFrame, PanelSide, Z_BACKGROUND, Z_CORNERS,
    Z_EMBLEM, Z_PARTICLES,
};
pub use overlay::progress::progress_fraction;
pub use overlay::style::{WipeStyle, parse_wipe_style};
pub use overlay::theme::Theme;
pub use particles::field::{Particle, ParticleBounds, generate, generate_with};
pub use route::bridge::{PathChanged, RouteBridge, normalize_path};
pub use session::orchestrator::Orchestrator;
pub use session::state::{SessionPhase, TransitionSession};
pub use session::timers::{TimerEvent, TimerHandle, TimerQueue, VirtualTimers};
pub use timeline::model::{Phase, PhaseSample, PhaseSpec, Timeline};
