//! Rendering side of a transition: pure functions from a session and a host
//! instant to a declarative layer tree.

pub(crate) mod compositor;
pub(crate) mod content;
pub(crate) mod layers;
pub(crate) mod progress;
pub(crate) mod style;
pub(crate) mod theme;
