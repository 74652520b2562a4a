pub(crate) mod orchestrator;
pub(crate) mod state;
pub(crate) mod timers;
