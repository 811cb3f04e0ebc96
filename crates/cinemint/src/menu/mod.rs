//! The menu state machine: loop state plus the orchestrator that drives the systems.

pub mod orchestrator;
pub mod state;
