//! Blocking primitives that coordinate the two workers
//!
//! [`ReadySignal`] counts jobs available to the printer; [`StartGate`] holds the
//! printer back until submission is complete. They keep separate state and
//! are never locked together.

mod gate;
mod signal;

pub use gate::StartGate;
pub use signal::ReadySignal;
