//! Domain events module.
//!
//! Provides domain event types and the sink trait for emitting events after
//! successful mutations. Outer layers (UI shells, notification adapters)
//! implement the sink to refresh views or raise alerts.

mod domain_event;
mod sink;

pub use domain_event::*;
pub use sink::*;
