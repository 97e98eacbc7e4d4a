//! # Adapters Layer (Outer Hexagon)
//!
//! Adapters connect the billboard to the invoking environment.
//!
//! - Adapters implement domain ports
//! - The event handler translates envelope + payload into API calls
//! - The in-memory sink backs the test suite

pub mod event_handler;
pub mod memory_sink;

pub use event_handler::*;
pub use memory_sink::*;
