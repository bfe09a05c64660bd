// src/models/mod.rs

//! Domain models for the sync connector.

mod pulse;

// Re-export all public types
pub use pulse::{Indicator, Pulse, RawIndicator, RawPage, RawPulse};
