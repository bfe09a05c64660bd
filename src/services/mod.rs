// src/services/mod.rs

//! Services for fetching and normalizing pulses.

pub mod fetch;
pub mod normalize;

pub use fetch::PulseFetcher;
pub use normalize::normalize_page;
