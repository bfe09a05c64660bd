//! Pipeline entry points for sync operations.
//!
//! - `run_sync`: drive Fetch → Normalize → Store across pages until
//!   exhaustion or a fetch failure

pub mod sync;

pub use sync::{SyncReport, run_sync};
