// src/pipeline/sync.rs

//! Pagination driver.
//!
//! Walks the paginated API one page at a time: fetch, normalize, store,
//! advance. Each page is fully processed before the next fetch starts,
//! and nothing is carried across iterations except the page cursor and
//! the accumulating report. Terminal states: completed (empty page or no
//! next-page indicator) and completed-with-errors (any fetch failure).
//! Store failures never halt the run; fetch failures always do.

use crate::error::FetchError;
use crate::services::{PulseFetcher, normalize_page};
use crate::storage::PulseStore;

/// Summary of a sync run.
#[derive(Debug, Default)]
pub struct SyncReport {
    /// Pages successfully fetched, including a trailing empty page.
    pub pages_fetched: u32,
    /// Pulses written to the store.
    pub pulses_upserted: usize,
    /// Pulses that failed to persist (run continued).
    pub store_failures: usize,
    /// The fetch failure that halted the run, if any.
    pub fetch_error: Option<FetchError>,
}

impl SyncReport {
    /// Whether the run reached natural end-of-data.
    ///
    /// Store failures are isolated per record and do not count against
    /// the overall status; only a fetch failure does.
    pub fn succeeded(&self) -> bool {
        self.fetch_error.is_none()
    }
}

/// Run the sync pipeline to completion.
///
/// `max_pages` is a safety valve capping how many pages are processed;
/// `None` runs until the API reports end-of-data.
pub async fn run_sync(
    fetcher: &PulseFetcher,
    store: &dyn PulseStore,
    max_pages: Option<u32>,
) -> SyncReport {
    let mut report = SyncReport::default();
    let mut page: u32 = 1;

    loop {
        log::info!("Fetching page {page} from pulses API...");

        let raw = match fetcher.fetch_page(page).await {
            Ok(raw) => raw,
            Err(error) => {
                match &error {
                    FetchError::RateLimited { .. } => {
                        log::error!("Rate limited on page {page}; stopping sync: {error}")
                    }
                    _ => {
                        log::error!("Stopping sync due to fetch failure on page {page}: {error}")
                    }
                }
                report.fetch_error = Some(error);
                break;
            }
        };
        report.pages_fetched += 1;

        if raw.results.is_empty() {
            log::info!("No more data found; ending sync.");
            break;
        }

        let pulses = normalize_page(&raw);
        if pulses.is_empty() {
            // Not an error: the page existed but held nothing usable.
            log::warn!(
                "Page {page} held {} records but none were usable; skipping store step.",
                raw.results.len()
            );
        } else {
            let outcome = store.upsert_batch(&pulses).await;
            for failure in &outcome.failures {
                log::error!(
                    "Failed to store pulse {}: {}",
                    failure.id, failure.reason
                );
            }
            log::info!(
                "Page {page}: upserted {} pulses ({} failed).",
                outcome.upserted.len(),
                outcome.failures.len()
            );
            report.pulses_upserted += outcome.upserted.len();
            report.store_failures += outcome.failures.len();
        }

        if !raw.has_next() {
            break;
        }
        if let Some(cap) = max_pages {
            if page >= cap {
                log::warn!("Reached page cap of {cap}; stopping early.");
                break;
            }
        }
        page += 1;
    }

    if report.succeeded() {
        log::info!("Sync completed successfully!");
    } else {
        log::error!("Sync ended with errors.");
    }

    report
}
