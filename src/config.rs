// src/config.rs

//! Environment-sourced configuration.
//!
//! All parameters are read once at startup; missing required variables
//! abort the run with a configuration error naming the variable.

use std::env;

use crate::error::{AppError, Result};

/// Default API endpoint for subscribed pulses.
pub const DEFAULT_BASE_URL: &str = "https://otx.alienvault.com/api/v1/pulses/subscribed";

/// Default number of pulses requested per page.
const DEFAULT_PAGE_LIMIT: u32 = 10;

/// Default timeout for outbound API calls.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Static parameters for one sync run.
#[derive(Debug, Clone)]
pub struct Config {
    /// OTX API key, sent as the `X-OTX-API-KEY` header.
    pub api_key: String,

    /// Base URL of the paginated pulses endpoint.
    pub base_url: String,

    /// MongoDB connection string.
    pub mongo_uri: String,

    /// Target database name.
    pub db_name: String,

    /// Target collection name.
    pub collection_name: String,

    /// Pulses requested per page.
    pub page_limit: u32,

    /// Optional ISO 8601 lower bound on pulse modification time.
    /// Passed through to the API verbatim; omitted from the request
    /// entirely when unset.
    pub modified_since: Option<String>,

    /// Timeout applied to each outbound API call.
    pub timeout_secs: u64,
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_key: required("OTX_API_KEY")?.trim().to_string(),
            base_url: optional("OTX_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            mongo_uri: required("MONGO_URI")?,
            db_name: required("DB_NAME")?,
            collection_name: required("COLLECTION_NAME")?,
            page_limit: parse_page_limit(optional("LIMIT").as_deref())?,
            modified_since: optional("MODIFIED_SINCE"),
            timeout_secs: parse_timeout(optional("HTTP_TIMEOUT_SECS").as_deref())?,
        })
    }
}

/// Read a required variable, failing with its name if absent or blank.
fn required(name: &str) -> Result<String> {
    optional(name).ok_or_else(|| AppError::config(format!("{name} is not set")))
}

/// Read an optional variable; blank values count as unset.
fn optional(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Parse the page limit, defaulting when unset.
fn parse_page_limit(raw: Option<&str>) -> Result<u32> {
    match raw {
        None => Ok(DEFAULT_PAGE_LIMIT),
        Some(s) => match s.trim().parse::<u32>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(AppError::config(format!(
                "LIMIT must be a positive integer, got '{s}'"
            ))),
        },
    }
}

/// Parse the HTTP timeout, defaulting when unset.
fn parse_timeout(raw: Option<&str>) -> Result<u64> {
    match raw {
        None => Ok(DEFAULT_TIMEOUT_SECS),
        Some(s) => match s.trim().parse::<u64>() {
            Ok(n) if n > 0 => Ok(n),
            _ => Err(AppError::config(format!(
                "HTTP_TIMEOUT_SECS must be a positive integer, got '{s}'"
            ))),
        },
    }
}
