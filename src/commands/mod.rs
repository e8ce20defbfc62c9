//! Command implementations for the NBA stats CLI

pub mod menu;
pub mod session;

use crate::{nba::http::NBA_STATS_BASE_URL, BASE_URL_ENV_VAR};

/// Resolve the API base URL from option, then environment variable, then default.
pub fn resolve_base_url(base_url: Option<String>) -> String {
    base_url
        .or_else(|| {
            std::env::var(BASE_URL_ENV_VAR)
                .ok()
                .filter(|s| !s.trim().is_empty())
        })
        .unwrap_or_else(|| NBA_STATS_BASE_URL.to_string())
}
