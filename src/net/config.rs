//! API endpoint configuration.
//!
//! The base URL defaults to the same-origin `/api` prefix and can be pointed
//! at another host at build time via `MYBOOKSPACE_API_URL` (picked up with
//! `option_env!`, so a plain `trunk build` needs no configuration).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

const DEFAULT_BASE_URL: &str = "/api";

/// Where the REST API lives. Constructed once and handed to [`crate::net::api::Api`]
/// rather than read from a global.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::with_base_url(option_env!("MYBOOKSPACE_API_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Join an endpoint path (leading slash expected) onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
