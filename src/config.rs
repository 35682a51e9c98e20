//! Client Configuration
//!
//! Where the backend lives. A build can pin it with
//! `WASTE_EXCHANGE_API_BASE`; otherwise the page origin is used.

use leptos::prelude::window;

/// Connection settings shared with every component via context
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClientConfig {
    /// Scheme + host (+ optional prefix), no trailing slash
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Resolve from the build environment, then the current page
    pub fn from_env() -> Self {
        if let Some(base) = option_env!("WASTE_EXCHANGE_API_BASE") {
            return Self::new(base);
        }
        match window().location().origin() {
            Ok(origin) => Self::new(origin),
            Err(_) => {
                log::warn!("page origin unavailable, using relative URLs");
                Self::default()
            }
        }
    }

    /// Full URL for an API path such as `/api/waste`
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_stripped() {
        let config = ClientConfig::new("http://localhost:5000//");
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.url("/api/waste"), "http://localhost:5000/api/waste");
    }

    #[test]
    fn empty_base_gives_relative_urls() {
        assert_eq!(ClientConfig::default().url("/api/match/5"), "/api/match/5");
    }
}
