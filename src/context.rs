//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::commands::HttpApi;
use crate::config::ClientConfig;

/// App-wide settings provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Backend location, resolved once at startup
    config: StoredValue<ClientConfig>,
}

impl AppContext {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config: StoredValue::new(config),
        }
    }

    /// Backend client for one action
    pub fn api(&self) -> HttpApi {
        HttpApi::new(self.config.get_value())
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Issue-order counter for one view element. Only the latest issued call may
/// write its response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Generation(u64);

impl Generation {
    /// Start a new call and return its ticket
    pub fn issue(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.0 == ticket
    }
}

/// A [`Generation`] living in the reactive arena, copyable into closures
#[derive(Clone, Copy)]
pub struct LatestOnly(StoredValue<Generation>);

impl LatestOnly {
    pub fn new() -> Self {
        Self(StoredValue::new(Generation::default()))
    }

    pub fn issue(&self) -> u64 {
        let mut ticket = 0;
        self.0.update_value(|g| ticket = g.issue());
        ticket
    }

    /// Run `apply` only if `ticket` is still the latest call
    pub fn apply_if_current(&self, ticket: u64, apply: impl FnOnce()) {
        if self.0.with_value(|g| g.is_current(ticket)) {
            apply();
        } else {
            log::debug!("dropping stale response #{}", ticket);
        }
    }
}
