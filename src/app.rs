//! Waste Exchange App
//!
//! Single page: registration, listings, exchange requests and matches.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::context::AppContext;
use crate::components::{ExchangePanel, MatchesPanel, RegisterPanel, SellerRequestsPanel, WastePanel};

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_env();
    log::info!("backend at {}", if config.base_url.is_empty() { "<page origin>" } else { config.base_url.as_str() });

    // Provide context to all children
    provide_context(AppContext::new(config));

    view! {
        <main class="app-layout">
            <h1>"Waste Exchange"</h1>

            <RegisterPanel />

            <div class="columns">
                // Seller side
                <div class="column">
                    <WastePanel />
                    <SellerRequestsPanel />
                </div>

                // Buyer side
                <div class="column">
                    <ExchangePanel />
                    <MatchesPanel />
                </div>
            </div>
        </main>
    }
}
