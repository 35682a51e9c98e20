//! Seller Requests Panel
//!
//! Incoming exchange requests for one seller.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::{use_app_context, LatestOnly};
use super::{show_list, ListLine, ResultList, TextField};

#[component]
pub fn SellerRequestsPanel() -> impl IntoView {
    let ctx = use_app_context();
    let seller_id = RwSignal::new(String::new());
    let (lines, set_lines) = signal(Vec::<ListLine>::new());
    let latest = LatestOnly::new();

    let load = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let seller = seller_id.get_untracked();
        let api = ctx.api();
        let ticket = latest.issue();
        spawn_local(async move {
            let feedback = actions::load_requests(&api, &seller).await;
            latest.apply_if_current(ticket, || show_list(feedback, set_lines));
        });
    };

    view! {
        <section class="panel">
            <h2>"Requests For My Waste"</h2>
            <form on:submit=load>
                <TextField id="seller_id" label="Seller ID" value=seller_id input_type="number" />
                <button type="submit">"Load Requests"</button>
            </form>
            <ResultList id="requests_list" lines=lines />
        </section>
    }
}
