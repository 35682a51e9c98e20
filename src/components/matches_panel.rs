//! Matches Panel
//!
//! Backend-computed candidate listings for a buyer.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::{use_app_context, LatestOnly};
use super::{show_list, ListLine, ResultList, TextField};

#[component]
pub fn MatchesPanel() -> impl IntoView {
    let ctx = use_app_context();
    let buyer_id = RwSignal::new(String::new());
    let (lines, set_lines) = signal(Vec::<ListLine>::new());
    let latest = LatestOnly::new();

    let load = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let buyer = buyer_id.get_untracked();
        let api = ctx.api();
        let ticket = latest.issue();
        spawn_local(async move {
            let feedback = actions::load_matches(&api, &buyer).await;
            latest.apply_if_current(ticket, || show_list(feedback, set_lines));
        });
    };

    view! {
        <section class="panel">
            <h2>"Matches"</h2>
            <form on:submit=load>
                <TextField id="match_buyer_id" label="Buyer ID" value=buyer_id input_type="number" />
                <button type="submit">"Find Matches"</button>
            </form>
            <ResultList id="matches_list" lines=lines />
        </section>
    }
}
