//! Exchange Request Panel

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::{use_app_context, LatestOnly};
use crate::forms::ExchangeForm;
use super::{show_feedback, TextField};

/// Buyer asks for a specific listing
#[component]
pub fn ExchangePanel() -> impl IntoView {
    let ctx = use_app_context();
    let buyer_id = RwSignal::new(String::new());
    let waste_id = RwSignal::new(String::new());
    let (result, set_result) = signal(String::new());
    let latest = LatestOnly::new();

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = ExchangeForm {
            buyer_id: buyer_id.get_untracked(),
            waste_id: waste_id.get_untracked(),
        };
        let api = ctx.api();
        let ticket = latest.issue();
        spawn_local(async move {
            let feedback = actions::create_request(&api, &form).await;
            latest.apply_if_current(ticket, || show_feedback(feedback, set_result));
        });
    };

    view! {
        <section class="panel">
            <h2>"Request Waste"</h2>
            <form on:submit=submit>
                <TextField id="buyer_id" label="Buyer ID" value=buyer_id input_type="number" />
                <TextField id="request_waste_id" label="Waste ID" value=waste_id input_type="number" />
                <button type="submit">"Send Request"</button>
            </form>
            <p id="request_result" class="result">{move || result.get()}</p>
        </section>
    }
}
