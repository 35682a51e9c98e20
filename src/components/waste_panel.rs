//! Waste Panel
//!
//! Listing form plus the live waste list. Every submitted listing is
//! followed by a list refresh, whatever the backend answered.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::{use_app_context, LatestOnly};
use crate::forms::WasteForm;
use super::{show_feedback, show_list, ListLine, ResultList, TextField};

#[component]
pub fn WastePanel() -> impl IntoView {
    let ctx = use_app_context();

    let user_id = RwSignal::new(String::new());
    let waste_type = RwSignal::new(String::new());
    let quantity = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());

    let (result, set_result) = signal(String::new());
    let (lines, set_lines) = signal(Vec::<ListLine>::new());
    let latest_result = LatestOnly::new();
    let latest_list = LatestOnly::new();

    let refresh = move || {
        let api = ctx.api();
        let ticket = latest_list.issue();
        spawn_local(async move {
            let feedback = actions::load_waste(&api).await;
            latest_list.apply_if_current(ticket, || show_list(feedback, set_lines));
        });
    };

    // Initial load
    Effect::new(move |_| refresh());

    let add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = WasteForm {
            user_id: user_id.get_untracked(),
            waste_type: waste_type.get_untracked(),
            quantity: quantity.get_untracked(),
            description: description.get_untracked(),
        };
        let api = ctx.api();
        let ticket = latest_result.issue();
        spawn_local(async move {
            let (feedback, list) = actions::add_waste(&api, &form, || latest_list.issue()).await;
            latest_result.apply_if_current(ticket, || show_feedback(feedback, set_result));
            if let Some((list_ticket, list)) = list {
                latest_list.apply_if_current(list_ticket, || show_list(list, set_lines));
            }
        });
    };

    view! {
        <section class="panel">
            <h2>"List Waste"</h2>
            <form on:submit=add>
                <TextField id="waste_user_id" label="Seller ID" value=user_id input_type="number" />
                <TextField id="waste_type" label="Type" value=waste_type placeholder="plastic, metal, paper..." />
                <TextField id="waste_quantity" label="Quantity" value=quantity input_type="number" />
                <TextField id="waste_desc" label="Description" value=description />
                <button type="submit">"Add Waste"</button>
            </form>
            <p id="add_waste_result" class="result">{move || result.get()}</p>

            <div class="list-header">
                <h3>"Available Waste"</h3>
                <button type="button" on:click=move |_| refresh()>"Refresh"</button>
            </div>
            <ResultList id="waste_list" lines=lines />
        </section>
    }
}
