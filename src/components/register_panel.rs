//! Register Panel
//!
//! Username form posting to `/api/register`.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::{use_app_context, LatestOnly};
use crate::forms::RegisterForm;
use super::{show_feedback, TextField};

#[component]
pub fn RegisterPanel() -> impl IntoView {
    let ctx = use_app_context();
    let username = RwSignal::new(String::new());
    let (result, set_result) = signal(String::new());
    let latest = LatestOnly::new();

    let register = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let form = RegisterForm { username: username.get_untracked() };
        let api = ctx.api();
        let ticket = latest.issue();
        spawn_local(async move {
            let feedback = actions::register_user(&api, &form).await;
            latest.apply_if_current(ticket, || show_feedback(feedback, set_result));
        });
    };

    view! {
        <section class="panel">
            <h2>"Register"</h2>
            <form on:submit=register>
                <TextField id="reg_username" label="Username" value=username />
                <button type="submit">"Register"</button>
            </form>
            <p id="reg_result" class="result">{move || result.get()}</p>
        </section>
    }
}
