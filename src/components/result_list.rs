//! Result List Component

use leptos::prelude::*;

/// One rendered `<li>`
#[derive(Debug, Clone, PartialEq)]
pub struct ListLine {
    pub text: String,
    pub is_error: bool,
}

impl ListLine {
    pub fn item(text: String) -> Self {
        Self { text, is_error: false }
    }

    pub fn failure(text: String) -> Self {
        Self { text, is_error: true }
    }
}

/// `<ul>` rebuilt from `lines` on every change
#[component]
pub fn ResultList(
    id: &'static str,
    lines: ReadSignal<Vec<ListLine>>,
) -> impl IntoView {
    view! {
        <ul id=id class="result-list">
            <For
                each=move || lines.get().into_iter().enumerate()
                key=|(i, line)| (*i, line.text.clone())
                children=move |(_, line)| {
                    view! {
                        <li class=if line.is_error { "error" } else { "" }>{line.text}</li>
                    }
                }
            />
        </ul>
    }
}
