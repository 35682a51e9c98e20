//! Feedback Binding
//!
//! Writes action outcomes into signals, or raises a browser alert.

use leptos::prelude::*;

use crate::actions::{Feedback, ListFeedback};
use super::ListLine;

pub fn show_alert(message: &str) {
    if let Err(e) = window().alert_with_message(message) {
        log::warn!("alert failed: {:?}", e);
    }
}

/// Apply a result-element outcome
pub fn show_feedback(feedback: Feedback, set_text: WriteSignal<String>) {
    match feedback {
        Feedback::Alert(prompt) => show_alert(&prompt),
        Feedback::Text(text) => set_text.set(text),
    }
}

/// Apply a list outcome. The list is replaced wholesale, never appended to.
pub fn show_list(feedback: ListFeedback, set_lines: WriteSignal<Vec<ListLine>>) {
    match feedback {
        ListFeedback::Alert(prompt) => show_alert(&prompt),
        ListFeedback::Items(lines) => {
            set_lines.set(lines.into_iter().map(ListLine::item).collect());
        }
        ListFeedback::Failed(text) => set_lines.set(vec![ListLine::failure(text)]),
    }
}
