//! Page Actions
//!
//! The six user-triggered operations. Each one validates its form, calls the
//! backend and returns what the view should show. Nothing here touches the DOM.

use crate::commands::WasteApi;
use crate::error::{ApiError, Field, ValidationError};
use crate::forms::{self, ExchangeForm, RegisterForm, WasteForm};
use crate::render;

pub const PROMPT_USERNAME: &str = "Enter username";
pub const PROMPT_WASTE_FIELDS: &str = "Fill all required fields";
pub const PROMPT_REQUEST_FIELDS: &str = "Fill all fields";
pub const PROMPT_SELLER_ID: &str = "Enter seller ID";
pub const PROMPT_BUYER_ID: &str = "Enter buyer ID";

/// Outcome for a result element
#[derive(Debug, Clone, PartialEq)]
pub enum Feedback {
    /// Blocking alert; no request was sent
    Alert(String),
    /// Replace the result element's text
    Text(String),
}

/// Outcome for a list element
#[derive(Debug, Clone, PartialEq)]
pub enum ListFeedback {
    /// Blocking alert; no request was sent and the list is left alone
    Alert(String),
    /// Clear the list and show these lines
    Items(Vec<String>),
    /// Clear the list and show a single failure line
    Failed(String),
}

fn rejected(prompt: &str, err: ValidationError) -> String {
    log::warn!("{}: {}", prompt, err);
    prompt.to_string()
}

fn failure_text(err: &ApiError) -> String {
    log::error!("backend call failed: {}", err);
    format!("Request failed: {}", err)
}

pub async fn register_user(api: &impl WasteApi, form: &RegisterForm) -> Feedback {
    let req = match form.validate() {
        Ok(req) => req,
        Err(e) => return Feedback::Alert(rejected(PROMPT_USERNAME, e)),
    };
    match api.register(&req).await {
        Ok(reply) => Feedback::Text(render::reply_text(&reply)),
        Err(e) => Feedback::Text(failure_text(&e)),
    }
}

/// Post a listing, then always refresh the waste list once.
///
/// `before_refresh` runs right before the list request is issued, so the
/// caller can stamp the refresh with its own generation ticket.
pub async fn add_waste<T>(
    api: &impl WasteApi,
    form: &WasteForm,
    before_refresh: impl FnOnce() -> T,
) -> (Feedback, Option<(T, ListFeedback)>) {
    let item = match form.validate() {
        Ok(item) => item,
        Err(e) => return (Feedback::Alert(rejected(PROMPT_WASTE_FIELDS, e)), None),
    };
    let feedback = match api.add_waste(&item).await {
        Ok(reply) => Feedback::Text(render::reply_text(&reply)),
        Err(e) => Feedback::Text(failure_text(&e)),
    };
    let ticket = before_refresh();
    (feedback, Some((ticket, load_waste(api).await)))
}

pub async fn load_waste(api: &impl WasteApi) -> ListFeedback {
    match api.list_waste().await {
        Ok(wastes) => {
            log::info!("loaded {} waste listings", wastes.len());
            ListFeedback::Items(wastes.iter().map(render::waste_line).collect())
        }
        Err(e) => ListFeedback::Failed(failure_text(&e)),
    }
}

pub async fn create_request(api: &impl WasteApi, form: &ExchangeForm) -> Feedback {
    let req = match form.validate() {
        Ok(req) => req,
        Err(e) => return Feedback::Alert(rejected(PROMPT_REQUEST_FIELDS, e)),
    };
    match api.create_request(&req).await {
        Ok(reply) => Feedback::Text(render::reply_text(&reply)),
        Err(e) => Feedback::Text(failure_text(&e)),
    }
}

pub async fn load_requests(api: &impl WasteApi, seller_id: &str) -> ListFeedback {
    let user_id = match forms::parse_id(seller_id, Field::SellerId) {
        Ok(id) => id,
        Err(e) => return ListFeedback::Alert(rejected(PROMPT_SELLER_ID, e)),
    };
    match api.list_requests(user_id).await {
        Ok(requests) => ListFeedback::Items(requests.iter().map(render::request_line).collect()),
        Err(e) => ListFeedback::Failed(failure_text(&e)),
    }
}

pub async fn load_matches(api: &impl WasteApi, buyer_id: &str) -> ListFeedback {
    let buyer_id = match forms::parse_id(buyer_id, Field::BuyerId) {
        Ok(id) => id,
        Err(e) => return ListFeedback::Alert(rejected(PROMPT_BUYER_ID, e)),
    };
    match api.list_matches(buyer_id).await {
        Ok(list) => ListFeedback::Items(list.matches.iter().map(render::match_line).collect()),
        Err(e) => ListFeedback::Failed(failure_text(&e)),
    }
}
