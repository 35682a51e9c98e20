//! UI Components
//!
//! One panel per page section, plus the shared field and list pieces.

mod feedback;
mod text_field;
mod result_list;
mod register_panel;
mod waste_panel;
mod exchange_panel;
mod seller_requests_panel;
mod matches_panel;

pub use feedback::{show_feedback, show_list};
pub use text_field::TextField;
pub use result_list::{ListLine, ResultList};
pub use register_panel::RegisterPanel;
pub use waste_panel::WastePanel;
pub use exchange_panel::ExchangePanel;
pub use seller_requests_panel::SellerRequestsPanel;
pub use matches_panel::MatchesPanel;
