//! Backend Commands
//!
//! One async method per REST endpoint, behind a trait so views and tests can
//! swap the transport.

mod http;

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::models::{
    ExchangeRequest, MatchList, RegisterRequest, RequestRecord, ServerReply, WasteItem,
    WasteListing,
};

pub use http::HttpApi;

// ========================
// Endpoints
// ========================

pub const REGISTER_PATH: &str = "/api/register";
pub const WASTE_PATH: &str = "/api/waste";
pub const REQUEST_PATH: &str = "/api/request";

pub fn requests_path(user_id: u32) -> String {
    format!("/api/requests/{}", user_id)
}

pub fn match_path(buyer_id: u32) -> String {
    format!("/api/match/{}", buyer_id)
}

/// The waste-exchange REST contract.
///
/// Browser futures are not `Send`, so neither is this trait.
#[async_trait(?Send)]
pub trait WasteApi {
    /// `POST /api/register`
    async fn register(&self, req: &RegisterRequest) -> ApiResult<ServerReply>;

    /// `POST /api/waste`
    async fn add_waste(&self, item: &WasteItem) -> ApiResult<ServerReply>;

    /// `GET /api/waste`
    async fn list_waste(&self) -> ApiResult<Vec<WasteListing>>;

    /// `POST /api/request`
    async fn create_request(&self, req: &ExchangeRequest) -> ApiResult<ServerReply>;

    /// `GET /api/requests/{user_id}`
    async fn list_requests(&self, user_id: u32) -> ApiResult<Vec<RequestRecord>>;

    /// `GET /api/match/{buyer_id}`
    async fn list_matches(&self, buyer_id: u32) -> ApiResult<MatchList>;
}
