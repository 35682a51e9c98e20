//! HTTP Transport
//!
//! `reqwest` implementation of [`WasteApi`]. On wasm32 this is `fetch`.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{match_path, requests_path, WasteApi, REGISTER_PATH, REQUEST_PATH, WASTE_PATH};
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{
    ExchangeRequest, MatchList, RegisterRequest, RequestRecord, ServerReply, WasteItem,
    WasteListing,
};

#[derive(Debug, Clone)]
pub struct HttpApi {
    config: ClientConfig,
    client: reqwest::Client,
}

impl HttpApi {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.config.url(path);
        log::debug!("GET {}", url);
        let resp = self.client.get(&url).send().await?;
        decode(resp).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.config.url(path);
        log::debug!("POST {}", url);
        let resp = self.client.post(&url).json(body).send().await?;
        decode(resp).await
    }
}

/// Decode a JSON body regardless of status; the backend reports
/// failures inside the body.
async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> ApiResult<T> {
    let status = resp.status().as_u16();
    let body = resp.text().await?;
    parse_body(status, &body)
}

fn parse_body<T: DeserializeOwned>(status: u16, body: &str) -> ApiResult<T> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode {
        status,
        reason: e.to_string(),
    })
}

#[async_trait(?Send)]
impl WasteApi for HttpApi {
    async fn register(&self, req: &RegisterRequest) -> ApiResult<ServerReply> {
        self.post_json(REGISTER_PATH, req).await
    }

    async fn add_waste(&self, item: &WasteItem) -> ApiResult<ServerReply> {
        self.post_json(WASTE_PATH, item).await
    }

    async fn list_waste(&self) -> ApiResult<Vec<WasteListing>> {
        self.get_json(WASTE_PATH).await
    }

    async fn create_request(&self, req: &ExchangeRequest) -> ApiResult<ServerReply> {
        self.post_json(REQUEST_PATH, req).await
    }

    async fn list_requests(&self, user_id: u32) -> ApiResult<Vec<RequestRecord>> {
        self.get_json(&requests_path(user_id)).await
    }

    async fn list_matches(&self, buyer_id: u32) -> ApiResult<MatchList> {
        self.get_json(&match_path(buyer_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_on_failure_status_still_decodes() {
        let reply: ServerReply = parse_body(400, r#"{"error":"User exists"}"#).unwrap();
        assert_eq!(reply.error.as_deref(), Some("User exists"));
    }

    #[test]
    fn html_body_is_a_decode_error() {
        let err = parse_body::<Vec<WasteListing>>(500, "<html>oops</html>").unwrap_err();
        match err {
            ApiError::Decode { status, .. } => assert_eq!(status, 500),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn paths_embed_ids() {
        assert_eq!(requests_path(9), "/api/requests/9");
        assert_eq!(match_path(5), "/api/match/5");
    }
}
