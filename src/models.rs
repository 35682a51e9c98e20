//! Frontend Models
//!
//! Wire shapes exchanged with the waste-exchange backend.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ========================
// Outgoing
// ========================

/// Body of `POST /api/register`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegisterRequest {
    pub username: String,
}

/// Body of `POST /api/waste`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WasteItem {
    pub user_id: u32,
    #[serde(rename = "type")]
    pub waste_type: String,
    pub quantity: f64,
    pub description: String,
}

/// Body of `POST /api/request`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExchangeRequest {
    pub buyer_id: u32,
    pub waste_id: u32,
}

// ========================
// Incoming
// ========================

/// Reply of every write endpoint. The backend sets one of the two fields.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ServerReply {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// One entry of `GET /api/waste`.
///
/// Display-only fields are lenient: a null or odd-typed value in one row
/// must not fail the whole list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WasteListing {
    pub id: u32,
    #[serde(rename = "type", default)]
    pub waste_type: Option<String>,
    #[serde(default)]
    pub quantity: Value,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// One entry of `GET /api/requests/{user_id}`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RequestRecord {
    pub id: u32,
    #[serde(default)]
    pub buyer_name: Option<String>,
    #[serde(rename = "type", default)]
    pub waste_type: Option<String>,
    #[serde(default)]
    pub quantity: Value,
    #[serde(default)]
    pub status: Option<String>,
}

/// One candidate pairing computed by the backend
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MatchRecord {
    pub waste_id: u32,
    #[serde(rename = "type", default)]
    pub waste_type: Option<String>,
    #[serde(default)]
    pub quantity: Value,
    #[serde(default)]
    pub seller: Option<String>,
}

/// Reply of `GET /api/match/{buyer_id}`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MatchList {
    #[serde(default)]
    pub matches: Vec<MatchRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn waste_item_uses_type_key() {
        let item = WasteItem {
            user_id: 3,
            waste_type: "metal".to_string(),
            quantity: 2.5,
            description: "scrap".to_string(),
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            json!({"user_id": 3, "type": "metal", "quantity": 2.5, "description": "scrap"})
        );
    }

    #[test]
    fn listing_tolerates_null_description() {
        let listing: WasteListing = serde_json::from_value(json!({
            "id": 1, "type": "paper", "quantity": 4, "username": "carol", "description": null
        }))
        .unwrap();
        assert_eq!(listing.description, None);
        assert_eq!(listing.quantity, json!(4));
    }

    #[test]
    fn request_row_tolerates_null_and_string_fields() {
        let record: RequestRecord = serde_json::from_value(json!({
            "id": 2, "buyer_name": null, "type": "glass", "quantity": "12", "status": "pending"
        }))
        .unwrap();
        assert_eq!(record.buyer_name, None);
        assert_eq!(record.quantity, json!("12"));
    }

    #[test]
    fn reply_with_neither_field() {
        let reply: ServerReply = serde_json::from_str("{}").unwrap();
        assert_eq!(reply, ServerReply::default());
    }
}
