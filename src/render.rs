//! Display Formatting
//!
//! Pure functions turning backend records into the text shown on the page.

use serde_json::Value;

use crate::models::{MatchRecord, RequestRecord, ServerReply, WasteListing};

/// Text for a result element. A non-empty `message` wins over `error`.
pub fn reply_text(reply: &ServerReply) -> String {
    reply
        .message
        .as_deref()
        .filter(|m| !m.is_empty())
        .or(reply.error.as_deref())
        .unwrap_or_default()
        .to_string()
}

fn text(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or_default()
}

/// Numbers print like a browser would: `10.0` as `10`
fn number(value: &Value) -> String {
    match value {
        Value::Number(n) => n.as_f64().map(|f| f.to_string()).unwrap_or_else(|| n.to_string()),
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

pub fn waste_line(w: &WasteListing) -> String {
    format!(
        "ID:{} | Type:{} | Qty:{} | Seller:{} | Desc:{}",
        w.id,
        text(&w.waste_type),
        number(&w.quantity),
        text(&w.username),
        text(&w.description)
    )
}

pub fn request_line(r: &RequestRecord) -> String {
    format!(
        "Request ID:{} | Buyer:{} | Waste:{} ({}) | Status:{}",
        r.id,
        text(&r.buyer_name),
        text(&r.waste_type),
        number(&r.quantity),
        text(&r.status)
    )
}

pub fn match_line(m: &MatchRecord) -> String {
    format!(
        "Waste ID:{} | Type:{} | Qty:{} | Seller:{}",
        m.waste_id,
        text(&m.waste_type),
        number(&m.quantity),
        text(&m.seller)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reply(message: Option<&str>, error: Option<&str>) -> ServerReply {
        ServerReply {
            message: message.map(str::to_string),
            error: error.map(str::to_string),
        }
    }

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn message_takes_precedence() {
        assert_eq!(reply_text(&reply(Some("ok"), None)), "ok");
        assert_eq!(reply_text(&reply(None, Some("bad"))), "bad");
        assert_eq!(reply_text(&reply(Some("ok"), Some("bad"))), "ok");
        assert_eq!(reply_text(&reply(None, None)), "");
    }

    #[test]
    fn empty_message_falls_back_to_error() {
        assert_eq!(reply_text(&reply(Some(""), Some("bad"))), "bad");
        assert_eq!(reply_text(&reply(Some(""), None)), "");
    }

    #[test]
    fn whole_quantities_print_without_fraction() {
        let m = MatchRecord {
            waste_id: 1,
            waste_type: some("plastic"),
            quantity: json!(10.0),
            seller: some("bob"),
        };
        assert_eq!(match_line(&m), "Waste ID:1 | Type:plastic | Qty:10 | Seller:bob");
    }

    #[test]
    fn request_line_format() {
        let r = RequestRecord {
            id: 12,
            buyer_name: some("dave"),
            waste_type: some("glass"),
            quantity: json!(2.5),
            status: some("pending"),
        };
        assert_eq!(
            request_line(&r),
            "Request ID:12 | Buyer:dave | Waste:glass (2.5) | Status:pending"
        );
    }

    #[test]
    fn missing_fields_render_empty() {
        let w = WasteListing {
            id: 3,
            waste_type: some("paper"),
            quantity: json!(7),
            username: None,
            description: None,
        };
        assert_eq!(waste_line(&w), "ID:3 | Type:paper | Qty:7 | Seller: | Desc:");
    }

    #[test]
    fn string_quantity_is_shown_as_sent() {
        let r = RequestRecord {
            id: 4,
            buyer_name: some("erin"),
            waste_type: some("metal"),
            quantity: json!("3 kg"),
            status: None,
        };
        assert_eq!(request_line(&r), "Request ID:4 | Buyer:erin | Waste:metal (3 kg) | Status:");
    }
}
