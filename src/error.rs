//! Error Types
//!
//! Failures surfaced by commands and form validation.

use std::fmt;

/// Result type for backend commands
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors from talking to the backend
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent or its body could not be read
    #[error("network error: {0}")]
    Transport(String),

    /// The body was read but is not the JSON shape we expect
    #[error("unexpected response (HTTP {status}): {reason}")]
    Decode { status: u16, reason: String },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

/// Form field identifiers, named after the inputs they come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Username,
    UserId,
    WasteType,
    Quantity,
    BuyerId,
    WasteId,
    SellerId,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Username => "username",
            Field::UserId => "user id",
            Field::WasteType => "waste type",
            Field::Quantity => "quantity",
            Field::BuyerId => "buyer id",
            Field::WasteId => "waste id",
            Field::SellerId => "seller id",
        };
        f.write_str(name)
    }
}

/// Why a form was rejected before any request was made
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Missing(Field),

    #[error("{0} is not a valid number")]
    Invalid(Field),

    #[error("{0} must be greater than zero")]
    OutOfRange(Field),
}
