//! Form Validation
//!
//! Raw input text as typed by the user, and the checks that turn it into a
//! request body. Ids must be positive integers and quantities positive
//! finite numbers; zero is rejected like an empty field.

use crate::error::{Field, ValidationError};
use crate::models::{ExchangeRequest, RegisterRequest, WasteItem};

fn required_text(raw: &str, field: Field) -> Result<String, ValidationError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(ValidationError::Missing(field));
    }
    Ok(text.to_string())
}

/// Parse a positive integer id
pub fn parse_id(raw: &str, field: Field) -> Result<u32, ValidationError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(ValidationError::Missing(field));
    }
    match text.parse::<u32>() {
        Ok(0) => Err(ValidationError::OutOfRange(field)),
        Ok(id) => Ok(id),
        Err(_) => Err(ValidationError::Invalid(field)),
    }
}

fn parse_quantity(raw: &str) -> Result<f64, ValidationError> {
    let text = raw.trim();
    if text.is_empty() {
        return Err(ValidationError::Missing(Field::Quantity));
    }
    let qty: f64 = text
        .parse()
        .map_err(|_| ValidationError::Invalid(Field::Quantity))?;
    if !qty.is_finite() {
        return Err(ValidationError::Invalid(Field::Quantity));
    }
    if qty <= 0.0 {
        return Err(ValidationError::OutOfRange(Field::Quantity));
    }
    Ok(qty)
}

/// Registration form (`reg_username`)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub username: String,
}

impl RegisterForm {
    pub fn validate(&self) -> Result<RegisterRequest, ValidationError> {
        Ok(RegisterRequest {
            username: required_text(&self.username, Field::Username)?,
        })
    }
}

/// New waste listing form (`waste_user_id`, `waste_type`, `waste_quantity`, `waste_desc`)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WasteForm {
    pub user_id: String,
    pub waste_type: String,
    pub quantity: String,
    pub description: String,
}

impl WasteForm {
    pub fn validate(&self) -> Result<WasteItem, ValidationError> {
        Ok(WasteItem {
            user_id: parse_id(&self.user_id, Field::UserId)?,
            waste_type: required_text(&self.waste_type, Field::WasteType)?,
            quantity: parse_quantity(&self.quantity)?,
            description: self.description.trim().to_string(),
        })
    }
}

/// Exchange request form (`buyer_id`, `request_waste_id`)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExchangeForm {
    pub buyer_id: String,
    pub waste_id: String,
}

impl ExchangeForm {
    pub fn validate(&self) -> Result<ExchangeRequest, ValidationError> {
        Ok(ExchangeRequest {
            buyer_id: parse_id(&self.buyer_id, Field::BuyerId)?,
            waste_id: parse_id(&self.waste_id, Field::WasteId)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn waste_form(user_id: &str, waste_type: &str, quantity: &str) -> WasteForm {
        WasteForm {
            user_id: user_id.to_string(),
            waste_type: waste_type.to_string(),
            quantity: quantity.to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn username_is_trimmed() {
        let form = RegisterForm { username: "  alice ".to_string() };
        assert_eq!(form.validate().unwrap().username, "alice");
    }

    #[test]
    fn blank_username_is_missing() {
        let form = RegisterForm { username: "   ".to_string() };
        assert_eq!(form.validate(), Err(ValidationError::Missing(Field::Username)));
    }

    #[test]
    fn zero_rejected_like_empty() {
        assert_eq!(
            waste_form("0", "plastic", "5").validate(),
            Err(ValidationError::OutOfRange(Field::UserId))
        );
        assert_eq!(
            waste_form("1", "plastic", "0").validate(),
            Err(ValidationError::OutOfRange(Field::Quantity))
        );
        assert_eq!(
            waste_form("", "plastic", "5").validate(),
            Err(ValidationError::Missing(Field::UserId))
        );
    }

    #[test]
    fn negative_and_garbage_quantities() {
        assert_eq!(
            waste_form("1", "glass", "-2").validate(),
            Err(ValidationError::OutOfRange(Field::Quantity))
        );
        assert_eq!(
            waste_form("1", "glass", "lots").validate(),
            Err(ValidationError::Invalid(Field::Quantity))
        );
        assert_eq!(
            waste_form("1", "glass", "inf").validate(),
            Err(ValidationError::Invalid(Field::Quantity))
        );
    }

    #[test]
    fn description_is_optional() {
        let mut form = waste_form(" 7 ", " metal ", "1.5");
        form.description = "  bolts ".to_string();
        let item = form.validate().unwrap();
        assert_eq!(item.user_id, 7);
        assert_eq!(item.waste_type, "metal");
        assert_eq!(item.quantity, 1.5);
        assert_eq!(item.description, "bolts");

        let bare = waste_form("7", "metal", "1").validate().unwrap();
        assert_eq!(bare.description, "");
    }

    #[test]
    fn exchange_needs_both_ids() {
        let form = ExchangeForm { buyer_id: "4".to_string(), waste_id: String::new() };
        assert_eq!(form.validate(), Err(ValidationError::Missing(Field::WasteId)));

        let form = ExchangeForm { buyer_id: "4.5".to_string(), waste_id: "2".to_string() };
        assert_eq!(form.validate(), Err(ValidationError::Invalid(Field::BuyerId)));

        let form = ExchangeForm { buyer_id: "4".to_string(), waste_id: "2".to_string() };
        assert_eq!(form.validate(), Ok(ExchangeRequest { buyer_id: 4, waste_id: 2 }));
    }
}
