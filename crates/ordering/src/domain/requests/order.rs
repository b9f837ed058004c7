use crate::model::order::{OrderStatus, PaymentMethod};
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[1-9]\d{1,14}$").expect("phone regex"));

/// Separators users habitually type into phone fields.
pub fn normalize_phone(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '(' | ')'))
        .collect()
}

fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if PHONE_RE.is_match(&normalize_phone(phone)) {
        Ok(())
    } else {
        Err(ValidationError::new("phone").with_message("Invalid phone number format".into()))
    }
}

fn validate_address(address: &str) -> Result<(), ValidationError> {
    let len = address.trim().chars().count();
    if (10..=500).contains(&len) {
        Ok(())
    } else {
        Err(ValidationError::new("address")
            .with_message("Address must be between 10 and 500 characters".into()))
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, ToSchema)]
pub struct PlaceOrderRequest {
    #[validate(custom(function = validate_address))]
    pub delivery_address: String,

    #[validate(custom(function = validate_phone))]
    pub delivery_phone: String,

    #[validate(length(max = 1000, message = "Notes must be less than 1000 characters"))]
    pub delivery_notes: Option<String>,

    pub payment_method: PaymentMethod,
}

impl PlaceOrderRequest {
    pub fn normalized_address(&self) -> String {
        self.delivery_address.trim().to_string()
    }

    pub fn normalized_phone(&self) -> String {
        normalize_phone(&self.delivery_phone)
    }

    pub fn normalized_notes(&self) -> Option<String> {
        self.delivery_notes
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    }
}

/// Server-computed order row, built only from live menu prices and
/// settings. Never populated from client-submitted amounts.
#[derive(Debug, Clone)]
pub struct CreateOrderRecord {
    pub user_id: Uuid,
    pub total_amount: Decimal,
    pub delivery_address: String,
    pub delivery_phone: String,
    pub delivery_notes: Option<String>,
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Clone)]
pub struct CreateOrderLineRecord {
    pub menu_item_id: Uuid,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub total_price: Decimal,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, ToSchema)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

#[derive(Debug, Serialize, Deserialize, Clone, IntoParams)]
pub struct AdminOrderFilter {
    pub status: Option<OrderStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(address: &str, phone: &str, notes: Option<&str>) -> PlaceOrderRequest {
        PlaceOrderRequest {
            delivery_address: address.to_string(),
            delivery_phone: phone.to_string(),
            delivery_notes: notes.map(str::to_string),
            payment_method: PaymentMethod::Cash,
        }
    }

    #[test]
    fn accepts_well_formed_input() {
        let req = request("42 MG Road, Bengaluru", "+91 97336-74981", Some("ring twice"));
        assert!(req.validate().is_ok());
        assert_eq!(req.normalized_phone(), "+919733674981");
    }

    #[test]
    fn rejects_short_address() {
        let req = request("too short", "+919733674981", None);
        assert!(req.validate().is_err());
    }

    #[test]
    fn address_length_measured_after_trim() {
        let padded = format!("   {}   ", "x".repeat(9));
        let req = request(&padded, "+919733674981", None);
        assert!(req.validate().is_err());
    }

    #[test]
    fn rejects_malformed_phone() {
        assert!(request("42 MG Road, Bengaluru", "05551234", None)
            .validate()
            .is_err());
        assert!(request("42 MG Road, Bengaluru", "not-a-phone", None)
            .validate()
            .is_err());
    }

    #[test]
    fn rejects_oversized_notes() {
        let req = request(
            "42 MG Road, Bengaluru",
            "+919733674981",
            Some(&"n".repeat(1001)),
        );
        assert!(req.validate().is_err());
    }

    #[test]
    fn blank_notes_normalize_to_none() {
        let req = request("42 MG Road, Bengaluru", "+919733674981", Some("   "));
        assert_eq!(req.normalized_notes(), None);
    }
}
