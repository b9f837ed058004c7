use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identifiers the checkout widget needs to open. `amount` is in minor
/// currency units (paise), exactly as the gateway echoed it back.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct PaymentOrderResponse {
    #[serde(rename = "orderId")]
    pub order_id: String,
    pub amount: i64,
    pub currency: String,
    #[serde(rename = "keyId")]
    pub key_id: String,
}
