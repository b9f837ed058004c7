use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, Clone, ToSchema)]
pub struct CreatePaymentOrderRequest {
    #[serde(rename = "orderId")]
    pub order_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, ToSchema)]
pub struct ConfirmPaymentRequest {
    #[serde(rename = "orderId")]
    pub order_id: Uuid,

    #[validate(length(min = 1, message = "Payment id must not be empty"))]
    #[serde(rename = "paymentId")]
    pub payment_id: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, ToSchema)]
pub struct AbandonPaymentRequest {
    #[serde(rename = "orderId")]
    pub order_id: Uuid,
}
