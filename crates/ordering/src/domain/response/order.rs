use crate::model::{
    order::{Order, OrderStatus, PaymentMethod, PaymentStatus},
    order_item::OrderItem,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub total_amount: Decimal,
    pub delivery_address: String,
    pub delivery_phone: String,
    pub delivery_notes: Option<String>,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
    #[serde(rename = "updated_at")]
    pub updated_at: Option<String>,
}

// model to response
impl From<Order> for OrderResponse {
    fn from(value: Order) -> Self {
        OrderResponse {
            id: value.id,
            user_id: value.user_id,
            total_amount: value.total_amount,
            delivery_address: value.delivery_address,
            delivery_phone: value.delivery_phone,
            delivery_notes: value.delivery_notes,
            payment_method: value.payment_method,
            status: value.status,
            payment_status: value.payment_status,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderItemResponse {
    pub id: Uuid,
    pub menu_item_id: Uuid,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub total_price: Decimal,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(value: OrderItem) -> Self {
        OrderItemResponse {
            id: value.id,
            menu_item_id: value.menu_item_id,
            quantity: value.quantity,
            unit_price: value.unit_price,
            total_price: value.total_price,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderDetailResponse {
    #[serde(flatten)]
    pub order: OrderResponse,
    pub items: Vec<OrderItemResponse>,
}

/// Checkout response: the created order plus the server-side price
/// breakdown for client display.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct PlaceOrderResponse {
    pub order: OrderResponse,
    pub total_amount: Decimal,
    pub subtotal: Decimal,
    pub delivery_charge: Decimal,
}
