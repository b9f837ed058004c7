use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CartItem {
    pub id: Uuid,
    pub user_id: Uuid,
    pub menu_item_id: Uuid,
    pub quantity: i32,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

/// Cart line joined with the live menu row. `unit_price` and `is_available`
/// are the values at fetch time; placement re-reads them inside its own
/// transaction.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CartLineDetail {
    pub id: Uuid,
    pub menu_item_id: Uuid,
    pub quantity: i32,
    pub item_name: String,
    pub unit_price: Decimal,
    pub is_available: bool,
}

impl CartLineDetail {
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}
