use crate::model::menu_item::MenuItem;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct MenuItemResponse {
    pub id: Uuid,
    pub name: String,
    pub price: Decimal,
    pub original_price: Option<Decimal>,
    pub is_available: bool,
    pub preparation_time: Option<i32>,
}

impl From<MenuItem> for MenuItemResponse {
    fn from(value: MenuItem) -> Self {
        MenuItemResponse {
            id: value.id,
            name: value.name,
            price: value.price,
            original_price: value.original_price,
            is_available: value.is_available,
            preparation_time: value.preparation_time,
        }
    }
}
