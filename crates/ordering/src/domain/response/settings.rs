use crate::model::settings::RestaurantSettings;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct SettingsResponse {
    pub open_time: String,
    pub close_time: String,
    pub min_order_price: Decimal,
    pub delivery_charge: Decimal,
    pub is_open: bool,
}

impl From<RestaurantSettings> for SettingsResponse {
    fn from(value: RestaurantSettings) -> Self {
        let is_open = value.is_open_now();
        SettingsResponse {
            open_time: value.open_time,
            close_time: value.close_time,
            min_order_price: value.min_order_price,
            delivery_charge: value.delivery_charge,
            is_open,
        }
    }
}
