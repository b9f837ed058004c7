use crate::model::cart_item::CartLineDetail;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CartLineResponse {
    pub id: Uuid,
    pub menu_item_id: Uuid,
    pub name: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub line_total: Decimal,
    pub is_available: bool,
}

impl From<CartLineDetail> for CartLineResponse {
    fn from(value: CartLineDetail) -> Self {
        let line_total = value.line_total();
        CartLineResponse {
            id: value.id,
            menu_item_id: value.menu_item_id,
            name: value.item_name,
            quantity: value.quantity,
            unit_price: value.unit_price,
            line_total,
            is_available: value.is_available,
        }
    }
}

/// Display totals only; the authoritative re-pricing happens at placement.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CartResponse {
    pub items: Vec<CartLineResponse>,
    pub item_count: i64,
    pub total: Decimal,
}

impl From<Vec<CartLineDetail>> for CartResponse {
    fn from(lines: Vec<CartLineDetail>) -> Self {
        let item_count = lines.iter().map(|l| l.quantity as i64).sum();
        let total = lines.iter().map(CartLineDetail::line_total).sum();
        CartResponse {
            items: lines.into_iter().map(CartLineResponse::from).collect(),
            item_count,
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(quantity: i32, unit_price: i64) -> CartLineDetail {
        CartLineDetail {
            id: Uuid::new_v4(),
            menu_item_id: Uuid::new_v4(),
            quantity,
            item_name: "Paneer Tikka".to_string(),
            unit_price: Decimal::from(unit_price),
            is_available: true,
        }
    }

    #[test]
    fn derives_count_and_total() {
        let resp = CartResponse::from(vec![line(2, 150), line(1, 40)]);
        assert_eq!(resp.item_count, 3);
        assert_eq!(resp.total, Decimal::from(340));
    }

    #[test]
    fn empty_cart_is_zeroed() {
        let resp = CartResponse::from(Vec::new());
        assert_eq!(resp.item_count, 0);
        assert_eq!(resp.total, Decimal::ZERO);
    }
}
