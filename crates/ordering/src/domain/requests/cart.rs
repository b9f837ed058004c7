use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, Clone, ToSchema)]
pub struct AddCartItemRequest {
    pub menu_item_id: Uuid,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,
}

/// Quantity of zero or less is treated as removal, so no lower bound here.
#[derive(Debug, Serialize, Deserialize, Validate, Clone, ToSchema)]
pub struct UpdateCartQuantityRequest {
    pub quantity: i32,
}
