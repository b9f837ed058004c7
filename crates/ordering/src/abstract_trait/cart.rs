use crate::{
    domain::{requests::cart::AddCartItemRequest, response::api::ApiResponse, response::cart::CartResponse},
    model::cart_item::{CartItem, CartLineDetail},
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;
use uuid::Uuid;

pub type DynCartRepository = Arc<dyn CartRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CartRepositoryTrait {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<CartLineDetail>, RepositoryError>;
    /// Insert, or increase the existing line's quantity on conflict.
    async fn upsert_line(
        &self,
        user_id: Uuid,
        menu_item_id: Uuid,
        quantity: i32,
    ) -> Result<CartItem, RepositoryError>;
    async fn set_quantity(
        &self,
        user_id: Uuid,
        menu_item_id: Uuid,
        quantity: i32,
    ) -> Result<CartItem, RepositoryError>;
    async fn delete_line(&self, user_id: Uuid, menu_item_id: Uuid)
        -> Result<bool, RepositoryError>;
    async fn clear(&self, user_id: Uuid) -> Result<u64, RepositoryError>;
}

pub type DynCartService = Arc<dyn CartServiceTrait + Send + Sync>;

#[async_trait]
pub trait CartServiceTrait {
    async fn get_cart(&self, user_id: Uuid) -> Result<ApiResponse<CartResponse>, ServiceError>;
    async fn add_item(
        &self,
        user_id: Uuid,
        req: &AddCartItemRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError>;
    async fn update_quantity(
        &self,
        user_id: Uuid,
        menu_item_id: Uuid,
        quantity: i32,
    ) -> Result<ApiResponse<CartResponse>, ServiceError>;
    async fn remove_item(
        &self,
        user_id: Uuid,
        menu_item_id: Uuid,
    ) -> Result<ApiResponse<CartResponse>, ServiceError>;
    async fn clear_cart(&self, user_id: Uuid) -> Result<ApiResponse<CartResponse>, ServiceError>;
}
