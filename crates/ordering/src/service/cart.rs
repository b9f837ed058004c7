use crate::{
    abstract_trait::{CartServiceTrait, DynCartRepository, DynMenuItemQueryRepository},
    domain::{requests::cart::AddCartItemRequest, response::api::ApiResponse, response::cart::CartResponse},
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use tracing::info;
use uuid::Uuid;

pub struct CartService {
    cart_repository: DynCartRepository,
    menu_item_repository: DynMenuItemQueryRepository,
}

impl CartService {
    pub fn new(
        cart_repository: DynCartRepository,
        menu_item_repository: DynMenuItemQueryRepository,
    ) -> Self {
        Self {
            cart_repository,
            menu_item_repository,
        }
    }

    async fn cart_response(&self, user_id: Uuid) -> Result<CartResponse, ServiceError> {
        let lines = self.cart_repository.find_by_user(user_id).await?;
        Ok(CartResponse::from(lines))
    }
}

#[async_trait]
impl CartServiceTrait for CartService {
    async fn get_cart(&self, user_id: Uuid) -> Result<ApiResponse<CartResponse>, ServiceError> {
        let cart = self.cart_response(user_id).await?;
        Ok(ApiResponse::success("Cart retrieved successfully", cart))
    }

    async fn add_item(
        &self,
        user_id: Uuid,
        req: &AddCartItemRequest,
    ) -> Result<ApiResponse<CartResponse>, ServiceError> {
        let item = self
            .menu_item_repository
            .find_by_id(req.menu_item_id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        if !item.is_available {
            return Err(ServiceError::BusinessRule(format!(
                "{} is currently unavailable",
                item.name
            )));
        }

        self.cart_repository
            .upsert_line(user_id, req.menu_item_id, req.quantity)
            .await?;

        info!("🛒 User {user_id} added {}x {}", req.quantity, item.name);
        let cart = self.cart_response(user_id).await?;
        Ok(ApiResponse::success("Item added to cart", cart))
    }

    async fn update_quantity(
        &self,
        user_id: Uuid,
        menu_item_id: Uuid,
        quantity: i32,
    ) -> Result<ApiResponse<CartResponse>, ServiceError> {
        // Zero or negative quantity means the line goes away.
        if quantity <= 0 {
            return self.remove_item(user_id, menu_item_id).await;
        }

        self.cart_repository
            .set_quantity(user_id, menu_item_id, quantity)
            .await?;

        let cart = self.cart_response(user_id).await?;
        Ok(ApiResponse::success("Cart updated", cart))
    }

    async fn remove_item(
        &self,
        user_id: Uuid,
        menu_item_id: Uuid,
    ) -> Result<ApiResponse<CartResponse>, ServiceError> {
        let removed = self
            .cart_repository
            .delete_line(user_id, menu_item_id)
            .await?;
        if !removed {
            return Err(ServiceError::Repo(RepositoryError::NotFound));
        }

        let cart = self.cart_response(user_id).await?;
        Ok(ApiResponse::success("Item removed from cart", cart))
    }

    async fn clear_cart(&self, user_id: Uuid) -> Result<ApiResponse<CartResponse>, ServiceError> {
        let cleared = self.cart_repository.clear(user_id).await?;
        info!("🗑️ Cleared {cleared} cart line(s) for user {user_id}");

        let cart = self.cart_response(user_id).await?;
        Ok(ApiResponse::success("Cart cleared", cart))
    }
}
