use crate::{
    domain::{
        requests::order::{CreateOrderLineRecord, CreateOrderRecord, PlaceOrderRequest},
        response::{
            api::ApiResponse,
            order::{OrderDetailResponse, OrderResponse, PlaceOrderResponse},
        },
    },
    model::{
        order::{Order, OrderStatus},
        order_item::OrderItem,
    },
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use std::sync::Arc;
use uuid::Uuid;

pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    /// Order insert, line-item inserts, and cart consumption as one atomic
    /// unit. The caller's cart must still hold exactly the lines that were
    /// priced; otherwise the whole placement rolls back.
    async fn place_order(
        &self,
        order: &CreateOrderRecord,
        lines: &[CreateOrderLineRecord],
    ) -> Result<(Order, Vec<OrderItem>), RepositoryError>;

    async fn update_status(
        &self,
        order_id: Uuid,
        next: OrderStatus,
    ) -> Result<Order, RepositoryError>;

    /// Conditional cancellation: flips to `cancelled` only while the stored
    /// status is still user-cancellable. `None` means the guard refused.
    async fn cancel_if_eligible(
        &self,
        order_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Order>, RepositoryError>;

    async fn mark_paid(
        &self,
        order_id: Uuid,
        user_id: Uuid,
        payment_id: &str,
    ) -> Result<Order, RepositoryError>;

    /// Compensating delete for the payment leg: removes the order only while
    /// it is still pending and unpaid. Returns whether a row was deleted.
    async fn delete_awaiting_payment(
        &self,
        order_id: Uuid,
        user_id: Uuid,
    ) -> Result<bool, RepositoryError>;
}

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_by_id(&self, order_id: Uuid) -> Result<Option<Order>, RepositoryError>;
    async fn find_by_id_and_user(
        &self,
        order_id: Uuid,
        user_id: Uuid,
    ) -> Result<Option<Order>, RepositoryError>;
    async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Order>, RepositoryError>;
    async fn find_all(&self, status: Option<OrderStatus>) -> Result<Vec<Order>, RepositoryError>;
}

pub type DynOrderItemQueryRepository = Arc<dyn OrderItemQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderItemQueryRepositoryTrait {
    async fn find_by_order(&self, order_id: Uuid) -> Result<Vec<OrderItem>, RepositoryError>;
}

pub type DynOrderPlacementService = Arc<dyn OrderPlacementServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderPlacementServiceTrait {
    async fn place_order(
        &self,
        user_id: Uuid,
        req: &PlaceOrderRequest,
    ) -> Result<ApiResponse<PlaceOrderResponse>, ServiceError>;
}

pub type DynOrderLifecycleService = Arc<dyn OrderLifecycleServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderLifecycleServiceTrait {
    async fn my_orders(
        &self,
        user_id: Uuid,
    ) -> Result<ApiResponse<Vec<OrderDetailResponse>>, ServiceError>;
    async fn find_order(
        &self,
        user_id: Uuid,
        is_admin: bool,
        order_id: Uuid,
    ) -> Result<ApiResponse<OrderDetailResponse>, ServiceError>;
    async fn cancel_order(
        &self,
        user_id: Uuid,
        order_id: Uuid,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn update_status(
        &self,
        order_id: Uuid,
        next: OrderStatus,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn list_orders(
        &self,
        status: Option<OrderStatus>,
    ) -> Result<ApiResponse<Vec<OrderDetailResponse>>, ServiceError>;
}
