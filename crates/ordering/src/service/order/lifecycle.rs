use crate::{
    abstract_trait::{
        DynNotifier, DynOrderCommandRepository, DynOrderItemQueryRepository,
        DynOrderQueryRepository, OrderLifecycleServiceTrait,
    },
    domain::response::{
        api::ApiResponse,
        order::{OrderDetailResponse, OrderResponse},
    },
    model::order::{Order, OrderStatus},
};
use async_trait::async_trait;
use shared::errors::{RepositoryError, ServiceError};
use tracing::warn;
use uuid::Uuid;

pub struct OrderLifecycleService {
    order_query_repository: DynOrderQueryRepository,
    order_item_repository: DynOrderItemQueryRepository,
    order_command_repository: DynOrderCommandRepository,
    notifier: DynNotifier,
}

impl OrderLifecycleService {
    pub fn new(
        order_query_repository: DynOrderQueryRepository,
        order_item_repository: DynOrderItemQueryRepository,
        order_command_repository: DynOrderCommandRepository,
        notifier: DynNotifier,
    ) -> Self {
        Self {
            order_query_repository,
            order_item_repository,
            order_command_repository,
            notifier,
        }
    }

    async fn with_items(&self, order: Order) -> Result<OrderDetailResponse, ServiceError> {
        let items = self.order_item_repository.find_by_order(order.id).await?;
        Ok(OrderDetailResponse {
            order: order.into(),
            items: items.into_iter().map(Into::into).collect(),
        })
    }

    async fn detail_list(
        &self,
        orders: Vec<Order>,
    ) -> Result<Vec<OrderDetailResponse>, ServiceError> {
        let mut details = Vec::with_capacity(orders.len());
        for order in orders {
            details.push(self.with_items(order).await?);
        }
        Ok(details)
    }
}

#[async_trait]
impl OrderLifecycleServiceTrait for OrderLifecycleService {
    async fn my_orders(
        &self,
        user_id: Uuid,
    ) -> Result<ApiResponse<Vec<OrderDetailResponse>>, ServiceError> {
        let orders = self.order_query_repository.find_by_user(user_id).await?;
        let details = self.detail_list(orders).await?;
        Ok(ApiResponse::success("Orders retrieved successfully", details))
    }

    async fn find_order(
        &self,
        user_id: Uuid,
        is_admin: bool,
        order_id: Uuid,
    ) -> Result<ApiResponse<OrderDetailResponse>, ServiceError> {
        // Admins see any order; customers only their own. A foreign order id
        // reads as not-found, never as forbidden.
        let order = if is_admin {
            self.order_query_repository.find_by_id(order_id).await?
        } else {
            self.order_query_repository
                .find_by_id_and_user(order_id, user_id)
                .await?
        }
        .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        let detail = self.with_items(order).await?;
        Ok(ApiResponse::success("Order retrieved successfully", detail))
    }

    async fn cancel_order(
        &self,
        user_id: Uuid,
        order_id: Uuid,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        match self
            .order_command_repository
            .cancel_if_eligible(order_id, user_id)
            .await?
        {
            Some(order) => Ok(ApiResponse::success("Order cancelled", order.into())),
            None => {
                // Distinguish a missing order from one past its window.
                let existing = self
                    .order_query_repository
                    .find_by_id_and_user(order_id, user_id)
                    .await?;
                match existing {
                    Some(order) => Err(ServiceError::BusinessRule(format!(
                        "Order can no longer be cancelled (status: {})",
                        order.status.as_str()
                    ))),
                    None => Err(ServiceError::Repo(RepositoryError::NotFound)),
                }
            }
        }
    }

    async fn update_status(
        &self,
        order_id: Uuid,
        next: OrderStatus,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let order = self
            .order_query_repository
            .find_by_id(order_id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        if !order.status.can_transition_to(next) {
            return Err(ServiceError::BusinessRule(format!(
                "Cannot change order status from {} to {}",
                order.status.as_str(),
                next.as_str()
            )));
        }

        let updated = self
            .order_command_repository
            .update_status(order_id, next)
            .await?;

        // Best-effort customer SMS; the transition stands either way.
        if let Err(e) = self
            .notifier
            .notify_order_status(&updated.delivery_phone, updated.id, next)
            .await
        {
            warn!("📵 Status notification for order {order_id} failed: {e}");
        }

        Ok(ApiResponse::success("Order status updated", updated.into()))
    }

    async fn list_orders(
        &self,
        status: Option<OrderStatus>,
    ) -> Result<ApiResponse<Vec<OrderDetailResponse>>, ServiceError> {
        let orders = self.order_query_repository.find_all(status).await?;
        let details = self.detail_list(orders).await?;
        Ok(ApiResponse::success("Orders retrieved successfully", details))
    }
}
