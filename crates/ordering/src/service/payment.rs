use crate::{
    abstract_trait::{
        DynOrderCommandRepository, DynOrderQueryRepository, DynPaymentGateway, PaymentServiceTrait,
    },
    domain::{
        requests::payment::ConfirmPaymentRequest,
        response::{api::ApiResponse, order::OrderResponse, payment::PaymentOrderResponse},
    },
    model::order::{Order, PaymentMethod, PaymentStatus},
    service::validation_messages,
};
use async_trait::async_trait;
use rust_decimal::{prelude::ToPrimitive, Decimal};
use shared::errors::{RepositoryError, ServiceError};
use tracing::{error, info, warn};
use uuid::Uuid;
use validator::Validate;

const CURRENCY: &str = "INR";
const RECEIPT_MAX_LEN: usize = 40;

/// Stored totals are rupees; the gateway wants paise.
fn to_paise(amount: Decimal) -> Result<i64, ServiceError> {
    (amount * Decimal::from(100))
        .round()
        .to_i64()
        .ok_or_else(|| ServiceError::Internal(format!("Order total {amount} out of range")))
}

pub struct PaymentService {
    order_query_repository: DynOrderQueryRepository,
    order_command_repository: DynOrderCommandRepository,
    gateway: DynPaymentGateway,
    key_id: String,
}

impl PaymentService {
    pub fn new(
        order_query_repository: DynOrderQueryRepository,
        order_command_repository: DynOrderCommandRepository,
        gateway: DynPaymentGateway,
        key_id: String,
    ) -> Self {
        Self {
            order_query_repository,
            order_command_repository,
            gateway,
            key_id,
        }
    }

    async fn payable_order(&self, user_id: Uuid, order_id: Uuid) -> Result<Order, ServiceError> {
        let order = self
            .order_query_repository
            .find_by_id_and_user(order_id, user_id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        if order.payment_method != PaymentMethod::Online {
            return Err(ServiceError::BusinessRule(
                "Order is not payable online".to_string(),
            ));
        }
        if !order.awaiting_payment() {
            return Err(ServiceError::BusinessRule(
                "Order is not awaiting payment".to_string(),
            ));
        }
        Ok(order)
    }
}

#[async_trait]
impl PaymentServiceTrait for PaymentService {
    async fn create_gateway_order(
        &self,
        user_id: Uuid,
        order_id: Uuid,
    ) -> Result<ApiResponse<PaymentOrderResponse>, ServiceError> {
        let order = self.payable_order(user_id, order_id).await?;

        // The charge amount comes from the stored order row, never from the
        // client.
        let amount_minor = to_paise(order.total_amount)?;
        let receipt: String = order.id.to_string().chars().take(RECEIPT_MAX_LEN).collect();

        let gateway_order = match self
            .gateway
            .create_order(amount_minor, CURRENCY, &receipt)
            .await
        {
            Ok(created) => created,
            Err(err) => {
                // Gateway refused: roll the pending order back so the user
                // can retry checkout from the cart.
                match self
                    .order_command_repository
                    .delete_awaiting_payment(order_id, user_id)
                    .await
                {
                    Ok(true) => info!("🗑️ Rolled back order {order_id} after gateway failure"),
                    Ok(false) => warn!("⚠️ Order {order_id} no longer eligible for rollback"),
                    Err(e) => error!("❌ Rollback of order {order_id} failed: {e}"),
                }
                return Err(err);
            }
        };

        info!(
            "💳 Gateway order {} created for order {order_id} ({amount_minor} paise)",
            gateway_order.id
        );
        Ok(ApiResponse::success(
            "Payment order created",
            PaymentOrderResponse {
                order_id: gateway_order.id,
                amount: gateway_order.amount,
                currency: gateway_order.currency,
                key_id: self.key_id.clone(),
            },
        ))
    }

    async fn confirm_payment(
        &self,
        user_id: Uuid,
        req: &ConfirmPaymentRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        if let Err(errors) = req.validate() {
            return Err(ServiceError::Validation(validation_messages(&errors)));
        }

        let order = self
            .order_query_repository
            .find_by_id_and_user(req.order_id, user_id)
            .await?
            .ok_or(ServiceError::Repo(RepositoryError::NotFound))?;

        // A retried confirmation of an already-paid order is a no-op.
        if order.payment_status == PaymentStatus::Paid {
            return Ok(ApiResponse::success("Payment already recorded", order.into()));
        }

        let updated = match self
            .order_command_repository
            .mark_paid(req.order_id, user_id, &req.payment_id)
            .await
        {
            Ok(updated) => updated,
            Err(e) => {
                // Money has moved but the row has not. Leave a loud trail for
                // manual reconciliation instead of silently dropping it.
                error!(
                    "💥 Payment {} captured for order {} but the order could not be \
                     marked paid; manual reconciliation required: {e}",
                    req.payment_id, req.order_id
                );
                return Err(ServiceError::Internal(
                    "Payment received but order update failed. Please contact support."
                        .to_string(),
                ));
            }
        };

        Ok(ApiResponse::success("Payment confirmed", updated.into()))
    }

    async fn abandon_payment(
        &self,
        user_id: Uuid,
        order_id: Uuid,
    ) -> Result<ApiResponse<()>, ServiceError> {
        let deleted = self
            .order_command_repository
            .delete_awaiting_payment(order_id, user_id)
            .await?;
        if !deleted {
            return Err(ServiceError::BusinessRule(
                "Order is not awaiting payment".to_string(),
            ));
        }
        info!("🗑️ User {user_id} abandoned payment; order {order_id} removed");
        Ok(ApiResponse::success("Payment cancelled and order removed", ()))
    }
}
