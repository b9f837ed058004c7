use crate::domain::{
    requests::payment::ConfirmPaymentRequest,
    response::{api::ApiResponse, order::OrderResponse, payment::PaymentOrderResponse},
};
use async_trait::async_trait;
use shared::errors::ServiceError;
use std::sync::Arc;
use uuid::Uuid;

/// The gateway's representation of a charge request, created 1:1 against an
/// internal order.
#[derive(Debug, Clone)]
pub struct GatewayOrder {
    pub id: String,
    pub amount: i64,
    pub currency: String,
}

pub type DynPaymentGateway = Arc<dyn PaymentGatewayTrait + Send + Sync>;

#[async_trait]
pub trait PaymentGatewayTrait {
    async fn create_order(
        &self,
        amount_minor: i64,
        currency: &str,
        receipt: &str,
    ) -> Result<GatewayOrder, ServiceError>;
}

pub type DynPaymentService = Arc<dyn PaymentServiceTrait + Send + Sync>;

#[async_trait]
pub trait PaymentServiceTrait {
    async fn create_gateway_order(
        &self,
        user_id: Uuid,
        order_id: Uuid,
    ) -> Result<ApiResponse<PaymentOrderResponse>, ServiceError>;
    async fn confirm_payment(
        &self,
        user_id: Uuid,
        req: &ConfirmPaymentRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn abandon_payment(
        &self,
        user_id: Uuid,
        order_id: Uuid,
    ) -> Result<ApiResponse<()>, ServiceError>;
}
