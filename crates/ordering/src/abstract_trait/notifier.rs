use crate::model::order::OrderStatus;
use async_trait::async_trait;
use rust_decimal::Decimal;
use shared::errors::ServiceError;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct NewOrderNotification {
    pub order_id: Uuid,
    pub amount: Decimal,
    pub phone: String,
    pub address: String,
}

pub type DynNotifier = Arc<dyn NotifierTrait + Send + Sync>;

/// Outbound SMS. Best-effort everywhere: no caller ties its own success to
/// a notification landing.
#[async_trait]
pub trait NotifierTrait {
    async fn notify_new_order(&self, n: &NewOrderNotification) -> Result<(), ServiceError>;
    async fn notify_order_status(
        &self,
        phone: &str,
        order_id: Uuid,
        status: OrderStatus,
    ) -> Result<(), ServiceError>;
}
