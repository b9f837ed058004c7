use crate::{
    abstract_trait::{NewOrderNotification, NotifierTrait},
    model::order::OrderStatus,
};
use async_trait::async_trait;
use shared::{config::NotifyConfig, errors::ServiceError};
use std::time::Duration;
use tracing::{error, info};
use uuid::Uuid;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// SMS readers get the short order reference the storefront shows, not the
/// full UUID.
fn short_ref(order_id: Uuid) -> String {
    order_id.to_string().chars().take(8).collect()
}

fn status_message(order_id: Uuid, status: OrderStatus) -> String {
    let r = short_ref(order_id);
    match status {
        OrderStatus::Pending => format!("Your order #{r} has been received."),
        OrderStatus::Confirmed => format!("Your order #{r} has been confirmed!"),
        OrderStatus::Preparing => format!("Your order #{r} is being prepared."),
        OrderStatus::OutForDelivery => format!("Your order #{r} is out for delivery!"),
        OrderStatus::Delivered => {
            format!("Your order #{r} has been delivered. Enjoy your meal!")
        }
        OrderStatus::Cancelled => format!("Your order #{r} has been cancelled."),
    }
}

/// Twilio Messages API client. Every notification is a single form POST;
/// failures surface as `ServiceError::Notify` and callers decide how loudly
/// to care.
pub struct TwilioNotifier {
    client: reqwest::Client,
    account_sid: String,
    auth_token: String,
    from_phone: String,
    admin_phone: String,
    api_url: String,
}

impl TwilioNotifier {
    pub fn new(config: &NotifyConfig) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ServiceError::Config(format!("http client: {e}")))?;

        Ok(Self {
            client,
            account_sid: config.account_sid.clone(),
            auth_token: config.auth_token.clone(),
            from_phone: config.from_phone.clone(),
            admin_phone: config.admin_phone.clone(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    async fn send_sms(&self, to: &str, body: &str) -> Result<(), ServiceError> {
        let url = format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.api_url, self.account_sid
        );
        let params = [("To", to), ("From", self.from_phone.as_str()), ("Body", body)];

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                error!("❌ SMS request failed: {e}");
                ServiceError::Notify(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            error!("❌ SMS send returned {status}: {detail}");
            return Err(ServiceError::Notify(format!("SMS send returned {status}")));
        }

        info!("📨 SMS delivered to {to}");
        Ok(())
    }
}

#[async_trait]
impl NotifierTrait for TwilioNotifier {
    async fn notify_new_order(&self, n: &NewOrderNotification) -> Result<(), ServiceError> {
        let body = format!(
            "New order #{}! Amount: ₹{}. Deliver to: {}. Customer: {}",
            short_ref(n.order_id),
            n.amount,
            n.address,
            n.phone
        );
        self.send_sms(&self.admin_phone, &body).await
    }

    async fn notify_order_status(
        &self,
        phone: &str,
        order_id: Uuid,
        status: OrderStatus,
    ) -> Result<(), ServiceError> {
        self.send_sms(phone, &status_message(order_id, status)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_messages_carry_the_short_reference() {
        let id = Uuid::new_v4();
        let r = short_ref(id);
        assert_eq!(r.len(), 8);

        let msg = status_message(id, OrderStatus::OutForDelivery);
        assert!(msg.contains(&format!("#{r}")));
        assert!(msg.contains("out for delivery"));

        let msg = status_message(id, OrderStatus::Delivered);
        assert!(msg.contains("delivered"));
    }
}
