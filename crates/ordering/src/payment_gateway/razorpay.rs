use crate::abstract_trait::{GatewayOrder, PaymentGatewayTrait};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use shared::{config::PaymentConfig, errors::ServiceError};
use std::time::Duration;
use tracing::{error, info};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Deserialize)]
struct GatewayOrderBody {
    id: String,
    amount: i64,
    currency: String,
}

/// Razorpay Orders API client. One HTTP call per checkout: POST /v1/orders
/// with basic auth on the key pair.
pub struct RazorpayGateway {
    client: reqwest::Client,
    key_id: String,
    key_secret: String,
    api_url: String,
}

impl RazorpayGateway {
    pub fn new(config: &PaymentConfig) -> Result<Self, ServiceError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ServiceError::Config(format!("http client: {e}")))?;

        Ok(Self {
            client,
            key_id: config.key_id.clone(),
            key_secret: config.key_secret.clone(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl PaymentGatewayTrait for RazorpayGateway {
    async fn create_order(
        &self,
        amount_minor: i64,
        currency: &str,
        receipt: &str,
    ) -> Result<GatewayOrder, ServiceError> {
        let url = format!("{}/v1/orders", self.api_url);

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.key_id, Some(&self.key_secret))
            .json(&json!({
                "amount": amount_minor,
                "currency": currency,
                "receipt": receipt,
            }))
            .send()
            .await
            .map_err(|e| {
                error!("❌ Gateway order request failed: {e}");
                ServiceError::Gateway(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("❌ Gateway order creation returned {status}: {body}");
            return Err(ServiceError::Gateway(format!(
                "order creation returned {status}"
            )));
        }

        let body: GatewayOrderBody = response.json().await.map_err(|e| {
            error!("❌ Gateway order response unreadable: {e}");
            ServiceError::Gateway(e.to_string())
        })?;

        info!("💳 Gateway order {} created ({} {})", body.id, body.amount, body.currency);
        Ok(GatewayOrder {
            id: body.id,
            amount: body.amount,
            currency: body.currency,
        })
    }
}
