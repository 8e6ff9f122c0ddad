use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info, instrument};

use crate::config::StripeConfig;

/// The subset of a Stripe PaymentIntent the backend uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub amount: i64,
    pub currency: String,
    pub client_secret: String,
}

#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Payment provider configuration error: {0}")]
    Config(String),
    #[error("Payment provider request failed: {0}")]
    Request(String),
    #[error("Payment provider rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("Unexpected payment provider response: {0}")]
    InvalidResponse(String),
}

/// Creates payment intents with an external provider.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// `amount` is in minor units of `currency`; card is the only payment method.
    async fn create_intent(&self, amount: i64, currency: &str) -> Result<PaymentIntent, PaymentError>;
}

pub struct StripeGateway {
    client: reqwest::Client,
    config: StripeConfig,
}

impl StripeGateway {
    pub fn new(config: StripeConfig) -> Result<Self, PaymentError> {
        config.validate().map_err(|e| PaymentError::Config(e.to_string()))?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PaymentError::Config(format!("Failed to build HTTP client: {}", e)))?;
        info!(api_base = %config.api_base, "Stripe gateway initialized");
        Ok(StripeGateway { client, config })
    }

    fn intents_url(&self) -> String {
        format!("{}/v1/payment_intents", self.config.api_base.trim_end_matches('/'))
    }
}

#[async_trait]
impl PaymentGateway for StripeGateway {
    #[instrument(skip(self))]
    async fn create_intent(&self, amount: i64, currency: &str) -> Result<PaymentIntent, PaymentError> {
        let amount_param = amount.to_string();
        let params = [
            ("amount", amount_param.as_str()),
            ("currency", currency),
            ("payment_method_types[]", "card"),
        ];

        let response = self
            .client
            .post(self.intents_url())
            .bearer_auth(&self.config.secret_key)
            .form(&params)
            .send()
            .await
            .map_err(|e| {
                error!("Stripe request failed: {}", e);
                PaymentError::Request(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body: Value = response.json().await.unwrap_or(Value::Null);
            let message = body["error"]["message"]
                .as_str()
                .unwrap_or("no error message")
                .to_string();
            error!(status = status.as_u16(), "Stripe rejected payment intent: {}", message);
            return Err(PaymentError::Rejected { status: status.as_u16(), message });
        }

        let intent = response.json::<PaymentIntent>().await.map_err(|e| {
            error!("Failed to parse Stripe response: {}", e);
            PaymentError::InvalidResponse(e.to_string())
        })?;
        debug!(intent_id = %intent.id, "Payment intent created");
        Ok(intent)
    }
}
