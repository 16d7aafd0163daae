//! Payment Service Client
//!
//! HTTP access to the (external) payment service: intent creation,
//! verification and the publishable-key lookup used to boot the card SDK.

use async_trait::async_trait;
use reqwest::{Client, Url};

use crate::config::PaymentConfig;
use crate::error::{PaymentError, Result};
use crate::model::{
    ApiErrorBody, PaymentIntentRequest, PaymentIntentResponse, PublishableKeyResponse,
    VerifyPaymentResponse,
};

pub const CREATE_PAYMENT_INTENT_PATH: &str = "/api/payments/create-payment-intent";
pub const VERIFY_PAYMENT_PATH: &str = "/api/payments/verify";
pub const PAYMENT_CONFIG_PATH: &str = "/api/payments/config";

/// Fallback when a rejected intent carries no message
pub const INTENT_REJECTED_DEFAULT: &str = "Failed to create payment intent";

/// Remote payment service (Strategy pattern)
///
/// `?Send` because the flow runs on a single-threaded UI event loop.
#[async_trait(?Send)]
pub trait PaymentApi {
    /// Create a payment intent and obtain its client secret
    async fn create_payment_intent(
        &self,
        request: &PaymentIntentRequest,
    ) -> Result<PaymentIntentResponse>;

    /// Ask the service whether an intent succeeded
    async fn verify_payment(&self, payment_intent_id: &str) -> Result<bool>;

    /// Fetch the publishable key for the card SDK
    ///
    /// A non-success status is not an error here: the body is read as usual
    /// and a missing key comes back as `None`.
    async fn fetch_publishable_key(&self) -> Result<Option<String>>;
}

/// `PaymentApi` over HTTP
#[derive(Clone, Debug)]
pub struct HttpPaymentApi {
    client: Client,
    base_url: Url,
}

impl HttpPaymentApi {
    pub fn new(config: &PaymentConfig) -> Self {
        Self::with_client(Client::new(), config)
    }

    /// Use a preconfigured `reqwest` client
    pub fn with_client(client: Client, config: &PaymentConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
        }
    }

    fn endpoint(&self, path: &str, id: Option<&str>) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|()| {
                PaymentError::Config(format!("API URL '{}' cannot be a base", self.base_url))
            })?;
            segments
                .pop_if_empty()
                .extend(path.split('/').filter(|s| !s.is_empty()));
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }
}

#[async_trait(?Send)]
impl PaymentApi for HttpPaymentApi {
    async fn create_payment_intent(
        &self,
        request: &PaymentIntentRequest,
    ) -> Result<PaymentIntentResponse> {
        let url = self.endpoint(CREATE_PAYMENT_INTENT_PATH, None)?;

        let response = self.client.post(url).json(request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let message = rejection_message(&body);
            tracing::warn!(status = %status, message = %message, "Payment intent rejected");
            return Err(PaymentError::IntentRejected(message));
        }

        let intent: PaymentIntentResponse = response.json().await?;
        tracing::debug!(payment_intent_id = %intent.payment_intent_id, "Created payment intent");
        Ok(intent)
    }

    async fn verify_payment(&self, payment_intent_id: &str) -> Result<bool> {
        let url = self.endpoint(VERIFY_PAYMENT_PATH, Some(payment_intent_id))?;

        let body: VerifyPaymentResponse = self.client.get(url).send().await?.json().await?;

        tracing::debug!(
            payment_intent_id = %payment_intent_id,
            success = body.success,
            "Verified payment"
        );
        Ok(body.success)
    }

    async fn fetch_publishable_key(&self) -> Result<Option<String>> {
        let url = self.endpoint(PAYMENT_CONFIG_PATH, None)?;

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "Payment config request failed");
        }

        let body: PublishableKeyResponse = response.json().await?;
        Ok(body.publishable_key)
    }
}

/// Message for a rejected intent: the body's `message` if present and
/// non-empty, otherwise the fixed default.
fn rejection_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| INTENT_REJECTED_DEFAULT.to_string())
}
