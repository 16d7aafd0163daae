//! Payment Data Model
//!
//! Short-lived values exchanged with the payment service and returned to the
//! presentation layer. Nothing here is persisted.

use serde::{Deserialize, Serialize};

/// Request body for creating a payment intent
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentRequest {
    /// Amount in minor currency units (e.g. cents)
    pub amount: u64,

    /// Lower-case ISO 4217 code
    pub currency: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl PaymentIntentRequest {
    pub fn new(amount: u64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
            description: None,
            customer_email: None,
            order_id: None,
            user_id: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_customer_email(mut self, email: impl Into<String>) -> Self {
        self.customer_email = Some(email.into());
        self
    }

    pub fn with_order_id(mut self, order_id: impl Into<String>) -> Self {
        self.order_id = Some(order_id.into());
        self
    }

    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }
}

/// Payment intent as returned by the creation endpoint
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    /// Authorizes exactly one confirmation. Never log this.
    pub client_secret: String,

    pub payment_intent_id: String,

    #[serde(default)]
    pub amount: u64,

    #[serde(default)]
    pub currency: String,
}

/// Outcome of one payment attempt
///
/// Exactly one of `payment_intent_id` / `error` is set, and it is never
/// empty. The constructors uphold this; the fields are not public.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResult {
    success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    payment_intent_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl PaymentResult {
    /// Successful payment for the given intent.
    ///
    /// An empty id cannot represent a success, so it degrades to a failure.
    pub fn succeeded(payment_intent_id: impl Into<String>) -> Self {
        let id = payment_intent_id.into();
        if id.is_empty() {
            return Self::failed("");
        }
        Self {
            success: true,
            payment_intent_id: Some(id),
            error: None,
        }
    }

    /// Failed payment. Blank messages become "Unknown error".
    pub fn failed(error: impl Into<String>) -> Self {
        let error = error.into();
        let error = if error.trim().is_empty() {
            crate::error::UNKNOWN_ERROR.to_string()
        } else {
            error
        };
        Self {
            success: false,
            payment_intent_id: None,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn payment_intent_id(&self) -> Option<&str> {
        self.payment_intent_id.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Payment intent statuses reported by the card SDK
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Succeeded,
    Processing,
    RequiresAction,
    RequiresPaymentMethod,
    RequiresConfirmation,
    RequiresCapture,
    Canceled,
    #[serde(other)]
    Other,
}

impl PaymentStatus {
    pub fn is_succeeded(&self) -> bool {
        matches!(self, PaymentStatus::Succeeded)
    }
}

/// Body of `GET /api/payments/verify/{id}`
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct VerifyPaymentResponse {
    #[serde(default)]
    pub success: bool,
}

/// Body of `GET /api/payments/config`
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishableKeyResponse {
    #[serde(default)]
    pub publishable_key: Option<String>,
}

/// Error body returned by the payment service
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_omits_absent_fields() {
        let request = PaymentIntentRequest::new(1000, "usd").with_description("Test payment from Fortuna");
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            r#"{"amount":1000,"currency":"usd","description":"Test payment from Fortuna"}"#
        );
    }

    #[test]
    fn test_request_optional_ids_are_camel_case() {
        let request = PaymentIntentRequest::new(500, "EUR")
            .with_customer_email("a@b.c")
            .with_order_id("ord_1")
            .with_user_id("u_1");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["currency"], "EUR");
        assert_eq!(value["customerEmail"], "a@b.c");
        assert_eq!(value["orderId"], "ord_1");
        assert_eq!(value["userId"], "u_1");
    }

    #[test]
    fn test_response_tolerates_missing_echo() {
        let response: PaymentIntentResponse = serde_json::from_str(
            r#"{"clientSecret":"pi_secret_123","paymentIntentId":"pi_123"}"#,
        )
        .unwrap();
        assert_eq!(response.client_secret, "pi_secret_123");
        assert_eq!(response.payment_intent_id, "pi_123");
        assert_eq!(response.amount, 0);
    }

    #[test]
    fn test_result_invariants() {
        let ok = PaymentResult::succeeded("pi_123");
        assert!(ok.is_success());
        assert_eq!(ok.payment_intent_id(), Some("pi_123"));
        assert_eq!(ok.error(), None);

        let failed = PaymentResult::failed("Invalid amount");
        assert!(!failed.is_success());
        assert_eq!(failed.payment_intent_id(), None);
        assert_eq!(failed.error(), Some("Invalid amount"));

        assert_eq!(PaymentResult::failed("").error(), Some("Unknown error"));
        assert!(!PaymentResult::succeeded("").is_success());
    }

    #[test]
    fn test_result_wire_shape() {
        let json = serde_json::to_value(PaymentResult::succeeded("pi_123")).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "paymentIntentId": "pi_123"}));

        let json = serde_json::to_value(PaymentResult::failed("Payment failed")).unwrap();
        assert_eq!(json, serde_json::json!({"success": false, "error": "Payment failed"}));
    }

    #[test]
    fn test_status_parsing() {
        let status: PaymentStatus = serde_json::from_str(r#""succeeded""#).unwrap();
        assert!(status.is_succeeded());
        let status: PaymentStatus = serde_json::from_str(r#""requires_action""#).unwrap();
        assert_eq!(status, PaymentStatus::RequiresAction);
        let status: PaymentStatus = serde_json::from_str(r#""something_new""#).unwrap();
        assert_eq!(status, PaymentStatus::Other);
    }
}
