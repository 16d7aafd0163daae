//! Card SDK Boundary
//!
//! The card-network SDK (Stripe.js in the browser) is an external
//! collaborator. These traits are the seams the payment flow talks through;
//! the web crate implements them with wasm-bindgen bindings and tests
//! implement them with fakes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::PaymentStatus;

/// Card SDK client able to confirm a card charge
#[async_trait(?Send)]
pub trait CardPaymentSdk {
    /// Handle to a mounted card input
    type Card;

    /// `confirmCardPayment(clientSecret, {payment_method: {card}})`
    ///
    /// `Err` is reserved for the SDK throwing; declines and other
    /// confirmation failures are reported inside the result.
    async fn confirm_card_payment(
        &self,
        client_secret: &str,
        card: &Self::Card,
    ) -> Result<ConfirmCardPaymentResult>;
}

/// Input-collection context holding the card widget
pub trait CardElementSource {
    type Card;

    /// The mounted card input, if any
    fn card_element(&self) -> Option<Self::Card>;
}

/// Builds an SDK client from a publishable key
pub trait SdkLoader {
    type Sdk;

    fn load(&self, publishable_key: &str) -> Result<Self::Sdk>;
}

/// What `confirmCardPayment` resolves to
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmCardPaymentResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<SdkError>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_intent: Option<ConfirmedIntent>,
}

impl ConfirmCardPaymentResult {
    pub fn with_error(error: SdkError) -> Self {
        Self {
            error: Some(error),
            payment_intent: None,
        }
    }

    pub fn with_intent(id: impl Into<String>, status: PaymentStatus) -> Self {
        Self {
            error: None,
            payment_intent: Some(ConfirmedIntent {
                id: id.into(),
                status,
            }),
        }
    }
}

/// Error object reported by the SDK
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SdkError {
    #[serde(default)]
    pub message: Option<String>,

    /// e.g. `card_error`, `validation_error`
    #[serde(rename = "type", default)]
    pub error_type: Option<String>,

    #[serde(default)]
    pub code: Option<String>,
}

/// Intent as reported back by the SDK after confirmation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfirmedIntent {
    #[serde(default)]
    pub id: String,

    pub status: PaymentStatus,
}
