//! Payment Orchestration Flow
//!
//! Sequences one intent-creation call against the payment service with one
//! card confirmation through the SDK, and turns every outcome into a
//! [`PaymentResult`].
//!
//! ```text
//! process_payment
//!   ├─ SDK / elements ready? ── no ──▶ "Stripe has not loaded yet"
//!   ├─ loading = true, error = None
//!   ├─ PaymentApi::create_payment_intent ── rejected ──▶ message | default
//!   ├─ CardElementSource::card_element ─── missing ───▶ "Card element not found"
//!   ├─ CardPaymentSdk::confirm_card_payment
//!   │     ├─ error ──────────────▶ message | "Payment failed"
//!   │     ├─ status succeeded ───▶ success(intent id from creation)
//!   │     └─ anything else ──────▶ "Payment did not succeed"
//!   └─ loading = false (always, once)
//! ```
//!
//! Observable `loading` / `error` state is written through [`PaymentState`],
//! so a UI can bind it to its own reactive cells. Everything is
//! single-threaded; the UI is expected to disable its trigger while
//! `loading` is true.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::api::PaymentApi;
use crate::config::PaymentConfig;
use crate::error::{PaymentError, Result};
use crate::model::{PaymentIntentRequest, PaymentResult, PaymentStatus};
use crate::sdk::{CardElementSource, CardPaymentSdk};

/// Fallback when the SDK reports an error without a message
pub const PAYMENT_FAILED: &str = "Payment failed";

/// Reported when confirmation ends in any status other than `succeeded`
pub const PAYMENT_NOT_SUCCEEDED: &str = "Payment did not succeed";

/// Sink for the flow's observable state
pub trait PaymentState {
    fn set_loading(&self, loading: bool);
    fn set_error(&self, error: Option<String>);
}

impl<T: PaymentState + ?Sized> PaymentState for Rc<T> {
    fn set_loading(&self, loading: bool) {
        (**self).set_loading(loading);
    }

    fn set_error(&self, error: Option<String>) {
        (**self).set_error(error);
    }
}

/// In-memory [`PaymentState`]
#[derive(Debug, Default)]
pub struct LocalPaymentState {
    loading: Cell<bool>,
    error: RefCell<Option<String>>,
}

impl LocalPaymentState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loading(&self) -> bool {
        self.loading.get()
    }

    pub fn error(&self) -> Option<String> {
        self.error.borrow().clone()
    }
}

impl PaymentState for LocalPaymentState {
    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }

    fn set_error(&self, error: Option<String>) {
        *self.error.borrow_mut() = error;
    }
}

/// Holds `loading` high for the lifetime of one attempt.
///
/// Dropping it clears `loading`, on every return path and when the
/// in-flight future is dropped.
struct LoadingGuard<'a, St: PaymentState> {
    state: &'a St,
}

impl<'a, St: PaymentState> LoadingGuard<'a, St> {
    fn begin(state: &'a St) -> Self {
        state.set_loading(true);
        state.set_error(None);
        Self { state }
    }
}

impl<St: PaymentState> Drop for LoadingGuard<'_, St> {
    fn drop(&mut self) {
        self.state.set_loading(false);
    }
}

/// How a confirmation that did not raise ended
enum Confirmation {
    Succeeded(String),
    Declined(String),
    Incomplete(PaymentStatus),
}

/// Payment flow bound to one payment service and one state sink
pub struct PaymentFlow<A, St = LocalPaymentState> {
    api: A,
    state: St,
    description: String,
    default_currency: String,
}

impl<A: PaymentApi, St: PaymentState> PaymentFlow<A, St> {
    pub fn new(api: A, state: St, config: &PaymentConfig) -> Self {
        Self {
            api,
            state,
            description: config.description.clone(),
            default_currency: config.default_currency.clone(),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn state(&self) -> &St {
        &self.state
    }

    /// Charge `amount` minor units of `currency` (default from config,
    /// normally `usd`) to the card mounted in `elements`.
    ///
    /// Never fails: every error is folded into the returned result and
    /// mirrored into the `error` state.
    pub async fn process_payment<S, E>(
        &self,
        stripe: Option<&S>,
        elements: Option<&E>,
        amount: u64,
        currency: Option<&str>,
    ) -> PaymentResult
    where
        S: CardPaymentSdk,
        E: CardElementSource<Card = S::Card>,
    {
        let (Some(stripe), Some(elements)) = (stripe, elements) else {
            let message = PaymentError::NotLoaded.flow_message();
            tracing::warn!("Payment attempted before Stripe loaded");
            self.state.set_error(Some(message.clone()));
            return PaymentResult::failed(message);
        };

        let _loading = LoadingGuard::begin(&self.state);
        let currency = currency.unwrap_or(self.default_currency.as_str());

        match self.confirm(stripe, elements, amount, currency).await {
            Ok(Confirmation::Succeeded(payment_intent_id)) => {
                tracing::info!(
                    payment_intent_id = %payment_intent_id,
                    amount,
                    currency = %currency,
                    "Payment succeeded"
                );
                PaymentResult::succeeded(payment_intent_id)
            }
            Ok(Confirmation::Declined(message)) => {
                tracing::warn!(error = %message, "Card confirmation failed");
                self.state.set_error(Some(message.clone()));
                PaymentResult::failed(message)
            }
            Ok(Confirmation::Incomplete(status)) => {
                tracing::warn!(status = ?status, "Payment did not reach succeeded");
                PaymentResult::failed(PAYMENT_NOT_SUCCEEDED)
            }
            Err(err) => {
                let message = err.flow_message();
                tracing::error!(error = %message, "Payment flow failed");
                self.state.set_error(Some(message.clone()));
                PaymentResult::failed(message)
            }
        }
    }

    /// Ask the payment service whether an intent succeeded.
    pub async fn verify_payment(&self, payment_intent_id: &str) -> Result<bool> {
        self.api.verify_payment(payment_intent_id).await
    }

    async fn confirm<S, E>(
        &self,
        stripe: &S,
        elements: &E,
        amount: u64,
        currency: &str,
    ) -> Result<Confirmation>
    where
        S: CardPaymentSdk,
        E: CardElementSource<Card = S::Card>,
    {
        let request =
            PaymentIntentRequest::new(amount, currency).with_description(self.description.as_str());
        let intent = self.api.create_payment_intent(&request).await?;

        let card = elements
            .card_element()
            .ok_or(PaymentError::CardElementMissing)?;

        let outcome = stripe
            .confirm_card_payment(&intent.client_secret, &card)
            .await?;

        if let Some(error) = outcome.error {
            let message = error
                .message
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| PAYMENT_FAILED.to_string());
            return Ok(Confirmation::Declined(message));
        }

        match outcome.payment_intent {
            Some(confirmed) if confirmed.status.is_succeeded() => {
                if intent.payment_intent_id.is_empty() {
                    return Err(PaymentError::Decode(
                        "Payment intent id missing from response".into(),
                    ));
                }
                Ok(Confirmation::Succeeded(intent.payment_intent_id))
            }
            Some(confirmed) => Ok(Confirmation::Incomplete(confirmed.status)),
            None => Ok(Confirmation::Incomplete(PaymentStatus::Other)),
        }
    }
}
