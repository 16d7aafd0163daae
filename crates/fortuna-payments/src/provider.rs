//! Card SDK Provider
//!
//! Lazily boots the card SDK once per provider scope: fetch the publishable
//! key from the payment service, hand it to an [`SdkLoader`], and expose the
//! resulting client by handle to whatever sits underneath the provider.

use std::rc::Rc;

use crate::api::PaymentApi;
use crate::sdk::SdkLoader;

/// Lifecycle of the SDK client inside one provider
#[derive(Debug)]
pub enum SdkState<S> {
    Uninitialized,
    Loading,
    Ready(Rc<S>),
    Failed(String),
}

impl<S> Clone for SdkState<S> {
    fn clone(&self) -> Self {
        match self {
            SdkState::Uninitialized => SdkState::Uninitialized,
            SdkState::Loading => SdkState::Loading,
            SdkState::Ready(sdk) => SdkState::Ready(Rc::clone(sdk)),
            SdkState::Failed(reason) => SdkState::Failed(reason.clone()),
        }
    }
}

impl<S> SdkState<S> {
    pub fn is_ready(&self) -> bool {
        matches!(self, SdkState::Ready(_))
    }

    /// Still waiting on initialization (spinner territory)
    pub fn is_pending(&self) -> bool {
        matches!(self, SdkState::Uninitialized | SdkState::Loading)
    }

    pub fn sdk(&self) -> Option<Rc<S>> {
        match self {
            SdkState::Ready(sdk) => Some(Rc::clone(sdk)),
            _ => None,
        }
    }
}

/// Owns the SDK lifecycle for one provider scope
#[derive(Debug)]
pub struct StripeProvider<S> {
    state: SdkState<S>,
}

impl<S> Default for StripeProvider<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> StripeProvider<S> {
    pub fn new() -> Self {
        Self {
            state: SdkState::Uninitialized,
        }
    }

    pub fn state(&self) -> &SdkState<S> {
        &self.state
    }

    /// The ready SDK client, if initialization succeeded
    pub fn stripe(&self) -> Option<Rc<S>> {
        self.state.sdk()
    }

    /// Boot the SDK. Only the first call does any work; later calls return
    /// the state reached by the first.
    pub async fn initialize<A, L>(&mut self, api: &A, loader: &L) -> &SdkState<S>
    where
        A: PaymentApi,
        L: SdkLoader<Sdk = S>,
    {
        if !matches!(self.state, SdkState::Uninitialized) {
            return &self.state;
        }
        self.state = SdkState::Loading;

        self.state = match api.fetch_publishable_key().await {
            Ok(Some(key)) if !key.is_empty() => match loader.load(&key) {
                Ok(sdk) => {
                    tracing::info!("Stripe loaded");
                    SdkState::Ready(Rc::new(sdk))
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to load Stripe");
                    SdkState::Failed(e.to_string())
                }
            },
            Ok(_) => {
                tracing::error!("Failed to load Stripe: payment service returned no publishable key");
                SdkState::Failed("Publishable key missing".into())
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load Stripe");
                SdkState::Failed(e.to_string())
            }
        };

        &self.state
    }
}
