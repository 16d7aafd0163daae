//! # fortuna-payments
//!
//! Card payment orchestration for the Fortuna web app.
//!
//! ## Payment Flow (Stripe Elements, embedded)
//!
//! The card form lives in the page; the payment service only mints intents.
//!
//! ```text
//! ┌──────────────┐  create intent   ┌──────────────────┐
//! │ PaymentFlow  │─────────────────▶│ Payment Service  │
//! │              │◀─────────────────│ (external HTTP)  │
//! │              │  client secret   └──────────────────┘
//! │              │  confirmCardPayment ┌──────────────┐
//! │              │────────────────────▶│  Stripe.js   │
//! │              │◀────────────────────│ (CardPaymentSdk)
//! └──────────────┘  intent status      └──────────────┘
//! ```
//!
//! The service and the SDK sit behind traits ([`PaymentApi`],
//! [`CardPaymentSdk`], [`CardElementSource`]) so the flow runs the same in
//! the browser and under test.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use fortuna_payments::{HttpPaymentApi, LocalPaymentState, PaymentConfig, PaymentFlow};
//!
//! let config = PaymentConfig::from_env()?;
//! let flow = PaymentFlow::new(HttpPaymentApi::new(&config), LocalPaymentState::new(), &config);
//!
//! let result = flow
//!     .process_payment(stripe.as_deref(), Some(&elements), 1000, None)
//!     .await;
//!
//! if let Some(id) = result.payment_intent_id() {
//!     println!("paid: {id}");
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod flow;
pub mod model;
pub mod provider;
pub mod sdk;

pub use api::{HttpPaymentApi, PaymentApi};
pub use config::PaymentConfig;
pub use error::{PaymentError, Result};
pub use flow::{LocalPaymentState, PaymentFlow, PaymentState};
pub use model::{PaymentIntentRequest, PaymentIntentResponse, PaymentResult, PaymentStatus};
pub use provider::{SdkState, StripeProvider};
pub use sdk::{CardElementSource, CardPaymentSdk, ConfirmCardPaymentResult, SdkError, SdkLoader};
