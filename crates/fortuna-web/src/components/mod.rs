//! UI Components

mod navbar;
mod payment_button;
mod payment_provider;

pub use navbar::Navbar;
pub use payment_button::PaymentButton;
pub use payment_provider::{StripeContext, StripeHandle, StripePaymentProvider, use_stripe};
