//! Card form and pay button

use fortuna_payments::{HttpPaymentApi, PaymentFlow, PaymentState};
use leptos::{html, prelude::*};

use crate::components::use_stripe;
use crate::services::{track_click, use_services};

pub const SUCCESS_MESSAGE: &str = "Payment successful! Thank you for your purchase.";

/// Flow state mirrored into the button's signals
#[derive(Clone, Copy)]
struct SignalPaymentState {
    loading: WriteSignal<bool>,
    error: WriteSignal<Option<String>>,
}

impl PaymentState for SignalPaymentState {
    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }

    fn set_error(&self, error: Option<String>) {
        self.error.set(error);
    }
}

/// `Pay $10.00` for 1000 minor units
fn pay_label(amount: u64) -> String {
    format!("Pay ${}.{:02}", amount / 100, amount % 100)
}

/// Card input plus a button that charges `amount` minor units of
/// `currency` (default `usd`). Must sit under a `StripePaymentProvider`.
#[component]
pub fn PaymentButton(
    amount: u64,
    #[prop(optional, into)] currency: Option<String>,
    #[prop(optional)] on_success: Option<Callback<String>>,
    #[prop(optional)] on_error: Option<Callback<String>>,
) -> impl IntoView {
    let services = use_services();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (succeeded, set_succeeded) = signal(false);
    let stripe_handle = use_stripe();
    let card_ref = NodeRef::<html::Div>::new();

    Effect::new(move |_| {
        let (Some(node), Some(stripe)) = (card_ref.get(), stripe_handle.and_then(|h| h.get())) else {
            return;
        };
        if let Err(e) = stripe.elements.mount_card(&node) {
            tracing::error!(error = %e, "Failed to mount card element");
        }
    });

    let pay = move |_| {
        track_click(services, "Pay Now Button", "Home".into());

        let currency = currency.clone();
        let config = services.with_value(|s| s.payments.clone());
        let stripe = stripe_handle.and_then(|h| h.get());
        leptos::task::spawn_local(async move {
            let state = SignalPaymentState {
                loading: set_loading,
                error: set_error,
            };
            let flow = PaymentFlow::new(HttpPaymentApi::new(&config), state, &config);
            let result = flow
                .process_payment(
                    stripe.as_ref().map(|s| &*s.stripe),
                    stripe.as_ref().map(|s| &*s.elements),
                    amount,
                    currency.as_deref(),
                )
                .await;

            if let Some(id) = result.payment_intent_id() {
                set_succeeded.set(true);
                if let Some(on_success) = on_success {
                    on_success.run(id.to_string());
                }
            } else if let (Some(message), Some(on_error)) = (result.error(), on_error) {
                on_error.run(message.to_string());
            }
        });
    };

    view! {
        <div class="payment-success" class:hidden=move || !succeeded.get() role="alert">
            {SUCCESS_MESSAGE}
        </div>
        <div class="payment-form" class:hidden=move || succeeded.get()>
            <div class="card-element" node_ref=card_ref></div>
            {move || error.get().map(|message| view! { <div class="payment-error" role="alert">{message}</div> })}
            <button class="btn btn-primary" disabled=move || loading.get() on:click=pay>
                {move || if loading.get() { "Processing...".to_string() } else { pay_label(amount) }}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pay_label() {
        assert_eq!(pay_label(1000), "Pay $10.00");
        assert_eq!(pay_label(500), "Pay $5.00");
        assert_eq!(pay_label(12345), "Pay $123.45");
        assert_eq!(pay_label(7), "Pay $0.07");
    }
}
