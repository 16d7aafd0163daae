//! Landing Page

use leptos::prelude::*;

use crate::components::{PaymentButton, StripePaymentProvider};
use crate::services::{track_click, use_services};

/// Price of the demo purchase, in cents
const DEMO_AMOUNT: u64 = 1000;

fn payment_succeeded(payment_intent_id: String) {
    tracing::info!(payment_intent_id = %payment_intent_id, "Payment succeeded");
}

fn payment_failed(error: String) {
    tracing::error!(error = %error, "Payment failed");
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let services = use_services();
    let (count, set_count) = signal(0_u32);

    let on_count = move |_| {
        set_count.update(|count| *count += 1);
        track_click(services, "Count Button", "Home".into());
    };

    view! {
        <div class="landing">
            <h1>"Fortuna"</h1>

            <div class="card">
                <button class="btn btn-primary" on:click=on_count>
                    "count is " {count}
                </button>
            </div>

            <section class="checkout">
                <h2>"Support Fortuna"</h2>
                <StripePaymentProvider>
                    <PaymentButton
                        amount=DEMO_AMOUNT
                        currency="usd"
                        on_success=Callback::new(payment_succeeded)
                        on_error=Callback::new(payment_failed)
                    />
                </StripePaymentProvider>
            </section>
        </div>
    }
}
