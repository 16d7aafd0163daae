//! Stripe provider component

use std::rc::Rc;

use fortuna_payments::{HttpPaymentApi, SdkState, StripeProvider};
use leptos::prelude::*;

use crate::services::use_services;
use crate::stripe::{StripeElements, StripeJs, StripeJsLoader};

/// What [`StripePaymentProvider`] hands to its children
#[derive(Clone, Debug)]
pub struct StripeContext {
    pub stripe: Rc<StripeJs>,
    pub elements: Rc<StripeElements>,
}

/// Copyable handle to the nearest provider's [`StripeContext`]
#[derive(Clone, Copy)]
pub struct StripeHandle(StoredValue<Option<StripeContext>, LocalStorage>);

impl StripeHandle {
    /// The context, once the provider is ready
    pub fn get(&self) -> Option<StripeContext> {
        self.0.get_value()
    }
}

/// Handle of the enclosing provider, if there is one.
pub fn use_stripe() -> Option<StripeHandle> {
    use_context::<StripeHandle>()
}

/// Loads Stripe.js once and renders `children` with it available through
/// [`use_stripe`].
#[component]
pub fn StripePaymentProvider(children: ChildrenFn) -> impl IntoView {
    let services = use_services();
    let (state, set_state) = signal_local(SdkState::<StripeJs>::Uninitialized);
    let context = StoredValue::new_local(None::<StripeContext>);
    provide_context(StripeHandle(context));

    leptos::task::spawn_local(async move {
        let api = HttpPaymentApi::new(&services.with_value(|s| s.payments.clone()));
        let mut provider = StripeProvider::new();
        set_state.set(SdkState::Loading);

        let next = match provider.initialize(&api, &StripeJsLoader).await {
            SdkState::Ready(stripe) => match stripe.elements() {
                Ok(elements) => {
                    context.set_value(Some(StripeContext {
                        stripe: Rc::clone(stripe),
                        elements: Rc::new(elements),
                    }));
                    SdkState::Ready(Rc::clone(stripe))
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to create Stripe elements");
                    SdkState::Failed(e.to_string())
                }
            },
            other => other.clone(),
        };
        set_state.set(next);
    });

    view! {
        {move || {
            let current = state.get();
            if current.is_pending() {
                view! {
                    <div class="payment-loading">
                        <div class="spinner" role="progressbar"></div>
                    </div>
                }
                    .into_any()
            } else if current.is_ready() {
                children().into_any()
            } else {
                view! { <div class="payment-error">"Failed to load payment system"</div> }.into_any()
            }
        }}
    }
}
