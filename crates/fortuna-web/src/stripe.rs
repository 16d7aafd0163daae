//! Stripe.js Bindings
//!
//! wasm-bindgen handles for the Stripe.js v3 global (loaded from
//! `https://js.stripe.com/v3/` in `index.html`) and their adapters onto the
//! `fortuna-payments` SDK traits.

use std::cell::RefCell;

use async_trait::async_trait;
use fortuna_payments::{
    CardElementSource, CardPaymentSdk, ConfirmCardPaymentResult, PaymentError, SdkLoader,
};
use js_sys::{Object, Promise, Reflect};
use wasm_bindgen::{prelude::*, JsCast};
use wasm_bindgen_futures::JsFuture;

#[wasm_bindgen]
extern "C" {
    /// Raw Stripe.js client handle.
    #[wasm_bindgen(js_name = Stripe)]
    #[derive(Debug, Clone)]
    pub type JsStripe;

    /// Raw Elements factory handle.
    #[derive(Debug, Clone)]
    pub type JsElements;

    /// Raw card Element handle.
    #[derive(Debug, Clone)]
    pub type JsCardElement;

    /// `Stripe("pk_...")`
    #[wasm_bindgen(catch, js_name = Stripe)]
    fn new_stripe(publishable_key: &str) -> Result<JsStripe, JsValue>;

    /// `stripe.elements()`
    #[wasm_bindgen(method, catch)]
    fn elements(this: &JsStripe) -> Result<JsElements, JsValue>;

    /// `elements.create(type, options)`
    #[wasm_bindgen(method, catch, js_name = create)]
    fn create(this: &JsElements, element_type: &str, options: &JsValue) -> Result<JsCardElement, JsValue>;

    /// `cardElement.mount(domElement)`
    #[wasm_bindgen(method, catch)]
    fn mount(this: &JsCardElement, target: &web_sys::HtmlElement) -> Result<(), JsValue>;

    /// `cardElement.destroy()`
    #[wasm_bindgen(method, catch)]
    fn destroy(this: &JsCardElement) -> Result<(), JsValue>;

    /// `stripe.confirmCardPayment(clientSecret, data)`
    #[wasm_bindgen(method, catch, js_name = confirmCardPayment)]
    fn confirm_card_payment(this: &JsStripe, client_secret: &str, data: &JsValue) -> Result<Promise, JsValue>;
}

/// Map a thrown JS value onto the flow's error taxonomy: `Error` objects
/// keep their message, anything else is unrecognized.
fn js_error(value: JsValue) -> PaymentError {
    match value.dyn_ref::<js_sys::Error>() {
        Some(err) => PaymentError::Sdk(String::from(err.message())),
        None => PaymentError::Unrecognized,
    }
}

/// Loaded Stripe.js client
#[derive(Debug, Clone)]
pub struct StripeJs {
    inner: JsStripe,
}

impl StripeJs {
    /// Create the Elements context that will hold the card input.
    pub fn elements(&self) -> Result<StripeElements, PaymentError> {
        let inner = self.inner.elements().map_err(js_error)?;
        Ok(StripeElements {
            inner,
            card: RefCell::new(None),
        })
    }
}

#[async_trait(?Send)]
impl CardPaymentSdk for StripeJs {
    type Card = JsCardElement;

    async fn confirm_card_payment(
        &self,
        client_secret: &str,
        card: &JsCardElement,
    ) -> Result<ConfirmCardPaymentResult, PaymentError> {
        let payment_method = Object::new();
        Reflect::set(&payment_method, &"card".into(), card).map_err(js_error)?;
        let data = Object::new();
        Reflect::set(&data, &"payment_method".into(), &payment_method).map_err(js_error)?;

        let promise = self
            .inner
            .confirm_card_payment(client_secret, &data)
            .map_err(js_error)?;
        let value = JsFuture::from(promise).await.map_err(js_error)?;

        serde_wasm_bindgen::from_value(value).map_err(|e| PaymentError::Decode(e.to_string()))
    }
}

/// Builds [`StripeJs`] from the global `Stripe` constructor
#[derive(Debug, Default, Clone, Copy)]
pub struct StripeJsLoader;

impl SdkLoader for StripeJsLoader {
    type Sdk = StripeJs;

    fn load(&self, publishable_key: &str) -> Result<StripeJs, PaymentError> {
        let inner = new_stripe(publishable_key).map_err(js_error)?;
        Ok(StripeJs { inner })
    }
}

/// Elements context with at most one card input
#[derive(Debug)]
pub struct StripeElements {
    inner: JsElements,
    card: RefCell<Option<JsCardElement>>,
}

impl StripeElements {
    /// Create the card input and mount it into `target`, replacing any
    /// card mounted earlier.
    pub fn mount_card(&self, target: &web_sys::HtmlElement) -> Result<(), PaymentError> {
        if let Some(previous) = self.card.borrow_mut().take() {
            previous.destroy().map_err(js_error)?;
        }

        let card = self
            .inner
            .create("card", &card_style())
            .map_err(js_error)?;
        card.mount(target).map_err(js_error)?;
        *self.card.borrow_mut() = Some(card);
        Ok(())
    }
}

impl CardElementSource for StripeElements {
    type Card = JsCardElement;

    fn card_element(&self) -> Option<JsCardElement> {
        self.card.borrow().clone()
    }
}

/// `{style: {base: {...}, invalid: {...}}}` for the card input
fn card_style() -> JsValue {
    let base = Object::new();
    let placeholder = Object::new();
    let invalid = Object::new();
    let style = Object::new();
    let options = Object::new();

    // Reflect::set only fails on frozen/proxy targets, never on fresh objects.
    let _ = Reflect::set(&base, &"fontSize".into(), &"16px".into());
    let _ = Reflect::set(&base, &"color".into(), &"#424770".into());
    let _ = Reflect::set(&placeholder, &"color".into(), &"#aab7c4".into());
    let _ = Reflect::set(&base, &"::placeholder".into(), &placeholder);
    let _ = Reflect::set(&invalid, &"color".into(), &"#9e2146".into());
    let _ = Reflect::set(&style, &"base".into(), &base);
    let _ = Reflect::set(&style, &"invalid".into(), &invalid);
    let _ = Reflect::set(&options, &"style".into(), &style);

    options.into()
}
