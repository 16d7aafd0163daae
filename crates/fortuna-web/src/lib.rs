//! Fortuna Web Frontend
//!
//! Leptos-based WASM frontend: landing page, navigation with click
//! metrics, and the embedded Stripe card form.

mod app;
mod components;
mod pages;
mod services;
pub mod stripe;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    // tracing events reach the console through the `log` facade.
    console_log::init_with_level(log::Level::Info).expect("console_log init");
    leptos::mount::mount_to_body(App);
}
