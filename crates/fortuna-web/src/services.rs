//! Shared API clients
//!
//! The app talks to its API on the origin it was served from, so every
//! client is built from `window.location.origin`.

use fortuna_metrics::MetricsClient;
use fortuna_payments::PaymentConfig;
use fortuna_payments::config::DEFAULT_API_URL;
use leptos::prelude::*;

/// Clients shared by every component under [`crate::App`]
#[derive(Clone, Debug)]
pub struct Services {
    pub payments: PaymentConfig,
    pub metrics: MetricsClient,
}

impl Services {
    fn for_origin(origin: &str) -> Option<Self> {
        let payments = PaymentConfig::for_origin(origin)
            .inspect_err(|e| tracing::error!(origin, error = %e, "Invalid payment API origin"))
            .ok()?;
        let metrics = MetricsClient::new(origin)
            .inspect_err(|e| tracing::error!(origin, error = %e, "Invalid metrics API origin"))
            .ok()?;
        Some(Self { payments, metrics })
    }

    /// Clients for the page origin, or for the default API location when
    /// the origin is opaque (`file://`, sandboxed frames).
    fn from_window() -> Self {
        web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .filter(|origin| origin != "null")
            .and_then(|origin| Self::for_origin(&origin))
            .unwrap_or_else(|| Self {
                payments: PaymentConfig::default(),
                metrics: MetricsClient::new(DEFAULT_API_URL).expect("default API URL is valid"),
            })
    }
}

/// Handle to the app's [`Services`]
pub type ServicesHandle = StoredValue<Services, LocalStorage>;

/// Build the clients and put them in context for the component tree.
pub fn provide_services() -> ServicesHandle {
    let handle = StoredValue::new_local(Services::from_window());
    provide_context(handle);
    handle
}

pub fn use_services() -> ServicesHandle {
    expect_context::<ServicesHandle>()
}

/// Fire-and-forget click metric
pub fn track_click(services: ServicesHandle, trigger_id: &'static str, screen: String) {
    let metrics = services.with_value(|s| s.metrics.clone());
    leptos::task::spawn_local(async move {
        metrics.track_click(trigger_id, &screen).await;
    });
}
