//! Metrics Beacon Client

use reqwest::{Client, Url};

use crate::error::{MetricsError, Result};
use crate::event::{EventMetadata, MetricEvent, MetricEventType};

pub const SAVE_METRIC_PATH: &str = "/api/save-metric";

/// Posts interaction events to the metrics endpoint
#[derive(Clone, Debug)]
pub struct MetricsClient {
    client: Client,
    endpoint: Url,
}

impl MetricsClient {
    /// Client for a service at `base_url`
    pub fn new(base_url: &str) -> Result<Self> {
        let mut endpoint = Url::parse(base_url)
            .map_err(|e| MetricsError::Config(format!("invalid API URL '{base_url}': {e}")))?;
        endpoint
            .path_segments_mut()
            .map_err(|()| MetricsError::Config(format!("API URL '{base_url}' cannot be a base")))?
            .pop_if_empty()
            .extend(SAVE_METRIC_PATH.split('/').filter(|s| !s.is_empty()));

        Ok(Self {
            client: Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Record one event.
    ///
    /// Any failure (transport or non-success status) is reported as
    /// [`MetricsError::Capture`].
    pub async fn save_metric_event(
        &self,
        event: MetricEventType,
        event_metadata: EventMetadata,
    ) -> Result<()> {
        let body = MetricEvent {
            event,
            event_metadata,
            user_id: None,
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&body)
            .send()
            .await
            .map_err(MetricsError::capture)?;

        if !response.status().is_success() {
            return Err(MetricsError::capture(format!("status {}", response.status())));
        }

        tracing::debug!(
            event = event.as_str(),
            trigger_id = %body.event_metadata.trigger_id,
            screen = %body.event_metadata.screen,
            "Recorded metric event"
        );
        Ok(())
    }

    /// Record a button click, logging instead of returning failures.
    pub async fn track_click(&self, trigger_id: &str, screen: &str) {
        if let Err(e) = self
            .save_metric_event(MetricEventType::ButtonClick, EventMetadata::new(trigger_id, screen))
            .await
        {
            if let MetricsError::Capture { reason } = &e {
                tracing::warn!(trigger_id, screen, reason = %reason, "{e}");
            } else {
                tracing::warn!(trigger_id, screen, "{e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[test]
    fn test_endpoint() {
        let client = MetricsClient::new("https://fortuna.example").unwrap();
        assert_eq!(client.endpoint().as_str(), "https://fortuna.example/api/save-metric");
        assert!(matches!(MetricsClient::new("nope"), Err(MetricsError::Config(_))));
    }

    #[tokio::test]
    async fn test_posts_event_without_user_id() {
        let received = Arc::new(Mutex::new(Vec::<Value>::new()));
        let sink = Arc::clone(&received);
        let base = serve(Router::new().route(
            SAVE_METRIC_PATH,
            post(move |Json(body): Json<Value>| {
                let sink = Arc::clone(&sink);
                async move {
                    sink.lock().await.push(body);
                    (StatusCode::CREATED, Json(json!({})))
                }
            }),
        ))
        .await;

        let client = MetricsClient::new(&base).unwrap();
        client
            .save_metric_event(MetricEventType::ButtonClick, EventMetadata::new("React Button", "Home"))
            .await
            .unwrap();

        let received = received.lock().await;
        assert_eq!(received.len(), 1);
        assert_eq!(
            received[0],
            json!({
                "event": "BUTTON_CLICK",
                "eventMetadata": {"triggerId": "React Button", "screen": "Home"},
            })
        );
    }

    #[tokio::test]
    async fn test_server_error_is_capture_failure() {
        let base = serve(Router::new().route(
            SAVE_METRIC_PATH,
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({}))) }),
        ))
        .await;

        let client = MetricsClient::new(&base).unwrap();
        let err = client
            .save_metric_event(MetricEventType::ButtonClick, EventMetadata::new("React Button", "Home"))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Failed to capture metric event.");
    }

    #[tokio::test]
    async fn test_network_error_is_capture_failure() {
        let client = MetricsClient::new("http://127.0.0.1:1").unwrap();
        let err = client
            .save_metric_event(MetricEventType::ButtonClick, EventMetadata::new("React Button", "Home"))
            .await
            .unwrap_err();

        assert!(matches!(err, MetricsError::Capture { .. }));
    }

    #[tokio::test]
    async fn test_track_click_swallows_failures() {
        let client = MetricsClient::new("http://127.0.0.1:1").unwrap();
        client.track_click("Atlas Logo", "/").await;
    }
}
