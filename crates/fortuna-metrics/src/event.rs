//! Metric Events

use serde::{Deserialize, Serialize};

/// Kinds of recorded interaction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MetricEventType {
    ButtonClick,
}

impl MetricEventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricEventType::ButtonClick => "BUTTON_CLICK",
        }
    }
}

/// Where an interaction happened
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventMetadata {
    /// Label of the control that fired (e.g. "Pay Now Button")
    pub trigger_id: String,

    /// Screen or route the control lives on
    pub screen: String,
}

impl EventMetadata {
    pub fn new(trigger_id: impl Into<String>, screen: impl Into<String>) -> Self {
        Self {
            trigger_id: trigger_id.into(),
            screen: screen.into(),
        }
    }
}

/// Body posted to the metrics endpoint
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricEvent {
    pub event: MetricEventType,

    pub event_metadata: EventMetadata,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}
