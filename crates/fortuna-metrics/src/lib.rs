//! # fortuna-metrics
//!
//! Fire-and-forget interaction metrics. Each tracked control posts one
//! `MetricEvent` to the metrics endpoint; delivery failures never reach the
//! user.

mod client;
mod error;
mod event;

pub use client::{MetricsClient, SAVE_METRIC_PATH};
pub use error::{MetricsError, Result};
pub use event::{EventMetadata, MetricEvent, MetricEventType};
