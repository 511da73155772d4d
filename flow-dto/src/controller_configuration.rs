//! System-wide controller settings exposed through the configuration envelope.

use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Controller configuration payload.
///
/// Every member is optional: partial updates send only what changes, and
/// absent members are omitted from the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct ControllerConfigurationDto {
    /// Name of this controller
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    /// Threads available to timer-driven components
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_timer_driven_thread_count: Option<i32>,
    /// Threads available to event-driven components
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_event_driven_thread_count: Option<i32>,
    /// Interval at which clients should refresh, in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_refresh_interval_seconds: Option<i64>,
    /// Whether site-to-site communication uses a secure channel
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_to_site_secure: Option<bool>,
    /// Server time zone offset from UTC in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_offset: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_viewer_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

impl ControllerConfigurationDto {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_thread_counts(mut self, timer_driven: i32, event_driven: i32) -> Self {
        self.max_timer_driven_thread_count = Some(timer_driven);
        self.max_event_driven_thread_count = Some(event_driven);
        self
    }
}
