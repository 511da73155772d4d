//! Optimistic-concurrency revision token.
//!
//! The control plane requires a revision on every mutable request and
//! includes one in every response. Conflict resolution happens server side;
//! this type only carries the token.

use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Revision of a component at the time of a request or response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct RevisionDto {
    /// Client that issued the request, so a client can recognise its own changes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    /// Revision counter; incremented on every modification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    /// Principal that last modified the component
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modifier: Option<String>,
}

impl RevisionDto {
    pub fn new(version: i64) -> Self {
        Self {
            version: Some(version),
            ..Default::default()
        }
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn with_last_modifier(mut self, modifier: impl Into<String>) -> Self {
        self.last_modifier = Some(modifier.into());
        self
    }

    /// True when no field has been set
    pub fn is_empty(&self) -> bool {
        self.client_id.is_none() && self.version.is_none() && self.last_modifier.is_none()
    }
}
