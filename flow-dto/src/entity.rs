//! Controller configuration envelope.
//!
//! Placed in the body of requests to and responses from the controller
//! configuration endpoint. Pairs the configuration payload with the
//! revision used for optimistic concurrency, the caller's access policy and
//! the server clock.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, Serializer};

#[cfg(feature = "typescript")]
use ts_rs::TS;

use crate::access_policy::AccessPolicyDto;
use crate::controller_configuration::ControllerConfigurationDto;
use crate::revision::RevisionDto;

/// Envelope around a [`ControllerConfigurationDto`].
///
/// The revision is private so that every read goes through
/// [`ControllerConfigurationEntity::revision`], which substitutes an empty
/// revision when none was stored. Serialization reads it the same way, so
/// the `revision` member is always present on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct ControllerConfigurationEntity {
    /// Current time on the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controller_configuration: Option<ControllerConfigurationDto>,
    #[serde(default, serialize_with = "serialize_revision")]
    #[cfg_attr(feature = "typescript", ts(as = "RevisionDto"))]
    revision: Option<RevisionDto>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_policy: Option<AccessPolicyDto>,
}

impl ControllerConfigurationEntity {
    /// Wrap a configuration for a response, stamped with the server clock
    pub fn new(configuration: ControllerConfigurationDto) -> Self {
        Self {
            current_time: Some(Utc::now()),
            controller_configuration: Some(configuration),
            revision: None,
            access_policy: None,
        }
    }

    pub fn with_revision(mut self, revision: RevisionDto) -> Self {
        self.revision = Some(revision);
        self
    }

    pub fn with_access_policy(mut self, policy: AccessPolicyDto) -> Self {
        self.access_policy = Some(policy);
        self
    }

    /// Revision for this request or response.
    ///
    /// Returns the stored revision, or a fresh empty one when none was set.
    /// The envelope itself is left untouched.
    pub fn revision(&self) -> Cow<'_, RevisionDto> {
        match &self.revision {
            Some(revision) => Cow::Borrowed(revision),
            None => Cow::Owned(RevisionDto::default()),
        }
    }

    /// The revision exactly as stored, without the read-time default
    pub fn stored_revision(&self) -> Option<&RevisionDto> {
        self.revision.as_ref()
    }

    pub fn set_revision(&mut self, revision: Option<RevisionDto>) {
        self.revision = revision;
    }
}

fn serialize_revision<S>(revision: &Option<RevisionDto>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match revision {
        Some(revision) => revision.serialize(serializer),
        None => RevisionDto::default().serialize(serializer),
    }
}
