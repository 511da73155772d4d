//! Property descriptors and their allowable values.
//!
//! A descriptor documents one configurable property of a component. When it
//! carries a non-empty list of allowable values, any value assigned to the
//! property must match one of them; that constraint is checked in
//! [`crate::validation`], not here.

use std::borrow::Borrow;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// A description of a configurable property.
///
/// `==` compares allowable values by `value` only, so two descriptors whose
/// allowable values differ just in display name or description are equal.
/// Compare the encoded form when labels matter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct PropertyDescriptorDto {
    /// Stable identifier of the property
    pub name: String,
    /// Human readable name; empty when the payload omits it
    #[serde(default)]
    pub display_name: String,
    /// Relays additional details to a user or documents intent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Value used when none is supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    /// Permitted values in display order. Absent or empty means unconstrained.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowable_values: Option<Vec<AllowableValueDto>>,
    #[serde(default)]
    pub required: bool,
    /// Value must be protected whenever stored or represented
    #[serde(default)]
    pub sensitive: bool,
    /// User-defined rather than declared by the component
    #[serde(default)]
    pub dynamic: bool,
    #[serde(default, rename = "supportsEl")]
    pub supports_expression_language: bool,
    /// Fully qualified type of the controller service this property references
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifies_controller_service: Option<String>,
}

impl PropertyDescriptorDto {
    /// Create an optional, unconstrained descriptor
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            description: None,
            default_value: None,
            allowable_values: None,
            required: false,
            sensitive: false,
            dynamic: false,
            supports_expression_language: false,
            identifies_controller_service: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_default_value(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_allowable_values(mut self, values: Vec<AllowableValueDto>) -> Self {
        self.allowable_values = Some(values);
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_sensitive(mut self, sensitive: bool) -> Self {
        self.sensitive = sensitive;
        self
    }

    pub fn with_dynamic(mut self, dynamic: bool) -> Self {
        self.dynamic = dynamic;
        self
    }

    pub fn with_expression_language(mut self, supported: bool) -> Self {
        self.supports_expression_language = supported;
        self
    }

    /// Mark this property as a reference to a controller service of the given type
    pub fn with_controller_service(mut self, service_type: impl Into<String>) -> Self {
        self.identifies_controller_service = Some(service_type.into());
        self
    }

    /// Allowable values in display order, empty when unconstrained
    pub fn allowable_values(&self) -> &[AllowableValueDto] {
        self.allowable_values.as_deref().unwrap_or_default()
    }

    /// Whether assigned values are restricted to the allowable list
    pub fn is_constrained(&self) -> bool {
        !self.allowable_values().is_empty()
    }

    /// Look up the allowable entry matching a raw value
    pub fn find_allowable(&self, value: &str) -> Option<&AllowableValueDto> {
        self.allowable_values().iter().find(|av| av.value == value)
    }

    pub fn identifies_controller_service(&self) -> bool {
        self.identifies_controller_service.is_some()
    }
}

/// One permitted value for a constrained property.
///
/// Identity is the `value` alone: two entries with the same value but
/// different display names or descriptions are equal and hash identically.
/// A value is always present, so comparison cannot fault.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(rename_all = "camelCase")]
pub struct AllowableValueDto {
    /// Human readable form of the value; empty when the payload omits it
    #[serde(default)]
    pub display_name: String,
    /// The value itself
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl AllowableValueDto {
    pub fn new(value: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            value: value.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl PartialEq for AllowableValueDto {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for AllowableValueDto {}

impl Hash for AllowableValueDto {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

// Hashes as `str` so sets of allowable values can be queried by raw value.
impl Borrow<str> for AllowableValueDto {
    fn borrow(&self) -> &str {
        &self.value
    }
}
