//! Allowable-value enforcement.
//!
//! Descriptors only declare their constraints. Callers that assign values
//! to properties, or that accept descriptors from elsewhere, check them here.

use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use crate::property_descriptor::PropertyDescriptorDto;

/// Reasons a descriptor or a property value is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Property descriptor has an empty name")]
    EmptyName,

    #[error("Property '{property}' lists allowable value '{value}' more than once")]
    DuplicateAllowableValue { property: String, value: String },

    #[error("Default value '{value}' of property '{property}' is not an allowable value")]
    DefaultNotAllowed { property: String, value: String },

    #[error("Property '{property}' is required but has no value")]
    MissingRequired { property: String },

    #[error("Value '{value}' is not allowed for property '{property}' (allowed: {})", .allowed.join(", "))]
    NotAllowed {
        property: String,
        value: String,
        allowed: Vec<String>,
    },
}

/// Check the structure of a descriptor.
///
/// The name must be non-empty, allowable values must be distinct, and a
/// default value on a constrained property must be one of them.
pub fn check_descriptor(descriptor: &PropertyDescriptorDto) -> Result<(), ValidationError> {
    if descriptor.name.trim().is_empty() {
        debug!("Rejected descriptor with empty name");
        return Err(ValidationError::EmptyName);
    }

    let mut seen = HashSet::new();
    for allowable in descriptor.allowable_values() {
        if !seen.insert(allowable.value.as_str()) {
            debug!(property = %descriptor.name, value = %allowable.value, "Duplicate allowable value");
            return Err(ValidationError::DuplicateAllowableValue {
                property: descriptor.name.clone(),
                value: allowable.value.clone(),
            });
        }
    }

    if let Some(default) = &descriptor.default_value {
        if descriptor.is_constrained() && !seen.contains(default.as_str()) {
            debug!(property = %descriptor.name, value = %default, "Default value outside allowable set");
            return Err(ValidationError::DefaultNotAllowed {
                property: descriptor.name.clone(),
                value: default.clone(),
            });
        }
    }

    Ok(())
}

/// The value a property takes: the supplied one, else the descriptor default
pub fn effective_value<'a>(
    descriptor: &'a PropertyDescriptorDto,
    value: Option<&'a str>,
) -> Option<&'a str> {
    value.or(descriptor.default_value.as_deref())
}

/// Check a value assigned to a property against its descriptor.
///
/// `None` means no value was supplied, in which case the descriptor default
/// applies. Unconstrained properties accept any value.
pub fn check_value(descriptor: &PropertyDescriptorDto, value: Option<&str>) -> Result<(), ValidationError> {
    let Some(value) = effective_value(descriptor, value) else {
        if descriptor.required {
            debug!(property = %descriptor.name, "Required property has no value");
            return Err(ValidationError::MissingRequired {
                property: descriptor.name.clone(),
            });
        }
        return Ok(());
    };

    if descriptor.is_constrained() && descriptor.find_allowable(value).is_none() {
        debug!(property = %descriptor.name, value = %value, "Value outside allowable set");
        return Err(ValidationError::NotAllowed {
            property: descriptor.name.clone(),
            value: value.to_string(),
            allowed: descriptor
                .allowable_values()
                .iter()
                .map(|av| av.value.clone())
                .collect(),
        });
    }

    Ok(())
}
