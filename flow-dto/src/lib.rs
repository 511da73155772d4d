//! Wire shapes for the flow control-plane REST API
//!
//! Request and response bodies exchanged with the control plane are plain
//! value carriers. They hold no business logic beyond two rules:
//!
//! - [`AllowableValueDto`] compares and hashes by its `value` alone
//! - [`ControllerConfigurationEntity::revision`] never yields an absent
//!   revision; a fresh default is returned when none was stored
//!
//! # Key Components
//!
//! - [`PropertyDescriptorDto`]: A configurable property of a component
//! - [`ControllerConfigurationEntity`]: Envelope carrying the controller
//!   configuration with its revision, access policy and server time
//! - [`validation`]: Enforcement of allowable-value constraints, kept apart
//!   from the shapes themselves
//! - [`codec`]: JSON and YAML encoding of any wire shape
//!
//! # Example
//!
//! ```
//! use flow_dto::{AllowableValueDto, PropertyDescriptorDto};
//!
//! let descriptor = PropertyDescriptorDto::new("compression", "Compression")
//!     .with_allowable_values(vec![
//!         AllowableValueDto::new("gzip", "GZIP"),
//!         AllowableValueDto::new("none", "None"),
//!     ])
//!     .with_default_value("none");
//!
//! assert!(descriptor.is_constrained());
//! assert!(flow_dto::validation::check_value(&descriptor, Some("gzip")).is_ok());
//! ```

pub mod access_policy;
pub mod codec;
pub mod controller_configuration;
pub mod entity;
pub mod error;
pub mod property_descriptor;
pub mod revision;
pub mod validation;

// Re-export main types
pub use access_policy::AccessPolicyDto;
pub use codec::WireFormat;
pub use controller_configuration::ControllerConfigurationDto;
pub use entity::ControllerConfigurationEntity;
pub use error::{DtoError, Result};
pub use property_descriptor::{AllowableValueDto, PropertyDescriptorDto};
pub use revision::RevisionDto;
pub use validation::ValidationError;
