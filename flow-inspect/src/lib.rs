//! flow-inspect - checks and normalizes flow control-plane API payloads
//!
//! Loads a property descriptor or a controller configuration entity,
//! applies the allowable-value checks from `flow_dto::validation`, and
//! re-emits the normalized wire form.

pub mod config;
pub mod inspect;
pub mod logging;

pub use config::{Args, Command};
