//! Encoding and decoding of wire shapes.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{DtoError, Result};
use crate::property_descriptor::PropertyDescriptorDto;
use crate::validation;

/// Structured text formats a payload can travel in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WireFormat {
    #[default]
    Json,
    Yaml,
}

impl WireFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }
}

impl fmt::Display for WireFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WireFormat {
    type Err = DtoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(DtoError::UnsupportedFormat(other.to_string())),
        }
    }
}

/// Encode a value. `pretty` only affects JSON; YAML is always block style.
pub fn encode<T: Serialize>(value: &T, format: WireFormat, pretty: bool) -> Result<String> {
    let encoded = match format {
        WireFormat::Json if pretty => serde_json::to_string_pretty(value)?,
        WireFormat::Json => serde_json::to_string(value)?,
        WireFormat::Yaml => serde_yaml::to_string(value)?,
    };
    Ok(encoded)
}

pub fn decode<T: DeserializeOwned>(input: &str, format: WireFormat) -> Result<T> {
    let decoded = match format {
        WireFormat::Json => serde_json::from_str(input)?,
        WireFormat::Yaml => serde_yaml::from_str(input)?,
    };
    Ok(decoded)
}

/// Decode a property descriptor and reject it unless it is well formed
pub fn decode_descriptor(input: &str, format: WireFormat) -> Result<PropertyDescriptorDto> {
    let descriptor: PropertyDescriptorDto = decode(input, format)?;
    validation::check_descriptor(&descriptor)?;
    Ok(descriptor)
}
