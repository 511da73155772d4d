//! Payload inspection commands

use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use flow_dto::{codec, validation, ControllerConfigurationEntity, WireFormat};
use tracing::{debug, info, warn};

use crate::config::{Args, Command};

/// Read a payload from a file, or from stdin when the path is `-`
pub fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read payload from stdin")?;
        return Ok(buf);
    }

    std::fs::read_to_string(path).with_context(|| format!("Failed to read payload from {}", path.display()))
}

/// Run the selected command and return the normalized payload
pub fn run(args: &Args) -> Result<String> {
    let input = read_input(args.input())?;
    debug!(bytes = input.len(), format = %args.format, "Payload loaded");

    match &args.command {
        Command::Descriptor { values, check_unset, .. } => {
            inspect_descriptor(&input, args.format, values, *check_unset, args.output_format(), args.pretty)
        }
        Command::Entity { require_revision, .. } => {
            inspect_entity(&input, args.format, *require_revision, args.output_format(), args.pretty)
        }
    }
}

pub fn inspect_descriptor(
    input: &str,
    format: WireFormat,
    values: &[String],
    check_unset: bool,
    output: WireFormat,
    pretty: bool,
) -> Result<String> {
    let descriptor = codec::decode_descriptor(input, format).context("Invalid property descriptor")?;
    info!(
        property = %descriptor.name,
        allowable_values = descriptor.allowable_values().len(),
        "Descriptor is well formed"
    );

    if descriptor.sensitive && descriptor.default_value.is_some() {
        warn!(property = %descriptor.name, "Sensitive property declares a default value");
    }

    for value in values {
        validation::check_value(&descriptor, Some(value.as_str()))?;
        // Sensitive values stay out of the log
        if descriptor.sensitive {
            info!(property = %descriptor.name, "Value accepted");
        } else {
            info!(property = %descriptor.name, value = %value, "Value accepted");
        }
    }

    if check_unset {
        validation::check_value(&descriptor, None)?;
        info!(property = %descriptor.name, "Unset value accepted");
    }

    Ok(codec::encode(&descriptor, output, pretty)?)
}

pub fn inspect_entity(
    input: &str,
    format: WireFormat,
    require_revision: bool,
    output: WireFormat,
    pretty: bool,
) -> Result<String> {
    let entity: ControllerConfigurationEntity =
        codec::decode(input, format).context("Payload is not a controller configuration entity")?;

    if entity.stored_revision().is_none() {
        if require_revision {
            bail!("Controller configuration entity carries no revision");
        }
        warn!("No revision in payload; an empty revision will be emitted");
    } else {
        let revision = entity.revision();
        info!(
            version = ?revision.version,
            client_id = ?revision.client_id,
            "Revision present"
        );
    }

    if entity.controller_configuration.is_none() {
        warn!("Entity carries no controller configuration");
    }

    Ok(codec::encode(&entity, output, pretty)?)
}
