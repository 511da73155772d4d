//! Configuration for flow-inspect
//!
//! CLI arguments and environment variable handling using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use flow_dto::WireFormat;

/// flow-inspect - checks and normalizes control-plane API payloads
#[derive(Parser, Debug, Clone)]
#[command(name = "flow-inspect")]
#[command(about = "Check and normalize flow control-plane API payloads")]
pub struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "FLOW_INSPECT_LOG_LEVEL", default_value = "info", global = true)]
    pub log_level: String,

    /// Input format (json, yaml)
    #[arg(long, env = "FLOW_INSPECT_FORMAT", default_value = "json", global = true)]
    pub format: WireFormat,

    /// Output format; defaults to the input format
    #[arg(long, env = "FLOW_INSPECT_OUTPUT_FORMAT", global = true)]
    pub output_format: Option<WireFormat>,

    /// Pretty-print JSON output
    #[arg(long, env = "FLOW_INSPECT_PRETTY", default_value = "false", global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Check a property descriptor and, optionally, values assigned to it
    Descriptor {
        /// Payload file, or `-` for stdin
        input: PathBuf,

        /// Value to check against the descriptor (repeatable)
        #[arg(long = "value")]
        values: Vec<String>,

        /// Check the descriptor default as if no value were supplied
        #[arg(long)]
        check_unset: bool,
    },
    /// Normalize a controller configuration entity
    Entity {
        /// Payload file, or `-` for stdin
        input: PathBuf,

        /// Fail when the payload carries no revision
        #[arg(long)]
        require_revision: bool,
    },
}

impl Args {
    pub fn validate(&self) -> Result<(), String> {
        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(format!("Unknown log level '{}'", self.log_level));
        }

        if self.pretty && self.output_format() != WireFormat::Json {
            return Err("--pretty only applies to JSON output".to_string());
        }

        Ok(())
    }

    pub fn output_format(&self) -> WireFormat {
        self.output_format.unwrap_or(self.format)
    }

    /// Input path of the selected command
    pub fn input(&self) -> &PathBuf {
        match &self.command {
            Command::Descriptor { input, .. } | Command::Entity { input, .. } => input,
        }
    }
}
