//! flow-inspect binary entry point

use clap::Parser;
use tracing::error;

use flow_inspect::{config::Args, inspect, logging};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logging::init(&args.log_level);

    if let Err(e) = args.validate() {
        error!("Configuration error: {}", e);
        std::process::exit(2);
    }

    let output = inspect::run(&args)?;
    println!("{}", output.trim_end());

    Ok(())
}
