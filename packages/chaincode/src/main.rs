//! Main entry point for the hello-chaincode harness

use std::process::ExitCode;

use clap::Parser;
use hello_chaincode::cli::{self, Cli};
use hello_chaincode::logging;

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = cli.load_config()?;

    logging::init(&config);

    let ok = cli::run(cli.command, config, cli.json, &mut std::io::stdout().lock())?;
    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
