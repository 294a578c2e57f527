//! Example Module CLI
//!
//! Commands: describe, power, forward, constants
//! Outputs JSON to stdout
//! Exit 1 on an invalid JSON payload, 2 on a wrong prefix type

use clap::Parser;
use std::process::ExitCode;

use example_module::{cli, logging};

fn main() -> ExitCode {
    let args = cli::Cli::parse();
    logging::init_logging(args.log_level.as_deref());

    let output = cli::run(args.command);
    match serde_json::to_string_pretty(&output.body) {
        Ok(s) => println!("{}", s),
        Err(e) => {
            eprintln!(r#"{{"error": "Failed to serialize output: {}"}}"#, e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::from(output.status)
}
