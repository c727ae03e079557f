//! LISCOPY CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run the copy,
//! and exit with the outcome's status code. For programmatic use, prefer the
//! library API (`liscopy::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = match cli::CliArgs::try_parse() {
        Ok(args) => args,
        Err(err) => return cli::exit_for_parse_error(err),
    };
    ExitCode::from(cli::run(args).exit_code())
}
