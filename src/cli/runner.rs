use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use liscopy::api;
use liscopy::report;
use liscopy::types::Outcome;

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();
}

fn program_name() -> String {
    std::env::args_os()
        .next()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}

fn resolve_paths(args: CliArgs) -> Result<(PathBuf, PathBuf), AppError> {
    if !args.surplus.is_empty() {
        return Err(AppError::SurplusArguments {
            count: 2 + args.surplus.len(),
        });
    }
    let input = args.input.ok_or(AppError::MissingArgument {
        arg: "input".to_string(),
    })?;
    let output = args.output.ok_or(AppError::MissingArgument {
        arg: "output".to_string(),
    })?;
    Ok((input, output))
}

/// Drive one copy run: validate the argument count, invoke the copier, and
/// always report, whatever the outcome.
pub fn run(args: CliArgs) -> Outcome {
    if args.log {
        init_logging();
    }

    let program = program_name();

    // The reporter receives whatever path strings were supplied; absent ones
    // render as empty, and the usage diagnostic only names the program.
    let input_str = args
        .input
        .as_deref()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();
    let output_str = args
        .output
        .as_deref()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ctx = report::RunContext {
        program: &program,
        input: &input_str,
        output: &output_str,
    };

    let (input, output) = match resolve_paths(args) {
        Ok(paths) => paths,
        Err(err) => {
            warn!(%err, "invalid command line");
            let outcome = err.outcome();
            report::emit(outcome, &ctx);
            return outcome;
        }
    };

    info!(input = %input.display(), output = %output.display(), "copying");

    let outcome = match api::copy_to_path(&input, &output) {
        Ok(summary) => {
            info!(lines = summary.lines, bytes = summary.bytes, "copy complete");
            Outcome::Success
        }
        Err(err) => {
            warn!(%err, "copy failed");
            err.outcome()
        }
    };

    report::emit(outcome, &ctx);
    outcome
}

/// Exit status for a clap parse failure.
///
/// `--help`/`--version` arrive here and exit cleanly; everything else is
/// caller misuse and maps to the usage outcome rather than clap's default
/// exit code 2, which would collide with the input-open failure status.
pub fn exit_for_parse_error(err: clap::Error) -> ExitCode {
    let code = match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => Outcome::UsageError.exit_code(),
    };
    let _ = err.print();
    ExitCode::from(code)
}
