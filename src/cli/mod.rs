//! Command Line Interface (CLI) layer for LISCOPY.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for one copy run. It wires the
//! two positional paths to the library functionality exposed via
//! `liscopy::api` and keeps the outcome-to-exit-status contract in one
//! place.
//!
//! If you are embedding LISCOPY into another application, prefer using the
//! high-level `liscopy::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::{exit_for_parse_error, run};
