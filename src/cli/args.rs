use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "liscopy", version, about = "Line-numbering text file copier")]
pub struct CliArgs {
    /// Input text file to copy
    pub input: Option<PathBuf>,

    /// Destination listing file (created or truncated)
    pub output: Option<PathBuf>,

    /// Anything past the two paths; the runner rejects surplus arguments
    /// itself so that every kind of caller misuse maps to the same outcome.
    #[arg(hide = true)]
    pub surplus: Vec<OsString>,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
