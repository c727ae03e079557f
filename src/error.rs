//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Each variant names the I/O stage that failed and carries the offending path;
//! [`Error::outcome`] classifies a failure into the run `Outcome`.
use std::path::PathBuf;

use thiserror::Error;

use crate::types::Outcome;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot open input file `{}`: {source}", .path.display())]
    OpenInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot open output file `{}`: {source}", .path.display())]
    OpenOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("write error on `{}`: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("read error on `{}`: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Error {
    /// Classify this error into the run outcome it stands for.
    pub fn outcome(&self) -> Outcome {
        match self {
            Error::OpenInput { .. } => Outcome::InputOpenFailure,
            Error::OpenOutput { .. } => Outcome::OutputOpenFailure,
            Error::Write { .. } => Outcome::WriteFailure,
            Error::Read { .. } => Outcome::ReadFailure,
        }
    }

    /// The path the failing stage was operating on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Error::OpenInput { path, .. }
            | Error::OpenOutput { path, .. }
            | Error::Write { path, .. }
            | Error::Read { path, .. } => path,
        }
    }
}
