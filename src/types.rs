//! Shared types used across LISCOPY.
//! Includes the run `Outcome` (also the process exit status of the CLI)
//! and the `CopySummary` statistics returned by successful copies.
use serde::{Deserialize, Serialize};

/// Result of one copy run.
///
/// Exactly one `Outcome` is produced per run. Its numeric value, via
/// [`Outcome::exit_code`], is the process exit status of the CLI, so the
/// mapping is stable: changing it breaks callers that script against the
/// binary.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Outcome {
    Success,
    /// Caller misuse: wrong number of path arguments, detected before any I/O.
    UsageError,
    /// The input file is absent or cannot be opened for reading.
    InputOpenFailure,
    /// The output file cannot be created or truncated for writing.
    OutputOpenFailure,
    /// An I/O error was detected on the output stream.
    WriteFailure,
    /// An I/O error was detected on the input stream.
    ReadFailure,
}

impl Outcome {
    /// Numeric exit status for this outcome.
    pub const fn exit_code(self) -> u8 {
        match self {
            Outcome::Success => 0,
            Outcome::UsageError => 1,
            Outcome::InputOpenFailure => 2,
            Outcome::OutputOpenFailure => 3,
            Outcome::WriteFailure => 4,
            Outcome::ReadFailure => 5,
        }
    }

    /// Recover the outcome from a numeric exit status.
    ///
    /// Returns `None` for codes outside the stable mapping; the reporter
    /// renders those as a generic unknown error.
    pub const fn from_exit_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Outcome::Success),
            1 => Some(Outcome::UsageError),
            2 => Some(Outcome::InputOpenFailure),
            3 => Some(Outcome::OutputOpenFailure),
            4 => Some(Outcome::WriteFailure),
            5 => Some(Outcome::ReadFailure),
            _ => None,
        }
    }

    pub const fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Outcome::Success => "Success",
            Outcome::UsageError => "UsageError",
            Outcome::InputOpenFailure => "InputOpenFailure",
            Outcome::OutputOpenFailure => "OutputOpenFailure",
            Outcome::WriteFailure => "WriteFailure",
            Outcome::ReadFailure => "ReadFailure",
        };
        write!(f, "{}", s)
    }
}

/// Statistics from a completed copy run.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Serialize, Deserialize)]
pub struct CopySummary {
    /// Number of `(N) ` markers emitted; zero for an empty input.
    pub lines: u64,
    /// Payload bytes copied through, header and markers excluded.
    pub bytes: u64,
}
