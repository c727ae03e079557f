use thiserror::Error;

use liscopy::Outcome;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required argument: {arg}")]
    MissingArgument { arg: String },

    #[error("Expected exactly two path arguments, got {count}")]
    SurplusArguments { count: usize },
}

impl AppError {
    /// Every kind of caller misuse collapses to the usage outcome.
    pub fn outcome(&self) -> Outcome {
        match self {
            AppError::MissingArgument { .. } | AppError::SurplusArguments { .. } => {
                Outcome::UsageError
            }
        }
    }
}
