//! Outcome reporting: the user-facing confirmation and diagnostics for one
//! run. Rendering is pure; [`emit`] picks the stream (stdout for the success
//! confirmation, stderr for diagnostics) and nothing here feeds back into
//! program state.
use crate::types::Outcome;

const BORDER: &str =
    "*******************************************************************************";

/// Program name and path strings one run was invoked with.
///
/// Paths that were never supplied render as empty strings; the
/// usage diagnostic only depends on the program name.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunContext<'a> {
    pub program: &'a str,
    pub input: &'a str,
    pub output: &'a str,
}

/// Render the full console message for `outcome`.
///
/// Success yields the bordered confirmation block; every failure yields the
/// generic error header followed by a kind-specific detail line naming the
/// offending path.
pub fn render(outcome: Outcome, ctx: &RunContext) -> String {
    if outcome.is_success() {
        format!(
            "{border}\n{program}:\n\tContents of file - {input} - copied to file - {output} -\n\tNo errors detected.\n{border}\n",
            border = BORDER,
            program = ctx.program,
            input = ctx.input,
            output = ctx.output,
        )
    } else {
        format!(
            "{program}:\n\tAn error occurred during the copy operation:\n\tError code: {code}.\n\t{detail}\n",
            program = ctx.program,
            code = outcome.exit_code(),
            detail = detail(outcome, ctx),
        )
    }
}

/// Describe a raw exit code, falling back to a generic message for codes
/// outside the stable mapping.
pub fn describe_code(code: u8, ctx: &RunContext) -> String {
    match Outcome::from_exit_code(code) {
        Some(outcome) => detail(outcome, ctx),
        None => "Unknown error!".to_string(),
    }
}

fn detail(outcome: Outcome, ctx: &RunContext) -> String {
    match outcome {
        Outcome::Success => "No errors detected.".to_string(),
        Outcome::UsageError => {
            format!("Usage: {} <input> <output>", ctx.program)
        }
        Outcome::InputOpenFailure => format!(
            "The input file - {} - does not exist or cannot be opened.",
            ctx.input
        ),
        Outcome::OutputOpenFailure => {
            format!("The output file - {} - cannot be opened.", ctx.output)
        }
        Outcome::WriteFailure => format!("Write error on file {}.", ctx.output),
        Outcome::ReadFailure => format!("Read error on file {}.", ctx.input),
    }
}

/// Print the message for `outcome` on the conventional stream.
pub fn emit(outcome: Outcome, ctx: &RunContext) {
    let message = render(outcome, ctx);
    if outcome.is_success() {
        print!("{}", message);
    } else {
        eprint!("{}", message);
    }
}
