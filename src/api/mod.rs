//! High-level, ergonomic library API: copy a file into a numbered listing on
//! disk, collapse a run into its single `Outcome`, or render a listing in
//! memory. Prefer these entrypoints over the low-level `core` and `io`
//! modules when embedding LISCOPY.
use std::io::Write;
use std::path::Path;

use crate::core::copy::copy_to_listing;
use crate::error::Result;
use crate::io::listing::ListingWriter;
use crate::types::{CopySummary, Outcome};

/// Copy `input` into `output` as a numbered listing.
///
/// Returns the copy statistics on success; on failure the error names the
/// I/O stage and the offending path.
pub fn copy_to_path(input: &Path, output: &Path) -> Result<CopySummary> {
    copy_to_listing(input, output)
}

/// Copy `input` into `output` and collapse the run into its `Outcome`.
///
/// This is the one-value contract the CLI exposes as its exit status:
/// exactly one outcome per run, never a panic, never more than one error.
pub fn copy_file(input: &Path, output: &Path) -> Outcome {
    match copy_to_listing(input, output) {
        Ok(_) => Outcome::Success,
        Err(e) => e.outcome(),
    }
}

/// Render the listing for `bytes` in memory, headed by `source_name`.
///
/// Shares the marker logic with the file engine, so the in-memory result is
/// byte-identical to what [`copy_to_path`] writes for the same content.
pub fn render_listing(bytes: &[u8], source_name: &str) -> std::io::Result<Vec<u8>> {
    let mut listing = ListingWriter::new(Vec::new());
    listing.write_header(source_name)?;
    listing.write_all(bytes)?;
    Ok(listing.into_inner())
}
