//! The one-pass streaming copy from an input file to a numbered listing.
//!
//! The engine opens both files itself and classifies every failure into one
//! of the four I/O-stage errors. Error precedence is deliberate and mirrors
//! the tool's long-standing behavior: write errors are latched while the
//! input keeps draining, and a read error observed afterwards wins over the
//! latched write error. Callers that need the one-value run outcome go
//! through `api`.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::io::listing::ListingWriter;
use crate::types::CopySummary;

/// Chunk size for the read loop.
pub const DEFAULT_BUF_SIZE: usize = 8192;

/// Copy `input` into `output` as a numbered listing.
///
/// The output is created or truncated, receives the header line naming
/// `input`, then the input's bytes with a `(N) ` marker after every newline
/// and one `(1) ` before the first byte of a non-empty input. An empty input
/// produces only the header line.
pub fn copy_to_listing(input: &Path, output: &Path) -> Result<CopySummary> {
    copy_to_listing_with_buffer_size(input, output, DEFAULT_BUF_SIZE)
}

/// Like [`copy_to_listing`] with an explicit read-chunk size.
pub fn copy_to_listing_with_buffer_size(
    input: &Path,
    output: &Path,
    buf_size: usize,
) -> Result<CopySummary> {
    let mut infile = File::open(input).map_err(|e| Error::OpenInput {
        path: input.to_path_buf(),
        source: e,
    })?;

    // The output is only touched once the input could be opened.
    let outfile = match File::create(output) {
        Ok(f) => f,
        Err(e) => {
            // No reads have happened yet, so the input-side health check
            // that normally runs last has nothing to report; the input
            // handle still closes on this path.
            return Err(Error::OpenOutput {
                path: output.to_path_buf(),
                source: e,
            });
        }
    };
    let mut listing = ListingWriter::new(BufWriter::new(outfile));

    // Write errors are latched rather than returned: the input keeps
    // draining so a read error can still be observed. The read check runs
    // last and overrides a latched write error.
    let mut write_err: Option<std::io::Error> = None;
    let mut read_err: Option<std::io::Error> = None;

    if let Err(e) = listing.write_header(&input.to_string_lossy()) {
        write_err = Some(e);
    }

    // A zero-sized buffer would read nothing and mistake the input for empty.
    let mut buf = vec![0u8; buf_size.max(1)];
    loop {
        match infile.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => {
                if write_err.is_none() {
                    if let Err(e) = listing.write_all(&buf[..n]) {
                        write_err = Some(e);
                    }
                }
            }
            Err(e) => {
                read_err = Some(e);
                break;
            }
        }
    }

    if write_err.is_none() {
        if let Err(e) = listing.flush() {
            write_err = Some(e);
        }
    }

    let summary = CopySummary {
        lines: listing.lines_numbered(),
        bytes: listing.payload_bytes(),
    };

    if let Some(e) = read_err {
        if let Some(we) = write_err {
            warn!(write_error = %we, "write error superseded by read error");
        }
        return Err(Error::Read {
            path: input.to_path_buf(),
            source: e,
        });
    }
    if let Some(e) = write_err {
        return Err(Error::Write {
            path: output.to_path_buf(),
            source: e,
        });
    }

    debug!(
        lines = summary.lines,
        bytes = summary.bytes,
        "listing copy complete"
    );
    Ok(summary)
}
