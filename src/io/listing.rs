//! Listing output: a `std::io::Write` wrapper that numbers lines on the fly.
//!
//! `ListingWriter` mirrors every byte it is given into the inner writer and
//! inserts a `(N) ` marker immediately after each newline, plus one `(1) `
//! before the very first payload byte. The header line and the markers are
//! bookkeeping around the payload; the payload itself passes through
//! unmodified, so stripping header and markers from the result reconstructs
//! the original bytes exactly.

use std::io::{self, Write};

use memchr::memchr;

const LF: u8 = b'\n';

/// A `std::io::Write` wrapper that copies bytes through while labeling each
/// upcoming line with its 1-based number.
///
/// The counter is the number of the line about to be written, not the line
/// just completed: input ending in a newline gets a trailing marker for the
/// line that never arrives.
pub struct ListingWriter<W> {
    inner: W,
    /// Number of the line the next payload byte belongs to.
    line: u64,
    /// Set once the first payload byte has been seen; gates the `(1) ` marker.
    started: bool,
    bytes: u64,
}

impl<W: Write> ListingWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            line: 1,
            started: false,
            bytes: 0,
        }
    }

    /// Write the `**********<source_name>.lis**********` header line.
    ///
    /// The caller decides when; the copy engine emits it before any payload.
    pub fn write_header(&mut self, source_name: &str) -> io::Result<()> {
        writeln!(self.inner, "**********{}.lis**********", source_name)
    }

    fn write_marker(&mut self) -> io::Result<()> {
        write!(self.inner, "({}) ", self.line)
    }

    /// Number of the line the next payload byte would belong to.
    pub fn current_line(&self) -> u64 {
        self.line
    }

    /// Count of `(N) ` markers emitted so far; zero until payload arrives.
    pub fn lines_numbered(&self) -> u64 {
        if self.started { self.line } else { 0 }
    }

    /// Payload bytes copied through, header and markers excluded.
    pub fn payload_bytes(&self) -> u64 {
        self.bytes
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for ListingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        if !self.started {
            self.started = true;
            self.write_marker()?;
        }

        let mut done = 0;
        while done < buf.len() {
            match memchr(LF, &buf[done..]) {
                Some(i) => {
                    // Mirror up to and including the newline, then label the
                    // next line.
                    let upto = done + i + 1;
                    self.inner.write_all(&buf[done..upto])?;
                    self.line += 1;
                    self.write_marker()?;
                    done = upto;
                }
                None => {
                    self.inner.write_all(&buf[done..])?;
                    done = buf.len();
                }
            }
        }

        self.bytes += buf.len() as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
