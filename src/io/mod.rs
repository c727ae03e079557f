//! I/O layer for listing output.
//! Provides the `listing` writer that inserts line-number markers and the
//! header line into a byte stream.
pub mod listing;
pub use listing::ListingWriter;
