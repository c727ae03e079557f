#![doc = r#"
LISCOPY — a line-numbering text file copier.

This crate copies a text file into a `.lis`-style listing: a header line
naming the source file, then the source's bytes with a `(N) ` marker
inserted after every newline and once before the first byte of a non-empty
input. It powers the `liscopy` CLI and can be embedded in your own Rust
applications.

Output format
-------------
For an input `notes.txt` containing `alpha\nbeta\n`, the listing is:

```text
**********notes.txt.lis**********
(1) alpha
(2) beta
(3)
```

The counter labels the line about to be written, so input ending in a
newline gets a trailing marker for the line that never arrives. An empty
input produces only the header line. Stripping the header and every marker
reconstructs the input byte-for-byte.

Quick start: copy a file to a listing
-------------------------------------
```rust,no_run
use std::path::Path;

use liscopy::copy_to_path;

fn main() -> liscopy::Result<()> {
    let summary = copy_to_path(Path::new("notes.txt"), Path::new("notes.lis"))?;
    println!("numbered {} lines ({} bytes)", summary.lines, summary.bytes);
    Ok(())
}
```

Outcome-flavored runs
---------------------
One run produces exactly one [`Outcome`], whose numeric value is the CLI's
exit status: 0 success, 1 usage error, 2 input-open failure, 3 output-open
failure, 4 write failure, 5 read failure. The mapping is stable.

```rust,no_run
use std::path::Path;

use liscopy::copy_file;

fn main() {
    let outcome = copy_file(Path::new("in.txt"), Path::new("out.lis"));
    std::process::exit(outcome.exit_code() as i32);
}
```

In-memory listings
------------------
```rust
use liscopy::render_listing;

fn main() -> std::io::Result<()> {
    let listing = render_listing(b"alpha\nbeta\n", "notes.txt")?;
    assert_eq!(
        listing,
        b"**********notes.txt.lis**********\n(1) alpha\n(2) beta\n(3) "
    );
    Ok(())
}
```

Error handling
--------------
Fallible functions return `liscopy::Result<T>`; match on [`Error`] to branch
on the failing stage, or use [`Error::outcome`] / [`copy_file`] to collapse
a run to its single outcome.

```rust,no_run
use std::path::Path;

use liscopy::{Error, copy_to_path};

fn main() {
    match copy_to_path(Path::new("missing.txt"), Path::new("out.lis")) {
        Ok(summary) => println!("{} lines", summary.lines),
        Err(Error::OpenInput { path, .. }) => eprintln!("no such input: {}", path.display()),
        Err(other) => eprintln!("copy failed: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`types`] — [`Outcome`] and [`CopySummary`].
- [`io`] — the [`ListingWriter`] building block.
- [`report`] — user-facing confirmation and diagnostic rendering.
- [`error`] — crate-level [`Error`] and [`Result`].
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod report;
pub mod types;

// Curated public API surface
// Types
pub use error::{Error, Result};
pub use types::{CopySummary, Outcome};

// High-level API re-exports
pub use api::{copy_file, copy_to_path, render_listing};
pub use io::listing::ListingWriter;
