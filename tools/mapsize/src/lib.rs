//! Size ranking for linker map files
//!
//! Pulls `section address size object` lines out of a GNU ld map, drops debug
//! and bookkeeping sections, and ranks what is left by size.

pub mod error;
pub mod parse;
pub mod report;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::debug;

pub use error::MapError;
pub use parse::{MemoryType, SectionEntry};
pub use report::{Report, Totals, DEFAULT_LIMIT};

/// Parse the map file at `path` into a ranked report.
///
/// The file is closed before this returns, on success and on error.
pub fn analyze(path: impl AsRef<Path>) -> Result<Report, MapError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(MapError::NotFound(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|e| MapError::io(path, e))?;
    debug!(path = %path.display(), "reading map file");

    let entries = parse::parse_map(BufReader::new(file)).map_err(|e| MapError::io(path, e))?;
    Ok(Report::new(entries))
}
