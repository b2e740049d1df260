//! Line matcher for GNU ld map files
//!
//! Input section lines look like
//! ` .text.main     0x08000130       0x48 build/main.o`
//! (section, address, size, contributing object).

use std::fmt;
use std::io::{self, BufRead};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

static SECTION_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s+(\.\S+)\s+0x[0-9a-fA-F]+\s+(0x[0-9a-fA-F]+)\s+(.+)$")
        .expect("section line pattern")
});

/// Sections that describe the image rather than occupy memory in it.
const IGNORED_PREFIXES: [&str; 3] = [".debug", ".comment", ".ARM.attributes"];

const RAM_MARKERS: [&str; 4] = [".bss", ".data", "stack", "heap"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryType {
    Ram,
    Flash,
}

impl MemoryType {
    /// Rough guess from the section name.
    pub fn classify(section: &str) -> Self {
        if RAM_MARKERS.iter().any(|m| section.contains(m)) {
            Self::Ram
        } else {
            Self::Flash
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ram => "RAM",
            Self::Flash => "FLASH",
        }
    }
}

impl fmt::Display for MemoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pad so table columns line up
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionEntry {
    pub size: u64,
    pub name: String,
    pub file: String,
    pub memory: MemoryType,
}

/// Match one line. `None` for anything that is not a sized, non-debug
/// input section.
///
/// Sizes are read as `u64`; a size field too wide for that is treated like
/// any other unparsable line and skipped.
pub fn parse_line(line: &str) -> Option<SectionEntry> {
    let caps = SECTION_LINE.captures(line)?;
    let name = &caps[1];
    let size_hex = &caps[2];
    let file = caps[3].trim();

    let size = match u64::from_str_radix(&size_hex[2..], 16) {
        Ok(size) => size,
        Err(e) => {
            trace!(size = size_hex, "skipping unparsable size: {}", e);
            return None;
        }
    };

    if size == 0 || file.is_empty() || IGNORED_PREFIXES.iter().any(|p| name.starts_with(p)) {
        return None;
    }

    Some(SectionEntry {
        size,
        name: name.to_string(),
        file: file.to_string(),
        memory: MemoryType::classify(name),
    })
}

/// Collect every matching entry, in file order.
///
/// Invalid UTF-8 sequences are dropped from each line before matching, so a
/// stray byte never keeps a line from parsing or ends up in a name.
pub fn parse_map<R: BufRead>(reader: R) -> io::Result<Vec<SectionEntry>> {
    let mut entries = Vec::new();
    let mut skipped = 0usize;

    for line in reader.split(b'\n') {
        let line = line?;
        let line: String = line.utf8_chunks().map(|chunk| chunk.valid()).collect();

        match parse_line(line.trim_end_matches('\r')) {
            Some(entry) => entries.push(entry),
            None => skipped += 1,
        }
    }

    debug!(matched = entries.len(), skipped, "map parsed");
    Ok(entries)
}
