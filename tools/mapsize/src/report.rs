//! Ranking and the printed table

use std::fmt::Write;

use crate::parse::{MemoryType, SectionEntry};

pub const DEFAULT_LIMIT: usize = 20;

const RULE_WIDTH: usize = 85;
const FILE_COLUMN: usize = 25;

/// Names longer than this are shortened in the FILE column.
const FILE_TRUNCATE_OVER: usize = 250;
const FILE_KEEP: usize = 22;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub sections: usize,
    pub flash: u64,
    pub ram: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Largest first; equal sizes stay in file order
    pub entries: Vec<SectionEntry>,
    pub totals: Totals,
}

impl Report {
    pub fn new(mut entries: Vec<SectionEntry>) -> Self {
        entries.sort_by(|a, b| b.size.cmp(&a.size));

        let mut totals = Totals {
            sections: entries.len(),
            ..Totals::default()
        };
        for entry in &entries {
            match entry.memory {
                MemoryType::Flash => totals.flash += entry.size,
                MemoryType::Ram => totals.ram += entry.size,
            }
        }

        Self { entries, totals }
    }

    pub fn top(&self, limit: usize) -> &[SectionEntry] {
        &self.entries[..limit.min(self.entries.len())]
    }

    pub fn render(&self, limit: usize) -> String {
        let mut out = String::new();
        let rule = "-".repeat(RULE_WIDTH);

        // writing into a String never fails
        let _ = writeln!(
            out,
            "{:>8} | {:<5} | {:<width$} | {}",
            "BYTES",
            "TYPE",
            "FILE",
            "SECTION/SYMBOL",
            width = FILE_COLUMN
        );
        let _ = writeln!(out, "{}", rule);

        for entry in self.top(limit) {
            let _ = writeln!(
                out,
                "{:>8} | {:<5} | {:<width$} | {}",
                entry.size,
                entry.memory,
                display_file(&entry.file),
                entry.name,
                width = FILE_COLUMN
            );
        }

        let _ = writeln!(out, "{}", rule);
        let _ = writeln!(
            out,
            "Showing top-{} symbols ({} sections, {} bytes FLASH, {} bytes RAM).",
            limit, self.totals.sections, self.totals.flash, self.totals.ram
        );
        out
    }
}

fn display_file(file: &str) -> String {
    if file.chars().count() > FILE_TRUNCATE_OVER {
        let mut short: String = file.chars().take(FILE_KEEP).collect();
        short.push_str("..");
        short
    } else {
        file.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(size: u64, name: &str, memory: MemoryType) -> SectionEntry {
        SectionEntry {
            size,
            name: name.to_string(),
            file: "main.o".to_string(),
            memory,
        }
    }

    #[test]
    fn sorts_descending() {
        let report = Report::new(vec![
            entry(10, ".text.a", MemoryType::Flash),
            entry(500, ".text.b", MemoryType::Flash),
            entry(50, ".bss.c", MemoryType::Ram),
        ]);
        let sizes: Vec<_> = report.entries.iter().map(|e| e.size).collect();
        assert_eq!(sizes, [500, 50, 10]);
    }

    #[test]
    fn equal_sizes_keep_file_order() {
        let report = Report::new(vec![
            entry(8, ".text.first", MemoryType::Flash),
            entry(8, ".text.second", MemoryType::Flash),
        ]);
        assert_eq!(report.entries[0].name, ".text.first");
        assert_eq!(report.entries[1].name, ".text.second");
    }

    #[test]
    fn totals_cover_all_entries() {
        let report = Report::new(vec![
            entry(10, ".text.a", MemoryType::Flash),
            entry(500, ".rodata.b", MemoryType::Flash),
            entry(50, ".bss.c", MemoryType::Ram),
        ]);
        assert_eq!(
            report.totals,
            Totals {
                sections: 3,
                flash: 510,
                ram: 50
            }
        );
    }

    #[test]
    fn top_clamps_to_available() {
        let report = Report::new(vec![entry(1, ".text", MemoryType::Flash)]);
        assert_eq!(report.top(20).len(), 1);
        assert!(report.top(0).is_empty());
    }

    #[test]
    fn renders_rows() {
        let report = Report::new(vec![
            entry(256, ".bss.buffer", MemoryType::Ram),
            entry(4096, ".text.main", MemoryType::Flash),
        ]);
        let text = report.render(1);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "   BYTES | TYPE  | FILE                      | SECTION/SYMBOL");
        assert_eq!(lines[1], "-".repeat(85));
        assert_eq!(lines[2], "    4096 | FLASH | main.o                    | .text.main");
        assert_eq!(lines[3], "-".repeat(85));
        assert_eq!(
            lines[4],
            "Showing top-1 symbols (2 sections, 4096 bytes FLASH, 256 bytes RAM)."
        );
    }

    #[test]
    fn shortens_only_very_long_file_names() {
        let long = "x".repeat(251);
        assert_eq!(display_file(&long), format!("{}..", "x".repeat(22)));

        let fits = "y".repeat(250);
        assert_eq!(display_file(&fits), fits);
    }
}
