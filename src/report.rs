//! Statistics of a rewrite pass.
//!
//! ```
//! use bibabrv::{JournalMap, report::Report, rewrite::rewrite_fields};
//!
//! let input = "@article{a, journal = {Nature}}\n@book{b, title = {Stuff}}";
//! let rewrite = rewrite_fields(input, &JournalMap::new());
//! let report = Report::tally(input, &rewrite);
//!
//! assert_eq!(report.total_entries, 2);
//! assert_eq!(report.target_fields, 1);
//! assert_eq!(report.unmatched, vec!["Nature"]);
//! ```

use std::fmt;
use std::sync::LazyLock;

use itertools::Itertools;
use serde::Serialize;

use crate::regex::Regex;
use crate::rewrite::{Rewrite, count_fields};

/// Start of a BibTeX entry, e.g. `@article{`.
static ENTRY_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"@\w+\s*\{").unwrap());

/// Counts of one run, ready to print or serialize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Entries of any type, `@string` and `@comment` blocks included.
    pub total_entries: usize,
    pub journal_fields: usize,
    pub booktitle_fields: usize,
    /// `journal_fields + booktitle_fields`
    pub target_fields: usize,
    /// Fields that received an abbreviation.
    pub modified: usize,
    /// Distinct names without an abbreviation, sorted.
    pub unmatched: Vec<String>,
}

impl Report {
    /// Builds the report for `input` and the result of rewriting it.
    ///
    /// Entries and fields are counted on the original input, independently
    /// of which fields were matched.
    pub fn tally(input: &str, rewrite: &Rewrite) -> Self {
        let (journal_fields, booktitle_fields) = count_fields(input);
        Self {
            total_entries: count_entries(input),
            journal_fields,
            booktitle_fields,
            target_fields: journal_fields + booktitle_fields,
            modified: rewrite.modified,
            unmatched: rewrite
                .unmatched
                .iter()
                .sorted()
                .dedup()
                .cloned()
                .collect(),
        }
    }

    pub fn unmatched_count(&self) -> usize {
        self.unmatched.len()
    }
}

/// Number of `@type{` entry markers in `text`.
pub fn count_entries(text: &str) -> usize {
    ENTRY_REGEX.find_iter(text).count()
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BibTeX journal/conference abbreviation finished")?;
        writeln!(f, "  - Total entries (all types): {}", self.total_entries)?;
        writeln!(f, "  - journal/booktitle fields: {}", self.target_fields)?;
        writeln!(f, "  - Fields abbreviated: {}", self.modified)?;
        write!(f, "  - Unmatched names: {}", self.unmatched_count())?;

        if !self.unmatched.is_empty() {
            writeln!(f)?;
            writeln!(f)?;
            write!(f, "No abbreviation found for:")?;
            for name in &self.unmatched {
                writeln!(f)?;
                write!(f, "   - {}", name)?;
            }
        }
        Ok(())
    }
}
