//! Journal abbreviation table.
//!
//! The table is read from a plain text file with one `full name=abbreviation`
//! pair per line:
//!
//! ```text
//! IEEE Transactions on Robotics=IEEE Trans. Robot.
//! Journal of Applied Physics=J. Appl. Phys.
//! ```
//!
//! Keys are stored in their [normalized](crate::normalize::normalize_name)
//! form, so lookups tolerate differences in case, spacing and punctuation.
//!
//! # Example
//!
//! ```
//! use bibabrv::JournalMap;
//!
//! let map = JournalMap::parse("IEEE Transactions on Robotics=IEEE Trans. Robot.");
//! assert_eq!(map.lookup("ieee transactions on robotics."), Some("IEEE Trans. Robot."));
//! ```

use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info};

use crate::normalize::normalize_name;
use crate::{AbbrevError, Result};

/// Separator between the full name and the abbreviation.
const SEPARATOR: char = '=';

/// Lookup from normalized full name to abbreviation.
#[derive(Debug, Clone, Default)]
pub struct JournalMap {
    entries: HashMap<String, String>,
    /// Lines that were not a single `full=abbrev` pair.
    skipped: usize,
}

impl JournalMap {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from the lines of a mapping file.
    ///
    /// Lines without exactly one `=` are skipped. When two lines normalize
    /// to the same full name, the later one wins.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = Self::new();
        for (index, line) in lines.into_iter().enumerate() {
            let line = line.as_ref().trim();
            match split_pair(line) {
                Some((full_name, abbreviation)) => map.insert(full_name, abbreviation),
                None => {
                    if !line.is_empty() {
                        debug!(line = index + 1, content = line, "skipping mapping line");
                    }
                    map.skipped += 1;
                }
            }
        }
        map
    }

    /// Builds a table from the full text of a mapping file.
    ///
    /// `\n`, `\r\n` and a lone `\r` all end a line.
    pub fn parse(text: &str) -> Self {
        Self::from_lines(text.lines().flat_map(|line| line.split('\r')))
    }

    /// Reads and parses a mapping file.
    ///
    /// # Errors
    ///
    /// Returns [`AbbrevError::Read`] if the file is missing or unreadable.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| AbbrevError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let map = Self::parse(&text);
        info!(
            path = %path.display(),
            abbreviations = map.len(),
            skipped = map.skipped,
            "loaded journal list"
        );
        Ok(map)
    }

    /// Inserts a pair, normalizing the full name. Replaces any previous
    /// abbreviation stored under the same key.
    pub fn insert(&mut self, full_name: &str, abbreviation: &str) {
        self.entries
            .insert(normalize_name(full_name), abbreviation.to_string());
    }

    /// Looks up the abbreviation of a name as written in a citation.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.entries.get(&normalize_name(name)).map(String::as_str)
    }

    /// Number of distinct normalized names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of input lines that did not form a pair (blank lines included).
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

/// Splits a trimmed line into a trimmed `(full name, abbreviation)` pair.
fn split_pair(line: &str) -> Option<(&str, &str)> {
    let mut parts = line.split(SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(full_name), Some(abbreviation), None) => {
            Some((full_name.trim(), abbreviation.trim()))
        }
        _ => None,
    }
}
