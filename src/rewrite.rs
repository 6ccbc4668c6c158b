//! Substitution of venue fields in BibTeX text.
//!
//! Only `journal` and `booktitle` fields written as `label = {value}` are
//! touched. Everything else in the text, including unmatched fields, is
//! copied through unchanged.
//!
//! # Example
//!
//! ```
//! use bibabrv::{JournalMap, rewrite::rewrite_fields};
//!
//! let map = JournalMap::parse("IEEE Transactions on Robotics=IEEE Trans. Robot.");
//! let input = "@article{key,\n  Journal={IEEE Transactions on Robotics},\n}";
//!
//! let rewrite = rewrite_fields(input, &map);
//! assert_eq!(rewrite.text, "@article{key,\n  Journal = {IEEE Trans. Robot.},\n}");
//! assert_eq!(rewrite.modified, 1);
//! ```
//!
//! A value is read up to the first `}`. Values with inner braces such as
//! `{{IEEE} Transactions}` are therefore cut short and will usually not be
//! found in the table.

use std::sync::LazyLock;

use tracing::debug;

use crate::mapping::JournalMap;
use crate::regex::{Captures, Regex};

/// `label = {value}` for the fields of interest. The value cannot contain `}`.
static FIELD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(journal|booktitle)\s*=\s*\{([^}]*)\}").unwrap());

/// Opening of a field of interest, whether or not its brace is ever closed.
static FIELD_START_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(journal|booktitle)\s*=\s*\{").unwrap());

/// Fields whose values are replaced by abbreviations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// `journal`: the periodical an article appeared in
    Journal,
    /// `booktitle`: the proceedings a paper appeared in
    Booktitle,
}

impl FieldKind {
    /// Matches a field label, ignoring case.
    ///
    /// Case is folded with Unicode rules, the same way `(?i)` does in
    /// [`FIELD_REGEX`], so every label the pattern finds is accepted here
    /// (e.g. `booKtitle` written with the Kelvin sign).
    pub fn from_label(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "journal" => Some(Self::Journal),
            "booktitle" => Some(Self::Booktitle),
            _ => None,
        }
    }

    /// The canonical lower-case label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Journal => "journal",
            Self::Booktitle => "booktitle",
        }
    }
}

/// One `journal`/`booktitle` field found in the text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOccurrence<'a> {
    pub kind: FieldKind,
    /// The label exactly as written, e.g. `Journal`.
    pub label: &'a str,
    /// Everything between the opening brace and the first closing brace.
    pub raw_value: &'a str,
}

impl<'a> FieldOccurrence<'a> {
    fn from_captures(caps: &Captures<'a>) -> Option<Self> {
        let label = caps.get(1)?.as_str();
        let raw_value = caps.get(2)?.as_str();
        Some(Self {
            kind: FieldKind::from_label(label)?,
            label,
            raw_value,
        })
    }

    /// The venue name with surrounding whitespace and stray braces removed.
    pub fn name(&self) -> &'a str {
        self.raw_value
            .trim()
            .trim_matches(|c| c == '{' || c == '}' || c == ' ')
            .trim()
    }

    /// The replacement text for this field.
    pub fn abbreviated(&self, abbreviation: &str) -> String {
        format!("{} = {{{}}}", self.label, abbreviation)
    }
}

/// Result of a rewrite pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rewrite {
    /// The rewritten text.
    pub text: String,
    /// Number of fields replaced by an abbreviation.
    pub modified: usize,
    /// Names without an abbreviation, once per occurrence, in text order.
    pub unmatched: Vec<String>,
}

/// Replaces the value of every `journal`/`booktitle` field that has an
/// abbreviation in `map`.
///
/// Matching is done against the original text in a single pass, so a
/// replacement never influences which other fields are found.
pub fn rewrite_fields(text: &str, map: &JournalMap) -> Rewrite {
    let mut modified = 0;
    let mut unmatched = Vec::new();

    let rewritten = FIELD_REGEX.replace_all(text, |caps: &Captures| {
        let Some(field) = FieldOccurrence::from_captures(caps) else {
            return caps[0].to_string();
        };
        let name = field.name();
        match map.lookup(name) {
            Some(abbreviation) => {
                modified += 1;
                field.abbreviated(abbreviation)
            }
            None => {
                debug!(field = field.kind.label(), venue = name, "no abbreviation found");
                unmatched.push(name.to_string());
                caps[0].to_string()
            }
        }
    });

    Rewrite {
        text: rewritten.into_owned(),
        modified,
        unmatched,
    }
}

/// Lists the well-formed fields of interest in `text`, in order.
#[cfg(test)]
fn find_fields(text: &str) -> Vec<FieldOccurrence<'_>> {
    FIELD_REGEX
        .captures_iter(text)
        .filter_map(|caps| FieldOccurrence::from_captures(&caps))
        .collect()
}

/// Counts the opened `journal` and `booktitle` fields, including those
/// whose closing brace is missing. Returns `(journal, booktitle)`.
pub fn count_fields(text: &str) -> (usize, usize) {
    FIELD_START_REGEX
        .captures_iter(text)
        .filter_map(|caps| caps.get(1).and_then(|m| FieldKind::from_label(m.as_str())))
        .fold((0, 0), |(journal, booktitle), kind| match kind {
            FieldKind::Journal => (journal + 1, booktitle),
            FieldKind::Booktitle => (journal, booktitle + 1),
        })
}
