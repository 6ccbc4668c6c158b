//! Whole-file abbreviation.
//!
//! [`Abbreviator`] owns the abbreviation table and turns BibTeX text into
//! its abbreviated form together with a [`Report`]. [`run`] drives one
//! complete job from a [`RunConfig`]:
//!
//! 1. load the journal list
//! 2. read the input file
//! 3. rewrite in memory
//! 4. write the output file (skipped on a dry run)
//!
//! Any I/O failure aborts the job. The output file is written last, so a
//! failed run never leaves a partial result behind.

use std::path::Path;

use tracing::info;

use crate::config::RunConfig;
use crate::mapping::JournalMap;
use crate::report::Report;
use crate::rewrite::rewrite_fields;
use crate::{AbbrevError, Result};

/// Rewritten text and the statistics of the pass that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Abbreviated {
    pub text: String,
    pub report: Report,
}

/// Applies a [`JournalMap`] to BibTeX text and files.
///
/// # Examples
///
/// ```
/// use bibabrv::{Abbreviator, JournalMap};
///
/// let abbreviator = Abbreviator::new(JournalMap::parse("Nature Physics=Nat. Phys."));
/// let result = abbreviator.abbreviate("@article{x, journal = {Nature physics}}");
///
/// assert_eq!(result.text, "@article{x, journal = {Nat. Phys.}}");
/// assert_eq!(result.report.total_entries, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Abbreviator {
    map: JournalMap,
}

impl Abbreviator {
    #[must_use]
    pub fn new(map: JournalMap) -> Self {
        Self { map }
    }

    /// Creates an abbreviator from a journal list file.
    ///
    /// # Errors
    ///
    /// Returns [`AbbrevError::Read`] if the file cannot be read.
    pub fn from_journal_list(path: &Path) -> Result<Self> {
        JournalMap::load(path).map(Self::new)
    }

    /// Abbreviates the `journal` and `booktitle` fields of `input`.
    pub fn abbreviate(&self, input: &str) -> Abbreviated {
        let rewrite = rewrite_fields(input, &self.map);
        let report = Report::tally(input, &rewrite);
        Abbreviated {
            text: rewrite.text,
            report,
        }
    }

    /// Reads and abbreviates a BibTeX file without writing anything.
    ///
    /// # Errors
    ///
    /// Returns [`AbbrevError::Read`] if the file cannot be read.
    pub fn abbreviate_file(&self, input: &Path) -> Result<Abbreviated> {
        let text = std::fs::read_to_string(input).map_err(|source| AbbrevError::Read {
            path: input.to_path_buf(),
            source,
        })?;
        Ok(self.abbreviate(&text))
    }

    /// Abbreviates `input` and writes the result to `output`, replacing any
    /// existing file.
    ///
    /// # Errors
    ///
    /// Returns [`AbbrevError::Read`] or [`AbbrevError::Write`] on I/O failure.
    pub fn abbreviate_file_to(&self, input: &Path, output: &Path) -> Result<Report> {
        let abbreviated = self.abbreviate_file(input)?;
        write_output(output, &abbreviated.text)?;
        info!(
            path = %output.display(),
            modified = abbreviated.report.modified,
            "wrote abbreviated bibliography"
        );
        Ok(abbreviated.report)
    }
}

fn write_output(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).map_err(|source| AbbrevError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Runs one abbreviation job.
///
/// # Errors
///
/// Returns an error if the journal list or the input cannot be read, or the
/// output cannot be written.
pub fn run(config: &RunConfig) -> Result<Report> {
    let abbreviator = Abbreviator::from_journal_list(&config.journal_list)?;

    if config.dry_run {
        let abbreviated = abbreviator.abbreviate_file(&config.input)?;
        info!(path = %config.output.display(), "dry run, output not written");
        return Ok(abbreviated.report);
    }

    abbreviator.abbreviate_file_to(&config.input, &config.output)
}
