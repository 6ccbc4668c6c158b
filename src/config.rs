//! Settings of a single run.
//!
//! ```
//! use bibabrv::RunConfig;
//! use std::path::PathBuf;
//!
//! let config = RunConfig::new(
//!     Some(PathBuf::from("paper/refs.bib")),
//!     Some(PathBuf::from("journal_list.txt")),
//!     None,
//! )
//! .unwrap();
//! assert_eq!(config.output, PathBuf::from("paper/refs_abrv.bib"));
//! ```

use std::path::{Path, PathBuf};

use crate::utils::abbreviated_path;
use crate::{AbbrevError, Result};

/// File name of the journal list looked up next to the executable.
pub const JOURNAL_LIST_FILE: &str = "journal_list.txt";

/// Resolved paths and switches for [`run`](crate::run).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// BibTeX file to read.
    pub input: PathBuf,
    /// Abbreviation table to load.
    pub journal_list: PathBuf,
    /// File to write the rewritten text to.
    pub output: PathBuf,
    /// Compute the report without writing `output`.
    pub dry_run: bool,
}

impl RunConfig {
    /// Resolves the run settings.
    ///
    /// * `input` - BibTeX file; required and must not be empty
    /// * `journal_list` - table path, defaults to [`JOURNAL_LIST_FILE`] next
    ///   to the running executable
    /// * `output` - output path, defaults to `<stem>_abrv.<ext>` next to `input`
    ///
    /// # Errors
    ///
    /// [`AbbrevError::MissingInput`] when no input path is given, or an error
    /// when the executable location cannot be determined for the default
    /// journal list.
    pub fn new(
        input: Option<PathBuf>,
        journal_list: Option<PathBuf>,
        output: Option<PathBuf>,
    ) -> Result<Self> {
        let input = input
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or(AbbrevError::MissingInput)?;
        let journal_list = match journal_list {
            Some(path) => path,
            None => default_journal_list()?,
        };
        let output = output.unwrap_or_else(|| abbreviated_path(&input));

        Ok(Self {
            input,
            journal_list,
            output,
            dry_run: false,
        })
    }

    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// The journal list shipped alongside the executable.
pub fn default_journal_list() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    journal_list_beside(&exe)
}

fn journal_list_beside(exe: &Path) -> Result<PathBuf> {
    exe.parent()
        .map(|dir| dir.join(JOURNAL_LIST_FILE))
        .ok_or_else(|| {
            AbbrevError::JournalList(format!("{} has no parent directory", exe.display()))
        })
}
