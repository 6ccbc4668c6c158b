//! Replace journal and conference names in BibTeX files with their standard
//! abbreviations.
//!
//! `bibabrv` reads a BibTeX database, looks up the value of every `journal`
//! and `booktitle` field in an abbreviation table, and writes a copy of the
//! file with the matched values replaced. All other text is left exactly as
//! it was.
//!
//! # Key Features
//!
//! - **Fuzzy lookup**: names are compared after folding case, whitespace,
//!   light punctuation (`.`, `,`, `;`, `:`) and the BibTeX `\&` escape.
//! - **Plain text table**: one `full name=abbreviation` pair per line.
//! - **Minimal diffs**: only matched fields change.
//! - **Report**: entry and field counts plus the names that had no
//!   abbreviation.
//!
//! # Basic Usage
//!
//! ```rust
//! use bibabrv::{Abbreviator, JournalMap};
//!
//! let map = JournalMap::parse(
//!     "IEEE Transactions on Robotics=IEEE Trans. Robot.\n\
//!      Journal of Applied Physics=J. Appl. Phys.",
//! );
//!
//! let input = r#"@article{smith2020,
//!   title = {Legged Locomotion},
//!   journal = {IEEE Transactions on Robotics},
//!   year = {2020}
//! }"#;
//!
//! let abbreviated = Abbreviator::new(map).abbreviate(input);
//! assert!(abbreviated.text.contains("journal = {IEEE Trans. Robot.}"));
//! assert_eq!(abbreviated.report.modified, 1);
//! println!("{}", abbreviated.report);
//! ```
//!
//! # Files
//!
//! [`run`] performs the whole job described by a [`RunConfig`]: load the
//! table, read the input, rewrite, and write `<name>_abrv.<ext>` next to the
//! input.
//!
//! # Error Handling
//!
//! The library uses a custom [`Result`] type that wraps [`AbbrevError`].
//! Only I/O problems are errors; malformed table lines and unknown names are
//! skipped and show up in the [`Report`](report::Report) instead.
//!
//! ```rust
//! use bibabrv::{AbbrevError, JournalMap};
//! use std::path::Path;
//!
//! match JournalMap::load(Path::new("missing_journal_list.txt")) {
//!     Ok(map) => println!("Loaded {} abbreviations", map.len()),
//!     Err(AbbrevError::Read { path, .. }) => eprintln!("Cannot read {}", path.display()),
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use std::path::PathBuf;

use thiserror::Error;

pub mod abbreviate;
pub mod config;
pub mod mapping;
pub mod normalize;
mod regex;
pub mod report;
pub mod rewrite;
pub mod telemetry;
mod utils;

// Reexports
pub use abbreviate::{Abbreviated, Abbreviator, run};
pub use config::RunConfig;
pub use mapping::JournalMap;
pub use report::Report;

/// A specialized Result type for abbreviation operations.
pub type Result<T> = std::result::Result<T, AbbrevError>;

/// Represents errors that can abort an abbreviation run.
#[derive(Error, Debug)]
pub enum AbbrevError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("No input file given")]
    MissingInput,

    #[error("Cannot locate the journal list: {0}")]
    JournalList(String),
}
