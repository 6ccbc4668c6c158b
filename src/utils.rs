use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Suffix appended to the file stem of the rewritten file.
pub(crate) const OUTPUT_SUFFIX: &str = "_abrv";

/// Derives the output path from the input path: same directory and
/// extension, file stem suffixed with `_abrv`.
///
/// # Arguments
///
/// * `input` - Path of the BibTeX file being rewritten
pub(crate) fn abbreviated_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.file_stem().unwrap_or_default());
    name.push(OUTPUT_SUFFIX);
    if let Some(extension) = input.extension() {
        name.push(".");
        name.push(extension);
    }
    input.with_file_name(name)
}
