//! Canonical form of journal and conference names.
//!
//! Two names that differ only in case, spacing, light punctuation or the
//! BibTeX escaping of `&` normalize to the same key:
//!
//! ```
//! use bibabrv::normalize::normalize_name;
//!
//! assert_eq!(
//!     normalize_name("IEEE Trans. on Robotics \\& Automation"),
//!     normalize_name("ieee trans on robotics & automation."),
//! );
//! ```

/// Characters that are folded into a single space together with whitespace.
const SEPARATORS: [char; 4] = ['.', ',', ';', ':'];

fn is_separator(c: char) -> bool {
    c.is_whitespace() || SEPARATORS.contains(&c)
}

/// Normalizes a name for equality comparison.
///
/// - `\&` becomes `&`
/// - every run of whitespace, `.`, `,`, `;` and `:` becomes one space
/// - leading and trailing separators are dropped
/// - the result is lower-cased
///
/// Backslashes directly in front of an `&` are all dropped, so that the
/// result never contains `\&` and normalizing twice gives the same string.
pub fn normalize_name(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut gap = false;

    for c in name.chars() {
        if is_separator(c) {
            gap = true;
            continue;
        }
        if gap && !result.is_empty() {
            result.push(' ');
        }
        gap = false;

        if c == '&' {
            while result.ends_with('\\') {
                result.pop();
            }
        }
        result.push(c);
    }

    result.to_lowercase()
}
