//! Locating the newest release in a changelog.
//!
//! Only two markers matter: the first occurrence of `## ` opens the section,
//! and the first line after it starting with `# ` closes it. Nothing else about
//! the document structure is interpreted.

use crate::error::{Error, Result};
use crate::section::Section;
use once_cell::sync::Lazy;
use regex::Regex;

/// Opening marker, matched anywhere in the text.
pub const SECTION_MARKER: &str = "## ";

static RELEASE_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^# ").unwrap());

/// Byte offsets of the newest section as `(start, end)`.
///
/// `start` is the first occurrence of `## `. `end` is the start of the first
/// line beginning with `# ` in the text from `start` onward, or the length of
/// the text if there is none.
///
/// # Errors
///
/// Returns [`Error::MissingSection`] if the text contains no `## `.
pub fn find_section(text: &str) -> Result<(usize, usize)> {
    let start = text.find(SECTION_MARKER).ok_or(Error::MissingSection)?;
    let end = RELEASE_HEADING
        .find(&text[start..])
        .map_or(text.len(), |m| start + m.start());
    Ok((start, end))
}

/// Extract the newest section with surrounding whitespace trimmed.
///
/// # Errors
///
/// Returns [`Error::MissingSection`] if the text contains no `## `.
pub fn extract_section(text: &str) -> Result<Section<'_>> {
    let (byte_start, byte_end) = find_section(text)?;
    Ok(Section {
        byte_start,
        byte_end,
        body: text[byte_start..byte_end].trim(),
    })
}

#[cfg(test)]
#[path = "tests/extract.rs"]
mod tests;
