//! Section representation for an extracted changelog release.
//!
//! A section is the span of the changelog running from the first level-2
//! heading marker to the next level-1 heading. It keeps the byte coordinates
//! of that span alongside the trimmed text so callers can report where in the
//! document the notes came from.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Newest release section, borrowed from the changelog text.
pub struct Section<'a> {
    /// Byte offset of the first `## ` marker.
    pub byte_start: usize,
    /// Byte offset of the closing `# ` heading, or the document length.
    pub byte_end: usize,
    /// Text between the two offsets with surrounding whitespace removed.
    pub body: &'a str,
}

impl Section<'_> {
    #[must_use]
    /// Length in bytes of the untrimmed span.
    pub fn span_len(&self) -> usize {
        self.byte_end - self.byte_start
    }
}
