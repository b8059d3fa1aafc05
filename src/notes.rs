//! Rendering release notes for a tagged build.

/// Admonition printed ahead of every release body.
pub const BANNER: &str = "> [!WARNING]\n\
> Scrap now pushes new experimental LLVM builds tagged with `-llvm`. Use these with caution!";

#[must_use]
/// Assemble the notes text: a blank line, the banner, a blank line, then the
/// section body. Without a banner only the body is emitted. The result always
/// ends with a single newline.
pub fn render_notes(banner: Option<&str>, body: &str) -> String {
    match banner {
        Some(banner) => format!("\n{banner}\n\n{body}\n"),
        None => format!("{body}\n"),
    }
}

#[cfg(test)]
#[path = "tests/notes.rs"]
mod tests;
