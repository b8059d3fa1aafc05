//! relnotes: print the newest changelog section as release notes.
//!
//! The changelog is read once, the span from the first `## ` marker to the next
//! `# ` heading is sliced out and trimmed, and the result is written after a
//! fixed warning banner.

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod notes;
pub mod section;

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

pub use error::{Error, Result};

#[derive(Clone, Debug)]
/// Resolved settings for a single run.
pub struct Options {
    /// Changelog file to read.
    pub changelog: PathBuf,
    /// Print the admonition ahead of the section.
    pub banner: bool,
}

impl From<config::Config> for Options {
    fn from(cfg: config::Config) -> Self {
        Self {
            changelog: PathBuf::from(cfg.changelog),
            banner: cfg.banner,
        }
    }
}

/// Read the changelog, extract its newest section and write the release notes to `out`.
///
/// Nothing is written unless extraction succeeds.
///
/// # Errors
///
/// Returns an error if the changelog cannot be read, contains no `## ` marker,
/// or the notes cannot be written.
pub fn run<W: Write>(options: &Options, out: &mut W) -> Result<()> {
    let text = fs::read_to_string(&options.changelog).map_err(|source| Error::Read {
        path: options.changelog.clone(),
        source,
    })?;
    debug!("read {} bytes from {}", text.len(), options.changelog.display());

    let section = extract::extract_section(&text)?;
    debug!(
        "newest section spans bytes {}..{} ({} bytes before trimming)",
        section.byte_start,
        section.byte_end,
        section.span_len()
    );

    let banner = options.banner.then_some(notes::BANNER);
    out.write_all(notes::render_notes(banner, section.body).as_bytes())?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "tests/run.rs"]
mod tests;
