//! Failures that stop release notes from being produced.
//!
//! Both kinds are fatal: the binary reports them on stderr and exits non-zero
//! without writing anything to stdout.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
/// Reasons the newest changelog section could not be extracted.
pub enum Error {
    /// The changelog file is missing or could not be read as UTF-8 text.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Path that was opened.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
    /// No `## ` marker occurs anywhere in the changelog.
    #[error("no level-2 heading (`## `) found in changelog")]
    MissingSection,
    /// Writing the rendered notes to the output failed.
    #[error("failed to write release notes: {0}")]
    Write(#[from] io::Error),
}
