//! Configuration to acknowledge project preferences as well as set defaults.
//!
//! We look for a relnotes.toml in the working directory and, if present, load settings from
//! there. This provides the changelog path and whether the banner is printed.

use facet::Facet;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Name of the optional settings file, resolved against the working directory.
pub const CONFIG_FILE: &str = "relnotes.toml";

/// Changelog read when neither the settings file nor the command line names one.
pub const DEFAULT_CHANGELOG: &str = "CHANGELOG.md";

#[derive(Facet, Clone, Debug, PartialEq)]
/// Project preferences loaded from relnotes.toml or falling back to defaults.
pub struct Config {
    #[facet(default = DEFAULT_CHANGELOG.to_string())]
    /// Changelog to read, relative to the working directory.
    pub changelog: String,
    #[facet(default = true)]
    /// Print the warning admonition before the section.
    pub banner: bool,
}

impl Config {
    #[must_use]
    /// Load configuration from relnotes.toml if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, using defaults when it is absent or invalid.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            debug!("no {} found, using defaults", path.display());
            return Self::default();
        };
        Self::parse(&contents).unwrap_or_else(|| {
            warn!("ignoring unparsable {}", path.display());
            Self::default()
        })
    }

    #[must_use]
    /// Parse TOML settings; unset keys take their defaults.
    pub fn parse(contents: &str) -> Option<Self> {
        facet_toml::from_str::<Self>(contents).ok()
    }
}

impl Default for Config {
    /// Every field at its `#[facet(default)]` value.
    ///
    /// # Panics
    ///
    /// Panics if the field defaults cannot be parsed from an empty document.
    fn default() -> Self {
        facet_toml::from_str::<Self>("").expect("empty settings take field defaults")
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
