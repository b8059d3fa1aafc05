//! Command line arguments and how they override relnotes.toml.

use crate::Options;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "relnotes")]
#[command(about = "Print the newest changelog section as release notes", long_about = None)]
/// Arguments accepted by the `relnotes` binary.
pub struct Args {
    /// Changelog to read (defaults to CHANGELOG.md or the relnotes.toml setting)
    #[arg(value_name = "PATH")]
    pub changelog: Option<PathBuf>,

    /// Print the warning banner even if relnotes.toml disables it
    #[arg(long, overrides_with = "no_banner")]
    pub banner: bool,

    /// Omit the warning banner
    #[arg(long, overrides_with = "banner")]
    pub no_banner: bool,
}

impl Args {
    /// Override config-derived options with whatever was given on the command line.
    ///
    /// When both `--banner` and `--no-banner` are passed the last one wins.
    pub fn apply(self, options: &mut Options) {
        if let Some(changelog) = self.changelog {
            options.changelog = changelog;
        }
        if self.banner {
            options.banner = true;
        }
        if self.no_banner {
            options.banner = false;
        }
    }
}

#[cfg(test)]
#[path = "tests/cli.rs"]
mod tests;
