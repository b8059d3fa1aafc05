//! relnotes: print the newest changelog section as release notes.

use clap::Parser;
use relnotes::{cli::Args, config, run, Options};
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut options = Options::from(config::Config::load());
    args.apply(&mut options);

    // Fatal errors bypass the log filter so RUST_LOG can't silence them
    match run(&options, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
