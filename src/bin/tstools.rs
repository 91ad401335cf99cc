#![allow(clippy::print_stderr)]

use anyhow::Result;
use clap::Parser;
use std::io::{IsTerminal, Write};

use tstools::cli::args::CliArgs;
use tstools::cli::driver;

fn main() -> Result<()> {
    // Initialize tracing if TSTOOLS_LOG or RUST_LOG is set (zero cost otherwise).
    // Supports TSTOOLS_LOG_FORMAT=tree|json|text (see src/tracing_config.rs).
    tstools::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let stdout = std::io::stdout();
    let color = args.pretty.unwrap_or_else(|| stdout.is_terminal());

    let mut out = stdout.lock();
    let status = match driver::run(&args, color, &mut out) {
        Ok(status) => status,
        Err(err) => {
            out.flush()?;
            eprintln!("error: {err:#}");
            2
        }
    };
    out.flush()?;

    std::process::exit(status);
}
