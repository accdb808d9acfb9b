//! CLAHE CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, run the batch, and exit
//! with a non-zero status on fatal setup errors. Per-image failures are
//! logged and never abort the run. For programmatic use, prefer the library
//! API (`clahe::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
