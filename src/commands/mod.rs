//! Implementation of vs-layout-clean subcommands.
//!
//! `mod.rs` is a thin dispatcher; command logic lives in `scan` and `clean`.
//!
//! # Example
//!
//! ```no_run
//! use clap::Parser;
//! use vs_layout_clean::cli::Cli;
//! use vs_layout_clean::commands;
//!
//! let cli = Cli::parse();
//! if let Err(e) = commands::execute(&cli) {
//!     eprintln!("Error: {e:?}");
//! }
//! ```

use crate::cli::{Cli, Commands};
use crate::error::Result;

pub(crate) mod clean;
pub(crate) mod scan;

pub use clean::{Clean, CleanBuilder};
pub use scan::{Analysis, analyze, scan};


/// Execute commands based on the parsed CLI arguments.
pub fn execute(cli: &Cli) -> Result<()> {
    let quiet = cli.global_opts().quiet();
    let verbose = if quiet {
        0
    } else {
        cli.global_opts().verbose()
    };

    match cli.command() {
        Commands::Scan { layout } => scan(layout, verbose, quiet).map(|_| ()),
        Commands::Clean {
            layout,
            destination,
            dry_run,
        } => Clean::builder()
            .layout(layout)
            .destination(destination)
            .dry_run(*dry_run)
            .verbose(verbose)
            .quiet(quiet)
            .build()?
            .run()
            .map(|_| ()),
    }
}
