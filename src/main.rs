//! # vs-layout-clean CLI
//!
//! Moves superseded package versions out of an offline installer layout.
//!
//! ## Commands
//!
//! - **scan**: Report existing, invalid and deprecated packages
//! - **clean**: Move deprecated packages into another directory
//!
//! ## Quick Start
//!
//! ```bash
//! vs-layout-clean scan D:/vslayout
//! vs-layout-clean clean D:/vslayout D:/vslayout-old --dry-run
//! vs-layout-clean clean D:/vslayout D:/vslayout-old
//! ```
//!
//! ## Environment Variables
//!
//! - `VS_LAYOUT_CLEAN_VERBOSE`: Enable verbose output
//! - `VS_LAYOUT_CLEAN_QUIET`: Silence all output except errors
//! - `VS_LAYOUT_CLEAN_DRY_RUN`: Never move anything during `clean`

use std::io::IsTerminal;

use clap::Parser;
use vs_layout_clean::cli::Cli;

fn main() -> miette::Result<()> {
    miette::set_panic_hook();

    // Plain output when stderr is redirected to a log
    if std::io::stderr().is_terminal() {
        miette::set_hook(Box::new(|_| {
            Box::new(
                miette::GraphicalReportHandler::new()
                    .with_theme(miette::GraphicalTheme::unicode_nocolor())
                    .with_context_lines(3),
            )
        }))?;
    } else {
        miette::set_hook(Box::new(|_| {
            Box::new(
                miette::GraphicalReportHandler::new()
                    .with_theme(miette::GraphicalTheme::none())
                    .with_context_lines(0),
            )
        }))?;
    }

    let cli = Cli::parse();

    vs_layout_clean::commands::execute(&cli).map_err(Into::into)
}
