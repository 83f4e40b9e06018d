//! Command-line interface definitions for vs-layout-clean.
//!
//! This module defines the CLI structure using clap, including all subcommands
//! and their arguments. The main entry point is the [`Cli`] struct.
//!
//! # Example
//!
//! ```no_run
//! use clap::Parser;
//! use vs_layout_clean::cli::{Cli, Commands};
//!
//! let cli = Cli::parse();
//!
//! match cli.command() {
//!     Commands::Scan { layout } => println!("Scanning {}", layout.display()),
//!     Commands::Clean { dry_run, .. } => println!("Cleaning (dry run: {dry_run})"),
//! }
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::error::{CleanError, Result};

/// Main command-line interface for vs-layout-clean.
///
/// Holds the global output options and the subcommand to execute.
#[derive(Debug, Parser)]
#[command(
    name = "vs-layout-clean",
    bin_name = "vs-layout-clean",
    author,
    version,
    about = "Move superseded package versions out of an installer layout",
    long_about = None,
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    global_opts: GlobalOpts,

    #[command(subcommand)]
    command: Commands,
}

/// Global options that apply to all commands.
#[derive(Debug, Parser)]
pub struct GlobalOpts {
    /// Enable verbose output (use multiple times for more verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count, env = "VS_LAYOUT_CLEAN_VERBOSE")]
    verbose: u8,

    /// Silence all output except for errors
    #[arg(
        short,
        long,
        global = true,
        conflicts_with = "verbose",
        env = "VS_LAYOUT_CLEAN_QUIET"
    )]
    quiet: bool,
}

impl GlobalOpts {
    /// Get the verbose level
    pub fn verbose(&self) -> u8 {
        self.verbose
    }

    /// Check if quiet mode is enabled
    pub fn quiet(&self) -> bool {
        self.quiet
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Report existing, invalid and deprecated packages of a layout
    ///
    /// Reads the package directory names only; nothing is moved. Use -v to
    /// list every invalid and deprecated package, -vv to also show the name
    /// fragments that could not be recognized.
    Scan {
        /// The installer layout directory
        layout: PathBuf,
    },

    /// Move deprecated packages out of a layout
    ///
    /// For every package identity (name, language and architectures) the
    /// highest version stays in the layout. Every older copy is moved, not
    /// deleted, into the destination directory under its original name.
    ///
    /// The destination must exist, be empty of the moved names and live on
    /// the same volume as the layout.
    Clean {
        /// The installer layout directory
        layout: PathBuf,

        /// Existing directory that receives the deprecated packages
        destination: PathBuf,

        /// Show what would be moved without moving anything
        #[arg(long, env = "VS_LAYOUT_CLEAN_DRY_RUN")]
        dry_run: bool,
    },
}

impl Cli {
    /// Get the global options
    pub fn global_opts(&self) -> &GlobalOpts {
        &self.global_opts
    }

    /// Get the command
    pub fn command(&self) -> &Commands {
        &self.command
    }

    /// Create a builder for programmatic construction
    pub fn builder() -> CliBuilder {
        CliBuilder::default()
    }
}

/// Builder for [`Cli`]
#[derive(Debug, Default)]
pub struct CliBuilder {
    verbose: u8,
    quiet: bool,
    command: Option<Commands>,
}

impl CliBuilder {
    /// Set the verbose level
    pub fn verbose(mut self, level: u8) -> Self {
        self.verbose = level;
        self
    }

    /// Enable quiet mode
    pub fn quiet(mut self, enabled: bool) -> Self {
        self.quiet = enabled;
        self
    }

    /// Set the command
    pub fn command(mut self, command: Commands) -> Self {
        self.command = Some(command);
        self
    }

    /// Build the Cli instance
    pub fn build(self) -> Result<Cli> {
        let command = self
            .command
            .ok_or_else(|| CleanError::ConfigError("Command is required".to_string()))?;

        Ok(Cli {
            global_opts: GlobalOpts {
                verbose: self.verbose,
                quiet: self.quiet,
            },
            command,
        })
    }
}

#[cfg(test)]
mod tests;
