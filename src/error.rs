//! Error types for vs-layout-clean.
//!
//! This module defines the errors raised by the I/O side of the tool, using
//! `thiserror` for the definitions and `miette` for diagnostic output.
//!
//! # Error Handling Strategy
//!
//! - Only call-contract and filesystem problems are errors. A package name
//!   that cannot be parsed is *data*: it ends up in the invalid bucket or in
//!   [`PackageInfo::unknown_parts`](crate::package::PackageInfo::unknown_parts).
//! - Each variant carries a diagnostic code and, where it helps, a hint.
//! - Errors are converted to `miette::Result` in `main`.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use vs_layout_clean::error::{CleanError, Result};
//!
//! fn check_layout(path: &Path) -> Result<()> {
//!     if !path.is_dir() {
//!         return Err(CleanError::LayoutNotFound(path.to_path_buf()));
//!     }
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Error types that can occur in vs-layout-clean operations
#[derive(Error, Debug, Diagnostic)]
pub enum CleanError {
    /// The layout directory to scan does not exist or is not a directory.
    #[error("Layout directory '{0}' does not exist")]
    #[diagnostic(
        code(vs_layout_clean::layout::not_found),
        help("Pass the directory that holds the installer's package folders.")
    )]
    LayoutNotFound(
        /// The path that was expected to be a layout directory
        PathBuf,
    ),

    /// The directory that receives deprecated packages does not exist.
    ///
    /// The destination is never created implicitly so a typo cannot scatter
    /// packages into an unexpected location.
    #[error("Destination directory '{0}' does not exist")]
    #[diagnostic(
        code(vs_layout_clean::destination::not_found),
        help("Create an empty directory to receive the deprecated packages first.")
    )]
    DestinationNotFound(
        /// The missing destination path
        PathBuf,
    ),

    /// File system I/O error while enumerating or measuring packages.
    #[error("I/O error accessing '{path}'")]
    #[diagnostic(code(vs_layout_clean::io_error))]
    IoError {
        /// The path that caused the I/O error
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A deprecated package already exists in the destination directory.
    ///
    /// Raised before any package is moved, so a conflict leaves the layout
    /// untouched.
    #[error("Destination '{0}' already exists")]
    #[diagnostic(
        code(vs_layout_clean::destination::conflict),
        help("Use an empty destination directory; existing entries are never overwritten.")
    )]
    DestinationConflict(
        /// The destination entry that is in the way
        PathBuf,
    ),

    /// Moving a package directory failed.
    ///
    /// `rename` cannot cross file systems; the destination has to live on the
    /// same volume as the layout.
    #[error("Failed to move '{from}' to '{to}'")]
    #[diagnostic(
        code(vs_layout_clean::relocate::move_error),
        help("Check permissions and that both directories are on the same volume.")
    )]
    MoveError {
        /// The package directory being moved
        from: PathBuf,
        /// Where it was supposed to go
        to: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid combination of options or incomplete programmatic setup.
    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(vs_layout_clean::config::error),
        help("Check the required configuration parameters.")
    )]
    ConfigError(
        /// Description of the configuration error
        String,
    ),
}

/// Type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CleanError>;
