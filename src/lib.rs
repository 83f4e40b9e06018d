//! # vs-layout-clean
//!
//! Shrinks an offline installer layout by moving superseded package versions
//! out of it.
//!
//! ## Overview
//!
//! An installer layout holds one directory per package, named after the
//! package identity:
//!
//! ```text
//! Microsoft.VisualCpp.Tools.HostX64.TargetX64,version=14.29.30133,chip=x64
//! Microsoft.VisualCpp.Tools.HostX64.TargetX64,version=14.34.31933,chip=x64
//! ```
//!
//! Every layout update adds new versions and leaves the old ones behind.
//! vs-layout-clean groups the packages by identity (name, language, machine
//! and product architecture), keeps the highest version of each group and
//! moves the rest into another directory. Nothing is deleted, so a mistaken
//! run is undone by moving the directories back.
//!
//! ## Architecture
//!
//! The decision logic is pure and has no I/O:
//!
//! - [`version`]: four-part numeric versions and their ordering
//! - [`package`]: the parsed package record and its identity key
//! - [`parser`]: package directory name decomposition
//! - [`resolver`]: grouping and keep/deprecated selection
//!
//! Around it sit the I/O pieces:
//!
//! - [`discovery`]: lists the package directories of a layout
//! - [`relocate`]: moves deprecated packages, with dry-run support
//! - [`cli`]: command-line interface definitions using clap
//! - [`commands`]: the `scan` and `clean` commands
//! - [`error`]: error types with thiserror + miette
//!
//! ## Usage
//!
//! ```bash
//! # See what would be moved
//! vs-layout-clean scan D:/vslayout -v
//!
//! # Move superseded packages into an empty directory on the same volume
//! vs-layout-clean clean D:/vslayout D:/vslayout-old
//! ```
//!
//! ## Library Usage
//!
//! ```
//! use vs_layout_clean::parser::parse_package_names;
//! use vs_layout_clean::resolver::{partition_packages, resolve_deprecated};
//!
//! let packages = parse_package_names([
//!     "Microsoft.Build,version=17.0.1",
//!     "Microsoft.Build,version=17.2.0",
//!     "garbage",
//! ]);
//! let partition = partition_packages(packages);
//! assert_eq!(partition.invalid.len(), 1);
//!
//! let deprecated = resolve_deprecated(&partition.valid);
//! assert_eq!(deprecated.len(), 1);
//! assert_eq!(deprecated[0].full_name(), "Microsoft.Build,version=17.0.1");
//! ```

pub mod cli;
pub mod commands;
pub mod discovery;
pub mod error;
pub mod package;
pub mod parser;
pub mod relocate;
pub mod resolver;
pub mod version;

// Internal modules
mod logging;
