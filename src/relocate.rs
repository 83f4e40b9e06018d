//! Moving deprecated packages out of a layout.
//!
//! Packages are moved with [`std::fs::rename`], never copied or deleted. All
//! destinations are checked before the first move, so an occupied
//! destination aborts the run with the layout untouched.

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use walkdir::WalkDir;

use crate::error::{CleanError, Result};
use crate::logging::Logger;
use crate::package::PackageInfo;

/// Where packages move from and to, and how loudly.
#[derive(Debug, Clone)]
pub struct RelocateOptions {
    source: PathBuf,
    destination: PathBuf,
    dry_run: bool,
    verbose: u8,
    quiet: bool,
}

#[derive(Debug, Default)]
pub struct RelocateOptionsBuilder {
    source: Option<PathBuf>,
    destination: Option<PathBuf>,
    dry_run: bool,
    verbose: u8,
    quiet: bool,
}

/// Outcome of a relocation run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RelocationStats {
    /// Packages moved, or that would be moved in a dry run.
    pub packages_moved: usize,
    /// Total size of those packages.
    pub bytes_moved: u64,
}

impl RelocateOptions {
    pub fn builder() -> RelocateOptionsBuilder {
        RelocateOptionsBuilder::default()
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}

impl RelocateOptionsBuilder {
    /// The layout directory holding the packages.
    pub fn source(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = Some(path.into());
        self
    }

    /// The directory receiving deprecated packages.
    pub fn destination(mut self, path: impl Into<PathBuf>) -> Self {
        self.destination = Some(path.into());
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn verbose(mut self, verbose: u8) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn build(self) -> Result<RelocateOptions> {
        Ok(RelocateOptions {
            source: self
                .source
                .ok_or_else(|| CleanError::ConfigError("source is required".to_string()))?,
            destination: self
                .destination
                .ok_or_else(|| CleanError::ConfigError("destination is required".to_string()))?,
            dry_run: self.dry_run,
            verbose: self.verbose,
            quiet: self.quiet,
        })
    }
}

struct PlannedMove<'a> {
    package: &'a PackageInfo,
    from: PathBuf,
    to: PathBuf,
}

/// Move each package directory from the source into the destination,
/// keeping its directory name.
pub fn relocate_packages(
    options: &RelocateOptions,
    packages: &[&PackageInfo],
) -> Result<RelocationStats> {
    let log = Logger::new(options.verbose, options.quiet);

    let plan: Vec<PlannedMove<'_>> = packages
        .iter()
        .copied()
        .map(|package| PlannedMove {
            package,
            from: options.source.join(package.full_name()),
            to: options.destination.join(package.full_name()),
        })
        .collect();

    if let Some(conflict) = plan.iter().find(|planned| occupied(&planned.to)) {
        return Err(CleanError::DestinationConflict(conflict.to.clone()));
    }

    let bytes_moved: u64 = plan
        .par_iter()
        .map(|planned| package_size(&planned.from))
        .sum();

    let total = plan.len();
    for (i, planned) in plan.iter().enumerate() {
        log.verbose(
            1,
            format!(
                "  {} {} of {}: {}",
                if options.dry_run { "Would move" } else { "Moving" },
                i + 1,
                total,
                planned.package.full_name()
            ),
        );

        if !options.dry_run {
            fs::rename(&planned.from, &planned.to).map_err(|source| CleanError::MoveError {
                from: planned.from.clone(),
                to: planned.to.clone(),
                source,
            })?;
        }
    }

    Ok(RelocationStats {
        packages_moved: total,
        bytes_moved,
    })
}

/// Total size of the files in the given package directories, measured in
/// parallel.
pub fn measure_packages(source: &Path, packages: &[&PackageInfo]) -> u64 {
    packages
        .par_iter()
        .map(|package| package_size(&source.join(package.full_name())))
        .sum()
}

/// Sum of file sizes below `path`. Unreadable entries count as empty.
fn package_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| entry.metadata().ok())
        .map(|metadata| metadata.len())
        .sum()
}

fn occupied(path: &Path) -> bool {
    // symlink_metadata also catches dangling links.
    fs::symlink_metadata(path).is_ok()
}

/// Format size in human-readable binary units.
pub(crate) fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KiB", "MiB", "GiB", "TiB"];

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    match unit {
        0 => format!("{bytes} B"),
        _ => format!("{size:.1} {}", UNITS[unit]),
    }
}
