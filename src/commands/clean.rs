//! Clean command: move deprecated packages out of a layout.

use std::fs;
use std::path::Path;

use crate::commands::scan::{analyze, report};
use crate::error::{CleanError, Result};
use crate::logging::Logger;
use crate::relocate::{RelocateOptions, RelocationStats, format_size, relocate_packages};

pub struct Clean<'a> {
    layout: &'a Path,
    destination: &'a Path,
    dry_run: bool,
    verbose: u8,
    quiet: bool,
}

#[derive(Default)]
pub struct CleanBuilder<'a> {
    layout: Option<&'a Path>,
    destination: Option<&'a Path>,
    dry_run: bool,
    verbose: u8,
    quiet: bool,
}

impl<'a> CleanBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn layout(mut self, path: &'a Path) -> Self {
        self.layout = Some(path);
        self
    }

    pub fn destination(mut self, path: &'a Path) -> Self {
        self.destination = Some(path);
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

    pub fn build(self) -> Result<Clean<'a>> {
        Ok(Clean {
            layout: self
                .layout
                .ok_or_else(|| CleanError::ConfigError("layout is required".to_string()))?,
            destination: self
                .destination
                .ok_or_else(|| CleanError::ConfigError("destination is required".to_string()))?,
            dry_run: self.dry_run,
            verbose: self.verbose,
            quiet: self.quiet,
        })
    }
}

impl<'a> Clean<'a> {
    pub fn builder<'b>() -> CleanBuilder<'b> {
        CleanBuilder::new()
    }

    /// Execute the clean command.
    ///
    /// Both directories must already exist and be distinct. Deprecated
    /// packages keep their directory names in the destination.
    pub fn run(self) -> Result<RelocationStats> {
        let log = Logger::new(self.verbose, self.quiet);

        if !self.layout.is_dir() {
            return Err(CleanError::LayoutNotFound(self.layout.to_path_buf()));
        }
        if !self.destination.is_dir() {
            return Err(CleanError::DestinationNotFound(
                self.destination.to_path_buf(),
            ));
        }
        if same_directory(self.layout, self.destination)? {
            return Err(CleanError::ConfigError(format!(
                "layout and destination are the same directory: {}",
                self.layout.display()
            )));
        }

        log.verbose(1, format!("Scanning layout {}", self.layout.display()));
        let analysis = analyze(self.layout)?;
        report(&log, self.layout, &analysis);

        let deprecated = analysis.deprecated();
        if deprecated.is_empty() {
            return Ok(RelocationStats::default());
        }

        let options = RelocateOptions::builder()
            .source(self.layout)
            .destination(self.destination)
            .dry_run(self.dry_run)
            .verbose(self.verbose)
            .quiet(self.quiet)
            .build()?;

        log.info(if options.dry_run() {
            "Planning moves (dry run)..."
        } else {
            "Moving packages..."
        });
        let stats = relocate_packages(&options, &deprecated)?;

        log.info("Clean complete:");
        log.info(format!("  Packages moved: {}", stats.packages_moved));
        log.info(format!("  Space reclaimed: {}", format_size(stats.bytes_moved)));
        log.info(format!("  Destination: {}", options.destination().display()));
        if options.dry_run() {
            log.info("  (DRY RUN - no packages were actually moved)");
        }

        Ok(stats)
    }
}

fn same_directory(a: &Path, b: &Path) -> Result<bool> {
    let canonical = |path: &Path| {
        fs::canonicalize(path).map_err(|source| CleanError::IoError {
            path: path.to_path_buf(),
            source,
        })
    };
    Ok(canonical(a)? == canonical(b)?)
}
