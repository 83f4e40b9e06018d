//! Scan command: analyze a layout and report, without touching it.

use std::path::Path;

use crate::discovery::discover_package_names;
use crate::error::Result;
use crate::logging::Logger;
use crate::package::PackageInfo;
use crate::parser::parse_package_names;
use crate::relocate::{format_size, measure_packages};
use crate::resolver::{Partition, Supersession, partition_packages, resolve, resolve_deprecated};

/// Everything known about a layout after parsing its package names.
#[derive(Debug, Default)]
pub struct Analysis {
    /// Number of package directories found.
    pub discovered: usize,
    /// Directories skipped because their names are not UTF-8.
    pub skipped_non_utf8: usize,
    pub partition: Partition,
}

impl Analysis {
    pub fn invalid(&self) -> &[PackageInfo] {
        &self.partition.invalid
    }

    /// Identity groups with more than one version, with their survivor.
    pub fn supersessions(&self) -> Vec<Supersession<'_>> {
        resolve(&self.partition.valid)
    }

    /// Packages that a clean would move out of the layout.
    pub fn deprecated(&self) -> Vec<&PackageInfo> {
        resolve_deprecated(&self.partition.valid)
    }
}

/// Discover, parse and classify the packages of a layout.
pub fn analyze(layout: &Path) -> Result<Analysis> {
    let discovery = discover_package_names(layout)?;
    let discovered = discovery.names.len();
    let packages = parse_package_names(&discovery.names);

    Ok(Analysis {
        discovered,
        skipped_non_utf8: discovery.skipped_non_utf8,
        partition: partition_packages(packages),
    })
}

/// Executes the scan command.
pub fn scan(layout: &Path, verbose: u8, quiet: bool) -> Result<Analysis> {
    let log = Logger::new(verbose, quiet);
    log.verbose(1, format!("Scanning layout {}", layout.display()));

    let analysis = analyze(layout)?;
    report(&log, layout, &analysis);

    Ok(analysis)
}

/// Print the package counts shared by `scan` and `clean`.
pub(crate) fn report(log: &Logger, layout: &Path, analysis: &Analysis) {
    log.info(format!("Found existing: {} packages", analysis.discovered));

    if analysis.skipped_non_utf8 > 0 {
        log.warn(format!(
            "Skipped {} package director{} with non-UTF-8 names",
            analysis.skipped_non_utf8,
            if analysis.skipped_non_utf8 == 1 { "y" } else { "ies" }
        ));
    }

    let invalid = analysis.invalid();
    if !invalid.is_empty() {
        log.info(format!("Found invalid: {} packages", invalid.len()));
        for package in invalid {
            log.verbose(1, format!("  {}", package.full_name()));
            if !package.unknown_parts().is_empty() {
                log.verbose(
                    2,
                    format!("    unrecognized: {}", package.unknown_parts().join(", ")),
                );
            }
        }
    }

    let supersessions = analysis.supersessions();
    let deprecated: Vec<&PackageInfo> = supersessions
        .iter()
        .flat_map(|supersession| supersession.deprecated.iter().copied())
        .collect();

    if deprecated.is_empty() {
        log.info("No deprecated packages found.");
        return;
    }

    log.info(format!(
        "Found deprecated: {} packages ({})",
        deprecated.len(),
        format_size(measure_packages(layout, &deprecated))
    ));

    for supersession in &supersessions {
        let kept = supersession
            .kept
            .version()
            .map(|version| version.to_string())
            .unwrap_or_default();
        for package in &supersession.deprecated {
            log.verbose(
                1,
                format!("  {} (superseded by {kept})", package.full_name()),
            );
        }
    }
}
