use std::path::Path;

use walkdir::WalkDir;

use crate::error::{CleanError, Result};

/// Package directory names found at the top level of a layout.
#[derive(Debug, Default)]
pub struct Discovery {
    /// Directory names, sorted.
    pub names: Vec<String>,
    /// Directories whose names are not valid UTF-8 and cannot be parsed.
    pub skipped_non_utf8: usize,
}

/// Lists the package directories of an installer layout.
///
/// Only first-level directories count as packages; loose files such as the
/// catalog or the bootstrapper executables are ignored. Names are returned
/// sorted, which makes tie-breaks between equal versions reproducible.
///
/// # Errors
///
/// Returns an error if:
/// - `layout` is not an existing directory
/// - A directory entry cannot be read
pub fn discover_package_names(layout: &Path) -> Result<Discovery> {
    if !layout.is_dir() {
        return Err(CleanError::LayoutNotFound(layout.to_path_buf()));
    }

    let mut discovery = Discovery::default();

    for entry in WalkDir::new(layout)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|err| CleanError::IoError {
            path: err
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| layout.to_path_buf()),
            source: err.into(),
        })?;

        // Follows symlinks so linked package folders are still seen.
        if !entry.path().is_dir() {
            continue;
        }

        match entry.file_name().to_str() {
            Some(name) => discovery.names.push(name.to_string()),
            None => discovery.skipped_non_utf8 += 1,
        }
    }

    Ok(discovery)
}
