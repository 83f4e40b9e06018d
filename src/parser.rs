//! Decomposition of package directory names.
//!
//! A package directory in an installer layout is named after the package's
//! identity, as comma-separated fragments:
//!
//! ```text
//! Microsoft.VisualCpp.Tools.HostX64.TargetX64,version=14.29.30133,chip=x64
//! Microsoft.Net.4.8.FullRedist.Resources,version=4.8.3928.1,language=de-DE
//! ```
//!
//! Each fragment is classified exactly once, in priority order (see
//! [`classify`]), and the classified fragments are folded into a
//! [`PackageInfo`]. Parsing never fails: fragments that fit no known shape
//! are kept in [`PackageInfo::unknown_parts`], and missing name or version
//! simply leave the record [invalid](PackageInfo::is_invalid).
//!
//! # Example
//!
//! ```
//! use vs_layout_clean::package::ProcessorArchitecture;
//! use vs_layout_clean::parser::parse_package_name;
//! use vs_layout_clean::version::Version;
//!
//! let info = parse_package_name("Microsoft.Build,version=17.3.1,chip=X64");
//! assert_eq!(info.name(), "Microsoft.Build");
//! assert_eq!(info.version(), Some(Version::new(17, 3, 1, 0)));
//! assert_eq!(info.machine_architecture(), ProcessorArchitecture::X64);
//! assert!(!info.is_invalid());
//! ```

use crate::package::{PackageInfo, ProcessorArchitecture};
use crate::version::{MAX_COMPONENTS, Version};

const FRAGMENT_SEPARATOR: char = ',';
const VERSION_KEY: &str = "version=";
const LANGUAGE_KEY: &str = "language=";

/// Which architecture field a key writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArchitectureField {
    Machine,
    Product,
}

// `chip=` is the older spelling of `machinearch=`.
const ARCHITECTURE_KEYS: [(&str, ArchitectureField); 3] = [
    ("chip=", ArchitectureField::Machine),
    ("machinearch=", ArchitectureField::Machine),
    ("productarch=", ArchitectureField::Product),
];

/// One classified fragment of a package directory name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'a> {
    Name(&'a str),
    Version(Version),
    Language(&'a str),
    MachineArchitecture(ProcessorArchitecture),
    ProductArchitecture(ProcessorArchitecture),
    Unknown(&'a str),
}

/// Parse a package directory name into a [`PackageInfo`].
pub fn parse_package_name(raw: &str) -> PackageInfo {
    let initial = PackageInfo {
        full_name: raw.to_string(),
        ..PackageInfo::default()
    };

    raw.split(FRAGMENT_SEPARATOR)
        .filter(|fragment| !fragment.is_empty())
        .map(classify)
        .fold(initial, absorb)
}

/// Parse every name in order.
pub fn parse_package_names<I, S>(names: I) -> Vec<PackageInfo>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| parse_package_name(name.as_ref()))
        .collect()
}

/// Classify a single fragment.
///
/// Recognizers run in a fixed order and the first match wins: bare name
/// (no `=`), `version=`, `language=`, then the architecture keys. A
/// `version=` fragment whose value cannot be read falls through and, since
/// nothing later accepts that prefix, ends up [`Fragment::Unknown`].
pub fn classify(fragment: &str) -> Fragment<'_> {
    classify_name(fragment)
        .or_else(|| classify_version(fragment))
        .or_else(|| classify_language(fragment))
        .or_else(|| classify_architecture(fragment))
        .unwrap_or(Fragment::Unknown(fragment))
}

fn absorb(mut info: PackageInfo, fragment: Fragment<'_>) -> PackageInfo {
    match fragment {
        // Last bare name wins.
        Fragment::Name(name) => info.name = name.to_string(),
        Fragment::Version(version) => info.version = Some(version),
        Fragment::Language(language) => info.language = language.to_string(),
        Fragment::MachineArchitecture(arch) => info.machine_architecture = arch,
        Fragment::ProductArchitecture(arch) => info.product_architecture = arch,
        Fragment::Unknown(part) => info.unknown_parts.push(part.to_string()),
    }
    info
}

fn classify_name(fragment: &str) -> Option<Fragment<'_>> {
    (!fragment.contains('=')).then_some(Fragment::Name(fragment))
}

fn classify_version(fragment: &str) -> Option<Fragment<'_>> {
    let value = fragment.strip_prefix(VERSION_KEY)?;
    single_value(fragment, value)
        .and_then(parse_version_value)
        .map(Fragment::Version)
}

fn classify_language(fragment: &str) -> Option<Fragment<'_>> {
    fragment.strip_prefix(LANGUAGE_KEY).map(Fragment::Language)
}

fn classify_architecture(fragment: &str) -> Option<Fragment<'_>> {
    let (value, field) = ARCHITECTURE_KEYS
        .iter()
        .find_map(|(key, field)| fragment.strip_prefix(*key).map(|value| (value, *field)))?;
    let arch = ProcessorArchitecture::from_token(single_value(fragment, value)?);

    Some(match field {
        ArchitectureField::Machine => Fragment::MachineArchitecture(arch),
        ArchitectureField::Product => Fragment::ProductArchitecture(arch),
    })
}

/// `value` if the fragment is a single non-empty `key=value` pair.
fn single_value<'a>(fragment: &str, value: &'a str) -> Option<&'a str> {
    (fragment.matches('=').count() == 1 && !value.is_empty()).then_some(value)
}

/// Read a version value, tolerating blank components and stray whitespace.
///
/// `1..3` reads as `1.0.3` and ` 2 . 1` as `2.1`; more than four components
/// are never accepted.
fn parse_version_value(value: &str) -> Option<Version> {
    if let Ok(version) = value.parse() {
        return Some(version);
    }

    let parts: Vec<&str> = value.split('.').collect();
    if parts.len() > MAX_COMPONENTS {
        return None;
    }

    let normalized = parts
        .iter()
        .map(|part| match part.trim() {
            "" => "0",
            trimmed => trimmed,
        })
        .collect::<Vec<_>>()
        .join(".");

    normalized.parse().ok()
}

#[cfg(test)]
mod tests;
