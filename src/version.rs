//! Four-part numeric package versions.
//!
//! Installer packages carry versions of the form
//! `major[.minor[.build[.revision]]]`. Missing trailing components are
//! zero, so `16.4` and `16.4.0.0` compare equal.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Highest value a single component may hold.
///
/// Components are non-negative 32-bit signed integers in the installer's
/// naming convention.
pub const MAX_COMPONENT: u32 = i32::MAX as u32;

/// Maximum number of dot-separated components.
pub const MAX_COMPONENTS: usize = 4;

/// A package version, ordered lexicographically over
/// `(major, minor, build, revision)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub build: u32,
    pub revision: u32,
}

/// Why a version string was rejected by the strict parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseVersionError {
    #[error("version has {0} components, expected 1 to 4")]
    ComponentCount(usize),
    #[error("version component '{0}' is not a non-negative integer")]
    InvalidComponent(String),
}

impl Version {
    pub const fn new(major: u32, minor: u32, build: u32, revision: u32) -> Self {
        Self {
            major,
            minor,
            build,
            revision,
        }
    }
}

impl FromStr for Version {
    type Err = ParseVersionError;

    /// Strict parse: 1 to 4 components, each made only of ASCII digits.
    ///
    /// No whitespace, signs or empty components are accepted; the lenient
    /// handling of sloppy versions lives in the package-name parser.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() > MAX_COMPONENTS {
            return Err(ParseVersionError::ComponentCount(parts.len()));
        }

        let mut components = [0u32; MAX_COMPONENTS];
        for (slot, part) in components.iter_mut().zip(&parts) {
            *slot = parse_component(part)?;
        }

        let [major, minor, build, revision] = components;
        Ok(Self::new(major, minor, build, revision))
    }
}

fn parse_component(part: &str) -> Result<u32, ParseVersionError> {
    let invalid = || ParseVersionError::InvalidComponent(part.to_string());

    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    part.parse::<u32>()
        .ok()
        .filter(|value| *value <= MAX_COMPONENT)
        .ok_or_else(invalid)
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}.{}",
            self.major, self.minor, self.build, self.revision
        )
    }
}
