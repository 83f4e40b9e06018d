//! Parsed package records and their identity key.

use std::fmt;

use crate::version::Version;

/// Processor architecture tags used in package directory names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ProcessorArchitecture {
    /// Architecture independent.
    #[default]
    Neutral,
    X86,
    X64,
    /// CIL byte code.
    Msil,
    /// Itanium.
    IA64,
}

impl ProcessorArchitecture {
    /// Resolve an architecture token, ignoring ASCII case.
    ///
    /// Unknown tokens resolve to [`ProcessorArchitecture::Neutral`].
    pub fn from_token(token: &str) -> Self {
        match token.to_ascii_lowercase().as_str() {
            "x64" => Self::X64,
            "x86" => Self::X86,
            "msil" => Self::Msil,
            "ia64" => Self::IA64,
            _ => Self::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::X86 => "x86",
            Self::X64 => "x64",
            Self::Msil => "msil",
            Self::IA64 => "ia64",
        }
    }
}

impl fmt::Display for ProcessorArchitecture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Information decoded from one package directory name.
///
/// Records are built once by
/// [`parse_package_name`](crate::parser::parse_package_name) and are not
/// modified afterwards; fields are exposed through accessors only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageInfo {
    pub(crate) full_name: String,
    pub(crate) name: String,
    pub(crate) version: Option<Version>,
    pub(crate) machine_architecture: ProcessorArchitecture,
    pub(crate) product_architecture: ProcessorArchitecture,
    pub(crate) language: String,
    pub(crate) unknown_parts: Vec<String>,
}

/// The grouping key of a package: everything except its version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackageIdentity<'a> {
    pub name: &'a str,
    pub language: &'a str,
    pub machine_architecture: ProcessorArchitecture,
    pub product_architecture: ProcessorArchitecture,
}

impl PackageInfo {
    /// The raw directory name this record was parsed from.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Package id; empty when the directory name had no bare name fragment.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> Option<Version> {
        self.version
    }

    /// The architecture the package runs on (`chip=` / `machinearch=`).
    pub fn machine_architecture(&self) -> ProcessorArchitecture {
        self.machine_architecture
    }

    /// The architecture the package targets (`productarch=`).
    pub fn product_architecture(&self) -> ProcessorArchitecture {
        self.product_architecture
    }

    /// Language tag, empty for language-neutral packages.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Fragments no classifier recognized, in input order.
    pub fn unknown_parts(&self) -> &[String] {
        &self.unknown_parts
    }

    /// A package is invalid when it has no usable name or no version.
    ///
    /// Invalid packages never take part in deprecation analysis.
    pub fn is_invalid(&self) -> bool {
        self.name.trim().is_empty() || self.version.is_none()
    }

    pub fn identity(&self) -> PackageIdentity<'_> {
        PackageIdentity {
            name: &self.name,
            language: &self.language,
            machine_architecture: self.machine_architecture,
            product_architecture: self.product_architecture,
        }
    }
}
