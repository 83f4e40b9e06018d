//! Deprecated-version resolution.
//!
//! Packages sharing a [`PackageIdentity`] are versions of the same thing.
//! Within such a group the highest version is kept and every other member is
//! deprecated. Equal versions are resolved first-come-first-kept, so the
//! order of the input is significant.

use std::collections::HashMap;

use crate::package::{PackageIdentity, PackageInfo};

/// Packages split by [`PackageInfo::is_invalid`], each bucket in input order.
#[derive(Debug, Default)]
pub struct Partition {
    pub valid: Vec<PackageInfo>,
    pub invalid: Vec<PackageInfo>,
}

/// The surviving package of an identity group and the versions it supersedes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Supersession<'a> {
    pub kept: &'a PackageInfo,
    /// Highest first; never empty.
    pub deprecated: Vec<&'a PackageInfo>,
}

pub fn partition_packages(packages: Vec<PackageInfo>) -> Partition {
    let (invalid, valid) = packages.into_iter().partition(PackageInfo::is_invalid);
    Partition { valid, invalid }
}

/// Return every package superseded by a higher version of the same identity.
///
/// Output is grouped by identity, groups in order of first appearance, and
/// each group's members in descending version order. The input must contain
/// valid packages only.
pub fn resolve_deprecated(packages: &[PackageInfo]) -> Vec<&PackageInfo> {
    resolve(packages)
        .into_iter()
        .flat_map(|supersession| supersession.deprecated)
        .collect()
}

/// Like [`resolve_deprecated`], but keeps track of which package survives
/// each group. Groups with a single member are omitted.
pub fn resolve(packages: &[PackageInfo]) -> Vec<Supersession<'_>> {
    debug_assert!(
        packages.iter().all(|package| !package.is_invalid()),
        "invalid packages must be filtered out before resolution"
    );

    group_by_identity(packages)
        .into_iter()
        .filter(|group| group.len() > 1)
        .filter_map(|mut group| {
            // Stable: equal versions keep their input order.
            group.sort_by(|a, b| b.version.cmp(&a.version));
            let mut members = group.into_iter();
            let kept = members.next()?;
            Some(Supersession {
                kept,
                deprecated: members.collect(),
            })
        })
        .collect()
}

fn group_by_identity(packages: &[PackageInfo]) -> Vec<Vec<&PackageInfo>> {
    let mut index: HashMap<PackageIdentity<'_>, usize> = HashMap::new();
    let mut groups: Vec<Vec<&PackageInfo>> = Vec::new();

    for package in packages {
        let slot = *index.entry(package.identity()).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[slot].push(package);
    }

    groups
}
