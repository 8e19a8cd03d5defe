//! Startup check that the link configuration and the boundary speak about the same regions.
//!
//! A boundary keyed by `NAME_1` and a link table written against `st_nm` values load
//! without complaint and then fail silently on every click. This pass catches that before
//! the first click.

use std::collections::BTreeSet;

use choromap_common::config::LinkMode;

use crate::boundary::BoundarySource;
use crate::error::ConfigMismatchError;
use crate::resolver::RegionLinkResolver;

/// How the link configuration covers the boundary's regions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CoverageReport {
    /// Regions with an explicit link (every region for fixed and templated links).
    pub mapped: BTreeSet<String>,
    /// Regions without an explicit link. They use the fallback when there is one.
    pub unmapped: BTreeSet<String>,
    /// Link table keys that name no region.
    pub unknown_keys: BTreeSet<String>,
    pub has_fallback: bool,
}

impl CoverageReport {
    pub fn is_complete(&self) -> bool {
        self.unmapped.is_empty() && self.unknown_keys.is_empty()
    }
}

pub fn validate(
    source: &BoundarySource,
    resolver: &RegionLinkResolver,
) -> Result<CoverageReport, ConfigMismatchError> {
    let region_ids = source.region_ids();

    let LinkMode::Table { entries, fallback } = resolver.mode() else {
        return Ok(CoverageReport {
            mapped: region_ids,
            has_fallback: true,
            ..CoverageReport::default()
        });
    };

    if entries.is_empty() {
        return match fallback {
            Some(_) => Ok(CoverageReport {
                unmapped: region_ids,
                has_fallback: true,
                ..CoverageReport::default()
            }),
            None => Err(ConfigMismatchError::EmptyTable),
        };
    }

    let keys: BTreeSet<String> = entries.keys().cloned().collect();
    let mapped: BTreeSet<String> = region_ids.intersection(&keys).cloned().collect();

    if mapped.is_empty() {
        return Err(ConfigMismatchError::Disjoint {
            key_property: source.key_property().to_string(),
            regions: region_ids.len(),
            table_keys: keys.len(),
            sample_region: region_ids.first().cloned().unwrap_or_default(),
            sample_key: keys.first().cloned().unwrap_or_default(),
        });
    }

    Ok(CoverageReport {
        unmapped: region_ids.difference(&keys).cloned().collect(),
        unknown_keys: keys.difference(&region_ids).cloned().collect(),
        mapped,
        has_fallback: fallback.is_some(),
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
