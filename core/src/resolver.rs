//! Region id → destination lookup.
//!
//! [`RegionLinkResolver`] is a pure function of its [`LinkMode`]: it never performs I/O once
//! built and returns the same [`Destination`] for the same id every time.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use choromap_common::config::LinkMode;
use choromap_common::model::destination::Destination;

use crate::error::LinkTableError;

/// Placeholder replaced by the region id in templated links.
pub const REGION_PLACEHOLDER: &str = "{region}";

#[derive(Clone, Debug)]
pub struct RegionLinkResolver {
    mode: LinkMode,
}

impl RegionLinkResolver {
    pub fn from_mode(mode: LinkMode) -> Self {
        Self { mode }
    }

    pub fn fixed(url: impl Into<String>) -> Self {
        Self::from_mode(LinkMode::Fixed { url: url.into() })
    }

    pub fn templated(template: impl Into<String>) -> Self {
        Self::from_mode(LinkMode::Templated {
            template: template.into(),
        })
    }

    pub fn table<I, K, V>(entries: I, fallback: Option<String>) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::from_mode(LinkMode::Table { entries, fallback })
    }

    pub fn mode(&self) -> &LinkMode {
        &self.mode
    }

    pub fn resolve(&self, region_id: &str) -> Destination {
        match &self.mode {
            LinkMode::Fixed { url } => Destination::FixedUrl(url.clone()),
            LinkMode::Templated { template } => Destination::FixedUrl(
                template.replace(REGION_PLACEHOLDER, &urlencoding::encode(region_id)),
            ),
            LinkMode::Table { entries, fallback } => entries
                .get(region_id)
                .or(fallback.as_ref())
                .map(|url| Destination::FixedUrl(url.clone()))
                .unwrap_or(Destination::NoAction),
        }
    }

    /// Explicit table keys; empty for modes that accept any id.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        let entries = match &self.mode {
            LinkMode::Table { entries, .. } => Some(entries.keys().map(String::as_str)),
            _ => None,
        };
        entries.into_iter().flatten()
    }

    pub fn has_fallback(&self) -> bool {
        match &self.mode {
            LinkMode::Table { fallback, .. } => fallback.is_some(),
            _ => true,
        }
    }
}

/// Reads a `{ "<region id>": "<url>" }` JSON object.
pub fn load_link_table(path: impl AsRef<Path>) -> Result<BTreeMap<String, String>, LinkTableError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LinkTableError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&text).map_err(|source| LinkTableError::Parse {
        path: path.to_path_buf(),
        source,
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
