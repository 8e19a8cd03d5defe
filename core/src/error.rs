use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The boundary file could not be turned into a usable set of regions.
///
/// Fatal at startup: a session never starts without a loaded boundary.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read boundary file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("boundary data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("boundary data is not a FeatureCollection (found {found:?})")]
    NotFeatureCollection { found: Option<String> },
    #[error("boundary data contains no features")]
    Empty,
    #[error("feature #{index} has no '{property}' property")]
    MissingKeyProperty { index: usize, property: String },
    #[error("feature #{index} has a non-string '{property}' property")]
    InvalidKeyProperty { index: usize, property: String },
    #[error("feature #{index} has no Polygon or MultiPolygon geometry")]
    UnsupportedGeometry { index: usize },
    #[error("feature #{index} has a malformed coordinate")]
    InvalidCoordinate { index: usize },
    #[error("region '{id}' appears more than once (feature #{index})")]
    DuplicateRegion { id: String, index: usize },
}

/// The link configuration can never resolve a region of the loaded boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigMismatchError {
    #[error(
        "none of the {table_keys} link table keys match any of the {regions} regions keyed by '{key_property}' (e.g. region '{sample_region}' vs key '{sample_key}')"
    )]
    Disjoint {
        key_property: String,
        regions: usize,
        table_keys: usize,
        sample_region: String,
        sample_key: String,
    },
    #[error("link table is empty and has no fallback URL")]
    EmptyTable,
}

#[derive(Debug, Error)]
pub enum LinkTableError {
    #[error("cannot read link table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("link table {path} is not a JSON object of strings: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
