//! # Boundary Source
//!
//! Loads a static GeoJSON feature collection into an immutable, ordered set of [`Region`]s.
//!
//! Every feature must carry the configured key property as a string; the value becomes the
//! region identifier. Identifiers are compared exactly (case and whitespace matter) and must
//! be unique. A file that breaks either rule is rejected as a whole with a [`LoadError`].
//!
//! A loaded [`BoundarySource`] is never mutated, so it is shared between sessions as an
//! `Arc` handed out by the [`cache::BoundaryCache`].

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;

use geo::{BoundingRect, Intersects, MultiPolygon, Point};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::LoadError;

pub mod cache;
mod geojson;

/// Display value of a region that has no (numeric) value property.
pub const UNIFORM_VALUE: f64 = 1.0;

/// Which feature properties identify a region and, optionally, carry its display value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PropertyNames {
    pub key: String,
    pub value: Option<String>,
}

impl PropertyNames {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }
}

/// Axis-aligned box in map coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn union(self, other: Bounds) -> Bounds {
        Bounds {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }
}

#[derive(Clone, Debug)]
pub struct Region {
    pub id: String,
    pub value: f64,
    geometry: MultiPolygon<f64>,
}

impl Region {
    pub fn new(id: impl Into<String>, geometry: MultiPolygon<f64>, value: f64) -> Self {
        Self {
            id: id.into(),
            value,
            geometry,
        }
    }

    pub fn geometry(&self) -> &MultiPolygon<f64> {
        &self.geometry
    }

    /// True when the point lies inside the geometry or on one of its edges.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.geometry.intersects(&Point::new(x, y))
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.geometry.bounding_rect().map(|rect| Bounds {
            min_x: rect.min().x,
            min_y: rect.min().y,
            max_x: rect.max().x,
            max_y: rect.max().y,
        })
    }
}

/// Immutable, ordered collection of regions keyed by a single feature property.
#[derive(Debug)]
pub struct BoundarySource {
    properties: PropertyNames,
    regions: Vec<Region>,
    index: HashMap<String, usize>,
}

impl BoundarySource {
    /// Reads and parses the boundary file at `path`.
    pub fn load(path: impl AsRef<Path>, properties: &PropertyNames) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let source = Self::parse(&text, properties)?;
        debug!(
            "Loaded {} regions keyed by '{}' from {}",
            source.len(),
            properties.key,
            path.display()
        );
        Ok(source)
    }

    /// Builds a source from in-memory GeoJSON text.
    pub fn parse(text: &str, properties: &PropertyNames) -> Result<Self, LoadError> {
        let collection = geojson::parse_collection(text)?;
        if collection.features.is_empty() {
            return Err(LoadError::Empty);
        }

        let mut regions: Vec<Region> = Vec::with_capacity(collection.features.len());
        let mut index: HashMap<String, usize> = HashMap::new();

        for (i, feature) in collection.features.into_iter().enumerate() {
            let props = feature.properties.unwrap_or_default();
            let id = match props.get(&properties.key) {
                Some(Value::String(id)) => id.clone(),
                Some(_) => {
                    return Err(LoadError::InvalidKeyProperty {
                        index: i,
                        property: properties.key.clone(),
                    });
                }
                None => {
                    return Err(LoadError::MissingKeyProperty {
                        index: i,
                        property: properties.key.clone(),
                    });
                }
            };

            if index.contains_key(&id) {
                return Err(LoadError::DuplicateRegion { id, index: i });
            }

            let geometry = feature
                .geometry
                .ok_or(LoadError::UnsupportedGeometry { index: i })?
                .into_multi_polygon(i)?;

            let value = properties
                .value
                .as_ref()
                .and_then(|name| props.get(name))
                .and_then(Value::as_f64)
                .unwrap_or(UNIFORM_VALUE);

            index.insert(id.clone(), regions.len());
            regions.push(Region::new(id, geometry, value));
        }

        Ok(Self {
            properties: properties.clone(),
            regions,
            index,
        })
    }

    pub fn properties(&self) -> &PropertyNames {
        &self.properties
    }

    pub fn key_property(&self) -> &str {
        &self.properties.key
    }

    /// Regions in file order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn region_ids(&self) -> BTreeSet<String> {
        self.regions.iter().map(|r| r.id.clone()).collect()
    }

    pub fn get(&self, id: &str) -> Option<&Region> {
        self.index.get(id).map(|&i| &self.regions[i])
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Union of the bounding boxes of every region.
    pub fn bounds(&self) -> Option<Bounds> {
        self.regions
            .iter()
            .filter_map(Region::bounds)
            .reduce(Bounds::union)
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
