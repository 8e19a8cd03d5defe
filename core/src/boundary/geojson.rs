//! Minimal GeoJSON reader.
//!
//! Only what a choropleth needs is decoded: the feature properties and polygonal geometry.
//! Every other geometry type is accepted by the decoder and rejected later with a
//! precise feature index.

use geo::{LineString, MultiPolygon, Polygon};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::LoadError;

#[derive(Deserialize)]
pub(crate) struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Deserialize)]
pub(crate) struct Feature {
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

type Ring = Vec<Vec<f64>>;

#[derive(Deserialize)]
#[serde(tag = "type")]
pub(crate) enum Geometry {
    Polygon { coordinates: Vec<Ring> },
    MultiPolygon { coordinates: Vec<Vec<Ring>> },
    #[serde(other)]
    Unsupported,
}

/// Parses `text` and checks the top-level `type` before decoding features.
pub(crate) fn parse_collection(text: &str) -> Result<FeatureCollection, LoadError> {
    let value: Value = serde_json::from_str(text)?;

    let kind = value.get("type").and_then(Value::as_str);
    if kind != Some("FeatureCollection") {
        return Err(LoadError::NotFeatureCollection {
            found: kind.map(str::to_string),
        });
    }

    Ok(serde_json::from_value(value)?)
}

impl Geometry {
    pub(crate) fn into_multi_polygon(self, index: usize) -> Result<MultiPolygon<f64>, LoadError> {
        match self {
            Geometry::Polygon { coordinates } => {
                Ok(MultiPolygon::new(vec![to_polygon(coordinates, index)?]))
            }
            Geometry::MultiPolygon { coordinates } => coordinates
                .into_iter()
                .map(|rings| to_polygon(rings, index))
                .collect::<Result<Vec<_>, _>>()
                .map(MultiPolygon::new),
            Geometry::Unsupported => Err(LoadError::UnsupportedGeometry { index }),
        }
    }
}

fn to_polygon(rings: Vec<Ring>, index: usize) -> Result<Polygon<f64>, LoadError> {
    let mut rings = rings.into_iter().map(|ring| to_line_string(ring, index));

    let exterior = match rings.next() {
        Some(exterior) => exterior?,
        None => return Err(LoadError::UnsupportedGeometry { index }),
    };
    let interiors = rings.collect::<Result<Vec<_>, _>>()?;

    Ok(Polygon::new(exterior, interiors))
}

// Positions may carry an altitude; only x and y are kept.
fn to_line_string(ring: Ring, index: usize) -> Result<LineString<f64>, LoadError> {
    ring.into_iter()
        .map(|position| match position.as_slice() {
            [x, y, ..] if x.is_finite() && y.is_finite() => Ok((*x, *y)),
            _ => Err(LoadError::InvalidCoordinate { index }),
        })
        .collect::<Result<Vec<(f64, f64)>, _>>()
        .map(LineString::from)
}
