// crates/citygeo-core/src/model.rs
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// # The Canonical City Model
///
/// Wire-compatible with the GeoJSON `FeatureCollection` convention:
///
/// **Structure:** `CityCollection` -> `Vec<CityFeature>` -> properties + geometry
///
/// `state` holds the full region name (e.g. "California"), never the
/// two-letter code; the normalizer resolves codes on the way in.

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CityCollection {
    #[serde(rename = "type", default = "feature_collection_type")]
    pub kind: String,
    pub features: Vec<CityFeature>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CityFeature {
    #[serde(rename = "type", default = "feature_type")]
    pub kind: String,
    pub properties: CityProperties,
    pub geometry: PointGeometry,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CityProperties {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub state: String,
    /// Sources without a population entry deserialize as 0.
    #[serde(default)]
    pub population: u64,
}

/// Point geometry with coordinates carried verbatim.
///
/// The source's `[longitude, latitude]` pair is copied as an opaque JSON
/// value, without validation of arity or numeric range.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PointGeometry {
    #[serde(rename = "type", default = "point_type")]
    pub kind: String,
    pub coordinates: Value,
}

fn feature_collection_type() -> String {
    "FeatureCollection".to_string()
}

fn feature_type() -> String {
    "Feature".to_string()
}

fn point_type() -> String {
    "Point".to_string()
}

impl CityCollection {
    pub fn new(features: Vec<CityFeature>) -> Self {
        CityCollection {
            kind: feature_collection_type(),
            features,
        }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl CityFeature {
    pub fn new(name: String, state: String, population: u64, coordinates: Value) -> Self {
        CityFeature {
            kind: feature_type(),
            properties: CityProperties {
                name,
                state,
                population,
            },
            geometry: PointGeometry {
                kind: point_type(),
                coordinates,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Raw Source Shape (Normalizer input)
// ---------------------------------------------------------------------------

/// A feature as it appears in the raw source GeoJSON, before
/// normalization. Only the fields the normalizer reads are modeled;
/// everything else in the source is ignored (best-effort lookup, no
/// schema validation).
#[derive(Clone, Debug, Deserialize)]
pub struct RawFeature {
    #[serde(default)]
    pub properties: RawProperties,
    pub geometry: RawGeometry,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawProperties {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub admin1_code: String,
    #[serde(default)]
    pub population: u64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RawGeometry {
    pub coordinates: Value,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RawCollection {
    pub features: Vec<RawFeature>,
}
