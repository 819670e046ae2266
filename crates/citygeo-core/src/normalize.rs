// crates/citygeo-core/src/normalize.rs
use crate::model::{CityCollection, CityFeature, RawCollection};
use crate::regions::resolve_state_code;

/// Maps a raw source collection into the canonical city shape.
///
/// Per feature, in input order: take the name (empty string when the
/// source lacks one), resolve the `admin1_code` to a full state name,
/// take the population (0 when absent), and copy the coordinates
/// verbatim. Never drops a feature: output count equals input count.
pub fn normalize(source: RawCollection) -> CityCollection {
    let features = source
        .features
        .into_iter()
        .map(|raw| {
            let state = resolve_state_code(&raw.properties.admin1_code).to_string();
            CityFeature::new(
                raw.properties.name,
                state,
                raw.properties.population,
                raw.geometry.coordinates,
            )
        })
        .collect();

    CityCollection::new(features)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RawFeature, RawGeometry, RawProperties};
    use serde_json::json;

    fn raw(name: &str, code: &str, population: u64) -> RawFeature {
        RawFeature {
            properties: RawProperties {
                name: name.to_string(),
                admin1_code: code.to_string(),
                population,
            },
            geometry: RawGeometry {
                coordinates: json!([-122.4194, 37.7749]),
            },
        }
    }

    #[test]
    fn expands_state_codes() {
        let source = RawCollection {
            features: vec![raw("San Francisco", "CA", 873_965)],
        };
        let out = normalize(source);
        assert_eq!(out.features[0].properties.state, "California");
        assert_eq!(out.features[0].properties.name, "San Francisco");
        assert_eq!(out.features[0].properties.population, 873_965);
    }

    #[test]
    fn unknown_code_kept_as_is() {
        let source = RawCollection {
            features: vec![raw("Nowhere", "ZZ", 10)],
        };
        let out = normalize(source);
        assert_eq!(out.features[0].properties.state, "ZZ");
    }

    #[test]
    fn one_output_feature_per_input_feature() {
        let source = RawCollection {
            features: (0..17).map(|i| raw(&format!("City {i}"), "TX", i)).collect(),
        };
        let out = normalize(source);
        assert_eq!(out.len(), 17);
        // order preserved
        assert_eq!(out.features[3].properties.name, "City 3");
    }

    #[test]
    fn missing_optional_fields_default() {
        let source: RawCollection = serde_json::from_value(serde_json::json!({
            "features": [
                { "geometry": { "coordinates": [1.0, 2.0] } }
            ]
        }))
        .unwrap();
        let out = normalize(source);
        assert_eq!(out.features[0].properties.name, "");
        assert_eq!(out.features[0].properties.state, "");
        assert_eq!(out.features[0].properties.population, 0);
    }

    #[test]
    fn coordinates_copied_verbatim() {
        // Arity is not validated; a three-element array survives untouched.
        let source = RawCollection {
            features: vec![RawFeature {
                properties: RawProperties::default(),
                geometry: RawGeometry {
                    coordinates: json!([1.5, 2.5, 3.5]),
                },
            }],
        };
        let out = normalize(source);
        assert_eq!(out.features[0].geometry.coordinates, json!([1.5, 2.5, 3.5]));
    }

    #[test]
    fn emits_geojson_discriminators() {
        let source = RawCollection {
            features: vec![raw("Reno", "NV", 264_165)],
        };
        let out = normalize(source);
        assert_eq!(out.kind, "FeatureCollection");
        assert_eq!(out.features[0].kind, "Feature");
        assert_eq!(out.features[0].geometry.kind, "Point");
    }
}
