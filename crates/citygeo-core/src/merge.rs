// crates/citygeo-core/src/merge.rs
use crate::error::{GeoJsonError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::collections::HashSet;

/// Diagnostic counts from one merge pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeReport {
    pub left: usize,
    pub right: usize,
    pub merged: usize,
}

/// Concatenates two city collections and deduplicates by (name, state).
///
/// The merge works on loosely-typed documents because it validates shape
/// itself and keys off optional property fields. Both inputs must be
/// objects carrying `type` and a `features` array; `left_label` and
/// `right_label` name them in the error when one is not.
///
/// Walking `left.features ++ right.features` in order, the first feature
/// seen for each (name, state) pair wins and later duplicates are
/// discarded. A feature lacking either property never enters the output,
/// even if unique — a deliberate quirk of the identity key: keyless
/// features cannot be deduplicated, so they are dropped outright.
pub fn merge_collections(
    left: Value,
    right: Value,
    left_label: &str,
    right_label: &str,
) -> Result<(Value, MergeReport)> {
    validate_shape(&left, left_label)?;
    validate_shape(&right, right_label)?;

    let left_features = take_features(left);
    let right_features = take_features(right);
    let report_left = left_features.len();
    let report_right = right_features.len();

    let mut seen: HashSet<(String, String)> = HashSet::new();
    let mut merged: Vec<Value> = Vec::new();

    for feature in left_features.into_iter().chain(right_features) {
        let Some(key) = identity_key(&feature) else {
            continue;
        };
        if seen.insert(key) {
            merged.push(feature);
        }
    }

    let report = MergeReport {
        left: report_left,
        right: report_right,
        merged: merged.len(),
    };
    let document = json!({
        "type": "FeatureCollection",
        "features": merged,
    });

    Ok((document, report))
}

fn validate_shape(document: &Value, label: &str) -> Result<()> {
    let ok = document
        .as_object()
        .map(|obj| obj.contains_key("type") && obj.get("features").is_some_and(Value::is_array))
        .unwrap_or(false);

    if ok {
        Ok(())
    } else {
        Err(GeoJsonError::Structure(format!(
            "{label} does not have the expected GeoJSON structure (type + features)"
        )))
    }
}

/// Moves the `features` array out of a validated document.
fn take_features(mut document: Value) -> Vec<Value> {
    match document.get_mut("features").map(Value::take) {
        Some(Value::Array(features)) => features,
        _ => Vec::new(),
    }
}

/// The (name, state) pair, when both are present as strings.
fn identity_key(feature: &Value) -> Option<(String, String)> {
    let properties = feature.get("properties")?;
    let name = properties.get("name")?.as_str()?;
    let state = properties.get("state")?.as_str()?;
    Some((name.to_string(), state.to_string()))
}
