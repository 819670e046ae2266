//! Basic usage example for citygeo-rs
//!
//! Runs the three transforms in memory, without touching the filesystem.

use citygeo_core::{filter_by_population, merge_collections, normalize, resolve_state_code};
use citygeo_core::model::RawCollection;
use serde_json::json;

fn main() -> citygeo_core::Result<()> {
    println!("=== CityGeo-RS Basic Usage Example ===\n");

    // Example 1: Resolving state codes
    println!("--- Example 1: State code resolution ---");
    for code in ["CA", "IL", "PR", "ZZ"] {
        println!("  {code} -> {}", resolve_state_code(code));
    }
    println!();

    // Example 2: Normalizing a raw source collection
    println!("--- Example 2: Normalizing raw features ---");
    let raw: RawCollection = serde_json::from_value(json!({
        "features": [
            {
                "properties": { "name": "Boise", "admin1_code": "ID", "population": 235_684 },
                "geometry": { "coordinates": [-116.2023, 43.6150] }
            },
            {
                "properties": { "name": "Nampa", "admin1_code": "ID", "population": 100_200 },
                "geometry": { "coordinates": [-116.5635, 43.5407] }
            }
        ]
    }))?;
    let collection = normalize(raw);
    for feature in &collection.features {
        println!(
            "  {} ({}) — population {}",
            feature.properties.name, feature.properties.state, feature.properties.population
        );
    }
    println!();

    // Example 3: Filtering by population
    println!("--- Example 3: Filtering ---");
    let (filtered, report) = filter_by_population(&collection, 150_000);
    println!(
        "  {} of {} cities at or above 150000 ({} removed)",
        report.retained, report.original, report.removed
    );
    for feature in &filtered.features {
        println!("  kept: {}", feature.properties.name);
    }
    println!();

    // Example 4: Merging with deduplication
    println!("--- Example 4: Merging ---");
    let left = serde_json::to_value(&collection)?;
    let right = json!({
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "name": "Boise", "state": "Idaho", "population": 1 },
                "geometry": { "type": "Point", "coordinates": [0.0, 0.0] }
            },
            {
                "type": "Feature",
                "properties": { "name": "Caldwell", "state": "Idaho", "population": 59_996 },
                "geometry": { "type": "Point", "coordinates": [-116.6874, 43.6629] }
            }
        ]
    });
    let (merged, report) = merge_collections(left, right, "left", "right")?;
    println!(
        "  merged {} + {} features into {}",
        report.left, report.right, report.merged
    );
    for feature in merged["features"].as_array().unwrap() {
        println!(
            "  {} — population {}",
            feature["properties"]["name"], feature["properties"]["population"]
        );
    }

    Ok(())
}
