//! Error handling example for citygeo-rs
//!
//! This example demonstrates proper error handling and edge cases

use citygeo_core::{loader, merge_collections, GeoJsonError};
use serde_json::json;

fn main() {
    println!("=== CityGeo-RS Error Handling Example ===\n");

    // Example 1: Missing input file
    println!("--- Example 1: Missing input file ---");
    match loader::read_collection("no-such-file.json") {
        Ok(collection) => println!("✓ Loaded {} cities", collection.len()),
        Err(GeoJsonError::NotFound(msg)) => println!("✗ Not found: {msg}"),
        Err(e) => println!("✗ Unexpected error: {e}"),
    }
    println!();

    // Example 2: Structurally invalid merge inputs
    println!("--- Example 2: Merge structure validation ---");
    let good = json!({ "type": "FeatureCollection", "features": [] });
    let bad = json!({ "cities": [] });
    match merge_collections(good, bad, "good.json", "bad.json") {
        Ok(_) => println!("✓ merged"),
        Err(e) => println!("✗ {e}"),
    }
    println!();

    // Example 3: Keyless features silently dropped by the merger
    println!("--- Example 3: Keyless features ---");
    let left = json!({
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "name": "Orphan" },
                "geometry": { "type": "Point", "coordinates": [0.0, 0.0] }
            }
        ]
    });
    let right = json!({ "type": "FeatureCollection", "features": [] });
    match merge_collections(left, right, "left", "right") {
        Ok((_, report)) => println!(
            "  {} + {} features in, {} out (no state field, no identity key)",
            report.left, report.right, report.merged
        ),
        Err(e) => println!("✗ {e}"),
    }
}
