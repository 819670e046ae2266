//! citygeo — Command-line interface for citygeo-core
//!
//! This binary drives the three city-collection transforms from your
//! terminal: converting a raw source GeoJSON into the canonical schema,
//! filtering a collection by population, and merging two collections
//! with deduplication.
//!
//! Usage examples
//! --------------
//!
//! - Convert a raw source file
//!   $ citygeo convert --source all-us-cities-1000.geojson --output us-cities-converted.json
//!
//! - Keep cities of 20000 people or more
//!   $ citygeo filter --input us-cities-10000.json --output us-cities-20000.json --min-population 20000
//!
//! - Merge two collections (first file wins on duplicates)
//!   $ citygeo merge --left us-cities.json --right us-cities-new.json --output us-cities-merged.json
//!
//! Every path and the threshold default to the values used by the
//! original data-preparation runs, so a bare subcommand reproduces them.
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use citygeo_core::{filter_by_population, loader, merge_collections, normalize};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    match args.command {
        Commands::Convert {
            source,
            reference,
            output,
        } => {
            let raw = loader::read_raw_collection(&source)?;
            // Both inputs must exist and parse before anything is written;
            // the reference file only anchors the destination schema.
            loader::read_document(&reference)?;
            let converted = normalize(raw);
            loader::write_pretty(&output, &converted)?;
            println!(
                "Conversion complete! Created {} with {} cities.",
                output.display(),
                converted.len()
            );
        }

        Commands::Filter {
            input,
            output,
            min_population,
        } => {
            // The filter pre-checks existence and exits cleanly; the other
            // two commands surface the loader error instead.
            if !input.exists() {
                eprintln!("Error: Input file {} not found!", input.display());
                std::process::exit(1);
            }

            println!("Loading cities from {}...", input.display());
            let collection = loader::read_collection(&input)?;
            println!("Original file contains {} cities", collection.len());

            let (filtered, report) = filter_by_population(&collection, min_population);
            println!(
                "Filtered to {} cities with population >= {min_population}",
                report.retained
            );
            println!("Removed {} cities", report.removed);

            loader::write_pretty(&output, &filtered)?;
            println!("Saved filtered data to {}", output.display());
        }

        Commands::Merge {
            left,
            right,
            output,
        } => {
            let left_doc = loader::read_document(&left)?;
            let right_doc = loader::read_document(&right)?;

            let left_label = left.display().to_string();
            let right_label = right.display().to_string();
            let (merged, report) =
                merge_collections(left_doc, right_doc, &left_label, &right_label)?;

            loader::write_pretty(&output, &merged)?;
            println!(
                "Merged and deduplicated {} cities to {}",
                report.merged,
                output.display()
            );
            println!(
                "Original files had {} and {} cities",
                report.left, report.right
            );
        }
    }

    Ok(())
}
