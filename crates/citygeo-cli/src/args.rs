use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for citygeo
#[derive(Debug, Parser)]
#[command(
    name = "citygeo",
    version,
    about = "Normalize, filter, and merge GeoJSON collections of US cities"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

// Default paths and threshold mirror the original data-preparation runs;
// every one of them can be overridden per invocation.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a raw source GeoJSON into the canonical city schema
    Convert {
        /// Raw source GeoJSON (expects properties.name / admin1_code / population)
        #[arg(short = 's', long = "source", default_value = "all-us-cities-1000.geojson")]
        source: PathBuf,

        /// Existing file in the canonical schema, read as a sanity check of
        /// the destination format (its content is not used otherwise)
        #[arg(long = "reference", default_value = "us-cities-merged.json")]
        reference: PathBuf,

        /// Destination file (overwritten if present)
        #[arg(short = 'o', long = "output", default_value = "us-cities-converted.json")]
        output: PathBuf,
    },

    /// Keep only cities at or above a population threshold
    Filter {
        /// Canonical city collection to filter
        #[arg(short = 'i', long = "input", default_value = "us-cities-10000.json")]
        input: PathBuf,

        /// Destination file (overwritten if present)
        #[arg(short = 'o', long = "output", default_value = "us-cities-20000.json")]
        output: PathBuf,

        /// Inclusive minimum population
        #[arg(short = 'm', long = "min-population", default_value_t = 20_000)]
        min_population: u64,
    },

    /// Merge two collections, deduplicating by city name + state
    Merge {
        /// First collection; its features take precedence on duplicates
        #[arg(short = 'l', long = "left", default_value = "us-cities.json")]
        left: PathBuf,

        /// Second collection
        #[arg(short = 'r', long = "right", default_value = "us-cities-new.json")]
        right: PathBuf,

        /// Destination file (overwritten if present)
        #[arg(short = 'o', long = "output", default_value = "us-cities-merged.json")]
        output: PathBuf,
    },
}
