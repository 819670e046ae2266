// crates/citygeo-core/src/lib.rs

//! # citygeo-core
//!
//! Transforms GeoJSON collections of US cities. Three independent,
//! stateless operations share one canonical record shape:
//!
//! - [`normalize`](normalize::normalize): raw source features → canonical
//!   [`CityCollection`], expanding two-letter state codes to full names.
//! - [`filter_by_population`](filter::filter_by_population): retain cities
//!   at or above a population threshold.
//! - [`merge_collections`](merge::merge_collections): concatenate two
//!   collections and deduplicate by (name, state), first occurrence wins.
//!
//! Each operation reads its inputs fully into memory, applies a single
//! pass, and hands the result back; the [`loader`] module covers the file
//! I/O around them.

pub mod error;
pub mod filter;
pub mod loader;
pub mod merge;
pub mod model;
pub mod normalize;
pub mod regions;

// Re-exports
pub use crate::error::{GeoJsonError, Result};
pub use crate::filter::{filter_by_population, FilterReport};
pub use crate::merge::{merge_collections, MergeReport};
pub use crate::model::{CityCollection, CityFeature, CityProperties, PointGeometry};
pub use crate::normalize::normalize;
pub use crate::regions::resolve_state_code;
