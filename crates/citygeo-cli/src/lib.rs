//! citygeo-cli
//! ===========
//!
//! Command-line interface for the `citygeo-core` city-collection
//! transforms.
//!
//! This crate primarily provides a binary (`citygeo`). We include a small
//! library target so that docs.rs renders a documentation page and shows
//! this overview. See the README for full usage examples.
//!
//! Quick start
//! -----------
//!
//! Install the CLI from crates.io:
//!
//! ```text
//! cargo install citygeo-cli
//! ```
//!
//! Basic usage:
//!
//! ```text
//! citygeo --help
//! citygeo convert --source all-us-cities-1000.geojson
//! citygeo filter --min-population 20000
//! citygeo merge --left us-cities.json --right us-cities-new.json
//! ```
//!
//! For programmatic access to the transforms, use the [`citygeo-core`]
//! crate directly.
//!
//! [`citygeo-core`]: https://docs.rs/citygeo-core
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.
