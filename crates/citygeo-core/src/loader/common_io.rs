// crates/citygeo-core/src/loader/common_io.rs
use crate::error::{GeoJsonError, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[cfg(feature = "compact")]
use flate2::read::GzDecoder;

pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        GeoJsonError::NotFound(format!("Input file not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    {
        // Only .gz inputs are decompressed; plain JSON passes straight through
        if path.extension().is_some_and(|ext| ext == "gz") {
            return Ok(Box::new(GzDecoder::new(reader)));
        }
        Ok(Box::new(reader))
    }

    #[cfg(not(feature = "compact"))]
    {
        Ok(Box::new(reader))
    }
}
