use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use super::ImageLoader;
use crate::{error::Error, raster::pair::ImagePair, Result};

/// Number of pairs kept in memory for one benchmark run unless configured otherwise.
pub const DEFAULT_BATCH_LIMIT: usize = 11;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct SourcePair {
    #[serde(rename = "baseURL")]
    pub base: String,
    #[serde(rename = "compURL")]
    pub comparison: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct BatchDescriptor {
    pub urls: Vec<SourcePair>,
}

impl BatchDescriptor {
    pub fn from_reader<R: Read>(reader: R, name: &str) -> Result<Self> {
        serde_json::from_reader(reader)
            .map_err(|e| Error::BatchParseFailure(name.to_owned(), e.to_string()))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let name = path.display().to_string();
        let file = File::open(path).map_err(|e| Error::UnableToOpenBatchFile(name.clone(), e))?;
        Self::from_reader(BufReader::new(file), &name)
    }

    /// The pairs that fit into a batch of at most `limit` pairs.
    pub fn limited(&self, limit: usize) -> &[SourcePair] {
        if self.urls.len() > limit {
            log::warn!(
                "Batch contains {} pairs, only the first {} are loaded",
                self.urls.len(),
                limit
            );
        }
        &self.urls[..self.urls.len().min(limit)]
    }
}

/// Loads every pair before returning. The first failure aborts the load.
pub fn load_pairs(
    descriptor: &BatchDescriptor,
    limit: usize,
    loader: &ImageLoader,
) -> Result<Vec<ImagePair>> {
    descriptor
        .limited(limit)
        .iter()
        .enumerate()
        .map(|(index, sources)| {
            log::info!(
                "Loading pair {}: {} <-> {}",
                index,
                sources.base,
                sources.comparison
            );
            loader
                .load_pair(&sources.base, &sources.comparison)
                .map_err(|e| Error::PairLoadFailed(index, Box::new(e)))
        })
        .collect()
}
