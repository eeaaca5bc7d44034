use std::time::Duration;

use crate::{raster::pair::ImagePair, raster::RasterBuffer, Result};

pub mod batch;
pub mod decode;
pub mod fetch;

use decode::ColorMode;
use fetch::ImageFetcher;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Fetches and decodes images into raster buffers.
pub struct ImageLoader {
    fetcher: ImageFetcher,
    color_mode: ColorMode,
}

impl ImageLoader {
    pub fn new(timeout: Duration, color_mode: ColorMode) -> Result<Self> {
        Ok(Self {
            fetcher: ImageFetcher::new(timeout)?,
            color_mode,
        })
    }

    pub fn load(&self, source: &str) -> Result<RasterBuffer> {
        let bytes = self.fetcher.fetch(source)?;
        decode::decode_raster(source, &bytes, self.color_mode)
    }

    pub fn load_pair(&self, base_source: &str, comparison_source: &str) -> Result<ImagePair> {
        let base = self.load(base_source)?;
        let comparison = self.load(comparison_source)?;
        Ok(ImagePair::new(base, comparison))
    }
}
