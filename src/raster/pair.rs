use super::RasterBuffer;
use crate::{error::Error, Result};

/// Ordered pair of images. The geometries may differ.
#[derive(Clone, Debug)]
pub struct ImagePair {
    base: RasterBuffer,
    comparison: RasterBuffer,
}

impl ImagePair {
    pub fn new(base: RasterBuffer, comparison: RasterBuffer) -> Self {
        Self { base, comparison }
    }

    pub fn base(&self) -> &RasterBuffer {
        &self.base
    }

    pub fn comparison(&self) -> &RasterBuffer {
        &self.comparison
    }

    /// Checks that both images can be compared without scanning any pixel.
    pub fn validate(&self) -> Result<()> {
        check_comparable(&self.base, &self.comparison)
    }
}

/// Width and height of the region valid in both images.
pub(crate) fn common_region(a: &RasterBuffer, b: &RasterBuffer) -> (usize, usize) {
    (a.width().min(b.width()), a.height().min(b.height()))
}

pub(crate) fn check_comparable(a: &RasterBuffer, b: &RasterBuffer) -> Result<()> {
    if a.channels() != b.channels() {
        return Err(Error::DimensionMismatch {
            base_channels: a.channels(),
            comparison_channels: b.channels(),
        });
    }
    if a.is_empty() || b.is_empty() {
        return Err(Error::EmptyInput);
    }
    Ok(())
}

/// Validates every pair, reporting the index of the first one that fails.
pub fn validate_pairs(pairs: &[ImagePair]) -> Result<()> {
    pairs.iter().enumerate().try_for_each(|(index, pair)| {
        pair.validate()
            .map_err(|e| Error::PairComparisonFailed(index, Box::new(e)))
    })
}
