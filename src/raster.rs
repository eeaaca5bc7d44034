use image::{GrayImage, RgbImage, RgbaImage};

use crate::{error::Error, Result};

pub mod pair;

/// Decoded pixel data in row-major, channel-interleaved order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterBuffer {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<u8>,
}

impl RasterBuffer {
    pub fn new(width: usize, height: usize, channels: usize, data: Vec<u8>) -> Result<Self> {
        if channels == 0 {
            return Err(Error::InvalidChannelCount);
        }
        let expected = checked_buffer_length(width, height, channels)?;
        if data.len() != expected {
            return Err(Error::BufferLengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Buffer of the given geometry with every byte set to `value`.
    pub fn filled(width: usize, height: usize, channels: usize, value: u8) -> Result<Self> {
        let length = checked_buffer_length(width, height, channels)?;
        Self::new(width, height, channels, vec![value; length])
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.pixel_count() == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    fn row_stride(&self) -> usize {
        self.width * self.channels
    }

    /// All channel values of row `row_index`.
    ///
    /// Panics if `row_index` is not below `height()`.
    pub fn row(&self, row_index: usize) -> &[u8] {
        let start = row_index * self.row_stride();
        &self.data[start..start + self.row_stride()]
    }

    /// The first `columns` pixels of row `row_index`.
    ///
    /// Panics if the row does not exist or holds fewer than `columns` pixels.
    pub fn row_prefix(&self, row_index: usize, columns: usize) -> &[u8] {
        &self.row(row_index)[..columns * self.channels]
    }

    /// Channel values at the given position. Panics outside the buffer.
    pub fn pixel(&self, column_index: usize, row_index: usize) -> &[u8] {
        let start = column_index * self.channels;
        &self.row(row_index)[start..start + self.channels]
    }
}

/// Byte length of a buffer with the given geometry, if it fits into `usize`.
fn checked_buffer_length(width: usize, height: usize, channels: usize) -> Result<usize> {
    width
        .checked_mul(height)
        .and_then(|pixels| pixels.checked_mul(channels))
        .ok_or(Error::GeometryOverflow {
            width,
            height,
            channels,
        })
}

fn from_raw_parts(width: u32, height: u32, channels: usize, data: Vec<u8>) -> RasterBuffer {
    RasterBuffer {
        width: width as usize,
        height: height as usize,
        channels,
        data,
    }
}

impl From<RgbImage> for RasterBuffer {
    fn from(value: RgbImage) -> Self {
        let (width, height) = value.dimensions();
        from_raw_parts(width, height, 3, value.into_raw())
    }
}

impl From<RgbaImage> for RasterBuffer {
    fn from(value: RgbaImage) -> Self {
        let (width, height) = value.dimensions();
        from_raw_parts(width, height, 4, value.into_raw())
    }
}

impl From<GrayImage> for RasterBuffer {
    fn from(value: GrayImage) -> Self {
        let (width, height) = value.dimensions();
        from_raw_parts(width, height, 1, value.into_raw())
    }
}
