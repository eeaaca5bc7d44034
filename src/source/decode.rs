use clap::{builder::PossibleValue, ValueEnum};

use crate::{error::Error, raster::RasterBuffer, Result};

/// Pixel layout images are converted to after decoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
    Rgb,
    Rgba,
    Luma,
}

impl ValueEnum for ColorMode {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Rgb, Self::Rgba, Self::Luma]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        match self {
            Self::Rgb => Some(PossibleValue::new("rgb")),
            Self::Rgba => Some(PossibleValue::new("rgba")),
            Self::Luma => Some(PossibleValue::new("luma")),
        }
    }
}

impl ColorMode {
    pub fn channels(&self) -> usize {
        match self {
            Self::Rgb => 3,
            Self::Rgba => 4,
            Self::Luma => 1,
        }
    }
}

pub fn decode_raster(source: &str, bytes: &[u8], color_mode: ColorMode) -> Result<RasterBuffer> {
    let image = image::load_from_memory(bytes)
        .map_err(|e| Error::DecodeFailure(source.to_owned(), e.to_string()))?;
    log::debug!(
        "Decoded {}x{} image from {}",
        image.width(),
        image.height(),
        source
    );
    let raster = match color_mode {
        ColorMode::Rgb => RasterBuffer::from(image.to_rgb8()),
        ColorMode::Rgba => RasterBuffer::from(image.to_rgba8()),
        ColorMode::Luma => RasterBuffer::from(image.to_luma8()),
    };
    if raster.is_empty() {
        return Err(Error::DecodeFailure(
            source.to_owned(),
            "image contains no pixels".to_owned(),
        ));
    }
    Ok(raster)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{ImageFormat, Rgb, RgbImage};

    use super::{decode_raster, ColorMode};
    use crate::error::Error;

    fn encode_png(image: &RgbImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn decode_png_as_rgb() {
        let mut image = RgbImage::new(3, 2);
        image.put_pixel(2, 1, Rgb([1, 2, 3]));
        let raster = decode_raster("memory", &encode_png(&image), ColorMode::Rgb).unwrap();
        assert_eq!(raster.width(), 3);
        assert_eq!(raster.height(), 2);
        assert_eq!(raster.channels(), 3);
        assert_eq!(raster.pixel(2, 1), &[1, 2, 3]);
    }

    #[test]
    fn decode_png_in_other_color_modes() {
        let image = RgbImage::new(2, 2);
        let bytes = encode_png(&image);
        for mode in [ColorMode::Rgba, ColorMode::Luma] {
            let raster = decode_raster("memory", &bytes, mode).unwrap();
            assert_eq!(raster.channels(), mode.channels());
        }
    }

    #[test]
    fn garbage_is_decode_failure() {
        let result = decode_raster("garbage", b"definitely not an image", ColorMode::Rgb);
        assert!(matches!(result, Err(Error::DecodeFailure(..))));
    }
}
