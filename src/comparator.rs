use crate::{
    raster::{
        pair::{check_comparable, common_region, ImagePair},
        RasterBuffer,
    },
    Result,
};

/// Number of pixel positions at which at least one channel differs.
pub type MismatchCount = u64;

pub trait MismatchCounter {
    fn count_mismatches(&self, a: &RasterBuffer, b: &RasterBuffer) -> Result<MismatchCount>;

    fn count_pair_mismatches(&self, pair: &ImagePair) -> Result<MismatchCount> {
        self.count_mismatches(pair.base(), pair.comparison())
    }
}

/// Exact per-channel equality over the common region of both buffers.
///
/// Rows are scanned up to the narrower width, and only the rows present in
/// both buffers are visited. With equal geometry this is the same as one
/// linear scan over the whole buffer.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExactPixelComparator;

impl ExactPixelComparator {
    fn count_row_mismatches(row_a: &[u8], row_b: &[u8], channels: usize) -> MismatchCount {
        row_a
            .chunks_exact(channels)
            .zip(row_b.chunks_exact(channels))
            .filter(|(pixel_a, pixel_b)| pixel_a != pixel_b)
            .count() as MismatchCount
    }
}

impl MismatchCounter for ExactPixelComparator {
    fn count_mismatches(&self, a: &RasterBuffer, b: &RasterBuffer) -> Result<MismatchCount> {
        check_comparable(a, b)?;
        let (columns, rows) = common_region(a, b);
        let channels = a.channels();
        let count: MismatchCount = (0..rows)
            .map(|row_index| {
                Self::count_row_mismatches(
                    a.row_prefix(row_index, columns),
                    b.row_prefix(row_index, columns),
                    channels,
                )
            })
            .sum();
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::{ExactPixelComparator, MismatchCounter};
    use crate::{error::Error, raster::RasterBuffer};

    fn filled(width: usize, height: usize, channels: usize, value: u8) -> RasterBuffer {
        RasterBuffer::filled(width, height, channels, value).unwrap()
    }

    fn with_changes(
        width: usize,
        height: usize,
        channels: usize,
        changes: &[(usize, usize, usize, u8)],
    ) -> RasterBuffer {
        let mut data = vec![0; width * height * channels];
        for &(x, y, channel, value) in changes {
            data[(y * width + x) * channels + channel] = value;
        }
        RasterBuffer::new(width, height, channels, data).unwrap()
    }

    fn count(a: &RasterBuffer, b: &RasterBuffer) -> u64 {
        ExactPixelComparator.count_mismatches(a, b).unwrap()
    }

    #[test]
    fn identical_buffers_have_no_mismatches() {
        let data = (0..=255).cycle().take(16 * 9 * 3).collect::<Vec<u8>>();
        let a = RasterBuffer::new(16, 9, 3, data.clone()).unwrap();
        let b = RasterBuffer::new(16, 9, 3, data).unwrap();
        assert_eq!(count(&a, &b), 0);
    }

    #[test]
    fn single_channel_difference_counts_once() {
        let a = filled(5, 4, 3, 0);
        let b = with_changes(5, 4, 3, &[(3, 2, 1, 7)]);
        assert_eq!(count(&a, &b), 1);
    }

    #[test]
    fn positions_are_counted_not_channels() {
        let a = filled(6, 6, 3, 0);
        let b = with_changes(
            6,
            6,
            3,
            &[
                (0, 0, 0, 1),
                (0, 0, 1, 1),
                (0, 0, 2, 1),
                (5, 5, 2, 9),
                (2, 3, 0, 4),
                (2, 3, 1, 4),
            ],
        );
        assert_eq!(count(&a, &b), 3);
    }

    #[test]
    fn count_is_symmetric() {
        let a = with_changes(4, 3, 3, &[(1, 1, 0, 200), (3, 2, 2, 50)]);
        let b = with_changes(4, 3, 3, &[(1, 1, 0, 100), (0, 0, 1, 50)]);
        assert_eq!(count(&a, &b), count(&b, &a));
        assert_eq!(count(&a, &b), 3);
    }

    #[test]
    fn larger_buffer_is_clamped_to_common_region() {
        let large = filled(4, 4, 3, 0);
        let small = filled(2, 2, 3, 255);
        assert_eq!(count(&large, &small), 4);
        assert_eq!(count(&small, &large), 4);
    }

    #[test]
    fn differences_outside_common_region_are_ignored() {
        let wide = with_changes(5, 2, 3, &[(4, 0, 0, 1), (3, 1, 2, 1), (1, 1, 0, 1)]);
        let narrow = filled(3, 3, 3, 0);
        assert_eq!(count(&wide, &narrow), 1);
    }

    #[test]
    fn equal_geometry_matches_linear_scan() {
        let a = with_changes(7, 5, 4, &[(0, 0, 3, 1), (6, 4, 0, 2), (3, 2, 1, 3)]);
        let b = filled(7, 5, 4, 0);
        let linear = a
            .as_bytes()
            .chunks_exact(4)
            .zip(b.as_bytes().chunks_exact(4))
            .filter(|(p, q)| p != q)
            .count() as u64;
        assert_eq!(count(&a, &b), linear);
    }

    #[test]
    fn differing_channel_count_is_rejected() {
        let a = filled(2, 2, 3, 0);
        let b = filled(2, 2, 4, 0);
        let result = ExactPixelComparator.count_mismatches(&a, &b);
        assert!(matches!(
            result,
            Err(Error::DimensionMismatch {
                base_channels: 3,
                comparison_channels: 4
            })
        ));
    }

    #[test]
    fn zero_width_buffer_is_rejected() {
        let a = filled(0, 2, 3, 0);
        let b = filled(2, 2, 3, 0);
        let result = ExactPixelComparator.count_mismatches(&a, &b);
        assert!(matches!(result, Err(Error::EmptyInput)));
    }

    #[test]
    fn zero_height_buffer_is_rejected() {
        let a = filled(2, 2, 3, 0);
        let b = filled(2, 0, 3, 0);
        let result = ExactPixelComparator.count_mismatches(&a, &b);
        assert!(matches!(result, Err(Error::EmptyInput)));
    }

    #[test]
    fn repeated_comparison_is_deterministic() {
        let a = with_changes(3, 3, 3, &[(1, 1, 1, 1), (2, 0, 0, 1)]);
        let b = filled(3, 3, 3, 0);
        let first = count(&a, &b);
        assert_eq!(first, count(&a, &b));
        assert_eq!(a, with_changes(3, 3, 3, &[(1, 1, 1, 1), (2, 0, 0, 1)]));
    }

    #[test]
    fn red_pixel_at_origin() {
        let a = filled(2, 2, 3, 0);
        let b = with_changes(2, 2, 3, &[(0, 0, 0, 255)]);
        assert_eq!(count(&a, &b), 1);
        assert_eq!(count(&a, &filled(2, 2, 3, 0)), 0);
    }
}
