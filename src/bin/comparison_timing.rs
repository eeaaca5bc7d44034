use pixel_mismatch_bench::benchmark::BenchmarkDriver;
use pixel_mismatch_bench::comparator::ExactPixelComparator;
use pixel_mismatch_bench::raster::{pair::ImagePair, RasterBuffer};

const IMAGE_WIDTH: usize = 1920;
const IMAGE_HEIGHT: usize = 1080;
const IMAGE_CHANNELS: usize = 3;
const NUMBER_OF_PAIRS: usize = 11;
const NUMBER_OF_ROUNDS: u32 = 10;

fn create_test_raster(seed: usize) -> RasterBuffer {
    let data = (0..IMAGE_WIDTH * IMAGE_HEIGHT)
        .flat_map(|index| {
            let x = index % IMAGE_WIDTH;
            let y = index / IMAGE_WIDTH;
            let value = ((x + y * 8 + seed) % 256) as u8;
            [value, value / 2, 255 - value]
        })
        .collect();
    RasterBuffer::new(IMAGE_WIDTH, IMAGE_HEIGHT, IMAGE_CHANNELS, data)
        .expect("Test raster geometry is consistent")
}

fn create_test_pairs() -> Vec<ImagePair> {
    let base = create_test_raster(0);
    (0..NUMBER_OF_PAIRS)
        .map(|seed| ImagePair::new(base.clone(), create_test_raster(seed)))
        .collect()
}

fn main() {
    println!("Creating {} test image pairs", NUMBER_OF_PAIRS);
    let pairs = create_test_pairs();
    let driver = BenchmarkDriver::new(ExactPixelComparator);

    let result = driver.run_once(&pairs).expect("First pass failed");
    println!(
        "Mismatched Pixels: {} after {} microseconds",
        result.total_mismatches,
        result.elapsed.as_micros()
    );

    println!("Starting {} timing rounds", NUMBER_OF_ROUNDS);
    let statistics = driver
        .run_rounds(&pairs, NUMBER_OF_ROUNDS)
        .expect("Timing rounds failed");

    println!(
        "Min: {}, Max: {}, Average: {}, Std Deviation: {}",
        statistics.min.as_micros(),
        statistics.max.as_micros(),
        statistics.average.as_micros(),
        statistics.std_deviation_micros,
    );
}
