use std::{
    io::{self, Write},
    path::PathBuf,
    sync::Arc,
    time::Duration,
};

pub use cli::CLIParser;
use benchmark::{BenchmarkDriver, BenchmarkResult};
use comparator::ExactPixelComparator;
use error::Error;
use raster::pair::ImagePair;
use report::Report;
use source::{
    batch::{load_pairs, BatchDescriptor},
    decode::ColorMode,
    ImageLoader,
};
use threadpool::ThreadPool;

pub mod benchmark;
mod cli;
pub mod comparator;
pub mod error;
mod logger;
pub mod raster;
mod report;
pub mod source;

pub type Result<T> = std::result::Result<T, error::Error>;

/// Timing-only passes run after the first pass unless configured otherwise.
pub const DEFAULT_REPETITIONS: u32 = 2;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    SinglePair {
        base_image: String,
        comparison_image: String,
    },
    Batch {
        batch_file: PathBuf,
    },
}

pub struct Arguments {
    mode: Mode,
    batch_limit: usize,
    repetitions: u32,
    number_of_threads: usize,
    color_mode: ColorMode,
    timeout: Duration,
}

pub fn run(arguments: &Arguments) -> Result<()> {
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    run_with_writer(arguments, &mut writer)
}

pub fn run_with_writer<W: Write>(arguments: &Arguments, writer: &mut W) -> Result<()> {
    let loader = ImageLoader::new(arguments.timeout, arguments.color_mode)?;
    let mut report = Report::new(writer);
    match &arguments.mode {
        Mode::SinglePair {
            base_image,
            comparison_image,
        } => {
            let pair = loader.load_pair(base_image, comparison_image)?;
            let (result, repeated) = benchmark_pairs(arguments, vec![pair])?;
            report.write_single_pair(&result, arguments.repetitions, repeated)
        }
        Mode::Batch { batch_file } => {
            let descriptor = BatchDescriptor::from_file(batch_file)?;
            let pairs = load_pairs(&descriptor, arguments.batch_limit, &loader)?;
            if pairs.is_empty() {
                return Err(Error::EmptyBatch(batch_file.display().to_string()));
            }
            drop(loader);
            report.write_loading_completed()?;
            let (result, repeated) = benchmark_pairs(arguments, pairs)?;
            report.write_batch(&result, arguments.repetitions, repeated)
        }
    }
}

fn benchmark_pairs(
    arguments: &Arguments,
    pairs: Vec<ImagePair>,
) -> Result<(BenchmarkResult, Duration)> {
    let driver = BenchmarkDriver::new(ExactPixelComparator);
    let pairs: Arc<[ImagePair]> = Arc::from(pairs);
    let result = if arguments.number_of_threads > 1 {
        let threadpool = ThreadPool::new(arguments.number_of_threads);
        driver.run_once_parallel(&threadpool, Arc::clone(&pairs))?
    } else {
        driver.run_once(&pairs)?
    };
    let repeated = driver.run_repeated(&pairs, arguments.repetitions)?;
    Ok((result, repeated))
}
