use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::{
    comparator::{MismatchCount, MismatchCounter},
    error::Error,
    raster::pair::{validate_pairs, ImagePair},
    Result,
};

pub mod parallel;
pub mod statistics;

pub use statistics::RoundStatistics;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BenchmarkResult {
    pub total_mismatches: MismatchCount,
    pub elapsed: Duration,
    pub pairs: usize,
}

pub struct BenchmarkDriver<C> {
    comparator: C,
}

impl<C: MismatchCounter> BenchmarkDriver<C> {
    pub fn new(comparator: C) -> Self {
        Self { comparator }
    }

    fn compare_all(&self, pairs: &[ImagePair]) -> Result<MismatchCount> {
        let mut total: MismatchCount = 0;
        for (index, pair) in pairs.iter().enumerate() {
            total += self
                .comparator
                .count_pair_mismatches(black_box(pair))
                .map_err(|e| Error::PairComparisonFailed(index, Box::new(e)))?;
        }
        Ok(total)
    }

    /// One timed pass whose mismatch total is the correctness result.
    pub fn run_once(&self, pairs: &[ImagePair]) -> Result<BenchmarkResult> {
        validate_pairs(pairs)?;
        log::info!("Comparing {} image pairs", pairs.len());
        let start = Instant::now();
        let total_mismatches = self.compare_all(pairs)?;
        let elapsed = start.elapsed();
        log::info!(
            "Finished comparison pass after {} microseconds",
            elapsed.as_micros()
        );
        Ok(BenchmarkResult {
            total_mismatches,
            elapsed,
            pairs: pairs.len(),
        })
    }

    /// Timing-only passes. Every repetition compares every pair again.
    pub fn run_repeated(&self, pairs: &[ImagePair], repetitions: u32) -> Result<Duration> {
        validate_pairs(pairs)?;
        log::info!(
            "Starting {} timing repetitions over {} pairs",
            repetitions,
            pairs.len()
        );
        let start = Instant::now();
        for _ in 0..repetitions {
            black_box(self.compare_all(pairs)?);
        }
        Ok(start.elapsed())
    }

    /// Times each pass separately and summarizes the spread.
    pub fn run_rounds(&self, pairs: &[ImagePair], rounds: u32) -> Result<RoundStatistics> {
        validate_pairs(pairs)?;
        let mut durations = Vec::with_capacity(rounds as usize);
        for round in 1..=rounds {
            let start = Instant::now();
            black_box(self.compare_all(pairs)?);
            let duration = start.elapsed();
            log::info!(
                "Finished round {} after {} microseconds",
                round,
                duration.as_micros()
            );
            durations.push(duration);
        }
        Ok(RoundStatistics::from_measurements(&durations))
    }
}
