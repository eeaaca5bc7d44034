use std::sync::{mpsc, Arc};
use std::time::Instant;

use threadpool::ThreadPool;

use super::{BenchmarkDriver, BenchmarkResult};
use crate::{
    comparator::{MismatchCount, MismatchCounter},
    error::Error,
    raster::pair::{validate_pairs, ImagePair},
    Result,
};

impl<C> BenchmarkDriver<C>
where
    C: MismatchCounter + Clone + Send + 'static,
{
    /// Correctness pass with one pool job per pair.
    ///
    /// The total only depends on the pairs, never on the order in which jobs
    /// finish. When several pairs fail, the lowest index is reported.
    pub fn run_once_parallel(
        &self,
        threadpool: &ThreadPool,
        pairs: Arc<[ImagePair]>,
    ) -> Result<BenchmarkResult> {
        validate_pairs(&pairs)?;
        log::info!(
            "Comparing {} image pairs on {} threads",
            pairs.len(),
            threadpool.max_count()
        );
        let start = Instant::now();
        let total_mismatches = self.count_on_threadpool(threadpool, &pairs)?;
        let elapsed = start.elapsed();
        Ok(BenchmarkResult {
            total_mismatches,
            elapsed,
            pairs: pairs.len(),
        })
    }

    fn count_on_threadpool(
        &self,
        threadpool: &ThreadPool,
        pairs: &Arc<[ImagePair]>,
    ) -> Result<MismatchCount> {
        let (sender, receiver) = mpsc::channel();
        for index in 0..pairs.len() {
            let sender = sender.clone();
            let comparator = self.comparator.clone();
            let pairs = Arc::clone(pairs);
            threadpool.execute(move || {
                let result = comparator.count_pair_mismatches(&pairs[index]);
                // the receiver is only gone if the caller already bailed out
                let _ = sender.send((index, result));
            });
        }
        drop(sender);
        let mut results = receiver.iter().collect::<Vec<(usize, Result<MismatchCount>)>>();
        if results.len() != pairs.len() {
            return Err(Error::ComparisonWorkerFailed(pairs.len() - results.len()));
        }
        results.sort_by_key(|(index, _)| *index);
        results
            .into_iter()
            .map(|(index, result)| {
                result.map_err(|e| Error::PairComparisonFailed(index, Box::new(e)))
            })
            .sum()
    }
}
