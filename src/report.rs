use std::io::Write;
use std::time::Duration;

use crate::{benchmark::BenchmarkResult, error::Error, Result};

pub struct Report<'a, W: Write> {
    writer: &'a mut W,
}

impl<'a, W: Write> Report<'a, W> {
    pub fn new(writer: &'a mut W) -> Self {
        Self { writer }
    }

    pub fn write_loading_completed(&mut self) -> Result<()> {
        writeln!(self.writer, "Image loading completed").map_err(Error::FailedToWriteReport)
    }

    pub fn write_single_pair(
        &mut self,
        result: &BenchmarkResult,
        repetitions: u32,
        repeated: Duration,
    ) -> Result<()> {
        self.write_lines(&[
            result.total_mismatches.to_string(),
            format!("Mismatched Pixels: {}", result.total_mismatches),
            format!("Time Taken: {:.6} seconds", result.elapsed.as_secs_f64()),
            format!(
                "Time Taken for {} repetitions: {:.6} seconds",
                repetitions,
                repeated.as_secs_f64()
            ),
        ])
    }

    pub fn write_batch(
        &mut self,
        result: &BenchmarkResult,
        repetitions: u32,
        repeated: Duration,
    ) -> Result<()> {
        self.write_lines(&[
            format!("Pairs Compared: {}", result.pairs),
            format!("Total Mismatched Pixels: {}", result.total_mismatches),
            format!("Total Time Taken: {:.3} ms", as_millis_f64(&result.elapsed)),
            format!(
                "Total Time Taken for {} repetitions: {:.3} ms",
                repetitions,
                as_millis_f64(&repeated)
            ),
        ])
    }

    fn write_lines(&mut self, lines: &[String]) -> Result<()> {
        for line in lines {
            writeln!(self.writer, "{}", line).map_err(Error::FailedToWriteReport)?;
        }
        self.writer.flush().map_err(Error::FailedToWriteReport)
    }
}

fn as_millis_f64(duration: &Duration) -> f64 {
    duration.as_secs_f64() * 1000_f64
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::Report;
    use crate::benchmark::BenchmarkResult;

    fn result() -> BenchmarkResult {
        BenchmarkResult {
            total_mismatches: 42,
            elapsed: Duration::from_micros(1500),
            pairs: 3,
        }
    }

    #[test]
    fn single_pair_lines() {
        let mut output = Vec::new();
        Report::new(&mut output)
            .write_single_pair(&result(), 2, Duration::from_millis(250))
            .unwrap();
        let text = String::from_utf8(output).unwrap();
        let lines = text.lines().collect::<Vec<&str>>();
        assert_eq!(
            lines,
            [
                "42",
                "Mismatched Pixels: 42",
                "Time Taken: 0.001500 seconds",
                "Time Taken for 2 repetitions: 0.250000 seconds",
            ]
        );
    }

    #[test]
    fn batch_lines() {
        let mut output = Vec::new();
        Report::new(&mut output)
            .write_batch(&result(), 5, Duration::from_micros(12345))
            .unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.contains("Pairs Compared: 3\n"));
        assert!(text.contains("Total Mismatched Pixels: 42\n"));
        assert!(text.contains("Total Time Taken: 1.500 ms\n"));
        assert!(text.contains("Total Time Taken for 5 repetitions: 12.345 ms\n"));
    }
}
