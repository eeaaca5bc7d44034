use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundStatistics {
    pub rounds: u32,
    pub min: Duration,
    pub max: Duration,
    pub average: Duration,
    pub std_deviation_micros: u64,
}

impl RoundStatistics {
    pub fn from_measurements(measurements: &[Duration]) -> Self {
        if measurements.is_empty() {
            return Self {
                rounds: 0,
                min: Duration::ZERO,
                max: Duration::ZERO,
                average: Duration::ZERO,
                std_deviation_micros: 0,
            };
        }
        let rounds = measurements.len() as u32;
        let min = measurements.iter().copied().min().unwrap_or_default();
        let max = measurements.iter().copied().max().unwrap_or_default();
        let average = measurements.iter().sum::<Duration>() / rounds;
        Self {
            rounds,
            min,
            max,
            average,
            std_deviation_micros: calculate_std_deviation_in_micros(&average, measurements),
        }
    }
}

fn calculate_std_deviation_in_micros(mean: &Duration, measurements: &[Duration]) -> u64 {
    let mean_micros = mean.as_micros() as i128;
    let sum = measurements
        .iter()
        .map(|m| m.as_micros() as i128 - mean_micros)
        .map(|v| v.pow(2).unsigned_abs())
        .sum::<u128>();
    let variance = sum / measurements.len() as u128;
    (variance as f64).sqrt().round() as u64
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::RoundStatistics;

    #[test]
    fn summarize_measurements() {
        let measurements = [
            Duration::from_micros(2),
            Duration::from_micros(4),
            Duration::from_micros(4),
            Duration::from_micros(4),
            Duration::from_micros(5),
            Duration::from_micros(5),
            Duration::from_micros(7),
            Duration::from_micros(9),
        ];
        let statistics = RoundStatistics::from_measurements(&measurements);
        assert_eq!(statistics.rounds, 8);
        assert_eq!(statistics.min, Duration::from_micros(2));
        assert_eq!(statistics.max, Duration::from_micros(9));
        assert_eq!(statistics.average, Duration::from_micros(5));
        assert_eq!(statistics.std_deviation_micros, 2);
    }

    #[test]
    fn no_measurements() {
        let statistics = RoundStatistics::from_measurements(&[]);
        assert_eq!(statistics.rounds, 0);
        assert_eq!(statistics.average, Duration::ZERO);
    }
}
