use std::fmt::Display;

#[derive(Debug)]
pub enum Error {
    DimensionMismatch {
        base_channels: usize,
        comparison_channels: usize,
    },
    EmptyInput,
    BufferLengthMismatch {
        expected: usize,
        actual: usize,
    },
    InvalidChannelCount,
    GeometryOverflow {
        width: usize,
        height: usize,
        channels: usize,
    },
    PairComparisonFailed(usize, Box<Error>),
    ComparisonWorkerFailed(usize),
    FetchFailure(String, String),
    DecodeFailure(String, String),
    FailedToBuildHttpClient(String),
    UnableToOpenBatchFile(String, std::io::Error),
    BatchParseFailure(String, String),
    EmptyBatch(String),
    PairLoadFailed(usize, Box<Error>),
    FailedToWriteReport(std::io::Error),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DimensionMismatch {
                base_channels,
                comparison_channels,
            } => {
                write!(
                    f,
                    "Channel count mismatch. Base image has {} channels, comparison image has {}.",
                    base_channels, comparison_channels
                )
            }
            Self::EmptyInput => write!(f, "Image buffer does not contain any pixels"),
            Self::BufferLengthMismatch { expected, actual } => {
                write!(
                    f,
                    "Buffer length {} does not match the declared geometry, expected {} bytes",
                    actual, expected
                )
            }
            Self::InvalidChannelCount => write!(f, "Channel count must be at least 1"),
            Self::GeometryOverflow {
                width,
                height,
                channels,
            } => {
                write!(
                    f,
                    "Geometry {}x{} with {} channels exceeds the addressable buffer size",
                    width, height, channels
                )
            }
            Self::PairComparisonFailed(index, error) => {
                write!(f, "Comparison of pair {} failed: {}", index, error)
            }
            Self::ComparisonWorkerFailed(missing) => {
                write!(f, "{} comparison workers terminated without a result", missing)
            }
            Self::FetchFailure(source, reason) => {
                write!(f, "Unable to fetch image from '{}': {}", source, reason)
            }
            Self::DecodeFailure(source, reason) => {
                write!(f, "Unable to decode image from '{}': {}", source, reason)
            }
            Self::FailedToBuildHttpClient(reason) => {
                write!(f, "Failed to build http client: {}", reason)
            }
            Self::UnableToOpenBatchFile(path, error) => {
                write!(f, "Unable to open batch file '{}' for reading: {}", path, error)
            }
            Self::BatchParseFailure(path, reason) => {
                write!(f, "Batch file '{}' is malformed: {}", path, reason)
            }
            Self::EmptyBatch(path) => write!(f, "Batch file '{}' does not list any pairs", path),
            Self::PairLoadFailed(index, error) => {
                write!(f, "Loading of pair {} failed: {}", index, error)
            }
            Self::FailedToWriteReport(error) => write!(f, "Failed to write report: {}", error),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::PairComparisonFailed(_, error) | Self::PairLoadFailed(_, error) => Some(&**error),
            Self::UnableToOpenBatchFile(_, error) | Self::FailedToWriteReport(error) => {
                Some(error)
            }
            _ => None,
        }
    }
}

impl Error {
    /// Returns the innermost error, skipping pair index wrappers.
    pub fn root_cause(&self) -> &Error {
        match self {
            Self::PairComparisonFailed(_, error) | Self::PairLoadFailed(_, error) => {
                error.root_cause()
            }
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn root_cause_skips_pair_wrappers() {
        let error = Error::PairComparisonFailed(3, Box::new(Error::EmptyInput));
        assert!(matches!(error.root_cause(), Error::EmptyInput));
    }

    #[test]
    fn pair_index_is_part_of_message() {
        let error = Error::PairComparisonFailed(
            2,
            Box::new(Error::DimensionMismatch {
                base_channels: 3,
                comparison_channels: 4,
            }),
        );
        let message = error.to_string();
        assert!(message.contains("pair 2"), "message was '{}'", message);
        assert!(message.contains("3 channels"), "message was '{}'", message);
    }
}
