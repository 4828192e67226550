use thiserror::Error;

/// Errors raised by the wave analyzer
///
/// Numeric input problems (NaN prices, short series) never surface here: the
/// pipeline degrades to the most conservative classification instead. These
/// variants cover caller mistakes and malformed input documents.
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Series length mismatch: highs={highs}, lows={lows}, closes={closes}")]
    SeriesLengthMismatch {
        highs: usize,
        lows: usize,
        closes: usize,
    },

    #[error("Invalid comparator: {0} (expected \"max\" or \"min\")")]
    InvalidComparator(String),

    #[error("Invalid kline row: {0}")]
    InvalidKline(String),

    #[error("Unknown {kind} label: {value}")]
    UnknownLabel { kind: &'static str, value: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AnalysisError {
    /// Stable machine-readable code for this error
    pub fn error_type(&self) -> &'static str {
        match self {
            AnalysisError::SeriesLengthMismatch { .. } => "series_length_mismatch",
            AnalysisError::InvalidComparator(_) => "invalid_comparator",
            AnalysisError::InvalidKline(_) => "invalid_kline",
            AnalysisError::UnknownLabel { .. } => "unknown_label",
            AnalysisError::Config(_) => "config_error",
            AnalysisError::Json(_) => "json_error",
            AnalysisError::Io(_) => "io_error",
        }
    }

    /// Whether the error is a programming mistake rather than bad input data
    pub fn is_programmer_error(&self) -> bool {
        matches!(
            self,
            AnalysisError::SeriesLengthMismatch { .. } | AnalysisError::InvalidComparator(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
