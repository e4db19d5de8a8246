use std::fmt;
use serde::{Deserialize, Serialize};

/// Error types for log analysis operations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnalyzeError {
    /// Line has fewer whitespace-delimited tokens than the format requires
    InsufficientTokens {
        found: usize,
        required: usize,
    },
    /// Timestamp token is not parseable as floating-point epoch seconds
    InvalidTimestamp {
        token: String,
    },
    /// A byte-count token is not parseable as a non-negative integer
    InvalidByteCount {
        field: String,
        token: String,
    },
    /// Requested log format has no registered parser
    UnknownFormat {
        requested: String,
        available: Vec<String>,
    },
    /// Events-per-second is undefined when every record shares one timestamp
    DegenerateTimeRange {
        count: usize,
    },
    /// No records survived parsing across all input files
    EmptyLogSet,
    /// The report destination's containing directory does not exist
    OutputDirMissing {
        path: String,
    },
    /// I/O error with operation context
    Io {
        operation: String,
        message: String,
    },
}

impl fmt::Display for AnalyzeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyzeError::InsufficientTokens { found, required } => {
                write!(f, "malformed log line: found {} tokens, required {}", found, required)
            }
            AnalyzeError::InvalidTimestamp { token } => {
                write!(f, "malformed log line: timestamp '{}' is not a number", token)
            }
            AnalyzeError::InvalidByteCount { field, token } => {
                write!(f, "malformed log line: {} '{}' is not a byte count", field, token)
            }
            AnalyzeError::UnknownFormat { requested, available } => {
                write!(f, "unknown log format '{}', available: {:?}", requested, available)
            }
            AnalyzeError::DegenerateTimeRange { count } => {
                write!(
                    f,
                    "events per second is undefined: all {} records share one timestamp",
                    count
                )
            }
            AnalyzeError::EmptyLogSet => {
                write!(f, "no log found in files")
            }
            AnalyzeError::OutputDirMissing { path } => {
                write!(f, "output directory for '{}' does not exist", path)
            }
            AnalyzeError::Io { operation, message } => {
                write!(f, "I/O error during {}: {}", operation, message)
            }
        }
    }
}

impl std::error::Error for AnalyzeError {}
