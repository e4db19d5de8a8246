use serde::{Deserialize, Serialize};

/// One parsed access-log entry.
///
/// Immutable once constructed; records carry no identity beyond their field
/// values and duplicates are kept as-is. The response code stays textual so
/// leading zeros and non-numeric codes survive parsing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessRecord {
    /// Event time in floating-point seconds since the epoch
    pub timestamp: f64,
    /// Request header size in bytes
    pub header_size: u64,
    /// Client address
    pub client_ip: String,
    /// Response code, preserved verbatim
    pub response_code: String,
    /// Response body size in bytes
    pub response_size: u64,
    /// Request method
    pub request_method: String,
    /// Requested URL
    pub url: String,
    /// Username or placeholder token
    pub username: String,
    /// Destination address
    pub destination_ip: String,
    /// Response content type
    pub response_type: String,
}

impl AccessRecord {
    /// Bytes this record contributed in both directions.
    pub fn bytes_exchanged(&self) -> u64 {
        self.header_size.saturating_add(self.response_size)
    }
}

/// The set of statistics selected for one run.
///
/// Built once from the invocation arguments and read-only thereafter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatRequest {
    pub most_frequent_ip: bool,
    pub least_frequent_ip: bool,
    pub total_bytes_exchanged: bool,
    pub event_per_seconds: bool,
}

impl StatRequest {
    /// A request with every statistic enabled.
    pub fn all() -> Self {
        Self {
            most_frequent_ip: true,
            least_frequent_ip: true,
            total_bytes_exchanged: true,
            event_per_seconds: true,
        }
    }

    /// True when at least one statistic is selected.
    pub fn any(&self) -> bool {
        self.most_frequent_ip
            || self.least_frequent_ip
            || self.total_bytes_exchanged
            || self.event_per_seconds
    }
}
