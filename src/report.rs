use serde::{Deserialize, Serialize};

use crate::error::AnalyzeError;
use crate::models::{AccessRecord, StatRequest};
use crate::statistics;

/// The final key-value result document.
///
/// Serializes with the fixed key names consumers depend on; unrequested
/// statistics are omitted entirely rather than emitted as null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub total_log_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_frequent_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub least_frequent_ip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_bytes_exchanged: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_per_seconds: Option<f64>,
}

/// A built report plus the recoverable conditions hit while building it.
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltReport {
    pub report: Report,
    /// Statistics that were requested but could not be computed
    pub warnings: Vec<AnalyzeError>,
}

/// Assembles the requested statistics into a [`Report`].
pub struct ReportBuilder {
    request: StatRequest,
}

impl ReportBuilder {
    pub fn new(request: StatRequest) -> Self {
        Self { request }
    }

    /// Run every requested query over the merged record set.
    ///
    /// Fails with `EmptyLogSet` before attempting any computation when no
    /// records survived parsing. A `DegenerateTimeRange` from the
    /// events-per-second query degrades to a warning with its key omitted,
    /// so the rest of the report still comes out.
    pub fn build(&self, records: &[AccessRecord]) -> Result<BuiltReport, AnalyzeError> {
        if records.is_empty() {
            return Err(AnalyzeError::EmptyLogSet);
        }

        let mut report = Report {
            total_log_count: records.len(),
            most_frequent_ip: None,
            least_frequent_ip: None,
            total_bytes_exchanged: None,
            event_per_seconds: None,
        };
        let mut warnings = Vec::new();

        if self.request.most_frequent_ip {
            report.most_frequent_ip = statistics::most_frequent_ip(records).map(str::to_string);
        }
        if self.request.least_frequent_ip {
            report.least_frequent_ip = statistics::least_frequent_ip(records).map(str::to_string);
        }
        if self.request.total_bytes_exchanged {
            report.total_bytes_exchanged = Some(statistics::total_bytes_exchanged(records));
        }
        if self.request.event_per_seconds {
            match statistics::events_per_second(records) {
                Ok(rate) => report.event_per_seconds = Some(rate),
                Err(error) => warnings.push(error),
            }
        }

        Ok(BuiltReport { report, warnings })
    }
}
