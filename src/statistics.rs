use std::collections::HashMap;

use crate::error::AnalyzeError;
use crate::models::AccessRecord;

/// Aggregate queries over the merged record set.
///
/// Every function here is a pure computation over its input slice; the
/// orchestration layer owns all diagnostic output. None of the queries are
/// defined over an empty slice — callers guard that case (`EmptyLogSet`)
/// before reaching the engine, so the empty-input returns below are plain
/// `None`/zero rather than errors.

/// Occurrence count and first-seen position for each distinct client address.
fn client_frequencies(records: &[AccessRecord]) -> HashMap<&str, (usize, usize)> {
    let mut frequencies: HashMap<&str, (usize, usize)> = HashMap::new();
    for (position, record) in records.iter().enumerate() {
        let entry = frequencies.entry(record.client_ip.as_str()).or_insert((0, position));
        entry.0 += 1;
    }
    frequencies
}

/// Client address with the highest occurrence count.
///
/// Ties resolve to the address whose first occurrence appears earliest in
/// the input, so the result is stable across runs and platforms.
pub fn most_frequent_ip(records: &[AccessRecord]) -> Option<&str> {
    client_frequencies(records)
        .into_iter()
        .min_by_key(|&(_, (count, first_seen))| (std::cmp::Reverse(count), first_seen))
        .map(|(ip, _)| ip)
}

/// Client address with the lowest occurrence count; same first-seen
/// tie-break as [`most_frequent_ip`].
pub fn least_frequent_ip(records: &[AccessRecord]) -> Option<&str> {
    client_frequencies(records)
        .into_iter()
        .min_by_key(|&(_, (count, first_seen))| (count, first_seen))
        .map(|(ip, _)| ip)
}

/// Sum of header and response sizes across all records.
///
/// Saturating accumulation; realistic log volumes stay far below u64 range.
pub fn total_bytes_exchanged(records: &[AccessRecord]) -> u64 {
    records
        .iter()
        .fold(0u64, |total, record| total.saturating_add(record.bytes_exchanged()))
}

/// Record count divided by the elapsed time between the earliest and latest
/// timestamps.
///
/// Fails with `DegenerateTimeRange` when every record shares one timestamp;
/// the division is never allowed to produce an infinity.
pub fn events_per_second(records: &[AccessRecord]) -> Result<f64, AnalyzeError> {
    let mut min_ts = f64::INFINITY;
    let mut max_ts = f64::NEG_INFINITY;
    for record in records {
        min_ts = min_ts.min(record.timestamp);
        max_ts = max_ts.max(record.timestamp);
    }

    let elapsed = max_ts - min_ts;
    if records.is_empty() || elapsed <= 0.0 {
        return Err(AnalyzeError::DegenerateTimeRange { count: records.len() });
    }
    Ok(records.len() as f64 / elapsed)
}
