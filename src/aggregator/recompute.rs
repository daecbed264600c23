use tracing::debug;

use crate::threshold::classify;
use crate::types::{MetricRecord, Weekday};

/// Re-derives `status` for every weekday of `record` from its effective
/// values and thresholds.
pub fn recompute_record(record: &mut MetricRecord) {
    for day in Weekday::ALL {
        let status = classify(record.effective_value(day), &record.thresholds);
        record.status.insert(day, status);
    }
}

/// Returns a copy of `records` with every status recomputed. Manual status
/// overrides are overwritten.
pub fn recompute_statuses(records: &[MetricRecord]) -> Vec<MetricRecord> {
    let updated: Vec<MetricRecord> = records
        .iter()
        .cloned()
        .map(|mut record| {
            recompute_record(&mut record);
            record
        })
        .collect();
    debug!("recomputed statuses for {} records", updated.len());
    updated
}
