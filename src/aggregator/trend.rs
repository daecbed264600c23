use crate::types::{MetricRecord, Status, TrendPoint, Weekday};

/// Estimated reading implied by a day's status when no explicit value was
/// recorded for it.
pub fn status_estimate(status: Status, value: f64) -> f64 {
    match status {
        Status::Green => value * 1.05,
        Status::Yellow => value * 0.90,
        Status::Red => value * 0.75,
    }
}

/// Monday through Friday series for a record. Days without an override are
/// estimated from their status, or fall back to the baseline value.
pub fn trend(record: &MetricRecord) -> [TrendPoint; 5] {
    Weekday::ALL.map(|day| {
        let explicit = record.day_values.as_ref().and_then(|values| values.get(&day).copied());
        let value = match (explicit, record.status.get(&day)) {
            (Some(v), _) => v,
            (None, Some(status)) => status_estimate(*status, record.value),
            (None, None) => record.value,
        };
        TrendPoint { day, value }
    })
}
