use std::collections::BTreeMap;
use tracing::debug;

use super::recompute::recompute_record;
use crate::types::{MetricRecord, Weekday};

/// Replacement threshold expressions; `None` leaves a color unchanged.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ThresholdEdit {
    pub green: Option<String>,
    pub yellow: Option<String>,
    pub red: Option<String>,
}

impl ThresholdEdit {
    /// A goal change only moves the green threshold.
    pub fn goal(green: impl Into<String>) -> Self {
        Self {
            green: Some(green.into()),
            ..Default::default()
        }
    }
}

/// Caller-issued mutation of a single record.
#[derive(Debug, Clone, PartialEq)]
pub enum Edit {
    Increment,
    Decrement,
    SetDayValue { day: Weekday, value: f64 },
    SetThresholds(ThresholdEdit),
}

fn step_value(record: &mut MetricRecord, delta: f64) {
    record.value = (record.value + delta).max(0.0);
}

/// Adds one to the baseline value.
pub fn increment_value(record: &mut MetricRecord) {
    step_value(record, 1.0);
}

/// Subtracts one from the baseline value, never going below zero.
pub fn decrement_value(record: &mut MetricRecord) {
    step_value(record, -1.0);
}

/// Sets the override for `day`. A record without overrides first gets
/// every weekday seeded with its baseline value.
pub fn set_day_value(record: &mut MetricRecord, day: Weekday, value: f64) {
    let baseline = record.value;
    let values = record
        .day_values
        .get_or_insert_with(|| Weekday::ALL.iter().map(|d| (*d, baseline)).collect::<BTreeMap<_, _>>());
    values.insert(day, value);
}

pub fn set_thresholds(record: &mut MetricRecord, edit: ThresholdEdit) {
    if let Some(green) = edit.green {
        record.thresholds.green = Some(green);
    }
    if let Some(yellow) = edit.yellow {
        record.thresholds.yellow = Some(yellow);
    }
    if let Some(red) = edit.red {
        record.thresholds.red = Some(red);
    }
}

/// Applies `edit` to the record with `id` and recomputes its statuses.
/// Returns false when no record has that id.
pub fn apply_edit(records: &mut [MetricRecord], id: &str, edit: Edit) -> bool {
    let Some(record) = records.iter_mut().find(|r| r.id == id) else {
        debug!("no record with id {}", id);
        return false;
    };
    match edit {
        Edit::Increment => increment_value(record),
        Edit::Decrement => decrement_value(record),
        Edit::SetDayValue { day, value } => set_day_value(record, day, value),
        Edit::SetThresholds(thresholds) => set_thresholds(record, thresholds),
    }
    recompute_record(record);
    true
}
