use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::types::{
    CategoryFilter, DayEntry, DayStatus, MetricRecord, MonthlyRollup, RollupEntry, RollupTrend, Weekday,
};

const GOOD_SUCCESS_RATE: u32 = 80;
const WARNING_SUCCESS_RATE: u32 = 60;

/// Percentage of `count` over `total`, rounded to the nearest integer.
/// Zero when `total` is zero.
pub fn rate(count: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * f64::from(count) / f64::from(total)).round() as u32
}

pub fn rollup_trend(success_rate: u32) -> RollupTrend {
    if success_rate >= GOOD_SUCCESS_RATE {
        RollupTrend::Good
    } else if success_rate >= WARNING_SUCCESS_RATE {
        RollupTrend::Warning
    } else {
        RollupTrend::Critical
    }
}

// The first record of a category is authoritative for it.
fn category_status(records: &[MetricRecord], category: &str, day: Weekday) -> DayStatus {
    records
        .iter()
        .find(|r| r.category == category)
        .and_then(|r| r.status.get(&day).copied())
        .map(DayStatus::from)
        .unwrap_or(DayStatus::Gray)
}

fn distinct_categories(records: &[MetricRecord]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for record in records {
        if !seen.contains(&record.category.as_str()) {
            seen.push(&record.category);
        }
    }
    seen
}

/// Status of `day` for `filter`. For `All` the worst category wins; gray
/// only when no category has a status that day.
pub fn day_status(records: &[MetricRecord], filter: &CategoryFilter, day: Weekday) -> DayStatus {
    match filter {
        CategoryFilter::Category(category) => category_status(records, category, day),
        CategoryFilter::All => distinct_categories(records)
            .into_iter()
            .map(|category| category_status(records, category, day))
            .max()
            .unwrap_or(DayStatus::Gray),
    }
}

fn month_end(date: NaiveDate) -> Option<NaiveDate> {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)?.pred_opt()
}

/// Workdays of `range_start`'s month that fall inside the inclusive range.
fn workdays_in_month(range_start: NaiveDate, range_end: NaiveDate) -> Vec<(NaiveDate, Weekday)> {
    let last = match month_end(range_start) {
        Some(end) => end.min(range_end),
        None => return Vec::new(),
    };
    range_start
        .iter_days()
        .take_while(|date| *date <= last)
        .filter_map(|date| Weekday::of_date(date).map(|day| (date, day)))
        .collect()
}

fn rollup_entry(category: &str, statuses: impl IntoIterator<Item = DayStatus>) -> RollupEntry {
    let (mut green_days, mut yellow_days, mut red_days, mut total_workdays) = (0, 0, 0, 0);
    for status in statuses {
        total_workdays += 1;
        match status {
            DayStatus::Green => green_days += 1,
            DayStatus::Yellow => yellow_days += 1,
            DayStatus::Red => red_days += 1,
            DayStatus::Gray => {}
        }
    }
    let success_rate = rate(green_days, total_workdays);
    RollupEntry {
        category: category.to_string(),
        green_days,
        yellow_days,
        red_days,
        total_workdays,
        success_rate,
        warning_rate: rate(yellow_days, total_workdays),
        critical_rate: rate(red_days, total_workdays),
        trend: rollup_trend(success_rate),
    }
}

/// Rolls the weekly statuses of `records` up over the workdays of the
/// month containing `range_start`, restricted to the inclusive range.
pub fn monthly_rollup(
    records: &[MetricRecord],
    filter: &CategoryFilter,
    range_start: NaiveDate,
    range_end: NaiveDate,
) -> MonthlyRollup {
    let workdays = workdays_in_month(range_start, range_end);

    let scope: Vec<&str> = match filter {
        CategoryFilter::All => distinct_categories(records),
        CategoryFilter::Category(category) => vec![category.as_str()],
    };
    let categories = scope
        .iter()
        .map(|category| {
            rollup_entry(
                category,
                workdays.iter().map(|(_, day)| category_status(records, category, *day)),
            )
        })
        .collect();

    let days: Vec<DayEntry> = workdays
        .iter()
        .map(|(date, day)| DayEntry {
            date: *date,
            status: day_status(records, filter, *day),
        })
        .collect();
    let overall = rollup_entry(filter.label(), days.iter().map(|d| d.status));

    debug!(
        "monthly rollup for {} from {} to {}: {} workdays",
        filter.label(),
        range_start,
        range_end,
        days.len()
    );

    MonthlyRollup {
        filter: filter.label().to_string(),
        range_start,
        range_end,
        total_workdays: overall.total_workdays,
        categories,
        overall,
        days,
    }
}
