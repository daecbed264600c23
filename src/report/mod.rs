use serde::Serialize;

use crate::aggregator::{monthly_rollup, trend};
use crate::types::*;

/// Weekly RAG counts for one record
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySummary {
    pub id: String,
    pub category: String,
    pub green_days: u32,
    pub yellow_days: u32,
    pub red_days: u32,
    pub worst: DayStatus,
}

impl WeeklySummary {
    pub fn from_record(record: &MetricRecord) -> Self {
        let count = |wanted: Status| record.status.values().filter(|s| **s == wanted).count() as u32;
        let worst = record
            .status
            .values()
            .copied()
            .map(DayStatus::from)
            .max()
            .unwrap_or(DayStatus::Gray);
        Self {
            id: record.id.clone(),
            category: record.category.clone(),
            green_days: count(Status::Green),
            yellow_days: count(Status::Yellow),
            red_days: count(Status::Red),
            worst,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecordTrend {
    pub id: String,
    pub category: String,
    pub points: Vec<TrendPoint>,
}

/// Board snapshot handed to whatever renders or exports it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub weekly: Vec<WeeklySummary>,
    pub trends: Vec<RecordTrend>,
    pub rollup: MonthlyRollup,
}

impl BoardReport {
    pub fn build(config: &BoardConfig, records: &[MetricRecord]) -> Self {
        let weekly = records.iter().map(WeeklySummary::from_record).collect();
        let trends = records
            .iter()
            .map(|r| RecordTrend {
                id: r.id.clone(),
                category: r.category.clone(),
                points: trend(r).to_vec(),
            })
            .collect();
        let rollup = monthly_rollup(records, &config.category, config.range_start, config.range_end);
        Self {
            name: config.board_name.clone(),
            weekly,
            trends,
            rollup,
        }
    }

    /// Check if any record has a red or yellow day this week
    pub fn has_issues(&self) -> bool {
        self.summary().has_issues()
    }

    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            red_days: self.weekly.iter().map(|w| w.red_days).sum(),
            yellow_days: self.weekly.iter().map(|w| w.yellow_days).sum(),
            green_days: self.weekly.iter().map(|w| w.green_days).sum(),
            critical_categories: self
                .rollup
                .categories
                .iter()
                .filter(|c| c.total_workdays > 0 && c.trend == RollupTrend::Critical)
                .count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    pub red_days: u32,
    pub yellow_days: u32,
    pub green_days: u32,
    pub critical_categories: usize,
}

impl ReportSummary {
    pub fn total_issues(&self) -> u32 {
        self.red_days + self.yellow_days
    }

    pub fn has_issues(&self) -> bool {
        self.total_issues() > 0
    }
}
