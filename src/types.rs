use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct BoardConfig {
    pub records_path: PathBuf,
    pub category: CategoryFilter,
    pub range_start: NaiveDate,
    pub range_end: NaiveDate,
    pub recompute: bool,
    pub board_name: Option<String>,
}

/// Standard board categories, in board order.
pub mod categories {
    pub const AVAILABILITY: &str = "AVAILABILITY";
    pub const DELIVERY: &str = "DELIVERY";
    pub const QUALITY: &str = "QUALITY";
    pub const COST: &str = "COST";
    pub const PEOPLE: &str = "PEOPLE";
}

pub fn default_categories() -> [&'static str; 5] {
    [
        categories::AVAILABILITY,
        categories::DELIVERY,
        categories::QUALITY,
        categories::COST,
        categories::PEOPLE,
    ]
}

/// Board workdays. Weekends never carry a status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Weekday {
    pub const ALL: [Weekday; 5] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
    ];

    pub fn from_chrono(day: chrono::Weekday) -> Option<Self> {
        match day {
            chrono::Weekday::Mon => Some(Weekday::Monday),
            chrono::Weekday::Tue => Some(Weekday::Tuesday),
            chrono::Weekday::Wed => Some(Weekday::Wednesday),
            chrono::Weekday::Thu => Some(Weekday::Thursday),
            chrono::Weekday::Fri => Some(Weekday::Friday),
            chrono::Weekday::Sat | chrono::Weekday::Sun => None,
        }
    }

    pub fn of_date(date: NaiveDate) -> Option<Self> {
        Self::from_chrono(date.weekday())
    }

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "monday",
            Weekday::Tuesday => "tuesday",
            Weekday::Wednesday => "wednesday",
            Weekday::Thursday => "thursday",
            Weekday::Friday => "friday",
        }
    }
}

/// RAG verdict produced by threshold classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Green,
    Yellow,
    Red,
}

/// Status of a calendar day in a rollup. Variants are ordered by severity,
/// so the maximum of a set is its worst status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    Gray,
    Green,
    Yellow,
    Red,
}

impl From<Status> for DayStatus {
    fn from(status: Status) -> Self {
        match status {
            Status::Green => DayStatus::Green,
            Status::Yellow => DayStatus::Yellow,
            Status::Red => DayStatus::Red,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub green: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yellow: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub red: Option<String>,
}

impl Thresholds {
    pub fn new(green: &str, yellow: &str, red: &str) -> Self {
        Self {
            green: Some(green.to_string()),
            yellow: Some(yellow.to_string()),
            red: Some(red.to_string()),
        }
    }
}

/// One tracked category's state for a board week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricRecord {
    pub id: String,
    pub category: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_values: Option<BTreeMap<Weekday, f64>>,
    #[serde(default)]
    pub thresholds: Thresholds,
    #[serde(default)]
    pub status: BTreeMap<Weekday, Status>,
}

impl MetricRecord {
    pub fn new(id: impl Into<String>, category: impl Into<String>, value: f64, thresholds: Thresholds) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
            value,
            day_values: None,
            thresholds,
            status: BTreeMap::new(),
        }
    }

    /// The day's override if present, else the baseline value.
    pub fn effective_value(&self, day: Weekday) -> f64 {
        self.day_values
            .as_ref()
            .and_then(|values| values.get(&day).copied())
            .unwrap_or(self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw.eq_ignore_ascii_case("ALL") {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(raw.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "ALL",
            CategoryFilter::Category(c) => c,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    pub day: Weekday,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RollupTrend {
    Good,
    Warning,
    Critical,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RollupEntry {
    pub category: String,
    pub green_days: u32,
    pub yellow_days: u32,
    pub red_days: u32,
    pub total_workdays: u32,
    pub success_rate: u32,
    pub warning_rate: u32,
    pub critical_rate: u32,
    pub trend: RollupTrend,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayEntry {
    pub date: NaiveDate,
    pub status: DayStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyRollup {
    pub filter: String,
    pub range_start: NaiveDate,
    pub range_end: NaiveDate,
    pub total_workdays: u32,
    pub categories: Vec<RollupEntry>,
    pub overall: RollupEntry,
    pub days: Vec<DayEntry>,
}
