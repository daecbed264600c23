// Status derivation and rollups over metric records
pub mod recompute;
pub mod edits;
pub mod trend;
pub mod rollup;

// Re-export commonly used items
pub use recompute::{recompute_record, recompute_statuses};
pub use edits::{apply_edit, decrement_value, increment_value, set_day_value, set_thresholds, Edit, ThresholdEdit};
pub use trend::{trend, status_estimate};
pub use rollup::{monthly_rollup, day_status, rollup_trend, rate};
