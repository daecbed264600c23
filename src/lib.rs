// Public modules
pub mod types;
pub mod config;
pub mod threshold;
pub mod aggregator;
pub mod report;
pub mod store;

// Re-export commonly used items
pub use types::*;
pub use config::{load_config, load_config_with_env, EnvironmentProvider, SystemEnvironment, MockEnvironment};
pub use threshold::{classify, parse_threshold, Comparison, ThresholdExpr};
pub use aggregator::*;
pub use report::{BoardReport, ReportSummary, WeeklySummary};
pub use store::{load_records, parse_records, StoreError};
