use anyhow::{anyhow, Context, Result};
use std::collections::HashMap;
use chrono::NaiveDate;
use crate::types::{BoardConfig, CategoryFilter};

/// Trait for abstracting environment variable access
pub trait EnvironmentProvider {
    fn get_var(&self, key: &str) -> Option<String>;
}

/// Production implementation using std::env
pub struct SystemEnvironment;

impl EnvironmentProvider for SystemEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Mock implementation for testing
#[derive(Debug, Default)]
pub struct MockEnvironment {
    vars: HashMap<String, String>,
}

impl MockEnvironment {
    pub fn new() -> Self {
        Self {
            vars: HashMap::new(),
        }
    }
    
    pub fn set_var<K, V>(&mut self, key: K, value: V) -> &mut Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.vars.insert(key.into(), value.into());
        self
    }
    
    pub fn with_var<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.set_var(key, value);
        self
    }
}

impl EnvironmentProvider for MockEnvironment {
    fn get_var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

pub fn load_config() -> Result<BoardConfig> {
    load_config_with_env(&SystemEnvironment)
}

fn parse_date_var<E: EnvironmentProvider>(env: &E, key: &str) -> Result<NaiveDate> {
    let raw = env.get_var(key)
        .ok_or_else(|| anyhow!("{} env var must be set (YYYY-MM-DD)", key))?;
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .with_context(|| format!("Invalid {}: {:?}", key, raw))
}

pub fn load_config_with_env<E: EnvironmentProvider>(env: &E) -> Result<BoardConfig> {
    let records_path = env.get_var("BOARD_RECORDS_PATH")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| anyhow!("BOARD_RECORDS_PATH env var must be set"))?;

    let category = env.get_var("BOARD_CATEGORY")
        .map(|v| CategoryFilter::parse(&v))
        .unwrap_or(CategoryFilter::All);

    let range_start = parse_date_var(env, "BOARD_RANGE_START")?;
    let range_end = parse_date_var(env, "BOARD_RANGE_END")?;

    let recompute = env.get_var("BOARD_RECOMPUTE")
        .map(|v| matches!(v.as_str(), "1" | "true" | "TRUE" | "True"))
        .unwrap_or(false);

    let board_name = env.get_var("BOARD_NAME")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    Ok(BoardConfig {
        records_path: records_path.into(),
        category,
        range_start,
        range_end,
        recompute,
        board_name,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn base_env() -> MockEnvironment {
        MockEnvironment::new()
            .with_var("BOARD_RECORDS_PATH", "/var/lib/gemba/records.json")
            .with_var("BOARD_RANGE_START", "2024-06-01")
            .with_var("BOARD_RANGE_END", "2024-06-30")
    }

    #[test]
    fn test_config_loading_with_env() {
        let env = base_env()
            .with_var("BOARD_CATEGORY", "QUALITY")
            .with_var("BOARD_RECOMPUTE", "false")
            .with_var("BOARD_NAME", "Line 4");

        let config = load_config_with_env(&env).unwrap();

        assert_eq!(config.records_path, PathBuf::from("/var/lib/gemba/records.json"));
        assert_eq!(config.category, CategoryFilter::Category("QUALITY".to_string()));
        assert_eq!(config.range_start, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert_eq!(config.range_end, NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
        assert!(!config.recompute);
        assert_eq!(config.board_name, Some("Line 4".to_string()));
    }

    #[test]
    fn test_config_loading_defaults() {
        let config = load_config_with_env(&base_env()).unwrap();

        assert_eq!(config.category, CategoryFilter::All); // default
        assert!(!config.recompute); // default
        assert_eq!(config.board_name, None); // default
    }

    #[test]
    fn test_config_loading_missing_required() {
        let env = MockEnvironment::new()
            .with_var("BOARD_RANGE_START", "2024-06-01")
            .with_var("BOARD_RANGE_END", "2024-06-30");
        let result = load_config_with_env(&env);
        assert!(result.unwrap_err().to_string().contains("BOARD_RECORDS_PATH"));

        let env = MockEnvironment::new()
            .with_var("BOARD_RECORDS_PATH", "records.json")
            .with_var("BOARD_RANGE_END", "2024-06-30");
        let result = load_config_with_env(&env);
        assert!(result.unwrap_err().to_string().contains("BOARD_RANGE_START"));

        let env = MockEnvironment::new()
            .with_var("BOARD_RECORDS_PATH", "  ")
            .with_var("BOARD_RANGE_START", "2024-06-01")
            .with_var("BOARD_RANGE_END", "2024-06-30");
        assert!(load_config_with_env(&env).is_err());
    }

    #[test]
    fn test_config_loading_invalid_date() {
        let env = base_env().with_var("BOARD_RANGE_END", "30/06/2024");

        let result = load_config_with_env(&env);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("BOARD_RANGE_END"));
    }

    #[test]
    fn test_category_parsing() {
        for val in ["ALL", "all", "", "  "] {
            let env = base_env().with_var("BOARD_CATEGORY", val);
            let config = load_config_with_env(&env).unwrap();
            assert_eq!(config.category, CategoryFilter::All, "Failed for value: {:?}", val);
        }

        let env = base_env().with_var("BOARD_CATEGORY", " DELIVERY ");
        let config = load_config_with_env(&env).unwrap();
        assert_eq!(config.category, CategoryFilter::Category("DELIVERY".to_string()));
    }

    #[test]
    fn test_boolean_parsing() {
        for val in ["1", "true", "TRUE", "True"] {
            let env = base_env().with_var("BOARD_RECOMPUTE", val);
            let config = load_config_with_env(&env).unwrap();
            assert!(config.recompute, "Failed for value: {}", val);
        }

        for val in ["0", "false", "FALSE", "False", "no", "off", ""] {
            let env = base_env().with_var("BOARD_RECOMPUTE", val);
            let config = load_config_with_env(&env).unwrap();
            assert!(!config.recompute, "Failed for value: {}", val);
        }

        // Recomputation only runs when asked for
        let config = load_config_with_env(&base_env()).unwrap();
        assert!(!config.recompute);
    }
}
