use crate::core::ranges::expand_range_string;
use crate::domain::model::{RangeInput, TimeFormat, DEFAULT_TIME_FORMAT};
use crate::utils::error::{Result, UtilError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;
use std::sync::LazyLock;

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

// ${VAR_NAME}
static ENV_VAR_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UtilConfig {
    pub time: TimeConfig,
    pub logging: LoggingConfig,
    pub ranges: BTreeMap<String, RangeInput>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeConfig {
    pub format: String,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl UtilConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| UtilError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${TIME_FORMAT})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn time_format(&self) -> Result<TimeFormat> {
        validation::validate_time_format("time.format", &self.time.format)
    }

    /// Expands the range registered under `name` in the `[ranges]` table.
    pub fn expand_named_range(&self, name: &str) -> Result<BTreeSet<i64>> {
        let input = self.ranges.get(name).ok_or_else(|| UtilError::ConfigError {
            message: format!("No range named '{}' in [ranges]", name),
        })?;
        expand_range_string(input.clone())
    }
}

impl Validate for UtilConfig {
    fn validate(&self) -> Result<()> {
        self.time_format()?;

        validation::validate_one_of("logging.level", &self.logging.level, &LOG_LEVELS)?;

        for (name, input) in &self.ranges {
            if let Err(e) = expand_range_string(input.clone()) {
                return Err(UtilError::ConfigValidationError {
                    field: format!("ranges.{}", name),
                    message: e.to_string(),
                });
            }
        }

        Ok(())
    }
}
