use crate::utils::error::{Result, UtilError};
use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

/// strftime-compatible format string for military time
pub const DEFAULT_TIME_FORMAT: &str = "%H:%M";

/// A wall-clock time without date or timezone, at whole-second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "NaiveTime", into = "NaiveTime")]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Returns `None` unless `hour < 24`, `minute < 60` and `second < 60`.
    pub fn from_hms(hour: u32, minute: u32, second: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, second).map(Self)
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }

    pub fn as_naive_time(&self) -> NaiveTime {
        self.0
    }

    pub fn format(&self, format: &TimeFormat) -> String {
        crate::core::time::format_time(self, format)
    }

    /// Date specifiers render against 1900-01-01, like strftime does for a bare time.
    pub(crate) fn on_placeholder_date(&self) -> NaiveDateTime {
        placeholder_date().and_time(self.0)
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        // 捨棄小數秒，閏秒的 nanosecond 也一併歸零
        Self(time.with_nanosecond(0).unwrap_or(time))
    }
}

impl From<TimeOfDay> for NaiveTime {
    fn from(time: TimeOfDay) -> Self {
        time.0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(&TimeFormat::default()))
    }
}

fn placeholder_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or_default()
}

/// A strftime/strptime format string that chrono can render for any [`TimeOfDay`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimeFormat {
    pattern: String,
}

impl TimeFormat {
    pub fn new(pattern: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();

        if StrftimeItems::new(&pattern).any(|item| matches!(item, Item::Error)) {
            return Err(UtilError::TimeFormatError {
                format: pattern,
                reason: "contains an unsupported or incomplete specifier".to_string(),
            });
        }

        // 有些指定字元 (例如 %Z) 需要時區資訊，先試著格式化一次
        let probe = TimeOfDay(NaiveTime::default()).on_placeholder_date();
        let mut rendered = String::new();
        if write!(rendered, "{}", probe.format(&pattern)).is_err() {
            return Err(UtilError::TimeFormatError {
                format: pattern,
                reason: "cannot be rendered for a time of day without timezone".to_string(),
            });
        }

        Ok(Self { pattern })
    }

    pub fn as_str(&self) -> &str {
        &self.pattern
    }
}

impl Default for TimeFormat {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl std::str::FromStr for TimeFormat {
    type Err = UtilError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// Input accepted by [`crate::expand_range_string`]: either a range expression
/// such as `"1,2-4,9"` or a single number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RangeInput {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl From<&str> for RangeInput {
    fn from(value: &str) -> Self {
        RangeInput::Text(value.to_string())
    }
}

impl From<String> for RangeInput {
    fn from(value: String) -> Self {
        RangeInput::Text(value)
    }
}

impl From<&String> for RangeInput {
    fn from(value: &String) -> Self {
        RangeInput::Text(value.clone())
    }
}

impl From<i64> for RangeInput {
    fn from(value: i64) -> Self {
        RangeInput::Integer(value)
    }
}

impl From<i32> for RangeInput {
    fn from(value: i32) -> Self {
        RangeInput::Integer(value.into())
    }
}

impl From<u32> for RangeInput {
    fn from(value: u32) -> Self {
        RangeInput::Integer(value.into())
    }
}

impl From<f64> for RangeInput {
    fn from(value: f64) -> Self {
        RangeInput::Float(value)
    }
}
