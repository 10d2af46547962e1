pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::toml_config::UtilConfig;
pub use core::{
    naming::escape_var_name,
    ranges::expand_range_string,
    time::{format_time, parse_time_string},
};
pub use domain::model::{RangeInput, TimeFormat, TimeOfDay, DEFAULT_TIME_FORMAT};
pub use utils::error::{Result, UtilError};
