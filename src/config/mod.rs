pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "heaty-utils")]
#[command(about = "Identifier escaping, range expansion and time-of-day conversion")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Print results as JSON")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Convert a string into a valid variable name
    Escape { name: String },

    /// Expand a range expression such as "1,2-4,9"
    Expand { expression: String },

    /// Expand a range defined under [ranges] in the config file
    ExpandNamed { name: String },

    /// Render a time of day
    FormatTime {
        hour: u32,
        minute: u32,
        #[arg(default_value = "0")]
        second: u32,
        /// strftime-compatible format, overrides time.format from the config
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Parse a time of day, exits with status 1 when the text does not match
    ParseTime {
        text: String,
        /// strptime-compatible format, overrides time.format from the config
        #[arg(short, long)]
        format: Option<String>,
    },
}

#[cfg(feature = "cli")]
impl Command {
    pub fn format_override(&self) -> Option<&str> {
        match self {
            Command::FormatTime { format, .. } | Command::ParseTime { format, .. } => {
                format.as_deref()
            }
            _ => None,
        }
    }
}
