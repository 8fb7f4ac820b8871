//! Runtime configuration from environment variables.
//!
//! - `TENPIN_LOG`: tracing filter directives (default: "warn"). Logs go to
//!   stderr, so keep this quiet when playing interactively.
//! - `TENPIN_FORMAT`: "text" or "json" output for command-line rolls
//!   (default: "text").

use std::env;

pub const DEFAULT_LOG_FILTER: &str = "warn";

/// How scored command-line rolls are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_filter: String,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            format: OutputFormat::Text,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset, blank or unknown values fall back
    /// to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_filter = lookup("TENPIN_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        let format = lookup("TENPIN_FORMAT")
            .and_then(|s| OutputFormat::from_str(&s))
            .unwrap_or_default();

        Self { log_filter, format }
    }
}
