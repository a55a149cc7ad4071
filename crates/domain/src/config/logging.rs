use serde::{Deserialize, Serialize};

/// Logging configuration
///
/// Logs are written to stderr so lookup output on stdout stays clean.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level (default: "info")
    /// Options: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Line format (default: text)
    #[serde(default)]
    pub format: LogFormat,

    /// Extra filter directives appended after the level,
    /// e.g. "fallback_dns_application=debug"
    #[serde(default)]
    pub filter: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LoggingConfig {
    /// Filter directive combining the base level with any extra directives.
    pub fn directive(&self) -> String {
        match self.filter.as_deref().map(str::trim) {
            Some(extra) if !extra.is_empty() => {
                format!("{},{}", self.level.to_lowercase(), extra)
            }
            _ => self.level.to_lowercase(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            filter: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
