use crate::presentation::config::{Environment, LoggingSettings};

/// Configuration for tracing initialization.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub environment: Environment,
    pub json_format: bool,
    pub default_directive: String,
}

impl TracingConfig {
    pub fn from_settings(logging: &LoggingSettings, environment: Environment) -> Self {
        let json_format = logging.json
            || std::env::var("LOG_FORMAT")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(false);
        Self {
            environment,
            json_format,
            default_directive: format!("{},scribe_relay=debug", logging.level),
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Local,
            json_format: false,
            default_directive: "info,scribe_relay=debug".to_string(),
        }
    }
}
