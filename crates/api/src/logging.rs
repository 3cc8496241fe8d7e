//! Environment-aware tracing subscriber setup.
//!
//! Local runs log human-readable text at `debug`. Cloud runs (detected from
//! AWS runtime variables) log JSON at `info`. `RUST_LOG` overrides the level
//! filter in both cases.

use std::fmt;

use thiserror::Error;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Variables whose presence means we are running on AWS.
const CLOUD_INDICATORS: [&str; 5] = [
    "AWS_LAMBDA_FUNCTION_NAME",
    "ECS_CONTAINER_METADATA_URI_V4",
    "AWS_EXECUTION_ENV",
    "AWS_BATCH_JOB_ID",
    "AWS_REGION",
];

const DEFAULT_SERVICE_NAME: &str = "order-service";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Local,
    Development,
    Staging,
    Production,
}

impl Environment {
    /// Parses an `ENVIRONMENT` value. Unknown values mean production.
    fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "local" => Environment::Local,
            "dev" | "development" => Environment::Development,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Json,
    Text,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Some(LogFormat::Json),
            "text" | "pretty" => Some(LogFormat::Text),
            _ => None,
        }
    }
}

/// Resolved logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    pub format: LogFormat,
    pub environment: Environment,
    pub service_name: String,
    pub version: String,
}

impl LogConfig {
    /// Reads the process environment.
    pub fn detect() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves settings through `lookup`. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let service_name = get("SERVICE_NAME").unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string());
        let is_cloud = CLOUD_INDICATORS.iter().any(|key| get(key).is_some());

        let mut config = if is_cloud {
            let environment = if get("AWS_LAMBDA_FUNCTION_NAME").is_some() {
                Environment::Production
            } else {
                get("ENVIRONMENT")
                    .map(|v| Environment::parse(&v))
                    .unwrap_or(Environment::Production)
            };
            LogConfig {
                level: get("LOG_LEVEL").map(|l| normalize_level(&l)).unwrap_or_else(|| "info".to_string()),
                format: LogFormat::Json,
                environment,
                service_name,
                version: get("SERVICE_VERSION").unwrap_or_else(|| "1.0.0".to_string()),
            }
        } else {
            LogConfig {
                level: get("LOG_LEVEL").map(|l| normalize_level(&l)).unwrap_or_else(|| "debug".to_string()),
                format: LogFormat::Text,
                environment: Environment::Local,
                service_name,
                version: get("SERVICE_VERSION").unwrap_or_else(|| "dev".to_string()),
            }
        };

        if let Some(format) = get("LOG_FORMAT").and_then(|f| LogFormat::parse(&f)) {
            config.format = format;
        }
        config
    }
}

/// Maps level names from other logging ecosystems onto `tracing` levels.
fn normalize_level(level: &str) -> String {
    match level.trim().to_ascii_lowercase().as_str() {
        "warning" => "warn".to_string(),
        "critical" | "fatal" => "error".to_string(),
        other => other.to_string(),
    }
}

#[derive(Debug, Error)]
#[error("Failed to initialise tracing: {0}")]
pub struct LoggingError(#[from] TryInitError);

/// Installs the global subscriber. Fails if one is already set.
pub fn init_logging(config: &LogConfig) -> Result<(), LoggingError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let (json, text) = match config.format {
        LogFormat::Json => (
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false),
            ),
            None,
        ),
        LogFormat::Text => (None, Some(tracing_subscriber::fmt::layer().with_target(false))),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(text)
        .try_init()?;
    Ok(())
}
