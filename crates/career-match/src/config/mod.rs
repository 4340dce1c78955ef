use axum::http::HeaderValue;
use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub cors: CorsConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;
        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let log_format = match env::var("APP_LOG_FORMAT") {
            Ok(raw) => LogFormat::parse(&raw)?,
            Err(_) if environment == AppEnvironment::Production => LogFormat::Json,
            Err(_) => LogFormat::Compact,
        };
        let cors = CorsConfig::parse(
            &env::var("APP_CORS_ORIGINS").unwrap_or_else(|_| "*".to_string()),
        )?;

        Ok(Self {
            environment,
            server: ServerConfig { host, port },
            telemetry: TelemetryConfig {
                log_level,
                format: log_format,
            },
            cors,
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" | "text" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidLogFormat(value.to_string())),
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub format: LogFormat,
}

/// Origins allowed to call the API from a browser.
#[derive(Debug, Clone, PartialEq)]
pub enum CorsConfig {
    AnyOrigin,
    Origins(Vec<HeaderValue>),
}

impl CorsConfig {
    /// Parses a comma-separated origin list; `*` allows any origin.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let entries: Vec<&str> = raw
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .collect();

        if entries.is_empty() || entries.contains(&"*") {
            return Ok(Self::AnyOrigin);
        }

        entries
            .into_iter()
            .map(|origin| {
                HeaderValue::from_str(origin)
                    .map_err(|_| ConfigError::InvalidOrigin(origin.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::Origins)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost { source: std::net::AddrParseError },
    InvalidLogFormat(String),
    InvalidOrigin(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidLogFormat(value) => {
                write!(f, "APP_LOG_FORMAT must be 'compact' or 'json', got '{value}'")
            }
            ConfigError::InvalidOrigin(origin) => {
                write!(f, "APP_CORS_ORIGINS entry '{origin}' is not a valid header value")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidLogFormat(_)
            | ConfigError::InvalidOrigin(_) => None,
        }
    }
}
