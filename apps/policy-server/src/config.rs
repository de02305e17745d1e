//! Runtime configuration for the policy server
//!
//! Values come from command-line flags, falling back to `APP_*` environment
//! variables (a `.env` file is loaded first when present).

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use thiserror::Error;
use tracing::Level;

/// Configuration errors surfaced at startup
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid log level '{0}' (expected TRACE, DEBUG, INFO, WARNING, ERROR or CRITICAL)")]
    InvalidLogLevel(String),

    #[error("Invalid environment '{0}' (expected dev, test or prod)")]
    InvalidEnvironment(String),

    #[error("Rate limit must be at least 1 request per second")]
    ZeroRateLimit,
}

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Dev,
    Test,
    Prod,
}

impl AppEnv {
    pub fn as_str(self) -> &'static str {
        match self {
            AppEnv::Dev => "dev",
            AppEnv::Test => "test",
            AppEnv::Prod => "prod",
        }
    }
}

impl fmt::Display for AppEnv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppEnv {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dev" | "development" => Ok(AppEnv::Dev),
            "test" => Ok(AppEnv::Test),
            "prod" | "production" => Ok(AppEnv::Prod),
            _ => Err(ConfigError::InvalidEnvironment(s.to_string())),
        }
    }
}

/// Parse a log level name into a tracing [`Level`]
///
/// `WARNING` and `CRITICAL` are accepted as aliases of `WARN` and `ERROR`.
pub fn parse_log_level(s: &str) -> Result<Level, ConfigError> {
    match s.trim().to_ascii_uppercase().as_str() {
        "TRACE" => Ok(Level::TRACE),
        "DEBUG" => Ok(Level::DEBUG),
        "INFO" => Ok(Level::INFO),
        "WARN" | "WARNING" => Ok(Level::WARN),
        "ERROR" | "CRITICAL" => Ok(Level::ERROR),
        _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
    }
}

/// Command-line arguments for the policy server
#[derive(Parser, Debug, Clone)]
#[command(name = "policy-server")]
#[command(about = "Marine insurance policy validation server")]
pub struct Args {
    /// Host address to bind to
    #[arg(long, env = "APP_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "APP_PORT", default_value = "8000")]
    pub port: u16,

    /// Deployment environment (dev, test, prod)
    #[arg(long = "env", env = "APP_ENV", default_value = "dev")]
    pub app_env: String,

    /// Log level (TRACE, DEBUG, INFO, WARNING, ERROR, CRITICAL)
    #[arg(long, env = "APP_LOG_LEVEL", default_value = "INFO")]
    pub log_level: String,

    /// Path to the JSON list of allowed vessel names
    #[arg(long, env = "APP_VESSELS_PATH", default_value = "data/valid_vessels.json")]
    pub vessels_path: PathBuf,

    /// Longest accepted document, in characters
    #[arg(long, env = "APP_MAX_TEXT_CHARS", default_value = "100000")]
    pub max_text_chars: usize,

    /// Rate limit: requests per second per IP
    #[arg(long, env = "APP_RATE_LIMIT", default_value = "10")]
    pub rate_limit: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Validated server settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub env: AppEnv,
    pub log_level: Level,
    pub vessels_path: PathBuf,
    pub max_text_chars: usize,
    pub rate_limit: u32,
}

impl Settings {
    /// Rate limiter burst: twice the per-second rate
    pub fn burst_size(&self) -> u32 {
        self.rate_limit.saturating_mul(2)
    }
}

impl TryFrom<Args> for Settings {
    type Error = ConfigError;

    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let log_level = if args.verbose {
            Level::DEBUG
        } else {
            parse_log_level(&args.log_level)?
        };

        if args.rate_limit == 0 {
            return Err(ConfigError::ZeroRateLimit);
        }

        Ok(Settings {
            host: args.host,
            port: args.port,
            env: args.app_env.parse()?,
            log_level,
            vessels_path: args.vessels_path,
            max_text_chars: args.max_text_chars,
            rate_limit: args.rate_limit,
        })
    }
}
