use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Context};
use db_pool::env_utils::{parse_env_optional, parse_env_with_default};
use db_pool::DbConfig;

pub const SERVICE_NAME: &str = "video-service";

#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DbConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding the single-page application shell (`index.html`)
    pub static_dir: PathBuf,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogConfig {
    pub empty_list_policy: EmptyListPolicy,
}

/// What listing an empty catalog returns.
///
/// `Reject` answers `400` with "Unable to retrieve video list".
/// `Allow` answers `200 []`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyListPolicy {
    #[default]
    Reject,
    Allow,
}

impl FromStr for EmptyListPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(EmptyListPolicy::Reject),
            "allow" => Ok(EmptyListPolicy::Allow),
            other => Err(format!("unknown empty list policy: {other}")),
        }
    }
}

impl fmt::Display for EmptyListPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmptyListPolicy::Reject => f.write_str("reject"),
            EmptyListPolicy::Allow => f.write_str("allow"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

impl Config {
    /// Load configuration from the process environment (and `.env`, if any)
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let port = parse_env_optional::<u16>("PORT")
            .map_err(|e| anyhow!(e))?
            .unwrap_or_else(default_port);

        let empty_list_policy = parse_env_optional::<EmptyListPolicy>("EMPTY_LIST_POLICY")
            .map_err(|e| anyhow!(e))?
            .unwrap_or_default();

        let log_format = parse_env_optional::<LogFormat>("LOG_FORMAT")
            .map_err(|e| anyhow!(e))?
            .unwrap_or_default();

        let database = DbConfig::from_env(SERVICE_NAME)
            .map_err(|e| anyhow!(e))
            .context("invalid database configuration")?;

        Ok(Config {
            app: AppConfig {
                host: std::env::var("HOST").unwrap_or_else(|_| default_host()),
                port,
                static_dir: parse_env_with_default("STATIC_DIR", default_static_dir()),
                log_format,
            },
            database,
            catalog: CatalogConfig { empty_list_policy },
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app.host, self.app.port)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_static_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static"))
}
