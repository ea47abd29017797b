use crate::application::api_client::{ApiBaseUrl, InvalidBaseUrl};
use serde::Deserialize;
use std::net::SocketAddr;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("api.base_url is not set (DASHBOARD_API__BASE_URL)")]
    MissingBaseUrl,

    #[error(transparent)]
    InvalidBaseUrl(#[from] InvalidBaseUrl),

    #[error("invalid server.bind_addr {0:?}")]
    InvalidBindAddress(String),
}

#[derive(Debug, Deserialize, Clone, Default)]
struct RawConfig {
    #[serde(default)]
    api: RawApiSettings,
    #[serde(default)]
    server: RawServerSettings,
}

#[derive(Debug, Deserialize, Clone, Default)]
struct RawApiSettings {
    base_url: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Default)]
struct RawServerSettings {
    bind_addr: Option<String>,
}

/// Validated application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base_url: ApiBaseUrl,
    pub bind_addr: SocketAddr,
}

impl AppConfig {
    pub fn from_config(settings: config::Config) -> Result<Self, ConfigError> {
        let raw: RawConfig = settings.try_deserialize()?;

        let base_url = raw
            .api
            .base_url
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingBaseUrl)?;
        let api_base_url = ApiBaseUrl::parse(&base_url)?;

        let bind_addr = raw
            .server
            .bind_addr
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddress(bind_addr))?;

        Ok(Self {
            api_base_url,
            bind_addr,
        })
    }
}

/// Optional `config/frontend` file, overridden by `DASHBOARD_*` environment
/// variables (`DASHBOARD_API__BASE_URL`, `DASHBOARD_SERVER__BIND_ADDR`).
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/frontend").required(false))
        .add_source(environment())
        .build()?;

    AppConfig::from_config(settings)
}

/// `DASHBOARD_` prefix, `__` between nested keys.
fn environment() -> config::Environment {
    config::Environment::with_prefix("DASHBOARD")
        .prefix_separator("_")
        .separator("__")
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::{Config, File, FileFormat};

    fn from_toml(source: &str) -> Result<AppConfig, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()
            .unwrap();
        AppConfig::from_config(settings)
    }

    #[test]
    fn test_full_config() {
        let config = from_toml(
            r#"
            [api]
            base_url = "https://hiring-api.example.com/api/v1/"

            [server]
            bind_addr = "127.0.0.1:3000"
            "#,
        )
        .unwrap();

        assert_eq!(config.api_base_url.as_str(), "https://hiring-api.example.com/api/v1");
        assert_eq!(config.bind_addr, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn test_default_bind_addr() {
        let config = from_toml("[api]\nbase_url = \"http://localhost:8000/api/v1\"").unwrap();
        assert_eq!(config.bind_addr.port(), 8080);
    }

    #[test]
    fn test_missing_base_url() {
        assert!(matches!(from_toml(""), Err(ConfigError::MissingBaseUrl)));
        assert!(matches!(
            from_toml("[api]\nbase_url = \"  \""),
            Err(ConfigError::MissingBaseUrl)
        ));
    }

    fn env_vars(vars: &[(&str, &str)]) -> config::Map<String, String> {
        vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_environment_variables() {
        let settings = Config::builder()
            .add_source(environment().source(Some(env_vars(&[
                ("DASHBOARD_API__BASE_URL", "http://hiring-api.internal/api/v1/"),
                ("DASHBOARD_SERVER__BIND_ADDR", "127.0.0.1:9090"),
            ]))))
            .build()
            .unwrap();

        let config = AppConfig::from_config(settings).unwrap();
        assert_eq!(config.api_base_url.as_str(), "http://hiring-api.internal/api/v1");
        assert_eq!(config.bind_addr.port(), 9090);
    }

    #[test]
    fn test_environment_overrides_file() {
        let settings = Config::builder()
            .add_source(File::from_str(
                "[api]\nbase_url = \"http://stale.example/api\"",
                FileFormat::Toml,
            ))
            .add_source(environment().source(Some(env_vars(&[(
                "DASHBOARD_API__BASE_URL",
                "https://fresh.example/api",
            )]))))
            .build()
            .unwrap();

        let config = AppConfig::from_config(settings).unwrap();
        assert_eq!(config.api_base_url.as_str(), "https://fresh.example/api");
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            from_toml("[api]\nbase_url = \"localhost:8000\""),
            Err(ConfigError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            from_toml("[api]\nbase_url = \"http://localhost\"\n[server]\nbind_addr = \"nowhere\""),
            Err(ConfigError::InvalidBindAddress(_))
        ));
    }
}
