use base64::Engine;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    #[serde(default)]
    pub akeneo: AkeneoConfig,
    #[serde(default)]
    pub campaign: CampaignConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    /// sea-orm connection URL (`mysql://...` or `sqlite://...`)
    pub url: String,
}

/// Akeneo PIM credentials
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AkeneoConfig {
    #[serde(default)]
    pub url: String,
    /// Pre-encoded base64 of `client_id:secret`
    #[serde(default)]
    pub client_id_secret: String,
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub secret: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl AkeneoConfig {
    /// Value for the `Authorization: Basic ...` header of the token request
    pub fn basic_credentials(&self) -> Option<String> {
        if !self.client_id_secret.trim().is_empty() {
            return Some(self.client_id_secret.trim().to_string());
        }
        if self.client_id.trim().is_empty() || self.secret.trim().is_empty() {
            return None;
        }
        Some(
            base64::engine::general_purpose::STANDARD
                .encode(format!("{}:{}", self.client_id.trim(), self.secret.trim())),
        )
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs.unwrap_or(30))
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CampaignConfig {
    /// Coins granted per Falcon row
    #[serde(default = "default_coins")]
    pub default_coins: i64,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        Self {
            default_coins: default_coins(),
        }
    }
}

fn default_coins() -> i64 {
    2000
}

impl Config {
    pub fn bind_address(&self) -> anyhow::Result<SocketAddr> {
        let addr = format!("{}:{}", self.server.host, self.server.port);
        addr.parse()
            .map_err(|e| anyhow::anyhow!("invalid server address '{}': {}", addr, e))
    }

    /// Names of required settings that are empty
    pub fn missing_settings(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.database.url.trim().is_empty() {
            missing.push("database.url");
        }
        if self.akeneo.url.trim().is_empty() {
            missing.push("akeneo.url");
        }
        if self.akeneo.basic_credentials().is_none() {
            missing.push("akeneo.client_id_secret (or akeneo.client_id + akeneo.secret)");
        }
        if self.akeneo.username.trim().is_empty() {
            missing.push("akeneo.username");
        }
        if self.akeneo.password.is_empty() {
            missing.push("akeneo.password");
        }
        missing
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[database]
url = "sqlite://target/db/store_ops.db?mode=rwc"
"#;

/// Load configuration from config.toml
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                return load_config_from(&config_path);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn load_config_from(path: &Path) -> anyhow::Result<Config> {
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str(contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.database.url, "sqlite://target/db/store_ops.db?mode=rwc");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.campaign.default_coins, 2000);
    }

    #[test]
    fn test_default_config_reports_missing_pim_settings() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        let missing = config.missing_settings();
        assert!(missing.contains(&"akeneo.url"));
        assert!(missing.contains(&"akeneo.username"));
        assert!(missing.contains(&"akeneo.password"));
        assert!(!missing.contains(&"database.url"));
    }

    #[test]
    fn test_basic_credentials() {
        let mut akeneo = AkeneoConfig {
            client_id: "app".into(),
            secret: "s3cret".into(),
            ..AkeneoConfig::default()
        };
        assert_eq!(akeneo.basic_credentials().as_deref(), Some("YXBwOnMzY3JldA=="));

        akeneo.client_id_secret = "cHJlOmVuY29kZWQ=".into();
        assert_eq!(akeneo.basic_credentials().as_deref(), Some("cHJlOmVuY29kZWQ="));

        assert_eq!(AkeneoConfig::default().basic_credentials(), None);
    }

    #[test]
    fn test_full_config() {
        let config = parse_config(
            r#"
            [server]
            host = "127.0.0.1"
            port = 9000

            [database]
            url = "mysql://ops:pw@db:3306/store_ops"

            [akeneo]
            url = "https://pim.local"
            client_id_secret = "abc"
            username = "svc"
            password = "pw"

            [campaign]
            default_coins = 1500
            "#,
        )
        .unwrap();
        assert!(config.missing_settings().is_empty());
        assert_eq!(config.bind_address().unwrap().port(), 9000);
        assert_eq!(config.campaign.default_coins, 1500);
        assert_eq!(config.akeneo.timeout().as_secs(), 30);
    }
}
