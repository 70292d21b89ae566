use anyhow::{Context, Result};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub client: ClientConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub cors_allowed_origin: String,
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
            cors_allowed_origin: "http://localhost:4000".to_string(),
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// `host:port` of the server, optionally with a scheme.
    pub api_host: String,
    pub log_dir: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_host: "localhost:3000".to_string(),
            log_dir: default_log_dir(),
        }
    }
}

impl ClientConfig {
    /// Base URL for API requests.
    pub fn base_url(&self) -> String {
        let host = self.api_host.trim_end_matches('/');
        if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("http://{}", host)
        }
    }
}

fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("csv-search"))
        .unwrap_or_else(|| PathBuf::from("."))
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let server_defaults = ServerConfig::default();
        let client_defaults = ClientConfig::default();

        Ok(Self {
            server: ServerConfig {
                port: match env::var("PORT") {
                    Ok(port) => port.parse().with_context(|| format!("invalid PORT: {}", port))?,
                    Err(_) => server_defaults.port,
                },
                host: env::var("HOST").unwrap_or(server_defaults.host),
                cors_allowed_origin: env::var("CORS_ORIGIN")
                    .map(|s| s.trim().to_string())
                    .unwrap_or(server_defaults.cors_allowed_origin),
                max_upload_bytes: match env::var("MAX_UPLOAD_BYTES") {
                    Ok(bytes) => bytes
                        .parse()
                        .with_context(|| format!("invalid MAX_UPLOAD_BYTES: {}", bytes))?,
                    Err(_) => server_defaults.max_upload_bytes,
                },
            },
            client: ClientConfig {
                api_host: env::var("API_HOST").unwrap_or(client_defaults.api_host),
                log_dir: env::var("CSV_SEARCH_LOG_DIR")
                    .map(PathBuf::from)
                    .unwrap_or(client_defaults.log_dir),
            },
        })
    }
}
