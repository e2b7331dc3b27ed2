use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

const DEFAULT_SERVER_PORT: u16 = 2022;
const DEFAULT_MAX_UPLOAD_SIZE: u64 = 50 * 1024 * 1024; // 50MB

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub media: MediaConfig,
    /// Enables dangerous operations like purge. Must never be true in production.
    pub test_mode: bool,
    /// Maximum photo upload size in bytes
    pub max_upload_size: u64,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_address: String,
    pub data_dir: String,
    /// Origins allowed by CORS. Empty means any origin.
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct MediaConfig {
    /// Directory for uploaded photo files
    pub local_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: format!("0.0.0.0:{DEFAULT_SERVER_PORT}"),
            data_dir: "./data".to_string(),
            allowed_origins: Vec::new(),
        }
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            local_path: "./media".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let bind_address = match std::env::var("BIND_ADDRESS") {
            Ok(addr) => addr,
            Err(_) => {
                let port = match std::env::var("SERVER_PORT") {
                    Ok(raw) => raw.parse::<u16>().map_err(|_| {
                        ConfigError::ValidationError(format!(
                            "SERVER_PORT must be a port number, got '{raw}'"
                        ))
                    })?,
                    Err(_) => DEFAULT_SERVER_PORT,
                };
                format!("0.0.0.0:{port}")
            }
        };

        let data_dir = std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string());

        let allowed_origins = std::env::var("CORS_ALLOWED_ORIGINS")
            .map(|origins| parse_list(&origins))
            .unwrap_or_default();

        let local_path = std::env::var("MEDIA_PATH").unwrap_or_else(|_| "./media".to_string());

        let test_mode = std::env::var("TEST_MODE")
            .map(|v| v == "true" || v == "1")
            .unwrap_or(false);

        let max_upload_size =
            parse_upload_size(std::env::var("MAX_UPLOAD_SIZE").ok().as_deref())?;

        let config = Config {
            server: ServerConfig {
                bind_address,
                data_dir,
                allowed_origins,
            },
            media: MediaConfig { local_path },
            test_mode,
            max_upload_size,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.bind_address.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "BIND_ADDRESS cannot be empty".to_string(),
            ));
        }

        if self.max_upload_size == 0 {
            return Err(ConfigError::ValidationError(
                "MAX_UPLOAD_SIZE must be greater than 0".to_string(),
            ));
        }

        if let Some(origin) = self
            .server
            .allowed_origins
            .iter()
            .find(|o| o.parse::<axum::http::HeaderValue>().is_err())
        {
            return Err(ConfigError::ValidationError(format!(
                "CORS_ALLOWED_ORIGINS contains an invalid origin: '{origin}'"
            )));
        }

        if self.test_mode {
            tracing::warn!("TEST_MODE is enabled. Never run this configuration in production.");
        }

        Ok(())
    }
}

fn parse_upload_size(raw: Option<&str>) -> Result<u64, ConfigError> {
    match raw {
        Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
            ConfigError::ValidationError(format!(
                "MAX_UPLOAD_SIZE must be a byte count, got '{raw}'"
            ))
        }),
        None => Ok(DEFAULT_MAX_UPLOAD_SIZE),
    }
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
