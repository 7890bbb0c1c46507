// src/shared/config.rs
use reqwest::Url;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_ENVIRONMENT: &str = "development";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got `{0}`")]
    InvalidPort(String),

    #[error("BACKEND_URL `{url}` is not a valid URL: {reason}")]
    InvalidBackendUrl { url: String, reason: String },

    #[error("BACKEND_URL must use http or https, got `{0}`")]
    UnsupportedScheme(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Remote portfolio backend. `None` serves the compiled-in document.
    pub backend_url: Option<Url>,
    pub environment: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match get("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let backend_url = get("BACKEND_URL")
            .map(|raw| parse_backend_url(raw.trim()))
            .transpose()?;

        let environment = get("RUST_ENV").unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

        Ok(Self {
            host,
            port,
            backend_url,
            environment,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_backend_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidBackendUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::UnsupportedScheme(other.to_string())),
    }
}

/// Loads `.env.{RUST_ENV}` and falls back to `.env`. Returns the file that
/// was loaded, if any.
pub fn load_env_files() -> Option<String> {
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| DEFAULT_ENVIRONMENT.to_string());

    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_ok() {
        return Some(env_file);
    }
    dotenvy::dotenv()
        .ok()
        .map(|path| path.display().to_string())
}
