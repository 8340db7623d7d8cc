//! Configuration module
//!
//! Environment-backed configuration for the API and services. Values are read
//! once at startup via [`Config::from_env`] and validated before the server
//! starts accepting requests.

use std::env;
use std::str::FromStr;

const DEFAULT_SERVER_PORT: u16 = 8000;
const DEFAULT_MAX_UPLOAD_SIZE_MB: usize = 100;
const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 120;
const DEFAULT_STAGING_DIR: &str = "./staging";
const DEFAULT_MOCK_VIDEO_URL: &str = "https://example.com/generated-reel.mp4";
const DEFAULT_PROMPT: &str =
    "A polished product showcase with studio lighting and a slow orbiting camera";

/// Which video-generation provider backs the service
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderKind {
    Mock,
    Remote,
}

impl FromStr for ProviderKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mock" => Ok(ProviderKind::Mock),
            "remote" => Ok(ProviderKind::Remote),
            other => Err(anyhow::anyhow!(
                "Invalid VIDEO_PROVIDER '{}'. Must be 'mock' or 'remote'",
                other
            )),
        }
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    // Staging
    pub staging_dir: String,
    // Upload constraints
    pub max_upload_size_bytes: usize,
    pub allowed_extensions: Vec<String>,
    // Generation
    pub default_prompt: String,
    pub provider: ProviderKind,
    pub mock_video_url: String,
    pub provider_api_base: Option<String>,
    pub provider_api_key: Option<String>,
    pub provider_timeout_secs: u64,
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_parse<T: FromStr>(key: &str, default: T) -> Result<T, anyhow::Error> {
    match env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|_| anyhow::anyhow!("Invalid value for {}: '{}'", key, raw)),
        Err(_) => Ok(default),
    }
}

fn env_list(key: &str, default: &[&str]) -> Vec<String> {
    match env::var(key) {
        Ok(raw) => raw
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty())
            .collect(),
        Err(_) => default.iter().map(|s| s.to_string()).collect(),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        // Load .env if present; real environment variables take precedence
        dotenvy::dotenv().ok();

        let max_upload_size_mb: usize =
            env_parse("MAX_UPLOAD_SIZE_MB", DEFAULT_MAX_UPLOAD_SIZE_MB)?;

        let provider = env_or("VIDEO_PROVIDER", "mock").parse::<ProviderKind>()?;

        Ok(Config {
            server_port: env_parse("SERVER_PORT", DEFAULT_SERVER_PORT)?,
            cors_origins: env_list("CORS_ORIGINS", &["*"]),
            environment: env_or("ENVIRONMENT", "development"),
            staging_dir: env_or("STAGING_DIR", DEFAULT_STAGING_DIR),
            max_upload_size_bytes: max_upload_size_mb * 1024 * 1024,
            allowed_extensions: env_list("ALLOWED_EXTENSIONS", &["gltf", "glb"]),
            default_prompt: env_or("DEFAULT_PROMPT", DEFAULT_PROMPT),
            provider,
            mock_video_url: env_or("MOCK_VIDEO_URL", DEFAULT_MOCK_VIDEO_URL),
            provider_api_base: env_opt("PROVIDER_API_BASE"),
            provider_api_key: env_opt("PROVIDER_API_KEY"),
            provider_timeout_secs: env_parse(
                "PROVIDER_TIMEOUT_SECS",
                DEFAULT_PROVIDER_TIMEOUT_SECS,
            )?,
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    /// Fail fast on configurations that cannot serve requests
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.max_upload_size_bytes == 0 {
            anyhow::bail!("MAX_UPLOAD_SIZE_MB must be greater than zero");
        }
        if self.allowed_extensions.is_empty() {
            anyhow::bail!("ALLOWED_EXTENSIONS must not be empty");
        }
        if self.provider_timeout_secs == 0 {
            anyhow::bail!("PROVIDER_TIMEOUT_SECS must be greater than zero");
        }
        if self.provider == ProviderKind::Remote {
            if self.provider_api_base.is_none() {
                anyhow::bail!("PROVIDER_API_BASE is required when VIDEO_PROVIDER is 'remote'");
            }
            if self.provider_api_key.is_none() {
                anyhow::bail!("PROVIDER_API_KEY is required when VIDEO_PROVIDER is 'remote'");
            }
        }
        Ok(())
    }
}

impl Default for Config {
    /// In-process defaults, used by tests that don't want env coupling
    fn default() -> Self {
        Config {
            server_port: DEFAULT_SERVER_PORT,
            cors_origins: vec!["*".to_string()],
            environment: "development".to_string(),
            staging_dir: DEFAULT_STAGING_DIR.to_string(),
            max_upload_size_bytes: DEFAULT_MAX_UPLOAD_SIZE_MB * 1024 * 1024,
            allowed_extensions: vec!["gltf".to_string(), "glb".to_string()],
            default_prompt: DEFAULT_PROMPT.to_string(),
            provider: ProviderKind::Mock,
            mock_video_url: DEFAULT_MOCK_VIDEO_URL.to_string(),
            provider_api_base: None,
            provider_api_key: None,
            provider_timeout_secs: DEFAULT_PROVIDER_TIMEOUT_SECS,
        }
    }
}
