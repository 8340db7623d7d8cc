use crate::{MockProvider, ProviderError, ProviderResult, RemoteProvider, VideoProvider};
use reelgen_core::config::ProviderKind;
use reelgen_core::Config;
use std::sync::Arc;

/// Create a video-generation provider based on configuration
pub fn create_provider(config: &Config) -> ProviderResult<Arc<dyn VideoProvider>> {
    match config.provider {
        ProviderKind::Mock => Ok(Arc::new(MockProvider::new(config.mock_video_url.clone()))),

        ProviderKind::Remote => {
            let api_base = config.provider_api_base.clone().ok_or_else(|| {
                ProviderError::ConfigError("PROVIDER_API_BASE not configured".to_string())
            })?;
            let api_key = config.provider_api_key.clone().ok_or_else(|| {
                ProviderError::ConfigError("PROVIDER_API_KEY not configured".to_string())
            })?;

            let provider = RemoteProvider::new(api_base, api_key, config.provider_timeout_secs)?;
            Ok(Arc::new(provider))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_mock_provider() {
        let config = Config::default();
        let provider = create_provider(&config).unwrap();
        assert_eq!(provider.name(), "mock");
    }

    #[test]
    fn test_create_remote_provider_requires_config() {
        let config = Config {
            provider: ProviderKind::Remote,
            ..Config::default()
        };
        assert!(matches!(
            create_provider(&config),
            Err(ProviderError::ConfigError(_))
        ));
    }

    #[test]
    fn test_create_remote_provider() {
        let config = Config {
            provider: ProviderKind::Remote,
            provider_api_base: Some("https://api.example.com".to_string()),
            provider_api_key: Some("test-key".to_string()),
            ..Config::default()
        };
        let provider = create_provider(&config).unwrap();
        assert_eq!(provider.name(), "remote");
    }
}
