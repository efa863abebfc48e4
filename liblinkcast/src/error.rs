//! Error types for Linkcast

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LinkcastError>;

#[derive(Error, Debug)]
pub enum LinkcastError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

#[derive(Error, Debug, Clone)]
pub enum PlatformError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Content validation failed: {0}")]
    Validation(String),

    #[error("Posting failed: {0}")]
    Posting(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_formatting_invalid_input() {
        let error = LinkcastError::InvalidInput("Link title cannot be empty".to_string());
        assert_eq!(
            format!("{}", error),
            "Invalid input: Link title cannot be empty"
        );
    }

    #[test]
    fn test_error_message_formatting_authentication() {
        let error = LinkcastError::Platform(PlatformError::Authentication(
            "Token rejected".to_string(),
        ));
        assert_eq!(
            format!("{}", error),
            "Platform error: Authentication failed: Token rejected"
        );
    }

    #[test]
    fn test_error_message_formatting_config() {
        let error = LinkcastError::Config(ConfigError::MissingField(
            "mastodon.instance".to_string(),
        ));
        assert_eq!(
            format!("{}", error),
            "Configuration error: Missing required field: mastodon.instance"
        );
    }

    #[test]
    fn test_platform_error_variants() {
        let validation = PlatformError::Validation("Content too long".to_string());
        assert_eq!(
            format!("{}", validation),
            "Content validation failed: Content too long"
        );

        let posting = PlatformError::Posting("Server returned 500".to_string());
        assert_eq!(format!("{}", posting), "Posting failed: Server returned 500");

        let network = PlatformError::Network("Connection refused".to_string());
        assert_eq!(format!("{}", network), "Network error: Connection refused");

        let rate_limit = PlatformError::RateLimit("Too many requests".to_string());
        assert_eq!(
            format!("{}", rate_limit),
            "Rate limit exceeded: Too many requests"
        );
    }

    #[test]
    fn test_error_conversion_from_config_error() {
        let config_error = ConfigError::MissingField("mastodon.access_token".to_string());
        let error: LinkcastError = config_error.into();
        assert!(matches!(error, LinkcastError::Config(_)));
    }

    #[test]
    fn test_error_conversion_from_platform_error() {
        let platform_error = PlatformError::Posting("boom".to_string());
        let error: LinkcastError = platform_error.into();
        assert!(matches!(error, LinkcastError::Platform(_)));
    }

    #[test]
    fn test_platform_error_clone() {
        // Retry logic re-reports the same error on each failed attempt.
        let original = PlatformError::Network("timeout".to_string());
        let cloned = original.clone();
        assert_eq!(format!("{}", original), format!("{}", cloned));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_err() -> Result<()> {
            Err(LinkcastError::InvalidInput("test".to_string()))
        }
        assert!(returns_err().is_err());
    }
}
