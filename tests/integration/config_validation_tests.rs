//! Configuration validation integration tests
//!
//! Loading YAML files and validating every section.

#[cfg(test)]
mod tests {
    use crate::{assert_err, assert_ok};
    use campus_tracker::TrackerError;
    use campus_tracker::config::Config;
    use campus_tracker::config::models::{
        AuthConfig, CorsConfig, LoggingConfig, ServerConfig, TrackerConfig,
    };
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_example_config_loads() {
        let config = assert_ok!(Config::from_file("config/tracker.example.yaml").await);
        assert_eq!(config.server().port, 8080);
        assert_eq!(config.auth().storage_key, "user");
        assert!(config.events().seed_mock_data);
    }

    #[tokio::test]
    async fn test_empty_file_uses_defaults() {
        let file = write_config("{}\n");
        let config = assert_ok!(Config::from_file(file.path()).await);
        assert_eq!(config.auth().mock_password, "password");
        assert_eq!(config.auth().login_delay_ms, 1000);
        assert!(config.auth().session_file.is_none());
    }

    #[tokio::test]
    async fn test_malformed_yaml_is_config_error() {
        let file = write_config("server: [unterminated\n");
        let err = assert_err!(Config::from_file(file.path()).await);
        assert!(matches!(err, TrackerError::Config(_)));
    }

    #[tokio::test]
    async fn test_invalid_log_level_rejected() {
        let file = write_config("logging:\n  level: \"tracker=shouty\"\n");
        let err = assert_err!(Config::from_file(file.path()).await);
        assert!(err.to_string().contains("Logging config error"));
    }

    #[test]
    fn test_server_validation() {
        let config = ServerConfig {
            workers: Some(0),
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());

        let config = ServerConfig {
            cors: CorsConfig {
                allow_credentials: true,
                ..CorsConfig::default()
            },
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_auth_validation() {
        let config = AuthConfig {
            mock_password: String::new(),
            ..AuthConfig::default()
        };
        assert!(config.validate().is_err());

        let config = AuthConfig {
            login_delay_ms: 120_000,
            ..AuthConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_round_trips_through_yaml() {
        let config = Config {
            tracker: TrackerConfig {
                logging: LoggingConfig {
                    level: "warn".to_string(),
                    json: true,
                },
                ..TrackerConfig::default()
            },
        };
        let yaml = assert_ok!(config.to_yaml());
        let file = write_config(&yaml);

        let loaded = assert_ok!(tokio_test::block_on(Config::from_file(file.path())));
        assert_eq!(loaded.logging().level, "warn");
        assert!(loaded.logging().json);
    }
}
