#[cfg(test)]
mod tests {
    use crate::config::{Config, ConfigError, API_KEY_FIELD};
    use crate::i18n::Locale;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_language_defaults_to_vietnamese() {
        let config = Config::from_json(r#"{"OPENAI_API_KEY_CREATE": ""}"#).unwrap();

        assert!(config.api_key.is_empty());
        assert_eq!(config.language, Locale::Vietnamese);
    }

    #[test]
    fn test_from_json_reads_fixed_key() {
        let config = Config::from_json(r#"{"OPENAI_API_KEY_CREATE": "sk-test"}"#).unwrap();

        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.language, Locale::Vietnamese);
    }

    #[test]
    fn test_from_json_language_override() {
        let config =
            Config::from_json(r#"{"OPENAI_API_KEY_CREATE": "sk-test", "language": "en"}"#).unwrap();

        assert_eq!(config.language, Locale::English);
    }

    #[test]
    fn test_from_json_ignores_unknown_keys() {
        let config = Config::from_json(
            r#"{"OPENAI_API_KEY": "other", "OPENAI_API_KEY_CREATE": "sk-test", "extra": 1}"#,
        )
        .unwrap();

        assert_eq!(config.api_key, "sk-test");
    }

    #[test]
    fn test_from_json_missing_key() {
        let err = Config::from_json(r#"{"OPENAI_API_KEY": "sk-test"}"#).unwrap_err();

        assert!(err.to_string().contains(API_KEY_FIELD));
    }

    #[test]
    fn test_from_json_rejects_unknown_language() {
        assert!(
            Config::from_json(r#"{"OPENAI_API_KEY_CREATE": "sk-test", "language": "fr"}"#).is_err()
        );
    }

    #[test]
    fn test_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{"OPENAI_API_KEY_CREATE": "sk-from-file"}"#).unwrap();

        let config = Config::from_file(&path).unwrap();

        assert_eq!(config.api_key, "sk-from-file");
    }

    #[test]
    fn test_from_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope.json");

        let err = Config::from_file(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Open { .. }));
    }

    #[test]
    fn test_from_file_not_utf8_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x7b]).unwrap();

        let err = Config::from_file(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().starts_with("failed to read config file"));
    }

    #[test]
    fn test_from_file_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "OPENAI_API_KEY_CREATE = sk").unwrap();

        let err = Config::from_file(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = Config {
            api_key: "sk-secret".to_string(),
            language: Locale::English,
        };

        let printed = format!("{:?}", config);
        assert!(!printed.contains("sk-secret"));
        assert!(printed.contains("<redacted>"));
    }
}
