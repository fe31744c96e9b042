#[cfg(test)]
mod tests {
    use crate::error::{ErrorKind, SpellError};

    #[test]
    fn test_missing_field_names_index_and_field() {
        let error = SpellError::missing_field(4, "definition");
        assert_eq!(
            error.kind,
            ErrorKind::MissingField { index: 4, field: "definition".to_string() }
        );
        assert_eq!(error.stage, "validate");
        assert!(error.message.contains('4'));
        assert!(error.message.contains("definition"));
    }

    #[test]
    fn test_error_with_context() {
        let error = SpellError::format("bad table").with_context("path: words.csv");
        assert_eq!(error.context.as_deref(), Some("path: words.csv"));
    }

    #[test]
    fn test_error_display() {
        let error = SpellError::empty_corpus().with_context("context");
        let display = format!("{}", error);
        assert!(display.starts_with("[challenge]"));
        assert!(display.contains("empty corpus"));
        assert!(display.contains("context"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error: SpellError = io.into();
        assert_eq!(error.kind, ErrorKind::Io);
        assert_eq!(error.source.as_deref(), Some("std::io"));
    }

    #[test]
    fn test_store_error_conversion() {
        let error: SpellError = crate::store::StoreError::InvalidKey("../x".into()).into();
        assert_eq!(error.kind, ErrorKind::Storage);
        assert!(error.message.contains("../x"));
    }

    #[test]
    fn test_invalid_settings_toml() {
        let err = crate::config::settings::Settings::from_toml_str("challenge_size = \"ten\"")
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Config);
    }

    #[test]
    fn test_partial_settings_keep_defaults() {
        let settings = crate::config::settings::Settings::from_toml_str("log_format = \"json\"")
            .unwrap();
        assert_eq!(settings.log_format, crate::logging::LogFormat::Json);
        assert_eq!(settings.challenge_size, crate::challenge::DAILY_CHALLENGE_SIZE);
    }
}
