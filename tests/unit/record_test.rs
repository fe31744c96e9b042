#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::error::ErrorKind;
    use crate::words::record::{split_syllables, WordRecord};

    #[test]
    fn test_optional_fields_are_read() {
        let record = WordRecord::from_candidate(0, json!({
            "word": "apple",
            "definition": "a fruit",
            "syllables": ["ap", "ple"],
            "origin": "Old English",
            "example": "",
            "pronunciation": "AP-uhl"
        }))
        .unwrap();

        assert_eq!(record.syllables, vec!["ap", "ple"]);
        assert_eq!(record.origin.as_deref(), Some("Old English"));
        assert_eq!(record.example, None);
        assert_eq!(record.pronunciation.as_deref(), Some("AP-uhl"));
        assert_eq!(record.prefix, None);
    }

    #[test]
    fn test_syllables_from_string() {
        let record = WordRecord::from_candidate(0, json!({
            "word": "banana",
            "definition": "a fruit",
            "syllables": "ba-na-na"
        }))
        .unwrap();
        assert_eq!(record.syllables, vec!["ba", "na", "na"]);
        assert_eq!(split_syllables("ele·phant  x"), vec!["ele", "phant", "x"]);
    }

    #[test]
    fn test_whitespace_word_is_missing() {
        let err = WordRecord::from_candidate(2, json!({"word": "  ", "definition": "d"}))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingField { index: 2, field: "word".into() });
    }

    #[test]
    fn test_non_string_definition_is_missing() {
        let err = WordRecord::from_candidate(0, json!({"word": "w", "definition": 7}))
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingField { index: 0, field: "definition".into() });
    }

    #[test]
    fn test_non_object_candidate_reports_word() {
        let err = WordRecord::from_candidate(1, json!("apple")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::MissingField { index: 1, field: "word".into() });
    }

    #[test]
    fn test_serialization_skips_absent_fields() {
        let json = serde_json::to_value(WordRecord::new("cat", "a pet")).unwrap();
        assert_eq!(json, json!({"word": "cat", "definition": "a pet"}));
    }
}
