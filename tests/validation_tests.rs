use attendance_form_bot::services::form::FormFieldIds;
use attendance_form_bot::services::users::UserDirectory;
use attendance_form_bot::utils::validation::*;
use std::collections::HashMap;

#[cfg(test)]
mod validation_tests {
    use super::*;

    fn field_ids() -> FormFieldIds {
        FormFieldIds {
            name: "entry.1".into(),
            start_time_hour: "entry.2_hour".into(),
            start_time_minute: "entry.2_minute".into(),
            start_date_year: "entry.3_year".into(),
            start_date_month: "entry.3_month".into(),
            start_date_day: "entry.3_day".into(),
            end_time_hour: "entry.4_hour".into(),
            end_time_minute: "entry.4_minute".into(),
            end_date_year: "entry.5_year".into(),
            end_date_month: "entry.5_month".into(),
            end_date_day: "entry.5_day".into(),
        }
    }

    // Form URL validation tests
    #[test]
    fn test_valid_form_urls() {
        let valid_urls = vec![
            "https://docs.google.com/forms/d/e/1FAIpQLSf/formResponse",
            "http://localhost:8080/formResponse",
            "  https://example.com/form  ",
        ];

        for url in valid_urls {
            assert!(validate_form_url(url).is_ok(), "Should accept url: {}", url);
        }
    }

    #[test]
    fn test_invalid_form_urls() {
        let invalid_urls = vec![
            "",
            "   ",
            "docs.google.com/forms",
            "ftp://example.com/form",
            "https://example.com/form response",
        ];

        for url in invalid_urls {
            assert!(validate_form_url(url).is_err(), "Should reject url: {}", url);
        }
    }

    // Form field id validation tests
    #[test]
    fn test_valid_field_ids() {
        assert!(validate_form_field_ids(&field_ids()).is_ok());
    }

    #[test]
    fn test_empty_field_id_rejected() {
        let mut ids = field_ids();
        ids.start_date_month = "  ".into();

        let err = validate_form_field_ids(&ids).unwrap_err().to_string();
        assert!(err.contains("start_date_month"), "Unexpected error: {}", err);
    }

    #[test]
    fn test_duplicate_field_id_rejected() {
        let mut ids = field_ids();
        ids.end_time_hour = ids.start_time_hour.clone();

        let err = validate_form_field_ids(&ids).unwrap_err().to_string();
        assert!(err.contains("entry.2_hour"), "Unexpected error: {}", err);
    }

    // User directory validation tests
    #[test]
    fn test_valid_user_directory() {
        let mut names = HashMap::new();
        names.insert("alice".to_string(), "Alice Tan".to_string());
        assert!(validate_user_directory(&UserDirectory::new(names)).is_ok());
        assert!(validate_user_directory(&UserDirectory::default()).is_ok());
    }

    #[test]
    fn test_blank_display_name_rejected() {
        let mut names = HashMap::new();
        names.insert("alice".to_string(), " ".to_string());
        assert!(validate_user_directory(&UserDirectory::new(names)).is_err());
    }

    #[test]
    fn test_blank_user_key_rejected() {
        let mut names = HashMap::new();
        names.insert("".to_string(), "Nobody".to_string());
        assert!(validate_user_directory(&UserDirectory::new(names)).is_err());
    }

    // UTC offset parsing tests
    #[test]
    fn test_valid_utc_offsets() {
        let cases = vec![
            ("+08:00", 8 * 3600),
            ("+0800", 8 * 3600),
            ("+8", 8 * 3600),
            ("-05:30", -(5 * 3600 + 30 * 60)),
            ("+05:45", 5 * 3600 + 45 * 60),
            ("UTC", 0),
            ("utc", 0),
            ("Z", 0),
            (" +08:00 ", 8 * 3600),
        ];

        for (input, expected) in cases {
            let offset = parse_utc_offset(input)
                .unwrap_or_else(|e| panic!("Should accept offset {}: {}", input, e));
            assert_eq!(offset.local_minus_utc(), expected, "Wrong offset for {}", input);
        }
    }

    #[test]
    fn test_invalid_utc_offsets() {
        let invalid = vec![
            "",
            "8",
            "+",
            "+15:00",
            "+08:60",
            "+ab:00",
            "Asia/Singapore",
            "+1é2",
            "+０８:00",
        ];

        for input in invalid {
            assert!(parse_utc_offset(input).is_err(), "Should reject offset: {}", input);
        }
    }
}
