//! Shared type inference logic for loaders and cell edits
//!
//! Centralized string-to-type detection so CSV files, JSON records and
//! pasted cell text all classify values the same way.

use super::table::DataType;
use regex::Regex;
use std::sync::LazyLock;

/// Static compiled regex patterns for date detection
/// Using LazyLock for thread-safe initialization
static DATE_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // YYYY-MM-DD (year must be 19xx or 20xx, month 01-12, day 01-31)
        Regex::new(r"^(19|20)\d{2}-(0[1-9]|1[0-2])-(0[1-9]|[12]\d|3[01])$").unwrap(),
        // MM/DD/YYYY
        Regex::new(r"^(0[1-9]|1[0-2])/(0[1-9]|[12]\d|3[01])/(19|20)\d{2}$").unwrap(),
        // DD/MM/YYYY
        Regex::new(r"^(0[1-9]|[12]\d|3[01])/(0[1-9]|1[0-2])/(19|20)\d{2}$").unwrap(),
        // YYYY/MM/DD
        Regex::new(r"^(19|20)\d{2}/(0[1-9]|1[0-2])/(0[1-9]|[12]\d|3[01])$").unwrap(),
    ]
});

static DATETIME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // ISO 8601: YYYY-MM-DDTHH:MM:SS
        Regex::new(r"^(19|20)\d{2}-(0[1-9]|1[0-2])-(0[1-9]|[12]\d|3[01])T\d{2}:\d{2}:\d{2}$")
            .unwrap(),
        // ISO 8601 with fraction and/or timezone
        Regex::new(
            r"^(19|20)\d{2}-(0[1-9]|1[0-2])-(0[1-9]|[12]\d|3[01])T\d{2}:\d{2}:\d{2}(\.\d+)?(Z|[+-]\d{2}:\d{2})$",
        )
        .unwrap(),
    ]
});

static TIME_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // HH:MM or HH:MM:SS, 24-hour
        Regex::new(r"^([01]\d|2[0-3]):[0-5]\d(:[0-5]\d)?$").unwrap(),
    ]
});

/// Type inference utilities
pub struct TypeInference;

impl TypeInference {
    /// Infer the column type of a single string value
    ///
    /// Order of checks matters for accuracy: temporal patterns are
    /// tested after numbers so plain years stay numeric.
    pub fn infer_from_string(value: &str) -> DataType {
        // Empty values carry no type information
        if value.is_empty() {
            return DataType::Undefined;
        }

        // Check boolean first (fast string comparison)
        if value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false") {
            return DataType::Boolean;
        }

        // One number type covers integers and decimals
        if value.parse::<f64>().is_ok() {
            return DataType::Number;
        }

        if Self::looks_like_datetime(value) {
            return DataType::DateTime;
        }

        if Self::looks_like_date(value) {
            return DataType::Date;
        }

        if Self::looks_like_time(value) {
            return DataType::Time;
        }

        DataType::String
    }

    /// Check if a string looks like a calendar date
    ///
    /// Uses strict patterns to avoid false positives with ID strings
    /// like "BQ-123456" or "ORDER-2024-001"
    pub fn looks_like_date(value: &str) -> bool {
        // Quick length check - dates are typically 8-10 chars
        if value.len() < 8 || value.len() > 10 {
            return false;
        }
        DATE_PATTERNS.iter().any(|pattern| pattern.is_match(value))
    }

    pub fn looks_like_datetime(value: &str) -> bool {
        if value.len() < 19 || value.len() > 35 {
            return false;
        }
        DATETIME_PATTERNS
            .iter()
            .any(|pattern| pattern.is_match(value))
    }

    pub fn looks_like_time(value: &str) -> bool {
        if value.len() < 5 || value.len() > 8 {
            return false;
        }
        TIME_PATTERNS.iter().any(|pattern| pattern.is_match(value))
    }

    /// Infer a column type from multiple sample values
    ///
    /// Returns the most specific type that fits all non-empty values;
    /// mixed samples degrade to String per `DataType::merge`.
    pub fn infer_from_samples<'a, I>(values: I) -> DataType
    where
        I: Iterator<Item = &'a str>,
    {
        let mut result_type = DataType::Undefined;

        for value in values {
            let value_type = Self::infer_from_string(value);
            result_type = result_type.merge(&value_type);

            // Early exit once we've degraded to String
            if result_type == DataType::String {
                break;
            }
        }

        result_type
    }

    /// Check if a raw string can be stored under a column type
    pub fn can_coerce_to(value: &str, target_type: &DataType) -> bool {
        match target_type {
            DataType::Boolean => {
                value.eq_ignore_ascii_case("true")
                    || value.eq_ignore_ascii_case("false")
                    || value == "0"
                    || value == "1"
            }
            DataType::Number => value.parse::<f64>().is_ok(),
            DataType::Date => Self::looks_like_date(value),
            DataType::Time => Self::looks_like_time(value),
            DataType::DateTime => Self::looks_like_datetime(value),
            // String, Undefined and the structured FEEL types take any text
            _ => true,
        }
    }
}
