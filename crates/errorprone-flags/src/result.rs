//! Parsed argument types.

use errorprone_options::CheckSeverity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Malformed `-Xep` tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "type", content = "token")]
pub enum FlagError {
    /// `-Xep:` with nothing after it, or `-Xep::WARN`.
    #[serde(rename = "EMPTY_CHECK_NAME")]
    #[error("empty check name in {0}")]
    EmptyCheckName(String),

    /// More than one `:` after the check name.
    #[serde(rename = "TOO_MANY_SEPARATORS")]
    #[error("expected -Xep:<check>[:<severity>], got {0}")]
    TooManySeparators(String),

    #[serde(rename = "UNKNOWN_SEVERITY")]
    #[error("unknown severity in {0}")]
    UnknownSeverity(String),

    #[serde(rename = "EMPTY_EXCLUDED_PATHS")]
    #[error("empty pattern in {0}")]
    EmptyExcludedPaths(String),
}

impl FlagError {
    /// Machine-readable form, `CODE:token`.
    pub fn to_code(&self) -> String {
        match self {
            FlagError::EmptyCheckName(t) => format!("EMPTY_CHECK_NAME:{}", t),
            FlagError::TooManySeparators(t) => format!("TOO_MANY_SEPARATORS:{}", t),
            FlagError::UnknownSeverity(t) => format!("UNKNOWN_SEVERITY:{}", t),
            FlagError::EmptyExcludedPaths(t) => format!("EMPTY_EXCLUDED_PATHS:{}", t),
        }
    }
}

/// Arguments sorted by kind. Later tokens override earlier ones for the same
/// check, option or pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedFlags {
    /// Boolean `-Xep<Name>` flags, in first-seen order, without duplicates.
    #[serde(default)]
    pub boolean_flags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excluded_paths: Option<String>,

    #[serde(default)]
    pub severities: BTreeMap<String, CheckSeverity>,

    #[serde(default)]
    pub options: BTreeMap<String, String>,

    /// Tokens outside the grammar, in order.
    #[serde(default)]
    pub other: Vec<String>,
}

impl ParsedFlags {
    /// Whether a boolean flag was present.
    pub fn has_flag(&self, flag: &str) -> bool {
        self.boolean_flags.iter().any(|f| f == flag)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            FlagError::UnknownSeverity("-Xep:A:LOUD".to_string()).to_code(),
            "UNKNOWN_SEVERITY:-Xep:A:LOUD"
        );
        assert_eq!(
            FlagError::EmptyCheckName("-Xep:".to_string()).to_string(),
            "empty check name in -Xep:"
        );
    }

    #[test]
    fn test_error_serialization() {
        let json =
            serde_json::to_string(&FlagError::TooManySeparators("-Xep:a:b:c".to_string()))
                .unwrap();
        assert!(json.contains("TOO_MANY_SEPARATORS"));
        assert!(json.contains("-Xep:a:b:c"));
    }

    #[test]
    fn test_has_flag() {
        let parsed = ParsedFlags {
            boolean_flags: vec!["-XepDisableAllChecks".to_string()],
            ..Default::default()
        };
        assert!(parsed.has_flag("-XepDisableAllChecks"));
        assert!(!parsed.has_flag("-XepAllErrorsAsWarnings"));
    }

    #[test]
    fn test_json_skips_missing_pattern() {
        let json = ParsedFlags::default().to_json().unwrap();
        assert!(!json.contains("excluded_paths"));
        assert!(json.contains("\"severities\": {}"));
    }
}
