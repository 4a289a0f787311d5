//! Validation of names and values before they become tokens.

use regex_lite::Regex;
use std::sync::OnceLock;

use crate::error::OptionsError;

/// Separates fields inside `-Xep:` tokens.
const FIELD_SEPARATOR: char = ':';

fn whitespace() -> &'static Regex {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE.get_or_init(|| Regex::new(r"\s").expect("static pattern"))
}

/// Reject check names containing `:`.
pub fn validate_name(name: &str) -> Result<(), OptionsError> {
    if name.contains(FIELD_SEPARATOR) {
        return Err(OptionsError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Reject a value containing white space. `prefix` is echoed in the error.
pub fn validate_no_whitespace(value: &str, prefix: &str) -> Result<(), OptionsError> {
    if whitespace().is_match(value) {
        return Err(OptionsError::InvalidArgument {
            prefix: prefix.to_string(),
            value: value.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name() {
        assert!(validate_name("NullAway").is_ok());
        assert!(validate_name("").is_ok());
        assert_eq!(
            validate_name("ArrayEquals:OFF"),
            Err(OptionsError::InvalidName {
                name: "ArrayEquals:OFF".to_string()
            })
        );
    }

    #[test]
    fn test_validate_no_whitespace() {
        assert!(validate_no_whitespace("a.b.c", "-XepOpt:").is_ok());
        assert!(validate_no_whitespace("", "-XepOpt:").is_ok());
        for bad in ["a b", "a\tb", "a\nb", " lead", "trail\r"] {
            let err = validate_no_whitespace(bad, "-XepExcludedPaths:").unwrap_err();
            assert_eq!(
                err,
                OptionsError::InvalidArgument {
                    prefix: "-XepExcludedPaths:".to_string(),
                    value: bad.to_string(),
                }
            );
        }
    }
}
