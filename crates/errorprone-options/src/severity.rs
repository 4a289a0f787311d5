//! Check severities.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Enforcement level assigned to a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckSeverity {
    /// The check's own default level.
    Default,
    Off,
    Warn,
    Error,
}

impl CheckSeverity {
    /// Alias used by the "force warn" helpers.
    pub const FORCE_WARN: CheckSeverity = CheckSeverity::Warn;

    /// Alias used by the "force error" helpers.
    pub const FORCE_ERROR: CheckSeverity = CheckSeverity::Error;

    /// All severities, in declaration order.
    pub const ALL: [CheckSeverity; 4] = [
        CheckSeverity::Default,
        CheckSeverity::Off,
        CheckSeverity::Warn,
        CheckSeverity::Error,
    ];

    /// Upper-case spelling used in argument tokens.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::Off => "OFF",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// Suffix appended to `-Xep:<check>`. Empty for [`CheckSeverity::Default`].
    pub fn token_suffix(&self) -> &'static str {
        match self {
            Self::Default => "",
            Self::Off => ":OFF",
            Self::Warn => ":WARN",
            Self::Error => ":ERROR",
        }
    }
}

impl fmt::Display for CheckSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returned when a string is not a severity name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown check severity: {0}")]
pub struct UnknownSeverity(pub String);

impl FromStr for CheckSeverity {
    type Err = UnknownSeverity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DEFAULT" => Ok(Self::Default),
            "OFF" => Ok(Self::Off),
            "WARN" => Ok(Self::Warn),
            "ERROR" => Ok(Self::Error),
            other => Err(UnknownSeverity(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_suffix() {
        assert_eq!(CheckSeverity::Default.token_suffix(), "");
        assert_eq!(CheckSeverity::Off.token_suffix(), ":OFF");
        assert_eq!(CheckSeverity::Warn.token_suffix(), ":WARN");
        assert_eq!(CheckSeverity::Error.token_suffix(), ":ERROR");
    }

    #[test]
    fn test_parse_display_agree() {
        for severity in CheckSeverity::ALL {
            assert_eq!(severity.to_string().parse::<CheckSeverity>(), Ok(severity));
        }
        assert!("warn".parse::<CheckSeverity>().is_err());
    }

    #[test]
    fn test_force_aliases() {
        assert_eq!(CheckSeverity::FORCE_WARN, CheckSeverity::Warn);
        assert_eq!(CheckSeverity::FORCE_ERROR, CheckSeverity::Error);
    }

    #[test]
    fn test_serde_spelling() {
        let json = serde_json::to_string(&CheckSeverity::Off).unwrap();
        assert_eq!(json, "\"OFF\"");
        let parsed: CheckSeverity = serde_json::from_str("\"DEFAULT\"").unwrap();
        assert_eq!(parsed, CheckSeverity::Default);
    }
}
