//! Errors raised while configuring or resolving options.

/// Validation failures. Both are terminal for the operation that raised them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    /// A check name contains the `:` field separator.
    #[error("check name cannot contain a colon (\":\"): \"{name}\"")]
    InvalidName { name: String },

    /// A resolved value contains white space. `prefix` is the token prefix
    /// the value would have been emitted under.
    #[error("options cannot contain white space: \"{prefix}{value}\"")]
    InvalidArgument { prefix: String, value: String },
}

impl OptionsError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidName { .. } => "INVALID_NAME",
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_quote_offending_value() {
        let err = OptionsError::InvalidName {
            name: "ArrayEquals:OFF".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "check name cannot contain a colon (\":\"): \"ArrayEquals:OFF\""
        );
        assert_eq!(err.code(), "INVALID_NAME");

        let err = OptionsError::InvalidArgument {
            prefix: "-XepOpt:".to_string(),
            value: "Foo=Bar Baz".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "options cannot contain white space: \"-XepOpt:Foo=Bar Baz\""
        );
        assert_eq!(err.code(), "INVALID_ARGUMENT");
    }
}
