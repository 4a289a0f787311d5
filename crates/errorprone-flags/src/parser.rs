//! Argument string parser.

use errorprone_options::{
    CheckSeverity, ALL_DISABLED_CHECKS_AS_WARNINGS, ALL_ERRORS_AS_WARNINGS, CHECK_PREFIX,
    COMPILING_TEST_ONLY_CODE, DISABLE_ALL_CHECKS, DISABLE_WARNINGS_IN_GENERATED_CODE,
    EXCLUDED_PATHS_PREFIX, IGNORE_SUPPRESSION_ANNOTATIONS, IGNORE_UNKNOWN_CHECK_NAMES,
    OPTION_PREFIX,
};

use crate::result::{FlagError, ParsedFlags};

/// Boolean flags of the grammar.
pub const BOOLEAN_FLAGS: &[&str] = &[
    DISABLE_ALL_CHECKS,
    ALL_ERRORS_AS_WARNINGS,
    ALL_DISABLED_CHECKS_AS_WARNINGS,
    DISABLE_WARNINGS_IN_GENERATED_CODE,
    IGNORE_UNKNOWN_CHECK_NAMES,
    IGNORE_SUPPRESSION_ANNOTATIONS,
    COMPILING_TEST_ONLY_CODE,
];

/// Value given to `-XepOpt:<name>` when no `=` is present.
const IMPLICIT_OPTION_VALUE: &str = "true";

/// Split an argument string on runs of white space.
pub fn split_arguments(arguments: &str) -> Vec<String> {
    arguments.split_whitespace().map(|s| s.to_string()).collect()
}

/// Split and parse an argument string.
pub fn parse_argument_string(arguments: &str) -> Result<ParsedFlags, FlagError> {
    parse_flags(&split_arguments(arguments))
}

/// Parse already-split tokens.
pub fn parse_flags(argv: &[String]) -> Result<ParsedFlags, FlagError> {
    let mut parsed = ParsedFlags::default();

    for arg in argv {
        if BOOLEAN_FLAGS.contains(&arg.as_str()) {
            if !parsed.has_flag(arg) {
                parsed.boolean_flags.push(arg.clone());
            }
            continue;
        }

        if let Some(pattern) = arg.strip_prefix(EXCLUDED_PATHS_PREFIX) {
            if pattern.is_empty() {
                return Err(FlagError::EmptyExcludedPaths(arg.clone()));
            }
            parsed.excluded_paths = Some(pattern.to_string());
            continue;
        }

        if let Some(body) = arg.strip_prefix(OPTION_PREFIX) {
            // Option names may themselves contain ':'; only '=' separates.
            let (name, value) = body.split_once('=').unwrap_or((body, IMPLICIT_OPTION_VALUE));
            parsed.options.insert(name.to_string(), value.to_string());
            continue;
        }

        if let Some(body) = arg.strip_prefix(CHECK_PREFIX) {
            let (name, severity) = parse_check(arg, body)?;
            parsed.severities.insert(name.to_string(), severity);
            continue;
        }

        parsed.other.push(arg.clone());
    }

    Ok(parsed)
}

fn parse_check<'a>(arg: &str, body: &'a str) -> Result<(&'a str, CheckSeverity), FlagError> {
    let parts: Vec<&str> = body.split(':').collect();
    let (name, severity) = match parts.as_slice() {
        [name] => (*name, CheckSeverity::Default),
        [name, severity] => {
            let severity = severity
                .parse::<CheckSeverity>()
                .map_err(|_| FlagError::UnknownSeverity(arg.to_string()))?;
            (*name, severity)
        }
        _ => return Err(FlagError::TooManySeparators(arg.to_string())),
    };
    if name.is_empty() {
        return Err(FlagError::EmptyCheckName(arg.to_string()));
    }
    Ok((name, severity))
}
