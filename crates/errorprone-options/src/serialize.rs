//! Resolution and token emission.
//!
//! Options are first resolved into a [`ResolvedOptions`] snapshot, reading
//! every deferred field exactly once, and then validated and emitted in a
//! fixed order:
//!
//! 1. boolean flags
//! 2. `-XepExcludedPaths:<pattern>`
//! 3. `-Xep:<check>[:<SEVERITY>]`, by check name
//! 4. `-XepOpt:<name>=<value>`, by option name
//! 5. raw arguments, in append order
//! 6. provider arguments, providers in append order

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, trace};

use crate::error::OptionsError;
use crate::options::ErrorProneOptions;
use crate::severity::CheckSeverity;
use crate::validate::{validate_name, validate_no_whitespace};

pub const DISABLE_ALL_CHECKS: &str = "-XepDisableAllChecks";
pub const ALL_ERRORS_AS_WARNINGS: &str = "-XepAllErrorsAsWarnings";
pub const ALL_DISABLED_CHECKS_AS_WARNINGS: &str = "-XepAllDisabledChecksAsWarnings";
pub const DISABLE_WARNINGS_IN_GENERATED_CODE: &str = "-XepDisableWarningsInGeneratedCode";
pub const IGNORE_UNKNOWN_CHECK_NAMES: &str = "-XepIgnoreUnknownCheckNames";
pub const IGNORE_SUPPRESSION_ANNOTATIONS: &str = "-XepIgnoreSuppressionAnnotations";
pub const COMPILING_TEST_ONLY_CODE: &str = "-XepCompilingTestOnlyCode";

pub const EXCLUDED_PATHS_PREFIX: &str = "-XepExcludedPaths:";
pub const CHECK_PREFIX: &str = "-Xep:";
pub const OPTION_PREFIX: &str = "-XepOpt:";

/// javac argument that loads the plugin.
pub const PLUGIN_ARGUMENT: &str = "-Xplugin:ErrorProne";

/// Options with every deferred value resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedOptions {
    pub enabled: bool,
    pub disable_all_checks: bool,
    pub all_errors_as_warnings: bool,
    pub all_disabled_checks_as_warnings: bool,
    pub disable_warnings_in_generated_code: bool,
    pub ignore_unknown_check_names: bool,
    pub ignore_suppression_annotations: bool,
    pub compiling_test_only_code: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excluded_paths: Option<String>,
    /// Checks whose severity resolved to a value.
    pub checks: BTreeMap<String, CheckSeverity>,
    pub check_options: BTreeMap<String, String>,
    pub args: Vec<String>,
    /// Output of every argument provider, concatenated in append order.
    pub provided_args: Vec<String>,
}

impl ResolvedOptions {
    /// Validate and emit the argument tokens.
    ///
    /// Fails on the first invalid value; nothing is returned in that case.
    pub fn to_arguments(&self) -> Result<Vec<String>, OptionsError> {
        let mut tokens = Vec::new();

        let flags = [
            (self.disable_all_checks, DISABLE_ALL_CHECKS),
            (self.all_errors_as_warnings, ALL_ERRORS_AS_WARNINGS),
            (
                self.all_disabled_checks_as_warnings,
                ALL_DISABLED_CHECKS_AS_WARNINGS,
            ),
            (
                self.disable_warnings_in_generated_code,
                DISABLE_WARNINGS_IN_GENERATED_CODE,
            ),
            (self.ignore_unknown_check_names, IGNORE_UNKNOWN_CHECK_NAMES),
            (
                self.ignore_suppression_annotations,
                IGNORE_SUPPRESSION_ANNOTATIONS,
            ),
            (self.compiling_test_only_code, COMPILING_TEST_ONLY_CODE),
        ];
        tokens.extend(
            flags
                .iter()
                .filter(|(set, _)| *set)
                .map(|(_, flag)| flag.to_string()),
        );

        if let Some(pattern) = &self.excluded_paths {
            validate_no_whitespace(pattern, EXCLUDED_PATHS_PREFIX)?;
            tokens.push(format!("{}{}", EXCLUDED_PATHS_PREFIX, pattern));
        }

        for (name, severity) in &self.checks {
            validate_name(name)?;
            validate_no_whitespace(name, CHECK_PREFIX)?;
            tokens.push(format!("{}{}{}", CHECK_PREFIX, name, severity.token_suffix()));
        }

        for (name, value) in &self.check_options {
            let body = format!("{}={}", name, value);
            validate_no_whitespace(&body, OPTION_PREFIX)?;
            tokens.push(format!("{}{}", OPTION_PREFIX, body));
        }

        tokens.extend(self.args.iter().cloned());
        tokens.extend(self.provided_args.iter().cloned());

        Ok(tokens)
    }

    /// The `-Xplugin:ErrorProne …` javac argument, or `None` when disabled.
    pub fn plugin_argument(&self) -> Result<Option<String>, OptionsError> {
        if !self.enabled {
            return Ok(None);
        }
        let tokens = self.to_arguments()?;
        if tokens.is_empty() {
            return Ok(Some(PLUGIN_ARGUMENT.to_string()));
        }
        Ok(Some(format!("{} {}", PLUGIN_ARGUMENT, tokens.join(" "))))
    }
}

impl ErrorProneOptions {
    /// Resolve every deferred value once.
    pub fn resolve(&self) -> ResolvedOptions {
        let checks: BTreeMap<String, CheckSeverity> = self
            .checks()
            .iter()
            .filter_map(|(name, severity)| Some((name.clone(), severity.resolve()?)))
            .collect();

        let check_options: BTreeMap<String, String> = self
            .check_options()
            .iter()
            .filter_map(|(name, value)| Some((name.clone(), value.resolve()?)))
            .collect();

        let mut provided_args = Vec::new();
        for (index, provider) in self.providers().iter().enumerate() {
            let batch = provider.arguments();
            trace!(provider = index, count = batch.len(), "argument provider invoked");
            provided_args.extend(batch);
        }

        let resolved = ResolvedOptions {
            enabled: self.enabled.get_or(true),
            disable_all_checks: self.disable_all_checks.get_or(false),
            all_errors_as_warnings: self.all_errors_as_warnings.get_or(false),
            all_disabled_checks_as_warnings: self.all_disabled_checks_as_warnings.get_or(false),
            disable_warnings_in_generated_code: self
                .disable_warnings_in_generated_code
                .get_or(false),
            ignore_unknown_check_names: self.ignore_unknown_check_names.get_or(false),
            ignore_suppression_annotations: self.ignore_suppression_annotations.get_or(false),
            compiling_test_only_code: self.compiling_test_only_code.get_or(false),
            excluded_paths: self.excluded_paths.get(),
            checks,
            check_options,
            args: self.raw_args().to_vec(),
            provided_args,
        };

        debug!(
            checks = resolved.checks.len(),
            check_options = resolved.check_options.len(),
            args = resolved.args.len(),
            providers = self.providers().len(),
            "resolved error prone options"
        );

        resolved
    }

    /// Resolve and emit the ordered argument tokens.
    pub fn to_arguments(&self) -> Result<Vec<String>, OptionsError> {
        self.resolve().to_arguments()
    }

    /// Resolve and emit the tokens joined by single spaces.
    pub fn to_argument_string(&self) -> Result<String, OptionsError> {
        Ok(self.to_arguments()?.join(" "))
    }

    /// The `-Xplugin:ErrorProne …` javac argument, or `None` when the plugin
    /// is disabled.
    pub fn plugin_argument(&self) -> Result<Option<String>, OptionsError> {
        self.resolve().plugin_argument()
    }
}
