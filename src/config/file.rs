//! Options file schema
//!
//! The merged configuration is read into an [`OptionsFile`] and applied to an
//! [`ErrorProneOptions`].

use errorprone_options::{CheckSeverity, Deferred, ErrorProneOptions, OptionsError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::effective::ConfigError;

/// Options as written in a TOML file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionsFile {
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub disable_all_checks: Option<bool>,
    #[serde(default)]
    pub all_errors_as_warnings: Option<bool>,
    #[serde(default)]
    pub all_disabled_checks_as_warnings: Option<bool>,
    #[serde(default)]
    pub disable_warnings_in_generated_code: Option<bool>,
    #[serde(default)]
    pub ignore_unknown_check_names: Option<bool>,
    #[serde(default)]
    pub ignore_suppression_annotations: Option<bool>,
    #[serde(default)]
    pub compiling_test_only_code: Option<bool>,

    /// Regular expression of source paths to skip
    #[serde(default)]
    pub excluded_paths: Option<String>,

    /// Raw arguments, emitted verbatim
    #[serde(default)]
    pub args: Vec<String>,

    /// Check severities
    #[serde(default)]
    pub checks: BTreeMap<String, CheckSeverity>,

    /// Severities used instead of `checks` when compiling test-only code
    #[serde(default)]
    pub test_checks: BTreeMap<String, CheckSeverity>,

    /// Check options
    #[serde(default)]
    pub check_options: BTreeMap<String, String>,
}

impl OptionsFile {
    /// Read from a merged JSON value
    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        serde_json::from_value(value).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }

    /// Build a fresh [`ErrorProneOptions`] from this file
    pub fn to_options(&self) -> Result<ErrorProneOptions, OptionsError> {
        let mut options = ErrorProneOptions::new();
        self.apply(&mut options)?;
        Ok(options)
    }

    /// Apply onto existing options. Check names are validated as they are
    /// added.
    pub fn apply(&self, options: &mut ErrorProneOptions) -> Result<(), OptionsError> {
        let toggles = [
            (self.enabled, &options.enabled),
            (self.disable_all_checks, &options.disable_all_checks),
            (self.all_errors_as_warnings, &options.all_errors_as_warnings),
            (
                self.all_disabled_checks_as_warnings,
                &options.all_disabled_checks_as_warnings,
            ),
            (
                self.disable_warnings_in_generated_code,
                &options.disable_warnings_in_generated_code,
            ),
            (
                self.ignore_unknown_check_names,
                &options.ignore_unknown_check_names,
            ),
            (
                self.ignore_suppression_annotations,
                &options.ignore_suppression_annotations,
            ),
            (
                self.compiling_test_only_code,
                &options.compiling_test_only_code,
            ),
        ];
        for (value, property) in toggles {
            if let Some(value) = value {
                property.set(value);
            }
        }

        if let Some(ref pattern) = self.excluded_paths {
            options.excluded_paths.set(pattern.clone());
        }

        for (name, severity) in &self.checks {
            if !self.test_checks.contains_key(name) {
                options.check(name, *severity)?;
            }
        }

        for (name, test_severity) in &self.test_checks {
            let main_severity = self.checks.get(name).copied();
            let test_severity = *test_severity;
            let test_only = options.compiling_test_only_code.clone();
            options.check(
                name,
                Deferred::computed_opt(move || {
                    if test_only.get_or(false) {
                        Some(test_severity)
                    } else {
                        main_severity
                    }
                }),
            )?;
        }

        for (name, value) in &self.check_options {
            options.option(name, value.clone());
        }

        options.args(self.args.iter().cloned());

        Ok(())
    }
}
