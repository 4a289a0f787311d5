//! The options for one compilation unit.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::deferred::{Deferred, Property};
use crate::error::OptionsError;
use crate::provider::ArgumentProvider;
use crate::severity::CheckSeverity;
use crate::validate::validate_name;

/// Error Prone options for a single compilation unit.
///
/// Toggles and the excluded-paths pattern are [`Property`] cells so they can
/// be set lazily and read by other deferred values. Checks and check options
/// are keyed maps; the last write for a name wins. Raw arguments and argument
/// providers are append-only.
pub struct ErrorProneOptions {
    /// Whether the plugin is applied at all.
    pub enabled: Property<bool>,
    pub disable_all_checks: Property<bool>,
    pub all_errors_as_warnings: Property<bool>,
    pub all_disabled_checks_as_warnings: Property<bool>,
    pub disable_warnings_in_generated_code: Property<bool>,
    pub ignore_unknown_check_names: Property<bool>,
    pub ignore_suppression_annotations: Property<bool>,
    pub compiling_test_only_code: Property<bool>,
    /// Regular expression of source paths to skip.
    pub excluded_paths: Property<String>,
    checks: BTreeMap<String, Deferred<CheckSeverity>>,
    check_options: BTreeMap<String, Deferred<String>>,
    args: Vec<String>,
    argument_providers: Vec<Rc<dyn ArgumentProvider>>,
}

impl Default for ErrorProneOptions {
    fn default() -> Self {
        Self {
            enabled: Property::with_value(true),
            disable_all_checks: Property::with_value(false),
            all_errors_as_warnings: Property::with_value(false),
            all_disabled_checks_as_warnings: Property::with_value(false),
            disable_warnings_in_generated_code: Property::with_value(false),
            ignore_unknown_check_names: Property::with_value(false),
            ignore_suppression_annotations: Property::with_value(false),
            compiling_test_only_code: Property::with_value(false),
            excluded_paths: Property::absent(),
            checks: BTreeMap::new(),
            check_options: BTreeMap::new(),
            args: Vec::new(),
            argument_providers: Vec::new(),
        }
    }
}

impl ErrorProneOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the severity of a check, immediately or deferred.
    ///
    /// Fails at once if the name contains a colon.
    pub fn check(
        &mut self,
        name: &str,
        severity: impl Into<Deferred<CheckSeverity>>,
    ) -> Result<&mut Self, OptionsError> {
        validate_name(name)?;
        self.checks.insert(name.to_string(), severity.into());
        Ok(self)
    }

    /// Enable a check at its default severity.
    pub fn enable(&mut self, name: &str) -> Result<&mut Self, OptionsError> {
        self.check(name, CheckSeverity::Default)
    }

    pub fn disable(&mut self, name: &str) -> Result<&mut Self, OptionsError> {
        self.check(name, CheckSeverity::Off)
    }

    pub fn warn(&mut self, name: &str) -> Result<&mut Self, OptionsError> {
        self.check(name, CheckSeverity::FORCE_WARN)
    }

    pub fn error(&mut self, name: &str) -> Result<&mut Self, OptionsError> {
        self.check(name, CheckSeverity::FORCE_ERROR)
    }

    /// Set a check option with an empty value.
    pub fn option_flag(&mut self, name: &str) -> &mut Self {
        self.option(name, String::new())
    }

    /// Set a check option, immediately or deferred.
    pub fn option(&mut self, name: &str, value: impl Into<Deferred<String>>) -> &mut Self {
        self.check_options.insert(name.to_string(), value.into());
        self
    }

    /// Append one raw argument. It is emitted verbatim.
    pub fn arg(&mut self, arg: impl Into<String>) -> &mut Self {
        self.args.push(arg.into());
        self
    }

    /// Append raw arguments in order.
    pub fn args<I, S>(&mut self, args: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Append a batch of arguments computed at resolution time.
    pub fn argument_provider(&mut self, provider: impl ArgumentProvider + 'static) -> &mut Self {
        self.argument_providers.push(Rc::new(provider));
        self
    }

    pub fn checks(&self) -> &BTreeMap<String, Deferred<CheckSeverity>> {
        &self.checks
    }

    /// Direct access to the check map. Names inserted here are validated
    /// when the options are resolved.
    pub fn checks_mut(&mut self) -> &mut BTreeMap<String, Deferred<CheckSeverity>> {
        &mut self.checks
    }

    pub fn check_options(&self) -> &BTreeMap<String, Deferred<String>> {
        &self.check_options
    }

    pub fn check_options_mut(&mut self) -> &mut BTreeMap<String, Deferred<String>> {
        &mut self.check_options
    }

    pub fn raw_args(&self) -> &[String] {
        &self.args
    }

    pub(crate) fn providers(&self) -> &[Rc<dyn ArgumentProvider>] {
        &self.argument_providers
    }
}

impl fmt::Debug for ErrorProneOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorProneOptions")
            .field("enabled", &self.enabled)
            .field("disable_all_checks", &self.disable_all_checks)
            .field("all_errors_as_warnings", &self.all_errors_as_warnings)
            .field(
                "all_disabled_checks_as_warnings",
                &self.all_disabled_checks_as_warnings,
            )
            .field(
                "disable_warnings_in_generated_code",
                &self.disable_warnings_in_generated_code,
            )
            .field("ignore_unknown_check_names", &self.ignore_unknown_check_names)
            .field(
                "ignore_suppression_annotations",
                &self.ignore_suppression_annotations,
            )
            .field("compiling_test_only_code", &self.compiling_test_only_code)
            .field("excluded_paths", &self.excluded_paths)
            .field("checks", &self.checks)
            .field("check_options", &self.check_options)
            .field("args", &self.args)
            .field("argument_providers", &self.argument_providers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ErrorProneOptions::new();
        assert_eq!(options.enabled.get(), Some(true));
        assert_eq!(options.disable_all_checks.get(), Some(false));
        assert_eq!(options.compiling_test_only_code.get(), Some(false));
        assert_eq!(options.excluded_paths.get(), None);
        assert!(options.checks().is_empty());
        assert!(options.check_options().is_empty());
        assert!(options.raw_args().is_empty());
    }

    #[test]
    fn test_severity_helpers() {
        let mut options = ErrorProneOptions::new();
        options
            .enable("A")
            .unwrap()
            .disable("B")
            .unwrap()
            .warn("C")
            .unwrap()
            .error("D")
            .unwrap();

        let resolved: Vec<_> = options
            .checks()
            .iter()
            .map(|(name, severity)| (name.as_str(), severity.resolve()))
            .collect();
        assert_eq!(
            resolved,
            vec![
                ("A", Some(CheckSeverity::Default)),
                ("B", Some(CheckSeverity::Off)),
                ("C", Some(CheckSeverity::Warn)),
                ("D", Some(CheckSeverity::Error)),
            ]
        );
    }

    #[test]
    fn test_last_write_wins() {
        let mut options = ErrorProneOptions::new();
        options.error("NullAway").unwrap();
        options.disable("NullAway").unwrap();
        assert_eq!(options.checks().len(), 1);
        assert_eq!(
            options.checks()["NullAway"].resolve(),
            Some(CheckSeverity::Off)
        );
    }

    #[test]
    fn test_colon_rejected_eagerly() {
        let mut options = ErrorProneOptions::new();
        let err = options.enable("ArrayEquals:OFF").unwrap_err();
        assert_eq!(
            err,
            OptionsError::InvalidName {
                name: "ArrayEquals:OFF".to_string()
            }
        );
        assert!(options.checks().is_empty());
    }

    #[test]
    fn test_option_flag_is_empty_value() {
        let mut options = ErrorProneOptions::new();
        options.option_flag("Foo").option("Bar", "baz");
        assert_eq!(options.check_options()["Foo"].resolve().as_deref(), Some(""));
        assert_eq!(options.check_options()["Bar"].resolve().as_deref(), Some("baz"));
    }

    #[test]
    fn test_args_append() {
        let mut options = ErrorProneOptions::new();
        options.arg("-a").args(["-b", "-c"]).arg(String::from("-d"));
        assert_eq!(options.raw_args(), ["-a", "-b", "-c", "-d"]);
    }
}
