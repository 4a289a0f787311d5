//! CLI overrides (layer 4)

use clap::Args;
use serde_json::{json, Map, Value};

/// Options given on the command line
#[derive(Debug, Clone, Default, Args)]
pub struct CliOverrides {
    /// Enable a check at its default severity (repeatable)
    #[arg(long, value_name = "CHECK")]
    pub enable: Vec<String>,

    /// Turn a check off (repeatable)
    #[arg(long, value_name = "CHECK")]
    pub disable: Vec<String>,

    /// Report a check as a warning (repeatable)
    #[arg(long, value_name = "CHECK")]
    pub warn: Vec<String>,

    /// Report a check as an error (repeatable)
    #[arg(long, value_name = "CHECK")]
    pub error: Vec<String>,

    /// Set a check option; without `=VALUE` the value is empty (repeatable)
    #[arg(long = "option", value_name = "NAME[=VALUE]")]
    pub options: Vec<String>,

    /// Append a raw argument, emitted verbatim (repeatable)
    #[arg(long = "arg", value_name = "ARG", allow_hyphen_values = true)]
    pub args: Vec<String>,

    /// Regular expression of source paths to skip
    #[arg(long, value_name = "REGEX")]
    pub excluded_paths: Option<String>,

    #[arg(long)]
    pub disable_all_checks: bool,

    #[arg(long)]
    pub all_errors_as_warnings: bool,

    #[arg(long)]
    pub compiling_test_only_code: bool,
}

impl CliOverrides {
    /// Convert to a config layer. Unset flags are left out so they do not
    /// override file layers. When the same check is named twice, the later
    /// of enable, disable, warn, error wins.
    pub fn to_value(&self) -> Value {
        let mut layer = Map::new();

        for (set, key) in [
            (self.disable_all_checks, "disable_all_checks"),
            (self.all_errors_as_warnings, "all_errors_as_warnings"),
            (self.compiling_test_only_code, "compiling_test_only_code"),
        ] {
            if set {
                layer.insert(key.to_string(), Value::Bool(true));
            }
        }

        if let Some(ref pattern) = self.excluded_paths {
            layer.insert("excluded_paths".to_string(), json!(pattern));
        }

        let mut checks = Map::new();
        for (names, severity) in [
            (&self.enable, "DEFAULT"),
            (&self.disable, "OFF"),
            (&self.warn, "WARN"),
            (&self.error, "ERROR"),
        ] {
            for name in names {
                checks.insert(name.clone(), json!(severity));
            }
        }
        if !checks.is_empty() {
            layer.insert("checks".to_string(), Value::Object(checks));
        }

        let check_options: Map<String, Value> = self
            .options
            .iter()
            .map(|option| {
                let (name, value) = option.split_once('=').unwrap_or((option.as_str(), ""));
                (name.to_string(), json!(value))
            })
            .collect();
        if !check_options.is_empty() {
            layer.insert("check_options".to_string(), Value::Object(check_options));
        }

        if !self.args.is_empty() {
            layer.insert("args".to_string(), json!(self.args));
        }

        Value::Object(layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_overrides() {
        assert_eq!(CliOverrides::default().to_value(), json!({}));
    }

    #[test]
    fn test_overrides_to_value() {
        let overrides = CliOverrides {
            enable: vec!["BetaApi".to_string()],
            error: vec!["NullAway".to_string(), "BetaApi".to_string()],
            options: vec![
                "NullAway:AnnotatedPackages=a.b.c".to_string(),
                "Flag".to_string(),
            ],
            args: vec!["-XepPatchChecks:A".to_string()],
            disable_all_checks: true,
            ..Default::default()
        };

        assert_eq!(
            overrides.to_value(),
            json!({
                "disable_all_checks": true,
                "checks": {"BetaApi": "ERROR", "NullAway": "ERROR"},
                "check_options": {"NullAway:AnnotatedPackages": "a.b.c", "Flag": ""},
                "args": ["-XepPatchChecks:A"]
            })
        );
    }
}
