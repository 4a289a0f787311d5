//! Built-in option defaults (layer 1)

use serde::{Deserialize, Serialize};

/// Built-in default option values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuiltinDefaults {
    /// Apply the plugin (default: true)
    pub enabled: bool,

    pub disable_all_checks: bool,
    pub all_errors_as_warnings: bool,
    pub all_disabled_checks_as_warnings: bool,
    pub disable_warnings_in_generated_code: bool,
    pub ignore_unknown_check_names: bool,
    pub ignore_suppression_annotations: bool,
    pub compiling_test_only_code: bool,
}

impl Default for BuiltinDefaults {
    fn default() -> Self {
        Self {
            enabled: true,
            disable_all_checks: false,
            all_errors_as_warnings: false,
            all_disabled_checks_as_warnings: false,
            disable_warnings_in_generated_code: false,
            ignore_unknown_check_names: false,
            ignore_suppression_annotations: false,
            compiling_test_only_code: false,
        }
    }
}

impl BuiltinDefaults {
    /// Convert to JSON Value for merging
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "enabled": self.enabled,
            "disable_all_checks": self.disable_all_checks,
            "all_errors_as_warnings": self.all_errors_as_warnings,
            "all_disabled_checks_as_warnings": self.all_disabled_checks_as_warnings,
            "disable_warnings_in_generated_code": self.disable_warnings_in_generated_code,
            "ignore_unknown_check_names": self.ignore_unknown_check_names,
            "ignore_suppression_annotations": self.ignore_suppression_annotations,
            "compiling_test_only_code": self.compiling_test_only_code
        })
    }
}
