//! Render effective configuration into plugin arguments

use errorprone_options::ResolvedOptions;
use serde::Serialize;

use crate::config::{ConfigError, EffectiveConfig};

/// Everything `render --json` reports
#[derive(Debug, Clone, Serialize)]
pub struct RenderReport {
    pub effective_config: EffectiveConfig,
    pub resolved: ResolvedOptions,
    pub arguments: Vec<String>,
    pub argument_string: String,
    /// `-Xplugin:ErrorProne …`, absent when the plugin is disabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugin_argument: Option<String>,
}

/// Resolve the effective configuration once and emit its arguments.
pub fn render(effective: EffectiveConfig) -> Result<RenderReport, ConfigError> {
    let options = effective.to_options()?;
    let resolved = options.resolve();
    let arguments = resolved.to_arguments()?;
    let argument_string = arguments.join(" ");
    let plugin_argument = resolved.plugin_argument()?;

    Ok(RenderReport {
        effective_config: effective,
        resolved,
        arguments,
        argument_string,
        plugin_argument,
    })
}

impl RenderReport {
    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_defaults() {
        let report = render(EffectiveConfig::build(None, &[], None).unwrap()).unwrap();
        assert!(report.arguments.is_empty());
        assert_eq!(report.argument_string, "");
        assert_eq!(report.plugin_argument.as_deref(), Some("-Xplugin:ErrorProne"));
    }

    #[test]
    fn test_render_disabled_plugin() {
        let cli = json!({"enabled": false, "checks": {"A": "OFF"}});
        let report = render(EffectiveConfig::build(None, &[], Some(cli)).unwrap()).unwrap();
        assert_eq!(report.argument_string, "-Xep:A:OFF");
        assert_eq!(report.plugin_argument, None);
        assert!(!report.to_json().unwrap().contains("plugin_argument"));
    }

    #[test]
    fn test_render_whitespace_failure() {
        let cli = json!({"check_options": {"Foo": "Bar Baz"}});
        let err = render(EffectiveConfig::build(None, &[], Some(cli)).unwrap()).unwrap_err();
        assert_eq!(err.code(), "INVALID_ARGUMENT");
    }
}
