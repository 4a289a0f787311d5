//! Configuration merge logic
//!
//! - Tables: deep-merge by key
//! - Arrays: APPEND (earlier layers first)
//! - Scalars: override (last wins)

use serde_json::Value;

/// Deep merge two JSON values.
///
/// Arrays are concatenated because raw arguments only ever accumulate;
/// a later layer cannot remove an argument an earlier layer added.
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                let merged = match base_map.remove(&key) {
                    Some(base_value) => deep_merge(base_value, overlay_value),
                    None => overlay_value,
                };
                base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }

        (Value::Array(mut base_items), Value::Array(overlay_items)) => {
            base_items.extend(overlay_items);
            Value::Array(base_items)
        }

        // Scalars, nulls and mismatched kinds: overlay wins
        (_, overlay) => overlay,
    }
}

/// Merge config layers in order (first is base, last has highest precedence)
pub fn merge_layers(layers: Vec<Value>) -> Value {
    layers.into_iter().fold(Value::Null, deep_merge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_override() {
        let result = deep_merge(
            json!({"disable_all_checks": false}),
            json!({"disable_all_checks": true}),
        );
        assert_eq!(result["disable_all_checks"], true);
    }

    #[test]
    fn test_checks_merge_by_name() {
        let base = json!({
            "checks": {"NullAway": "ERROR", "BetaApi": "WARN"}
        });
        let overlay = json!({
            "checks": {"NullAway": "OFF"}
        });
        let result = deep_merge(base, overlay);

        assert_eq!(result["checks"]["NullAway"], "OFF");
        assert_eq!(result["checks"]["BetaApi"], "WARN");
    }

    #[test]
    fn test_args_append() {
        let result = deep_merge(json!({"args": ["-a", "-b"]}), json!({"args": ["-c"]}));
        assert_eq!(result["args"], json!(["-a", "-b", "-c"]));
    }

    #[test]
    fn test_null_override() {
        let result = deep_merge(
            json!({"excluded_paths": ".*/gen/.*"}),
            json!({"excluded_paths": null}),
        );
        assert!(result["excluded_paths"].is_null());
    }

    #[test]
    fn test_merge_layers() {
        let builtin = json!({"enabled": true, "disable_all_checks": false});
        let user = json!({"checks": {"A": "WARN"}, "args": ["-u"]});
        let project = json!({"checks": {"A": "ERROR"}, "args": ["-p"]});
        let cli = json!({"disable_all_checks": true});

        let result = merge_layers(vec![builtin, user, project, cli]);

        assert_eq!(result["enabled"], true);
        assert_eq!(result["disable_all_checks"], true);
        assert_eq!(result["checks"]["A"], "ERROR");
        assert_eq!(result["args"], json!(["-u", "-p"]));
    }
}
