use serde_json::{Map, Value};

use crate::PluginOptions;

/// Key a non-object option value is stored under when it takes part in a merge.
pub const WRAPPED_VALUE_KEY: &str = "value";

/// Where the options a plugin was constructed with came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionsSource {
  Defaults,
  /// Defaults extended by the caller's options.
  Merged,
  /// The caller's options as given.
  User,
  /// An override file on disk.
  ConfigFile,
}

/// Shallow merge, last writer wins: every top-level key of `overrides` replaces the one in
/// `defaults`. Keys keep the position they first appeared at.
///
/// `null` contributes nothing. Any other non-object value is treated as
/// `{ "value": <value> }` so both sides are always maps.
pub fn merge_options(defaults: PluginOptions, overrides: PluginOptions) -> PluginOptions {
  let mut merged = into_object(defaults);
  merged.extend(into_object(overrides));
  Value::Object(merged)
}

fn into_object(value: Value) -> Map<String, Value> {
  match value {
    Value::Object(map) => map,
    Value::Null => Map::new(),
    other => {
      let mut map = Map::with_capacity(1);
      map.insert(WRAPPED_VALUE_KEY.to_string(), other);
      map
    }
  }
}

#[test]
fn test_merge_options_user_wins() {
  use serde_json::json;

  let merged = merge_options(
    json!({ "noEmitOnError": false, "module": "ESNext" }),
    json!({ "module": "CommonJS", "strict": true }),
  );
  assert_eq!(merged, json!({ "noEmitOnError": false, "module": "CommonJS", "strict": true }));

  let keys = merged.as_object().unwrap().keys().map(String::as_str).collect::<Vec<_>>();
  assert_eq!(keys, ["noEmitOnError", "module", "strict"]);
}

#[test]
fn test_merge_options_is_shallow() {
  use serde_json::json;

  let merged = merge_options(
    json!({ "compress": { "drop_console": false, "passes": 2 } }),
    json!({ "compress": { "drop_console": true } }),
  );
  assert_eq!(merged, json!({ "compress": { "drop_console": true } }));
}

#[test]
fn test_merge_options_wraps_non_objects() {
  use serde_json::json;

  assert_eq!(merge_options(json!({ "a": 1 }), json!("x")), json!({ "a": 1, "value": "x" }));
  assert_eq!(merge_options(json!(["cmd"]), json!({})), json!({ "value": ["cmd"] }));
  assert_eq!(merge_options(json!({ "a": 1 }), Value::Null), json!({ "a": 1 }));
}
