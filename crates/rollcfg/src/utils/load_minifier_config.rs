use std::path::Path;

use rollcfg_common::PluginOptions;
use rollcfg_error::{BuildError, BuildResult};
use rollcfg_fs::FileSystem;
use serde_json::Value;

/// Reads the minifier override file at `path`.
///
/// A missing file is `Ok(None)`. A file that exists must parse, anything else is an error
/// because the caller created it expecting it to apply. An object whose only key is `default`
/// is unwrapped to that value.
pub fn load_minifier_config<F: FileSystem>(
  fs: &F,
  path: &Path,
) -> BuildResult<Option<PluginOptions>> {
  let to_error =
    |source: anyhow::Error| BuildError::MinifierConfig { path: path.to_path_buf(), source };

  let Some(content) = fs.read_optional(path).map_err(|err| to_error(err.into()))? else {
    return Ok(None);
  };
  let value: Value = serde_json::from_str(&content).map_err(|err| to_error(err.into()))?;

  Ok(Some(unwrap_default_export(value)))
}

fn unwrap_default_export(value: Value) -> Value {
  match value {
    Value::Object(map) if map.len() == 1 && map.contains_key("default") => {
      map.into_iter().next().map_or(Value::Null, |(_, inner)| inner)
    }
    value => value,
  }
}

#[test]
fn test_load_minifier_config() {
  use rollcfg_fs::OsFileSystem;
  use serde_json::json;

  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("terser.config.json");
  assert!(load_minifier_config(&OsFileSystem, &path).unwrap().is_none());

  std::fs::write(&path, r#"{ "ecma": 2020, "mangle": false }"#).unwrap();
  assert_eq!(
    load_minifier_config(&OsFileSystem, &path).unwrap(),
    Some(json!({ "ecma": 2020, "mangle": false }))
  );

  std::fs::write(&path, r#"{ "default": { "ecma": 2015 } }"#).unwrap();
  assert_eq!(load_minifier_config(&OsFileSystem, &path).unwrap(), Some(json!({ "ecma": 2015 })));

  std::fs::write(&path, r#"{ "default": { "ecma": 2015 }, "mangle": false }"#).unwrap();
  assert_eq!(
    load_minifier_config(&OsFileSystem, &path).unwrap(),
    Some(json!({ "default": { "ecma": 2015 }, "mangle": false }))
  );

  std::fs::write(&path, "module.exports = {}").unwrap();
  let err = load_minifier_config(&OsFileSystem, &path).unwrap_err();
  assert!(matches!(err, BuildError::MinifierConfig { .. }));
}
