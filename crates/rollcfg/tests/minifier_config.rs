use std::path::Path;

use rollcfg::{
  AssembleOptions, Assembler, BuildError, ExtraPlugins, MinifierConfigLookup, OptionsSource,
  PluginKind, PluginRegistry, PluginRequest,
};
use serde_json::json;

fn assembler(cwd: &Path, production: bool, lookup: Option<MinifierConfigLookup>) -> Assembler {
  Assembler::new(
    PluginRegistry::descriptors(),
    AssembleOptions {
      production: Some(production),
      cwd: Some(cwd.to_path_buf()),
      minifier_config_lookup: lookup,
      ..Default::default()
    },
  )
}

#[test]
fn test_config_file_replaces_production_defaults() {
  let dir = tempfile::tempdir().unwrap();
  std::fs::write(dir.path().join("terser.config.json"), r#"{ "ecma": 2020, "module": true }"#)
    .unwrap();

  let output = assembler(dir.path(), true, None).assemble(&[], ExtraPlugins::None).unwrap();

  let terser = output.resolution(PluginKind::Terser).unwrap();
  assert_eq!(terser.options, json!({ "ecma": 2020, "module": true }));
  assert_eq!(terser.source, OptionsSource::ConfigFile);
}

#[test]
fn test_config_file_default_export_is_unwrapped() {
  let dir = tempfile::tempdir().unwrap();
  std::fs::write(
    dir.path().join("terser.config.json"),
    r#"{ "default": { "compress": { "passes": 2 } } }"#,
  )
  .unwrap();

  let output = assembler(dir.path(), true, None).assemble(&[], ExtraPlugins::None).unwrap();
  assert_eq!(
    output.resolution(PluginKind::Terser).unwrap().options,
    json!({ "compress": { "passes": 2 } })
  );
}

#[test]
fn test_missing_config_file_keeps_defaults() {
  let dir = tempfile::tempdir().unwrap();

  let output = assembler(dir.path(), true, None).assemble(&[], ExtraPlugins::None).unwrap();

  let terser = output.resolution(PluginKind::Terser).unwrap();
  assert_eq!(terser.options, PluginKind::Terser.default_options(true));
  assert_eq!(terser.source, OptionsSource::Defaults);
}

#[test]
fn test_malformed_config_file_is_fatal() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("terser.config.json");
  std::fs::write(&path, "export default { ecma: 2020 }").unwrap();

  let err = assembler(dir.path(), true, None).assemble(&[], ExtraPlugins::None).unwrap_err();
  match err {
    BuildError::MinifierConfig { path: reported, .. } => assert_eq!(reported, path),
    other => panic!("unexpected error: {other}"),
  }
}

#[test]
fn test_config_file_is_not_read_when_minifier_is_inactive() {
  let dir = tempfile::tempdir().unwrap();
  std::fs::write(dir.path().join("terser.config.json"), "not json").unwrap();

  let output = assembler(dir.path(), false, None).assemble(&[], ExtraPlugins::None).unwrap();
  assert!(!output.contains(PluginKind::Terser));
}

#[test]
fn test_lookup_policy_for_explicit_request_outside_production() {
  let dir = tempfile::tempdir().unwrap();
  std::fs::write(dir.path().join("terser.config.json"), r#"{ "ecma": 2015 }"#).unwrap();
  let requests = vec![PluginRequest::name("terser")];

  let output = assembler(dir.path(), false, Some(MinifierConfigLookup::WhenActive))
    .assemble(&requests, ExtraPlugins::None)
    .unwrap();
  assert_eq!(output.resolution(PluginKind::Terser).unwrap().options, json!({ "ecma": 2015 }));

  let output = assembler(dir.path(), false, Some(MinifierConfigLookup::ProductionOnly))
    .assemble(&requests, ExtraPlugins::None)
    .unwrap();
  assert_eq!(
    output.resolution(PluginKind::Terser).unwrap().source,
    OptionsSource::Defaults
  );

  let output = assembler(dir.path(), true, Some(MinifierConfigLookup::Never))
    .assemble(&requests, ExtraPlugins::None)
    .unwrap();
  assert_eq!(
    output.resolution(PluginKind::Terser).unwrap().options,
    PluginKind::Terser.default_options(true)
  );
}

#[test]
fn test_request_options_apply_over_config_file() {
  let dir = tempfile::tempdir().unwrap();
  std::fs::write(dir.path().join("terser.config.json"), r#"{ "ecma": 2015, "mangle": true }"#)
    .unwrap();

  let requests = vec![PluginRequest::extending("minify", json!({ "mangle": false }))];
  let output = assembler(dir.path(), true, None).assemble(&requests, ExtraPlugins::None).unwrap();

  let terser = output.resolution(PluginKind::Terser).unwrap();
  assert_eq!(terser.options, json!({ "ecma": 2015, "mangle": false }));
  assert_eq!(terser.source, OptionsSource::Merged);
}

#[test]
fn test_config_file_with_sibling_keys_is_kept_whole() {
  let dir = tempfile::tempdir().unwrap();
  std::fs::write(
    dir.path().join("terser.config.json"),
    r#"{ "default": { "ecma": 2015 }, "mangle": false }"#,
  )
  .unwrap();

  let output = assembler(dir.path(), true, None).assemble(&[], ExtraPlugins::None).unwrap();
  assert_eq!(
    output.resolution(PluginKind::Terser).unwrap().options,
    json!({ "default": { "ecma": 2015 }, "mangle": false })
  );
}

#[test]
fn test_config_file_is_not_read_for_replacing_request() {
  let dir = tempfile::tempdir().unwrap();
  std::fs::write(dir.path().join("terser.config.json"), "not json").unwrap();

  let requests = vec![PluginRequest::with_options("terser", json!({ "ecma": 2017 }))];
  let output = assembler(dir.path(), true, None).assemble(&requests, ExtraPlugins::None).unwrap();

  let terser = output.resolution(PluginKind::Terser).unwrap();
  assert_eq!(terser.options, json!({ "ecma": 2017 }));
  assert_eq!(terser.source, OptionsSource::User);

  let requests = vec![PluginRequest::extending("terser", json!({ "ecma": 2017 }))];
  let err =
    assembler(dir.path(), true, None).assemble(&requests, ExtraPlugins::None).unwrap_err();
  assert!(matches!(err, BuildError::MinifierConfig { .. }));
}

#[test]
fn test_custom_config_file_name() {
  let dir = tempfile::tempdir().unwrap();
  std::fs::create_dir(dir.path().join("build")).unwrap();
  std::fs::write(dir.path().join("build/minify.json"), r#"{ "ecma": 2019 }"#).unwrap();

  let assembler = Assembler::new(
    PluginRegistry::descriptors(),
    AssembleOptions {
      production: Some(true),
      cwd: Some(dir.path().to_path_buf()),
      minifier_config_file: Some("build/minify.json".to_string()),
      ..Default::default()
    },
  );

  let output = assembler.assemble(&[], ExtraPlugins::None).unwrap();
  assert_eq!(output.resolution(PluginKind::Terser).unwrap().options, json!({ "ecma": 2019 }));
}
