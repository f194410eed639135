use std::path::PathBuf;

use rollcfg_common::{
  AssembleOptions, NormalizedAssembleOptions, DEFAULT_MINIFIER_CONFIG_FILE,
};
use sugar_path::SugarPath;

pub fn normalize_options(raw_options: AssembleOptions) -> NormalizedAssembleOptions {
  let cwd = raw_options
    .cwd
    .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

  NormalizedAssembleOptions {
    production: raw_options.production.unwrap_or_else(is_production_env),
    cwd: cwd.normalize(),
    minifier_config_file: raw_options
      .minifier_config_file
      .unwrap_or_else(|| DEFAULT_MINIFIER_CONFIG_FILE.to_string()),
    minifier_config_lookup: raw_options.minifier_config_lookup.unwrap_or_default(),
    disabled: raw_options.disabled.unwrap_or_default().into_iter().collect(),
  }
}

fn is_production_env() -> bool {
  std::env::var("NODE_ENV").is_ok_and(|mode| mode == "production")
}

#[test]
fn test_normalize_explicit_options() {
  use rollcfg_common::{MinifierConfigLookup, PluginKind};

  let options = normalize_options(AssembleOptions {
    production: Some(true),
    cwd: Some(PathBuf::from("/project/./app/../web")),
    minifier_config_file: None,
    minifier_config_lookup: Some(MinifierConfigLookup::ProductionOnly),
    disabled: Some(vec![PluginKind::AutoExternal, PluginKind::AutoExternal]),
  });

  assert!(options.production);
  assert_eq!(options.cwd, PathBuf::from("/project/web"));
  assert_eq!(options.minifier_config_path(), PathBuf::from("/project/web/terser.config.json"));
  assert_eq!(options.minifier_config_lookup, MinifierConfigLookup::ProductionOnly);
  assert_eq!(options.disabled.len(), 1);
  assert!(options.is_disabled(PluginKind::AutoExternal));
}
