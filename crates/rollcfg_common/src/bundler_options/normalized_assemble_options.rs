use std::path::PathBuf;

use rustc_hash::FxHashSet;

use crate::{MinifierConfigLookup, PluginKind};

pub const DEFAULT_MINIFIER_CONFIG_FILE: &str = "terser.config.json";

#[derive(Debug, Clone)]
pub struct NormalizedAssembleOptions {
  pub production: bool,
  pub cwd: PathBuf,

  // --- Minifier
  pub minifier_config_file: String,
  pub minifier_config_lookup: MinifierConfigLookup,

  // --- Infrastructure
  pub disabled: FxHashSet<PluginKind>,
}

impl NormalizedAssembleOptions {
  pub fn is_disabled(&self, kind: PluginKind) -> bool {
    self.disabled.contains(&kind)
  }

  pub fn minifier_config_path(&self) -> PathBuf {
    self.cwd.join(&self.minifier_config_file)
  }
}
