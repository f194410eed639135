pub mod bundle_input;
pub mod minifier_config_lookup;
pub mod normalized_assemble_options;
pub mod output_format;

use std::path::PathBuf;

use crate::{MinifierConfigLookup, PluginKind};

/// Caller-facing assembly options. Every field is optional and filled in during normalization.
#[derive(Default, Debug, Clone)]
pub struct AssembleOptions {
  /// Falls back to `NODE_ENV == "production"` when unset.
  pub production: Option<bool>,
  /// Directory the minifier override file is resolved against.
  pub cwd: Option<PathBuf>,

  // --- Minifier
  pub minifier_config_file: Option<String>,
  pub minifier_config_lookup: Option<MinifierConfigLookup>,

  // --- Infrastructure
  /// Kinds that would otherwise be added without a request.
  pub disabled: Option<Vec<PluginKind>>,
}
