mod diagnostic;

use std::path::PathBuf;

pub use crate::diagnostic::{Diagnostic, Severity};

/// Failures that abort a whole assembly. Nothing partially assembled is handed back.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
  /// A plugin kind was activated but no constructor is registered under its module id.
  #[error("Plugin `{kind}` is enabled but module \"{module_id}\" could not be found")]
  MissingPlugin { kind: &'static str, module_id: &'static str },

  #[error("Failed to construct plugin `{kind}` from \"{module_id}\"")]
  Construct {
    kind: &'static str,
    module_id: &'static str,
    #[source]
    source: anyhow::Error,
  },

  /// The minifier override file exists but could not be read or parsed.
  #[error("Failed to load minifier config at \"{}\"", path.display())]
  MinifierConfig {
    path: PathBuf,
    #[source]
    source: anyhow::Error,
  },
}

impl BuildError {
  pub fn kind_name(&self) -> Option<&'static str> {
    match self {
      Self::MissingPlugin { kind, .. } | Self::Construct { kind, .. } => Some(kind),
      Self::MinifierConfig { .. } => None,
    }
  }
}

pub type BuildResult<T> = Result<T, BuildError>;

#[test]
fn test_build_error_display() {
  let error =
    BuildError::MissingPlugin { kind: "TypeScript", module_id: "@rollup/plugin-typescript" };
  assert_eq!(
    error.to_string(),
    "Plugin `TypeScript` is enabled but module \"@rollup/plugin-typescript\" could not be found"
  );
  assert_eq!(error.kind_name(), Some("TypeScript"));

  let error = BuildError::MinifierConfig {
    path: PathBuf::from("terser.config.json"),
    source: anyhow::anyhow!("expected value at line 1 column 1"),
  };
  assert_eq!(error.to_string(), "Failed to load minifier config at \"terser.config.json\"");
  assert!(std::error::Error::source(&error).is_some());
}
