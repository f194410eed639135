use serde::{Serialize, Serializer};

use crate::{BoxPlugin, BundleInput, OutputFormat};

pub const DEFAULT_INPUT: &str = "src/main.ts";
pub const DEFAULT_OUTPUT_DIR: &str = "dist";
/// Host runtime modules that are always provided by the environment.
pub const DEFAULT_EXTERNALS: &[&str] = &["atom", "electron"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputOptions {
  pub dir: String,
  pub format: OutputFormat,
  pub sourcemap: bool,
}

/// The top-level record handed to the bundler.
#[derive(Debug, Serialize)]
pub struct BundleConfig {
  pub input: BundleInput,
  pub output: Vec<OutputOptions>,
  pub external: Vec<String>,
  #[serde(serialize_with = "serialize_plugins")]
  pub plugins: Vec<BoxPlugin>,
}

impl BundleConfig {
  pub fn new(
    input: BundleInput,
    dir: String,
    format: OutputFormat,
    external: Vec<String>,
    plugins: Vec<BoxPlugin>,
  ) -> Self {
    Self { input, output: vec![OutputOptions { dir, format, sourcemap: true }], external, plugins }
  }

  /// Legacy convenience kept for existing build scripts. Every `None` falls back to the
  /// conventional default. Nothing is validated, the bundler rejects bad combinations itself.
  pub fn build(
    input: Option<BundleInput>,
    output_dir: Option<String>,
    format: Option<OutputFormat>,
    externals: Option<Vec<String>>,
    plugins: Vec<BoxPlugin>,
  ) -> Self {
    Self::new(
      input.unwrap_or_else(|| BundleInput::from(DEFAULT_INPUT)),
      output_dir.unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string()),
      format.unwrap_or_default(),
      externals
        .unwrap_or_else(|| DEFAULT_EXTERNALS.iter().map(ToString::to_string).collect()),
      plugins,
    )
  }
}

fn serialize_plugins<S: Serializer>(
  plugins: &[BoxPlugin],
  serializer: S,
) -> Result<S::Ok, S::Error> {
  serializer.collect_seq(plugins.iter().map(|plugin| plugin.to_json()))
}

#[test]
fn test_build_defaults() {
  use serde_json::json;

  let config = BundleConfig::build(None, None, None, None, vec![]);
  assert_eq!(
    serde_json::to_value(&config).unwrap(),
    json!({
      "input": "src/main.ts",
      "output": [{ "dir": "dist", "format": "cjs", "sourcemap": true }],
      "external": ["atom", "electron"],
      "plugins": [],
    })
  );
}

#[test]
fn test_build_with_values() {
  use rollcfg_plugin::DescriptorPlugin;
  use serde_json::json;

  let plugins: Vec<BoxPlugin> =
    vec![Box::new(DescriptorPlugin::new("@rollup/plugin-json", json!({ "compact": true })))];
  let config = BundleConfig::build(
    Some(vec!["src/a.ts", "src/b.ts"].into()),
    Some("lib".to_string()),
    Some(OutputFormat::Esm),
    Some(vec![]),
    plugins,
  );

  assert_eq!(
    config.output,
    [OutputOptions { dir: "lib".to_string(), format: OutputFormat::Esm, sourcemap: true }]
  );
  assert_eq!(
    serde_json::to_value(&config).unwrap(),
    json!({
      "input": ["src/a.ts", "src/b.ts"],
      "output": [{ "dir": "lib", "format": "es", "sourcemap": true }],
      "external": [],
      "plugins": [{ "name": "@rollup/plugin-json", "options": { "compact": true } }],
    })
  );
}
