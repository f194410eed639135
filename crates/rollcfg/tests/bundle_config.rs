use rollcfg::{
  AssembleOptions, Assembler, BundleConfig, BundleInput, ExtraPlugins, MinifierConfigLookup,
  OutputFormat, PluginRegistry, PluginRequest,
};
use serde_json::json;

fn assemble(requests: &[PluginRequest]) -> rollcfg::AssembledPlugins {
  Assembler::new(
    PluginRegistry::descriptors(),
    AssembleOptions {
      production: Some(false),
      minifier_config_lookup: Some(MinifierConfigLookup::Never),
      ..Default::default()
    },
  )
  .assemble(requests, ExtraPlugins::None)
  .unwrap()
}

#[test]
fn test_legacy_builder_serializes_assembled_plugins() {
  let output = assemble(&[PluginRequest::name("json")]);
  let config = BundleConfig::build(None, None, None, None, output.plugins);

  assert_eq!(
    serde_json::to_value(&config).unwrap(),
    json!({
      "input": "src/main.ts",
      "output": [{ "dir": "dist", "format": "cjs", "sourcemap": true }],
      "external": ["atom", "electron"],
      "plugins": [
        { "name": "@rollup/plugin-json", "options": { "compact": true } },
        { "name": "rollup-plugin-sourcemaps", "options": {} },
        {
          "name": "rollup-plugin-auto-external",
          "options": { "builtins": true, "dependencies": false, "peerDependencies": false },
        },
        {
          "name": "@rollup/plugin-node-resolve",
          "options": {
            "extensions": [".ts", ".js", ".coffee", ".tsx", ".jsx", ".mjs"],
            "preferBuiltins": true,
          },
        },
        { "name": "@rollup/plugin-commonjs", "options": {} },
      ],
    })
  );
}

#[test]
fn test_config_from_assembled_plugins() {
  let output = assemble(&[PluginRequest::name("ts")]);
  let config = output.into_config(
    BundleInput::from(vec!["src/main.ts", "src/worker.ts"]),
    "lib".to_string(),
    OutputFormat::Esm,
    vec!["vscode".to_string()],
  );

  assert_eq!(config.plugins.len(), 5);
  assert_eq!(config.input.paths().collect::<Vec<_>>(), ["src/main.ts", "src/worker.ts"]);

  let value = serde_json::to_value(&config).unwrap();
  assert_eq!(value["output"], json!([{ "dir": "lib", "format": "es", "sourcemap": true }]));
  assert_eq!(value["external"], json!(["vscode"]));
  assert_eq!(value["plugins"][0]["name"], "@rollup/plugin-typescript");
}
