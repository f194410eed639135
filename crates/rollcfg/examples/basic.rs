#![allow(clippy::print_stdout)]

use rollcfg::{
  AssembleOptions, Assembler, BundleConfig, ExtraPlugins, PluginRegistry, PluginRequest,
};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let requests: Vec<PluginRequest> = serde_json::from_str(
    r#"["ts", "json", ["css", { "output": "dist/styles.css" }], "vue"]"#,
  )?;

  let assembler = Assembler::new(PluginRegistry::descriptors(), AssembleOptions::default());
  let output = assembler.assemble(&requests, ExtraPlugins::None)?;

  let config = BundleConfig::build(None, None, None, None, output.plugins);
  println!("{}", serde_json::to_string_pretty(&config)?);

  Ok(())
}
