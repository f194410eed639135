use std::fmt::Display;

use serde_json::json;

use crate::PluginOptions;

/// When a kind ends up in the plugin list without being asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
  /// Only when a request names it.
  OnRequest,
  /// Always, unless disabled.
  Always,
  /// In production mode, or when a request names it.
  Production,
}

/// Every plugin kind the assembler knows about. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PluginKind {
  TypeScript,
  CoffeeScript,
  Json,
  CssOnly,
  /// `csso` run over the css-only output. Only ever added right after [`PluginKind::CssOnly`].
  CssCompaction,
  Babel,
  Wasm,
  AssemblyScript,
  Visualizer,
  SourceMaps,
  AutoExternal,
  NodeResolve,
  CommonJs,
  Replace,
  Terser,
}

static IDENTIFIERS: phf::Map<&'static str, PluginKind> = phf::phf_map! {
  "ts" => PluginKind::TypeScript,
  ".ts" => PluginKind::TypeScript,
  "typescript" => PluginKind::TypeScript,
  "TypeScript" => PluginKind::TypeScript,
  "coffee" => PluginKind::CoffeeScript,
  ".coffee" => PluginKind::CoffeeScript,
  "coffeescript" => PluginKind::CoffeeScript,
  "coffee-script" => PluginKind::CoffeeScript,
  "CoffeeScript" => PluginKind::CoffeeScript,
  "cs" => PluginKind::CoffeeScript,
  "json" => PluginKind::Json,
  ".json" => PluginKind::Json,
  "JSON" => PluginKind::Json,
  "css" => PluginKind::CssOnly,
  ".css" => PluginKind::CssOnly,
  "babel" => PluginKind::Babel,
  "wasm" => PluginKind::Wasm,
  "WebAssembly" => PluginKind::Wasm,
  "as" => PluginKind::AssemblyScript,
  "assemblyscript" => PluginKind::AssemblyScript,
  "AssemblyScript" => PluginKind::AssemblyScript,
  "visualizer" => PluginKind::Visualizer,
  "plot" => PluginKind::Visualizer,
  "sourcemaps" => PluginKind::SourceMaps,
  "source-maps" => PluginKind::SourceMaps,
  "auto-external" => PluginKind::AutoExternal,
  "autoExternal" => PluginKind::AutoExternal,
  "resolve" => PluginKind::NodeResolve,
  "node-resolve" => PluginKind::NodeResolve,
  "commonjs" => PluginKind::CommonJs,
  "cjs" => PluginKind::CommonJs,
  "replace" => PluginKind::Replace,
  "env" => PluginKind::Replace,
  "terser" => PluginKind::Terser,
  "minify" => PluginKind::Terser,
};

/// Identifiers for plain JavaScript. They are valid in a request but need no plugin.
pub const JAVASCRIPT_IDENTIFIERS: &[&str] = &["js", ".js", "javascript", "JavaScript"];

impl PluginKind {
  /// Language transforms followed by analysis plugins. Caller extras come after these.
  pub const TRANSFORMS: [PluginKind; 8] = [
    Self::TypeScript,
    Self::CoffeeScript,
    Self::Json,
    Self::CssOnly,
    Self::Babel,
    Self::Wasm,
    Self::AssemblyScript,
    Self::Visualizer,
  ];

  pub const INFRASTRUCTURE: [PluginKind; 6] = [
    Self::SourceMaps,
    Self::AutoExternal,
    Self::NodeResolve,
    Self::CommonJs,
    Self::Replace,
    Self::Terser,
  ];

  pub const ALL: [PluginKind; 15] = [
    Self::TypeScript,
    Self::CoffeeScript,
    Self::Json,
    Self::CssOnly,
    Self::CssCompaction,
    Self::Babel,
    Self::Wasm,
    Self::AssemblyScript,
    Self::Visualizer,
    Self::SourceMaps,
    Self::AutoExternal,
    Self::NodeResolve,
    Self::CommonJs,
    Self::Replace,
    Self::Terser,
  ];

  pub fn from_identifier(identifier: &str) -> Option<Self> {
    IDENTIFIERS.get(identifier).copied()
  }

  pub fn is_javascript_identifier(identifier: &str) -> bool {
    JAVASCRIPT_IDENTIFIERS.contains(&identifier)
  }

  pub fn name(self) -> &'static str {
    match self {
      Self::TypeScript => "TypeScript",
      Self::CoffeeScript => "CoffeeScript",
      Self::Json => "JSON",
      Self::CssOnly => "CSS",
      Self::CssCompaction => "CSS compaction",
      Self::Babel => "Babel",
      Self::Wasm => "WebAssembly",
      Self::AssemblyScript => "AssemblyScript",
      Self::Visualizer => "Visualizer",
      Self::SourceMaps => "Source maps",
      Self::AutoExternal => "Auto external",
      Self::NodeResolve => "Node resolve",
      Self::CommonJs => "CommonJS",
      Self::Replace => "Replace",
      Self::Terser => "Terser",
    }
  }

  pub fn aliases(self) -> &'static [&'static str] {
    match self {
      Self::TypeScript => &["ts", ".ts", "typescript", "TypeScript"],
      Self::CoffeeScript => {
        &["coffee", ".coffee", "coffeescript", "coffee-script", "CoffeeScript", "cs"]
      }
      Self::Json => &["json", ".json", "JSON"],
      Self::CssOnly => &["css", ".css"],
      Self::CssCompaction => &[],
      Self::Babel => &["babel"],
      Self::Wasm => &["wasm", "WebAssembly"],
      Self::AssemblyScript => &["as", "assemblyscript", "AssemblyScript"],
      Self::Visualizer => &["visualizer", "plot"],
      Self::SourceMaps => &["sourcemaps", "source-maps"],
      Self::AutoExternal => &["auto-external", "autoExternal"],
      Self::NodeResolve => &["resolve", "node-resolve"],
      Self::CommonJs => &["commonjs", "cjs"],
      Self::Replace => &["replace", "env"],
      Self::Terser => &["terser", "minify"],
    }
  }

  /// The package a constructor is looked up under.
  pub fn module_id(self) -> &'static str {
    match self {
      Self::TypeScript => "@rollup/plugin-typescript",
      Self::CoffeeScript => "rollup-plugin-coffee-script",
      Self::Json => "@rollup/plugin-json",
      Self::CssOnly => "rollup-plugin-css-only",
      Self::CssCompaction => "rollup-plugin-execute",
      Self::Babel => "@rollup/plugin-babel",
      Self::Wasm => "@rollup/plugin-wasm",
      Self::AssemblyScript => "rollup-plugin-assemblyscript",
      Self::Visualizer => "rollup-plugin-visualizer",
      Self::SourceMaps => "rollup-plugin-sourcemaps",
      Self::AutoExternal => "rollup-plugin-auto-external",
      Self::NodeResolve => "@rollup/plugin-node-resolve",
      Self::CommonJs => "@rollup/plugin-commonjs",
      Self::Replace => "@rollup/plugin-replace",
      Self::Terser => "rollup-plugin-terser",
    }
  }

  pub fn activation(self) -> Activation {
    match self {
      Self::SourceMaps | Self::AutoExternal | Self::NodeResolve | Self::CommonJs => {
        Activation::Always
      }
      Self::Replace | Self::Terser | Self::CssCompaction => Activation::Production,
      _ => Activation::OnRequest,
    }
  }

  pub fn is_include_by_default(self) -> bool {
    matches!(self.activation(), Activation::Always)
  }

  pub fn is_environment_gated(self) -> bool {
    matches!(self.activation(), Activation::Production)
  }

  /// Built-in options. Only [`PluginKind::Replace`] depends on the mode.
  pub fn default_options(self, production: bool) -> PluginOptions {
    match self {
      Self::TypeScript => json!({
        "noEmitOnError": false,
        // Keep the imports untouched, the bundler handles them.
        "module": "ESNext",
      }),
      Self::Json => json!({ "compact": true }),
      Self::CssOnly => json!({ "output": "dist/bundle.css" }),
      Self::CssCompaction => json!(["csso dist/bundle.css --output dist/bundle.css"]),
      Self::Babel => json!({
        "extensions": [".js", ".jsx", ".mjs", ".coffee"],
        "babelHelpers": "bundled",
      }),
      Self::Visualizer => json!({ "sourcemap": true, "open": true }),
      Self::AutoExternal => json!({
        "builtins": true,
        "dependencies": false,
        "peerDependencies": false,
      }),
      Self::NodeResolve => json!({
        "extensions": [".ts", ".js", ".coffee", ".tsx", ".jsx", ".mjs"],
        "preferBuiltins": true,
      }),
      Self::Replace => {
        let mode = if production { "production" } else { "development" };
        json!({ "process.env.NODE_ENV": format!("\"{mode}\"") })
      }
      Self::Terser => json!({
        "ecma": 2018,
        "warnings": true,
        "compress": { "drop_console": false },
      }),
      Self::CoffeeScript
      | Self::Wasm
      | Self::AssemblyScript
      | Self::SourceMaps
      | Self::CommonJs => json!({}),
    }
  }
}

impl Display for PluginKind {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.name())
  }
}

#[test]
fn test_identifier_table_matches_aliases() {
  let mut alias_count = 0;
  for kind in PluginKind::ALL {
    for alias in kind.aliases() {
      assert_eq!(PluginKind::from_identifier(alias), Some(kind), "{alias}");
      alias_count += 1;
    }
  }
  assert_eq!(alias_count, IDENTIFIERS.len());
}

#[test]
fn test_catalog_covers_every_kind() {
  let mut catalog =
    PluginKind::TRANSFORMS.into_iter().chain(PluginKind::INFRASTRUCTURE).collect::<Vec<_>>();
  catalog.push(PluginKind::CssCompaction);
  catalog.sort();
  let mut all = PluginKind::ALL.to_vec();
  all.sort();
  assert_eq!(catalog, all);

  assert!(PluginKind::INFRASTRUCTURE[..4].iter().all(|kind| kind.is_include_by_default()));
  assert!(PluginKind::INFRASTRUCTURE[4..].iter().all(|kind| kind.is_environment_gated()));
  assert!(!PluginKind::TRANSFORMS.iter().any(|kind| kind.is_include_by_default()));
}

#[test]
fn test_from_identifier_is_case_sensitive() {
  assert_eq!(PluginKind::from_identifier("TypeScript"), Some(PluginKind::TypeScript));
  assert_eq!(PluginKind::from_identifier("Typescript"), None);
  assert_eq!(PluginKind::from_identifier("js"), None);
  assert!(PluginKind::is_javascript_identifier("js"));
}

#[test]
fn test_replace_defaults_follow_mode() {
  assert_eq!(
    PluginKind::Replace.default_options(true),
    json!({ "process.env.NODE_ENV": "\"production\"" })
  );
  assert_eq!(
    PluginKind::Replace.default_options(false),
    json!({ "process.env.NODE_ENV": "\"development\"" })
  );
}
