mod bundler_options;
mod types;

pub use bundler_options::{
  bundle_input::BundleInput,
  minifier_config_lookup::MinifierConfigLookup,
  normalized_assemble_options::{NormalizedAssembleOptions, DEFAULT_MINIFIER_CONFIG_FILE},
  output_format::OutputFormat,
  AssembleOptions,
};

pub use crate::types::{
  bundle_config::{
    BundleConfig, OutputOptions, DEFAULT_EXTERNALS, DEFAULT_INPUT, DEFAULT_OUTPUT_DIR,
  },
  plugin_kind::{Activation, PluginKind},
  plugin_options::{merge_options, OptionsSource, WRAPPED_VALUE_KEY},
  plugin_request::PluginRequest,
};

pub use rollcfg_plugin::{BoxPlugin, Plugin, PluginOptions};
