use rollcfg_common::{
  BoxPlugin, BundleConfig, BundleInput, OptionsSource, OutputFormat, PluginKind, PluginOptions,
};
use rollcfg_error::Diagnostic;

/// How one catalog kind was constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct PluginResolution {
  pub kind: PluginKind,
  pub options: PluginOptions,
  pub source: OptionsSource,
}

#[derive(Debug, Default)]
pub struct AssembledPlugins {
  /// Catalog transforms, caller extras, then infrastructure.
  pub plugins: Vec<BoxPlugin>,
  /// One entry per catalog-derived plugin, in output order. Extras have none.
  pub resolutions: Vec<PluginResolution>,
  pub diagnostics: Vec<Diagnostic>,
}

impl AssembledPlugins {
  pub fn kinds(&self) -> impl Iterator<Item = PluginKind> + '_ {
    self.resolutions.iter().map(|resolution| resolution.kind)
  }

  pub fn resolution(&self, kind: PluginKind) -> Option<&PluginResolution> {
    self.resolutions.iter().find(|resolution| resolution.kind == kind)
  }

  pub fn contains(&self, kind: PluginKind) -> bool {
    self.resolution(kind).is_some()
  }

  pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
    self.diagnostics.iter().filter(|diagnostic| diagnostic.is_warning())
  }

  pub fn into_config(
    self,
    input: BundleInput,
    dir: String,
    format: OutputFormat,
    external: Vec<String>,
  ) -> BundleConfig {
    BundleConfig::new(input, dir, format, external, self.plugins)
  }
}
