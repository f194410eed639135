use crate::{BoxPlugin, PluginOptions};

/// Builds a plugin instance from resolved options.
pub trait PluginFactory: Send + Sync {
  fn construct(&self, options: PluginOptions) -> anyhow::Result<BoxPlugin>;
}

impl<F> PluginFactory for F
where
  F: Fn(PluginOptions) -> anyhow::Result<BoxPlugin> + Send + Sync,
{
  fn construct(&self, options: PluginOptions) -> anyhow::Result<BoxPlugin> {
    self(options)
  }
}

pub type BoxPluginFactory = Box<dyn PluginFactory>;
