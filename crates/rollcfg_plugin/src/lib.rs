mod descriptor;
mod factory;
mod plugin;

pub use crate::{
  descriptor::DescriptorPlugin,
  factory::{BoxPluginFactory, PluginFactory},
  plugin::{BoxPlugin, Plugin, PluginOptions},
};
