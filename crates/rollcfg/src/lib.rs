mod assembler;
mod matcher;
mod registry;
mod types;
mod utils;

pub use crate::{
  assembler::Assembler,
  matcher::{find, RequestMatch},
  registry::PluginRegistry,
  types::{
    assembled_plugins::{AssembledPlugins, PluginResolution},
    extra_plugins::ExtraPlugins,
  },
};
pub use rollcfg_common::*;
pub use rollcfg_error::{BuildError, BuildResult, Diagnostic, Severity};
pub use rollcfg_fs::{FileSystem, OsFileSystem};
pub use rollcfg_plugin::{BoxPluginFactory, DescriptorPlugin, PluginFactory};
