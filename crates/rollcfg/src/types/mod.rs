pub mod assembled_plugins;
pub mod extra_plugins;
