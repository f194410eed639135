pub mod bundle_config;
pub mod plugin_kind;
pub mod plugin_options;
pub mod plugin_request;
