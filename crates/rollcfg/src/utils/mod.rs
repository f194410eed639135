pub mod load_minifier_config;
pub mod normalize_options;
