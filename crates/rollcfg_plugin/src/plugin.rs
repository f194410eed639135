use std::{any::Any, borrow::Cow, fmt::Debug};

use rollcfg_utils::pretty_type_name::pretty_type_name;

/// The value a plugin constructor is invoked with. Usually an object, but constructors
/// receive whatever the caller supplied when defaults are discarded.
pub type PluginOptions = serde_json::Value;

/// A constructed bundler plugin. The assembler never looks inside one, it only orders them.
pub trait Plugin: Any + Debug + Send + Sync + 'static {
  fn name(&self) -> Cow<'static, str> {
    pretty_type_name::<Self>()
  }

  /// The JSON shape handed to the host bundler when a configuration is serialized.
  fn to_json(&self) -> serde_json::Value {
    serde_json::json!({ "name": self.name() })
  }
}

pub type BoxPlugin = Box<dyn Plugin>;

#[test]
fn test_default_plugin_name() {
  #[derive(Debug)]
  struct BannerPlugin;
  impl Plugin for BannerPlugin {}

  let plugin: BoxPlugin = Box::new(BannerPlugin);
  assert_eq!(plugin.name(), "BannerPlugin");
  assert_eq!(plugin.to_json(), serde_json::json!({ "name": "BannerPlugin" }));
}
