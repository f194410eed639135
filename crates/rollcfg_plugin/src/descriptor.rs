use std::borrow::Cow;

use arcstr::ArcStr;

use crate::{BoxPlugin, Plugin, PluginFactory, PluginOptions};

/// A plugin known only by the module that provides it and the options it is called with.
///
/// This is what gets handed over to a JavaScript bundler process, which does the
/// `require(module)(options)` on its side.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptorPlugin {
  pub module_id: ArcStr,
  pub options: PluginOptions,
}

impl DescriptorPlugin {
  pub fn new(module_id: impl Into<ArcStr>, options: PluginOptions) -> Self {
    Self { module_id: module_id.into(), options }
  }

  /// A factory producing descriptors for `module_id`.
  pub fn factory(module_id: impl Into<ArcStr>) -> impl PluginFactory {
    let module_id = module_id.into();
    move |options: PluginOptions| -> anyhow::Result<BoxPlugin> {
      Ok(Box::new(DescriptorPlugin::new(module_id.clone(), options)))
    }
  }
}

impl Plugin for DescriptorPlugin {
  fn name(&self) -> Cow<'static, str> {
    Cow::Owned(self.module_id.to_string())
  }

  fn to_json(&self) -> serde_json::Value {
    serde_json::json!({ "name": self.module_id.as_str(), "options": self.options })
  }
}

#[test]
fn test_descriptor_factory() {
  let factory = DescriptorPlugin::factory("@rollup/plugin-json");
  let plugin = factory.construct(serde_json::json!({ "compact": true })).unwrap();

  assert_eq!(plugin.name(), "@rollup/plugin-json");
  assert_eq!(
    plugin.to_json(),
    serde_json::json!({ "name": "@rollup/plugin-json", "options": { "compact": true } })
  );
}
