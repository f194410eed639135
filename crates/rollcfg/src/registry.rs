use arcstr::ArcStr;
use rollcfg_common::PluginKind;
use rollcfg_plugin::{BoxPluginFactory, DescriptorPlugin, PluginFactory};
use rollcfg_utils::indexmap::FxIndexMap;

/// Plugin constructors keyed by the module that provides them.
///
/// The assembler looks every activated kind up here by [`PluginKind::module_id`]. A module that
/// is not registered behaves like a package that is not installed.
#[derive(Default)]
pub struct PluginRegistry {
  factories: FxIndexMap<ArcStr, BoxPluginFactory>,
}

impl PluginRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// A registry that builds a [`DescriptorPlugin`] for every module in the catalog.
  pub fn descriptors() -> Self {
    let mut registry = Self::new();
    for kind in PluginKind::ALL {
      registry.register(kind.module_id(), DescriptorPlugin::factory(kind.module_id()));
    }
    registry
  }

  /// Registers `factory` under `module_id`, replacing any previous one.
  pub fn register(
    &mut self,
    module_id: impl Into<ArcStr>,
    factory: impl PluginFactory + 'static,
  ) -> &mut Self {
    self.factories.insert(module_id.into(), Box::new(factory));
    self
  }

  #[must_use]
  pub fn with(
    mut self,
    module_id: impl Into<ArcStr>,
    factory: impl PluginFactory + 'static,
  ) -> Self {
    self.register(module_id, factory);
    self
  }

  pub fn unregister(&mut self, module_id: &str) -> Option<BoxPluginFactory> {
    self.factories.shift_remove(module_id)
  }

  pub fn get(&self, module_id: &str) -> Option<&dyn PluginFactory> {
    self.factories.get(module_id).map(|factory| &**factory)
  }

  pub fn contains(&self, module_id: &str) -> bool {
    self.factories.contains_key(module_id)
  }

  pub fn module_ids(&self) -> impl Iterator<Item = &str> {
    self.factories.keys().map(ArcStr::as_str)
  }
}

impl std::fmt::Debug for PluginRegistry {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("PluginRegistry").field("modules", &self.factories.keys()).finish()
  }
}

#[test]
fn test_descriptor_registry_covers_catalog() {
  let registry = PluginRegistry::descriptors();
  for kind in PluginKind::ALL {
    assert!(registry.contains(kind.module_id()), "{kind}");
  }
  assert_eq!(registry.module_ids().count(), PluginKind::ALL.len());
  assert_eq!(registry.module_ids().next(), Some("@rollup/plugin-typescript"));
}

#[test]
fn test_register_replaces_and_unregister_removes() {
  let mut registry = PluginRegistry::descriptors();
  registry.register("@rollup/plugin-json", DescriptorPlugin::factory("json-fork"));

  let plugin =
    registry.get("@rollup/plugin-json").unwrap().construct(serde_json::json!({})).unwrap();
  assert_eq!(plugin.name(), "json-fork");

  assert!(registry.unregister("@rollup/plugin-json").is_some());
  assert!(registry.get("@rollup/plugin-json").is_none());
  assert!(registry.unregister("@rollup/plugin-json").is_none());
}
