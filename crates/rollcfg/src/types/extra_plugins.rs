use rollcfg_common::BoxPlugin;

/// Already-built plugins the caller wants placed after the catalog transforms.
#[derive(Debug, Default)]
pub enum ExtraPlugins {
  #[default]
  None,
  List(Vec<BoxPlugin>),
  /// Legacy shape of this slot, a switch for Babel plus the extras that used to be passed
  /// separately. `enabled` forces Babel with its built-in defaults, whatever a request says.
  /// `plugins` go where [`ExtraPlugins::List`] would. A warning is reported either way.
  BabelFlag { enabled: bool, plugins: Vec<BoxPlugin> },
}

impl ExtraPlugins {
  pub fn babel_flag(enabled: bool) -> Self {
    Self::BabelFlag { enabled, plugins: Vec::new() }
  }
}

impl From<Vec<BoxPlugin>> for ExtraPlugins {
  fn from(value: Vec<BoxPlugin>) -> Self {
    Self::List(value)
  }
}

impl From<Option<Vec<BoxPlugin>>> for ExtraPlugins {
  fn from(value: Option<Vec<BoxPlugin>>) -> Self {
    value.map_or(Self::None, Self::List)
  }
}
