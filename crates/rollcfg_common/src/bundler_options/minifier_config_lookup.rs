/// When the minifier override file is consulted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MinifierConfigLookup {
  /// Never read the file, always use the built-in options.
  Never,
  /// Only when the minifier was activated by production mode.
  ProductionOnly,
  /// Whenever the minifier is added, including explicit requests outside production.
  #[default]
  WhenActive,
}

impl MinifierConfigLookup {
  pub fn should_lookup(self, production: bool) -> bool {
    match self {
      Self::Never => false,
      Self::ProductionOnly => production,
      Self::WhenActive => true,
    }
  }
}
