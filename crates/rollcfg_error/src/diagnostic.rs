use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
  Warning,
  Advisory,
}

/// Non-fatal findings collected while assembling. The assembly still returns a complete list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
  /// The extras slot was given the legacy boolean instead of a plugin list.
  DeprecatedBabelFlag { enabled: bool },
  UnknownIdentifier { identifier: String },
  /// CSS-only needs a dedicated build step fed from a dummy entry module.
  CssOnlyWorkflow,
}

impl Diagnostic {
  pub fn severity(&self) -> Severity {
    match self {
      Self::DeprecatedBabelFlag { .. } | Self::UnknownIdentifier { .. } => Severity::Warning,
      Self::CssOnlyWorkflow => Severity::Advisory,
    }
  }

  pub fn is_warning(&self) -> bool {
    matches!(self.severity(), Severity::Warning)
  }
}

impl Display for Diagnostic {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::DeprecatedBabelFlag { .. } => write!(
        f,
        "Setting babel with the extra plugins argument is deprecated. Pass \"babel\" like other plugins instead. Extra plugins should be passed as a list."
      ),
      Self::UnknownIdentifier { identifier } => {
        write!(f, "\"{identifier}\" does not name any supported plugin and was ignored.")
      }
      Self::CssOnlyWorkflow => write!(
        f,
        "css-only was chosen to bundle css files into a single file. It requires the css files to be imported from a dummy js entry that is passed as the input. This should be done in a separate step from bundling the source code."
      ),
    }
  }
}

#[test]
fn test_diagnostic_severity() {
  assert!(Diagnostic::DeprecatedBabelFlag { enabled: true }.is_warning());
  assert!(Diagnostic::UnknownIdentifier { identifier: "vue".to_string() }.is_warning());
  assert_eq!(Diagnostic::CssOnlyWorkflow.severity(), Severity::Advisory);
  assert_eq!(
    Diagnostic::UnknownIdentifier { identifier: "vue".to_string() }.to_string(),
    "\"vue\" does not name any supported plugin and was ignored."
  );
}
