use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
  #[serde(rename = "es", alias = "esm")]
  Esm,
  #[default]
  Cjs,
  Iife,
  Umd,
  Amd,
  System,
}

impl FromStr for OutputFormat {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "es" | "esm" | "module" => Ok(Self::Esm),
      "cjs" | "commonjs" => Ok(Self::Cjs),
      "iife" => Ok(Self::Iife),
      "umd" => Ok(Self::Umd),
      "amd" => Ok(Self::Amd),
      "system" | "systemjs" => Ok(Self::System),
      _ => Err(format!("Invalid output format \"{s}\".")),
    }
  }
}

impl Display for OutputFormat {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Esm => write!(f, "es"),
      Self::Cjs => write!(f, "cjs"),
      Self::Iife => write!(f, "iife"),
      Self::Umd => write!(f, "umd"),
      Self::Amd => write!(f, "amd"),
      Self::System => write!(f, "system"),
    }
  }
}

#[test]
fn test_output_format_from_str() {
  assert_eq!("esm".parse::<OutputFormat>(), Ok(OutputFormat::Esm));
  assert_eq!("commonjs".parse::<OutputFormat>(), Ok(OutputFormat::Cjs));
  assert_eq!(OutputFormat::Esm.to_string(), "es");
  assert!("cjs2".parse::<OutputFormat>().is_err());
}
