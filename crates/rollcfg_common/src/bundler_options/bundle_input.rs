use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Entry module path, or several of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BundleInput {
  Single(String),
  Multiple(Vec<String>),
}

impl BundleInput {
  pub fn paths(&self) -> impl Iterator<Item = &str> {
    let paths: &[String] = match self {
      Self::Single(path) => std::slice::from_ref(path),
      Self::Multiple(paths) => paths,
    };
    paths.iter().map(String::as_str)
  }
}

impl From<&str> for BundleInput {
  fn from(value: &str) -> Self {
    Self::Single(value.to_string())
  }
}

impl From<Cow<'_, str>> for BundleInput {
  fn from(value: Cow<'_, str>) -> Self {
    Self::Single(value.into_owned())
  }
}

impl From<String> for BundleInput {
  fn from(value: String) -> Self {
    Self::Single(value)
  }
}

impl From<Vec<String>> for BundleInput {
  fn from(value: Vec<String>) -> Self {
    Self::Multiple(value)
  }
}

impl From<Vec<&str>> for BundleInput {
  fn from(value: Vec<&str>) -> Self {
    Self::Multiple(value.into_iter().map(ToString::to_string).collect())
  }
}

#[test]
fn test_bundle_input_paths() {
  assert_eq!(BundleInput::from("src/main.ts").paths().collect::<Vec<_>>(), ["src/main.ts"]);
  assert_eq!(
    BundleInput::from(vec!["a.ts", "b.ts"]).paths().collect::<Vec<_>>(),
    ["a.ts", "b.ts"]
  );
}
