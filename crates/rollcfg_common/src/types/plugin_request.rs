use serde::{Deserialize, Serialize};

use crate::PluginOptions;

/// One entry of the caller's plugin list.
///
/// In JSON a request is either `"ts"`, `["ts", { ... }]` or `["ts", { ... }, true]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawPluginRequest", into = "RawPluginRequest")]
pub enum PluginRequest {
  /// Use the kind's built-in options.
  Name(String),
  WithOptions {
    identifier: String,
    options: PluginOptions,
    /// `Some(true)` layers `options` over the built-in defaults. Otherwise `options` are
    /// used as they are and the defaults are dropped.
    extend_defaults: Option<bool>,
  },
}

impl PluginRequest {
  pub fn name(identifier: impl Into<String>) -> Self {
    Self::Name(identifier.into())
  }

  /// Options that replace the built-in defaults entirely.
  pub fn with_options(identifier: impl Into<String>, options: PluginOptions) -> Self {
    Self::WithOptions { identifier: identifier.into(), options, extend_defaults: None }
  }

  /// Options that are merged over the built-in defaults.
  pub fn extending(identifier: impl Into<String>, options: PluginOptions) -> Self {
    Self::WithOptions { identifier: identifier.into(), options, extend_defaults: Some(true) }
  }

  pub fn identifier(&self) -> &str {
    match self {
      Self::Name(identifier) | Self::WithOptions { identifier, .. } => identifier,
    }
  }

  pub fn options(&self) -> Option<&PluginOptions> {
    match self {
      Self::Name(_) => None,
      Self::WithOptions { options, .. } => Some(options),
    }
  }

  /// The list used when the caller does not pass one.
  pub fn defaults() -> Vec<Self> {
    ["ts", "js", "json", "coffee"].into_iter().map(Self::name).collect()
  }
}

impl From<&str> for PluginRequest {
  fn from(value: &str) -> Self {
    Self::name(value)
  }
}

impl From<String> for PluginRequest {
  fn from(value: String) -> Self {
    Self::Name(value)
  }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawPluginRequest {
  Name(String),
  Triple(String, PluginOptions, bool),
  Pair(String, PluginOptions),
}

impl From<RawPluginRequest> for PluginRequest {
  fn from(raw: RawPluginRequest) -> Self {
    match raw {
      RawPluginRequest::Name(identifier) => Self::Name(identifier),
      RawPluginRequest::Pair(identifier, options) => {
        Self::WithOptions { identifier, options, extend_defaults: None }
      }
      RawPluginRequest::Triple(identifier, options, extend) => {
        Self::WithOptions { identifier, options, extend_defaults: Some(extend) }
      }
    }
  }
}

impl From<PluginRequest> for RawPluginRequest {
  fn from(request: PluginRequest) -> Self {
    match request {
      PluginRequest::Name(identifier) => Self::Name(identifier),
      PluginRequest::WithOptions { identifier, options, extend_defaults: None } => {
        Self::Pair(identifier, options)
      }
      PluginRequest::WithOptions { identifier, options, extend_defaults: Some(extend) } => {
        Self::Triple(identifier, options, extend)
      }
    }
  }
}

#[test]
fn test_deserialize_requests() {
  use serde_json::json;

  let requests: Vec<PluginRequest> = serde_json::from_value(json!([
    "ts",
    ["json", { "compact": false }],
    ["babel", { "babelHelpers": "runtime" }, true],
    ["css", { "output": "out.css" }, false],
  ]))
  .unwrap();

  assert_eq!(
    requests,
    [
      PluginRequest::name("ts"),
      PluginRequest::with_options("json", json!({ "compact": false })),
      PluginRequest::extending("babel", json!({ "babelHelpers": "runtime" })),
      PluginRequest::WithOptions {
        identifier: "css".to_string(),
        options: json!({ "output": "out.css" }),
        extend_defaults: Some(false),
      },
    ]
  );
  assert_eq!(requests[2].identifier(), "babel");
  assert!(requests[0].options().is_none());
}

#[test]
fn test_reject_malformed_request() {
  use serde_json::json;

  assert!(serde_json::from_value::<PluginRequest>(json!(["ts"])).is_err());
  assert!(serde_json::from_value::<PluginRequest>(json!(42)).is_err());
  assert!(serde_json::from_value::<PluginRequest>(json!(["ts", {}, true, 1])).is_err());
}

#[test]
fn test_serialize_request() {
  use serde_json::json;

  let value = serde_json::to_value(PluginRequest::extending("ts", json!({ "module": "CommonJS" })))
    .unwrap();
  assert_eq!(value, json!(["ts", { "module": "CommonJS" }, true]));
  assert_eq!(serde_json::to_value(PluginRequest::from("json")).unwrap(), json!("json"));
}
