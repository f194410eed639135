use rollcfg_common::{PluginOptions, PluginRequest};

/// The first request naming one of a kind's aliases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RequestMatch<'a> {
  /// Position in the request list.
  pub index: usize,
  /// `None` for a bare identifier.
  pub options: Option<&'a PluginOptions>,
  pub extend_defaults: Option<bool>,
}

impl RequestMatch<'_> {
  pub fn is_bare(&self) -> bool {
    self.options.is_none()
  }
}

/// Scans `requests` in order and returns the first one whose identifier is in `aliases`.
pub fn find<'a>(requests: &'a [PluginRequest], aliases: &[&str]) -> Option<RequestMatch<'a>> {
  requests.iter().enumerate().find(|(_, request)| aliases.contains(&request.identifier())).map(
    |(index, request)| match request {
      PluginRequest::Name(_) => RequestMatch { index, options: None, extend_defaults: None },
      PluginRequest::WithOptions { options, extend_defaults, .. } => {
        RequestMatch { index, options: Some(options), extend_defaults: *extend_defaults }
      }
    },
  )
}

#[test]
fn test_find_first_match_wins() {
  use serde_json::json;

  let requests = vec![
    PluginRequest::name("json"),
    PluginRequest::with_options("typescript", json!({ "module": "CommonJS" })),
    PluginRequest::name("ts"),
  ];
  let aliases = ["ts", ".ts", "typescript", "TypeScript"];

  let matched = find(&requests, &aliases).unwrap();
  assert_eq!(matched.index, 1);
  assert_eq!(matched.options, Some(&json!({ "module": "CommonJS" })));
  assert_eq!(matched.extend_defaults, None);
  assert!(!matched.is_bare());
}

#[test]
fn test_find_bare_and_missing() {
  let requests = vec![PluginRequest::name("coffee"), PluginRequest::name("JSON")];

  let matched = find(&requests, &["json", ".json", "JSON"]).unwrap();
  assert_eq!(matched, RequestMatch { index: 1, options: None, extend_defaults: None });

  assert_eq!(find(&requests, &["wasm", "WebAssembly"]), None);
  let no_requests: [PluginRequest; 0] = [];
  let no_aliases: [&str; 0] = [];
  assert_eq!(find(&no_requests, &["ts"]), None);
  assert_eq!(find(&requests, &no_aliases), None);
}

#[test]
fn test_find_is_case_sensitive() {
  let requests = vec![PluginRequest::name("Json")];
  assert_eq!(find(&requests, &["json", ".json", "JSON"]), None);
}

#[test]
fn test_find_reports_extend_flag() {
  use serde_json::json;

  let requests = vec![
    PluginRequest::extending("babel", json!({ "babelHelpers": "runtime" })),
    PluginRequest::WithOptions {
      identifier: "css".to_string(),
      options: json!({ "output": "out.css" }),
      extend_defaults: Some(false),
    },
  ];

  assert_eq!(find(&requests, &["babel"]).unwrap().extend_defaults, Some(true));
  assert_eq!(find(&requests, &["css", ".css"]).unwrap().extend_defaults, Some(false));
}
