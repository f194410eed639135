use rollcfg_common::{
  merge_options, Activation, AssembleOptions, BoxPlugin, NormalizedAssembleOptions,
  OptionsSource, PluginKind, PluginOptions, PluginRequest,
};
use rollcfg_error::{BuildError, BuildResult, Diagnostic, Severity};
use rollcfg_fs::{FileSystem, OsFileSystem};
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::{
  matcher::{find, RequestMatch},
  registry::PluginRegistry,
  types::{
    assembled_plugins::{AssembledPlugins, PluginResolution},
    extra_plugins::ExtraPlugins,
  },
  utils::{load_minifier_config::load_minifier_config, normalize_options::normalize_options},
};

/// Turns a list of plugin requests into an ordered list of constructed plugins.
pub struct Assembler<F: FileSystem = OsFileSystem> {
  registry: PluginRegistry,
  options: NormalizedAssembleOptions,
  fs: F,
}

impl Assembler {
  pub fn new(registry: PluginRegistry, options: AssembleOptions) -> Self {
    Self::with_fs(registry, options, OsFileSystem)
  }
}

impl<F: FileSystem> Assembler<F> {
  pub fn with_fs(registry: PluginRegistry, options: AssembleOptions, fs: F) -> Self {
    Self { registry, options: normalize_options(options), fs }
  }

  pub fn options(&self) -> &NormalizedAssembleOptions {
    &self.options
  }

  pub fn registry(&self) -> &PluginRegistry {
    &self.registry
  }

  /// [`Assembler::assemble`] with [`PluginRequest::defaults`].
  pub fn assemble_defaults(&self, extras: ExtraPlugins) -> BuildResult<AssembledPlugins> {
    self.assemble(&PluginRequest::defaults(), extras)
  }

  /// Walks the catalog in its fixed order and constructs every kind that is requested or
  /// active by default. Caller extras go between the transforms and the infrastructure kinds.
  ///
  /// A missing constructor or a failing one aborts the whole call. Problems with the shape of
  /// the input are reported in [`AssembledPlugins::diagnostics`] instead.
  pub fn assemble(
    &self,
    requests: &[PluginRequest],
    extras: ExtraPlugins,
  ) -> BuildResult<AssembledPlugins> {
    let mut ctx = AssembleContext::new(requests);
    ctx.check_identifiers();

    let (extras, babel_flag) = match extras {
      ExtraPlugins::None => (Vec::new(), false),
      ExtraPlugins::List(plugins) => (plugins, false),
      ExtraPlugins::BabelFlag { enabled, plugins } => {
        ctx.report(Diagnostic::DeprecatedBabelFlag { enabled });
        (plugins, enabled)
      }
    };

    for kind in PluginKind::TRANSFORMS {
      let forced = babel_flag && kind == PluginKind::Babel;
      self.resolve_kind(&mut ctx, kind, forced)?;
    }

    debug!(count = extras.len(), "Appending extra plugins");
    ctx.output.plugins.extend(extras);

    for kind in PluginKind::INFRASTRUCTURE {
      self.resolve_kind(&mut ctx, kind, false)?;
    }

    Ok(ctx.output)
  }

  fn resolve_kind(
    &self,
    ctx: &mut AssembleContext<'_>,
    kind: PluginKind,
    forced: bool,
  ) -> BuildResult<()> {
    // A forced kind is built from its defaults even when a request carries options.
    let matched = find(ctx.requests, kind.aliases()).filter(|_| !forced);
    if matched.is_none() && !forced && !self.is_active_by_default(kind) {
      return Ok(());
    }

    let (options, source) = resolve_options(matched, || self.defaults_for(kind))?;
    self.construct(ctx, kind, options, source)?;

    if kind == PluginKind::CssOnly {
      ctx.report(Diagnostic::CssOnlyWorkflow);
      if self.options.production && !self.options.is_disabled(PluginKind::CssCompaction) {
        let options = css_compaction_options(ctx.last_options());
        self.construct(ctx, PluginKind::CssCompaction, options, OptionsSource::Defaults)?;
      }
    }

    Ok(())
  }

  fn is_active_by_default(&self, kind: PluginKind) -> bool {
    if self.options.is_disabled(kind) {
      return false;
    }
    match kind.activation() {
      Activation::OnRequest => false,
      Activation::Always => true,
      Activation::Production => self.options.production,
    }
  }

  /// The options a kind starts from before any request is applied. For the minifier these
  /// come from the override file when there is one.
  fn defaults_for(&self, kind: PluginKind) -> BuildResult<(PluginOptions, OptionsSource)> {
    if kind == PluginKind::Terser
      && self.options.minifier_config_lookup.should_lookup(self.options.production)
    {
      let path = self.options.minifier_config_path();
      if let Some(options) = load_minifier_config(&self.fs, &path)? {
        debug!(path = %path.display(), "Using minifier config file");
        return Ok((options, OptionsSource::ConfigFile));
      }
    }
    Ok((kind.default_options(self.options.production), OptionsSource::Defaults))
  }

  fn construct(
    &self,
    ctx: &mut AssembleContext<'_>,
    kind: PluginKind,
    options: PluginOptions,
    source: OptionsSource,
  ) -> BuildResult<()> {
    let module_id = kind.module_id();
    let factory = self
      .registry
      .get(module_id)
      .ok_or(BuildError::MissingPlugin { kind: kind.name(), module_id })?;

    let plugin = factory
      .construct(options.clone())
      .map_err(|source| BuildError::Construct { kind: kind.name(), module_id, source })?;

    debug!(kind = kind.name(), module_id, ?source, "Constructed plugin");
    ctx.push(plugin, PluginResolution { kind, options, source });
    Ok(())
  }
}

/// Picks the options for a kind given how it was requested.
///
/// - not requested, or requested by name: the defaults
/// - requested with `extend_defaults: true`: defaults merged with the request's options
/// - requested with options otherwise: the request's options only
///
/// `defaults` is only called when the result depends on it.
fn resolve_options(
  matched: Option<RequestMatch<'_>>,
  defaults: impl FnOnce() -> BuildResult<(PluginOptions, OptionsSource)>,
) -> BuildResult<(PluginOptions, OptionsSource)> {
  match matched {
    None | Some(RequestMatch { options: None, .. }) => defaults(),
    Some(RequestMatch { options: Some(options), extend_defaults: Some(true), .. }) => {
      let (defaults, _) = defaults()?;
      Ok((merge_options(defaults, options.clone()), OptionsSource::Merged))
    }
    Some(RequestMatch { options: Some(options), .. }) => {
      Ok((options.clone(), OptionsSource::User))
    }
  }
}

/// `csso` rewrites the css-only output in place, wherever the css-only plugin writes it.
fn css_compaction_options(css_options: Option<&PluginOptions>) -> PluginOptions {
  match css_options.and_then(|options| options.get("output")).and_then(Value::as_str) {
    Some(output) => json!([format!("csso {output} --output {output}")]),
    None => PluginKind::CssCompaction.default_options(true),
  }
}

struct AssembleContext<'a> {
  requests: &'a [PluginRequest],
  output: AssembledPlugins,
}

impl<'a> AssembleContext<'a> {
  fn new(requests: &'a [PluginRequest]) -> Self {
    Self { requests, output: AssembledPlugins::default() }
  }

  fn check_identifiers(&mut self) {
    for request in self.requests {
      let identifier = request.identifier();
      if PluginKind::from_identifier(identifier).is_none()
        && !PluginKind::is_javascript_identifier(identifier)
      {
        self.report(Diagnostic::UnknownIdentifier { identifier: identifier.to_string() });
      }
    }
  }

  fn report(&mut self, diagnostic: Diagnostic) {
    match diagnostic.severity() {
      Severity::Warning => warn!("{diagnostic}"),
      Severity::Advisory => info!("{diagnostic}"),
    }
    self.output.diagnostics.push(diagnostic);
  }

  fn push(&mut self, plugin: BoxPlugin, resolution: PluginResolution) {
    self.output.plugins.push(plugin);
    self.output.resolutions.push(resolution);
  }

  fn last_options(&self) -> Option<&PluginOptions> {
    self.output.resolutions.last().map(|resolution| &resolution.options)
  }
}

#[test]
fn test_resolve_options() {
  let defaults = json!({ "noEmitOnError": false, "module": "ESNext" });
  let user = json!({ "module": "CommonJS" });
  let builtin = || Ok((defaults.clone(), OptionsSource::Defaults));

  let bare = RequestMatch { index: 0, options: None, extend_defaults: None };
  assert_eq!(
    resolve_options(Some(bare), builtin).unwrap(),
    (defaults.clone(), OptionsSource::Defaults)
  );

  let extending = RequestMatch { index: 0, options: Some(&user), extend_defaults: Some(true) };
  assert_eq!(
    resolve_options(Some(extending), builtin).unwrap(),
    (json!({ "noEmitOnError": false, "module": "CommonJS" }), OptionsSource::Merged)
  );

  for extend_defaults in [None, Some(false)] {
    let replacing = RequestMatch { index: 0, options: Some(&user), extend_defaults };
    assert_eq!(
      resolve_options(Some(replacing), builtin).unwrap(),
      (user.clone(), OptionsSource::User)
    );
  }

  assert_eq!(
    resolve_options(None, || Ok((defaults.clone(), OptionsSource::ConfigFile))).unwrap(),
    (defaults, OptionsSource::ConfigFile)
  );
}

#[test]
fn test_resolve_options_skips_defaults_for_user_options() {
  let user = json!({ "ecma": 2017 });
  let failing = || -> BuildResult<(PluginOptions, OptionsSource)> {
    Err(BuildError::MinifierConfig {
      path: "terser.config.json".into(),
      source: anyhow::anyhow!("unreadable"),
    })
  };

  let replacing = RequestMatch { index: 0, options: Some(&user), extend_defaults: Some(false) };
  assert_eq!(
    resolve_options(Some(replacing), failing).unwrap(),
    (user.clone(), OptionsSource::User)
  );

  let extending = RequestMatch { index: 0, options: Some(&user), extend_defaults: Some(true) };
  assert!(resolve_options(Some(extending), failing).is_err());
}

#[test]
fn test_css_compaction_follows_css_output() {
  assert_eq!(
    css_compaction_options(None),
    json!(["csso dist/bundle.css --output dist/bundle.css"])
  );
  assert_eq!(
    css_compaction_options(Some(&json!({ "output": "public/app.css" }))),
    json!(["csso public/app.css --output public/app.css"])
  );
  assert_eq!(
    css_compaction_options(Some(&json!({ "output": false }))),
    json!(["csso dist/bundle.css --output dist/bundle.css"])
  );
}
