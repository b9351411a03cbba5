use {
  super::*,
  minijinja::{context, syntax::SyntaxConfig, AutoEscape, Environment, ErrorKind, Value},
};

/// Renders templates from a directory.
///
/// Directives use `<% %>`, `<< >>`, and `<# #>` so that the Liquid syntax of
/// the generated files, `{% %}` and `{{ }}`, passes through as literal text.
pub(crate) struct Renderer {
  environment: Environment<'static>,
}

impl Renderer {
  pub(crate) fn new(templates: &Utf8Path) -> Result<Self> {
    let mut environment = Environment::new();

    environment.set_syntax(
      SyntaxConfig::builder()
        .block_delimiters("<%", "%>")
        .variable_delimiters("<<", ">>")
        .comment_delimiters("<#", "#>")
        .build()
        .context(error::Syntax)?,
    );

    environment.set_auto_escape_callback(|_name| AutoEscape::None);

    // generated files must be byte-for-byte stable across runs
    environment.set_keep_trailing_newline(true);

    environment.set_loader(minijinja::path_loader(templates));

    environment.add_filter("urlencode", |value: Value| url_encode(&value.to_string()));

    log::debug!("loading templates from `{templates}`");

    Ok(Self { environment })
  }

  pub(crate) fn render(&self, name: &str, comic: &Comic) -> Result<String> {
    let template = self.environment.get_template(name).map_err(|source| {
      if source.kind() == ErrorKind::TemplateNotFound {
        error::TemplateNotFound { name }.into_error(source)
      } else {
        error::Render { name }.into_error(source)
      }
    })?;

    log::debug!("rendering `{name}` for `{}`", comic.name);

    template
      .render(context! { comic })
      .context(error::Render { name })
  }
}
