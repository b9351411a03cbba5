use super::*;

/// One entry of the `comics` list. `name`, `dir`, and `pattern` drive
/// generation, everything else is handed to templates untouched.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub(crate) struct Comic {
  pub(crate) name: String,
  pub(crate) dir: Utf8PathBuf,
  pub(crate) pattern: String,
  #[serde(flatten)]
  pub(crate) fields: BTreeMap<String, serde_yaml::Value>,
}

impl Comic {
  pub(crate) const SETTINGS_TEMPLATE: &'static str = "settings.yml.j2";

  pub(crate) const DESCRIPTOR_TEMPLATE: &'static str = "trmnlp.yml.j2";

  pub(crate) fn matches(&self, filter: &str) -> bool {
    self.name.to_lowercase().contains(&filter.to_lowercase())
  }

  pub(crate) fn pattern(&self) -> Result<Pattern> {
    self.pattern.parse().ok().context(error::UnknownPattern {
      comic: &self.name,
      pattern: &self.pattern,
    })
  }

  pub(crate) fn files(&self, renderer: &Renderer) -> Result<FileSet> {
    let mut files = FileSet::default();

    let src = self.dir.join("src");

    files.insert(
      src.join("settings.yml"),
      renderer.render(Self::SETTINGS_TEMPLATE, self)?,
    );

    let layout = renderer.render(Layout::TEMPLATE, self)?;

    for slot in Layout::ALL {
      log::debug!("replicating layout into `{slot}` for `{}`", self.name);
      files.insert(src.join(slot.filename()), layout.clone());
    }

    let pattern = self.pattern()?;

    files.insert(
      src.join("shared.liquid"),
      renderer.render(pattern.template(), self)?,
    );

    // the descriptor sits in the plugin root, not in `src`
    files.insert(
      self.dir.join(".trmnlp.yml"),
      renderer.render(Self::DESCRIPTOR_TEMPLATE, self)?,
    );

    log::info!(
      "built {} files for `{}` with pattern `{pattern}`",
      files.len(),
      self.name
    );

    Ok(files)
  }
}
