use super::*;

#[derive(Debug, Deserialize)]
pub(crate) struct Config {
  pub(crate) comics: Vec<Comic>,
}

impl Config {
  pub(crate) const PATH: &'static str = "_generator/comics.yml";

  pub(crate) fn load(path: &Utf8Path) -> Result<Self> {
    let yaml = fs::read_to_string(path).context(error::Io { path })?;

    let config = serde_yaml::from_str::<Self>(&yaml).context(error::ConfigDeserialize { path })?;

    log::info!("loaded {} comics from `{path}`", config.comics.len());

    Ok(config)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn load() {
    let tempdir = tempdir();
    let path = tempdir.path_utf8().join("comics.yml");

    fs::write(
      &path,
      "
comics:
- name: Pickles
  dir: pickles
  pattern: title
- name: Garfield
  dir: garfield
  pattern: panels
  slug: garfield
",
    )
    .unwrap();

    let config = Config::load(&path).unwrap();

    assert_eq!(
      config
        .comics
        .iter()
        .map(|comic| comic.name.as_str())
        .collect::<Vec<&str>>(),
      ["Pickles", "Garfield"],
    );

    assert_eq!(
      config.comics[1].fields.get("slug"),
      Some(&serde_yaml::Value::from("garfield")),
    );
  }

  #[test]
  fn sample() {
    let config = Config::load(Utf8Path::new(Config::PATH)).unwrap();

    assert!(!config.comics.is_empty());

    for comic in config.comics {
      comic.pattern().unwrap();
    }
  }

  #[test]
  fn missing_file() {
    let tempdir = tempdir();

    assert_matches!(
      Config::load(&tempdir.path_utf8().join("comics.yml")),
      Err(Error::Io { .. }),
    );
  }

  #[test]
  fn missing_key() {
    let tempdir = tempdir();
    let path = tempdir.path_utf8().join("comics.yml");

    fs::write(&path, "plugins: []\n").unwrap();

    assert_matches!(Config::load(&path), Err(Error::ConfigDeserialize { .. }));
  }

  #[test]
  fn malformed() {
    let tempdir = tempdir();
    let path = tempdir.path_utf8().join("comics.yml");

    fs::write(&path, "comics: [\n").unwrap();

    assert_matches!(Config::load(&path), Err(Error::ConfigDeserialize { .. }));
  }
}
