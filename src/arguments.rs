use {
  super::*,
  clap::builder::{
    styling::{AnsiColor, Effects},
    Styles,
  },
};

#[derive(Parser)]
#[command(
  version,
  about = "Generate comic plugin files from a single config.",
  styles = Styles::styled()
    .header(AnsiColor::Green.on_default() | Effects::BOLD)
    .usage(AnsiColor::Green.on_default() | Effects::BOLD)
    .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
    .placeholder(AnsiColor::Cyan.on_default()))
]
pub(crate) struct Arguments {
  #[arg(help = "Only generate comics whose name contains <FILTER>, ignoring case.")]
  pub(crate) filter: Option<String>,
  #[arg(long, help = "Verify generated files are up to date without writing them.")]
  pub(crate) check: bool,
  #[arg(
    long,
    default_value = ".",
    help = "Write generated files relative to <ROOT>."
  )]
  pub(crate) root: Utf8PathBuf,
  #[arg(long, help = "Load comics from <CONFIG>. [default: <ROOT>/_generator/comics.yml]")]
  pub(crate) config: Option<Utf8PathBuf>,
  #[arg(
    long,
    help = "Load templates from <TEMPLATES>. [default: <ROOT>/_generator/templates]"
  )]
  pub(crate) templates: Option<Utf8PathBuf>,
}

impl Arguments {
  const TEMPLATES: &'static str = "_generator/templates";

  pub(crate) fn run(self) -> Result {
    let config = Config::load(
      &self
        .config
        .clone()
        .unwrap_or_else(|| self.root.join(Config::PATH)),
    )?;

    let renderer = Renderer::new(
      &self
        .templates
        .clone()
        .unwrap_or_else(|| self.root.join(Self::TEMPLATES)),
    )?;

    let comics = self.select(config.comics)?;

    let mut files = FileSet::default();

    for comic in &comics {
      files.extend(comic.files(&renderer)?);
    }

    if self.check {
      let mismatches = files.check(&self.root)?;

      if !mismatches.is_empty() {
        println!("Files out of sync with generator:");

        for mismatch in &mismatches {
          println!("  {mismatch}");
        }

        return error::OutOfSync {
          count: mismatches.len(),
        }
        .fail();
      }

      println!("All {} files are in sync.", files.len());
    } else {
      let count = files.write(&self.root)?;

      println!("Generated {count} files for {} comic(s).", comics.len());
    }

    Ok(())
  }

  fn select(&self, comics: Vec<Comic>) -> Result<Vec<Comic>> {
    let Some(filter) = self.filter.as_deref().filter(|filter| !filter.is_empty()) else {
      return Ok(comics);
    };

    let selected = comics
      .into_iter()
      .filter(|comic| comic.matches(filter))
      .collect::<Vec<Comic>>();

    ensure!(!selected.is_empty(), error::NoMatches { filter });

    for comic in &selected {
      log::info!("selected `{}`", comic.name);
    }

    Ok(selected)
  }
}
