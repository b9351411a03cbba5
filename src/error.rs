use super::*;

#[derive(Debug, Snafu)]
#[snafu(context(suffix(false)), visibility(pub(crate)))]
pub(crate) enum Error {
  #[snafu(display("failed to deserialize YAML config at `{path}`"))]
  ConfigDeserialize {
    backtrace: Option<Backtrace>,
    path: Utf8PathBuf,
    source: serde_yaml::Error,
  },
  #[snafu(display("I/O error at `{path}`"))]
  Io {
    backtrace: Option<Backtrace>,
    path: Utf8PathBuf,
    source: io::Error,
  },
  #[snafu(display("no comics matching `{filter}`"))]
  NoMatches {
    backtrace: Option<Backtrace>,
    filter: String,
  },
  #[snafu(display("{count} files out of sync with generator"))]
  OutOfSync {
    backtrace: Option<Backtrace>,
    count: usize,
  },
  #[snafu(display("failed to render template `{name}`"))]
  Render {
    backtrace: Option<Backtrace>,
    name: String,
    source: minijinja::Error,
  },
  #[snafu(display("invalid template delimiter configuration"))]
  Syntax {
    backtrace: Option<Backtrace>,
    source: minijinja::Error,
  },
  #[snafu(display("template `{name}` not found"))]
  TemplateNotFound {
    backtrace: Option<Backtrace>,
    name: String,
    source: minijinja::Error,
  },
  #[snafu(display(
    "unknown pattern `{pattern}` for comic `{comic}`, expected one of: {}",
    Pattern::names().join(", ")
  ))]
  UnknownPattern {
    backtrace: Option<Backtrace>,
    comic: String,
    pattern: String,
  },
}

impl Error {
  pub(crate) fn report(&self) {
    eprintln!("error: {self}");

    for (i, err) in self.iter_chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();
        eprintln!("because:");
      }

      eprintln!("- {err}");
    }

    if let Some(backtrace) = self.backtrace() {
      if backtrace.status() == BacktraceStatus::Captured {
        eprintln!();
        eprintln!("backtrace:");
        eprintln!("{backtrace}");
      }
    }
  }
}
