use super::*;

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Mismatch {
  Differs { path: Utf8PathBuf },
  Missing { path: Utf8PathBuf },
}

impl Display for Mismatch {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    match self {
      Self::Differs { path } => write!(f, "{path}"),
      Self::Missing { path } => write!(f, "{path} (missing)"),
    }
  }
}
