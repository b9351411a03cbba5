use super::*;

/// Rendered files keyed by path relative to the repository root, in the
/// order they were inserted.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct FileSet {
  files: Vec<(Utf8PathBuf, String)>,
  index: HashMap<Utf8PathBuf, usize>,
}

impl FileSet {
  /// Add a file, replacing the content of an earlier file with the same path
  /// while keeping its position.
  pub(crate) fn insert(&mut self, path: Utf8PathBuf, content: String) {
    if let Some(&i) = self.index.get(&path) {
      log::warn!("`{path}` generated more than once, keeping last");
      self.files[i].1 = content;
    } else {
      self.index.insert(path.clone(), self.files.len());
      self.files.push((path, content));
    }
  }

  pub(crate) fn extend(&mut self, other: FileSet) {
    for (path, content) in other.files {
      self.insert(path, content);
    }
  }

  #[cfg(test)]
  pub(crate) fn get(&self, path: &Utf8Path) -> Option<&str> {
    self
      .index
      .get(path)
      .map(|&i| self.files[i].1.as_str())
  }

  pub(crate) fn len(&self) -> usize {
    self.files.len()
  }

  #[cfg(test)]
  pub(crate) fn paths(&self) -> impl Iterator<Item = &Utf8Path> {
    self.files.iter().map(|(path, _content)| path.as_path())
  }

  pub(crate) fn write(&self, root: &Utf8Path) -> Result<usize> {
    for (relative, content) in &self.files {
      let path = root.join(relative);

      if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).context(error::Io { path: parent })?;
      }

      fs::write(&path, content).context(error::Io { path: &path })?;

      log::debug!("wrote `{path}`");
    }

    Ok(self.files.len())
  }

  pub(crate) fn check(&self, root: &Utf8Path) -> Result<Vec<Mismatch>> {
    let mut mismatches = Vec::new();

    for (relative, expected) in &self.files {
      let path = root.join(relative);

      match fs::read(&path) {
        Ok(actual) => {
          if actual != expected.as_bytes() {
            log::debug!("`{path}` differs");
            mismatches.push(Mismatch::Differs {
              path: relative.clone(),
            });
          }
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
          log::debug!("`{path}` missing");
          mismatches.push(Mismatch::Missing {
            path: relative.clone(),
          });
        }
        Err(err) => return Err(err).context(error::Io { path }),
      }
    }

    Ok(mismatches)
  }
}
