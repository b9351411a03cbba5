use super::*;

/// Screen slots a plugin must provide a template for.
///
/// Every slot currently receives the same rendered layout. They are still
/// emitted as separate files because the plugin format looks each one up by
/// name, so a comic needing a slot-specific layout only has to change what
/// is rendered for that slot.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Layout {
  Full,
  HalfHorizontal,
  HalfVertical,
  Quadrant,
}

impl Layout {
  pub(crate) const ALL: [Self; 4] = [
    Self::Full,
    Self::HalfHorizontal,
    Self::HalfVertical,
    Self::Quadrant,
  ];

  pub(crate) const TEMPLATE: &'static str = "layout.liquid.j2";

  pub(crate) fn filename(self) -> &'static str {
    match self {
      Self::Full => "full.liquid",
      Self::HalfHorizontal => "half_horizontal.liquid",
      Self::HalfVertical => "half_vertical.liquid",
      Self::Quadrant => "quadrant.liquid",
    }
  }
}

impl Display for Layout {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", self.filename())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display() {
    assert_eq!(Layout::HalfVertical.to_string(), "half_vertical.liquid");
  }

  #[test]
  fn filenames() {
    assert_eq!(
      Layout::ALL.map(Layout::filename),
      [
        "full.liquid",
        "half_horizontal.liquid",
        "half_vertical.liquid",
        "quadrant.liquid",
      ],
    );
  }
}
