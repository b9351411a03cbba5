use {
  super::*,
  strum::{EnumIter, EnumString, IntoStaticStr, VariantNames},
};

/// How a comic's shared body is laid out. The set is closed: a configuration
/// naming any other pattern is rejected.
#[derive(Copy, Clone, Debug, EnumIter, EnumString, IntoStaticStr, PartialEq, VariantNames)]
#[strum(serialize_all = "snake_case")]
pub(crate) enum Pattern {
  /// Strip image with the comic's title above it.
  Title,
  /// Strip image with a caption line below it.
  Caption,
  /// Strip image only, panels filling the screen.
  Panels,
}

impl Pattern {
  pub(crate) fn names() -> &'static [&'static str] {
    Self::VARIANTS
  }

  pub(crate) fn template(self) -> &'static str {
    match self {
      Self::Title => "shared_title.liquid.j2",
      Self::Caption => "shared_caption.liquid.j2",
      Self::Panels => "shared_panels.liquid.j2",
    }
  }
}

impl Display for Pattern {
  fn fmt(&self, f: &mut Formatter) -> fmt::Result {
    write!(f, "{}", <&'static str>::from(self))
  }
}

#[cfg(test)]
mod tests {
  use {super::*, std::collections::HashSet, strum::IntoEnumIterator};

  #[test]
  fn parse() {
    assert_eq!("title".parse::<Pattern>().unwrap(), Pattern::Title);
    assert_eq!("caption".parse::<Pattern>().unwrap(), Pattern::Caption);
    assert_eq!("panels".parse::<Pattern>().unwrap(), Pattern::Panels);
  }

  #[test]
  fn unknown_patterns_are_rejected() {
    assert!("strip".parse::<Pattern>().is_err());
    assert!("Title".parse::<Pattern>().is_err());
    assert!("".parse::<Pattern>().is_err());
  }

  #[test]
  fn templates_are_distinct() {
    let templates = Pattern::iter()
      .map(Pattern::template)
      .collect::<HashSet<&str>>();

    assert_eq!(templates.len(), Pattern::names().len());
  }

  #[test]
  fn display_round_trips() {
    for pattern in Pattern::iter() {
      assert_eq!(pattern.to_string().parse::<Pattern>().unwrap(), pattern);
    }
  }

  #[test]
  fn templates_exist() {
    for pattern in Pattern::iter() {
      assert!(
        Utf8Path::new("_generator/templates")
          .join(pattern.template())
          .is_file(),
        "missing template for pattern `{pattern}`",
      );
    }
  }
}
