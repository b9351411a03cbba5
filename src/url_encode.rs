/// Percent-encode `raw` for use as a single URL path segment.
///
/// Only ASCII alphanumerics and `-._~` are left alone, so `/` is escaped and
/// spaces become `%20` rather than `+`.
pub(crate) fn url_encode(raw: &str) -> String {
  urlencoding::encode(raw).into_owned()
}
