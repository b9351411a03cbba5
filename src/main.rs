#![allow(clippy::result_large_err)]

use {
  self::{
    arguments::Arguments, comic::Comic, config::Config, error::Error, file_set::FileSet,
    layout::Layout, mismatch::Mismatch, pattern::Pattern, renderer::Renderer,
    url_encode::url_encode,
  },
  camino::{Utf8Path, Utf8PathBuf},
  clap::Parser,
  libc::EXIT_FAILURE,
  serde::{Deserialize, Serialize},
  snafu::{ensure, ErrorCompat, IntoError, OptionExt, ResultExt, Snafu},
  std::{
    backtrace::{Backtrace, BacktraceStatus},
    collections::{BTreeMap, HashMap},
    fmt::{self, Display, Formatter},
    fs, io, process,
  },
};


#[cfg(test)]
use test::*;

mod arguments;
mod comic;
mod config;
mod error;
mod file_set;
mod layout;
mod mismatch;
mod pattern;
mod renderer;
mod url_encode;

type Result<T = (), E = Error> = std::result::Result<T, E>;

fn main() {
  env_logger::init();

  if let Err(err) = Arguments::parse().run() {
    err.report();
    process::exit(EXIT_FAILURE)
  }
}
