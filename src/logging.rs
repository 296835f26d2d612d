use env_logger::{Builder, Env};
use log::LevelFilter;

/// Logger for the binary: `warn` unless `RUST_LOG` says otherwise, and
/// `--verbose` always adds debug output for this crate on top of `env`.
#[must_use]
pub fn builder(env: Env<'_>, verbose: bool) -> Builder {
  let mut builder = Builder::from_env(env.default_filter_or("warn"));
  builder.format_timestamp(None);
  if verbose {
    builder.filter_module("iplocate", LevelFilter::Debug);
  }
  builder
}
