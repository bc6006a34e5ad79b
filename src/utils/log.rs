//! Logging setup

use std::sync::Once;

static INIT: Once = Once::new();

/// Install the `env_logger` backend. `RUST_LOG` takes precedence over the
/// default level (`info`, or `warn` when quiet). Safe to call more than once.
pub fn init_log(quiet: bool) {
  INIT.call_once(|| {
    let default_level = if quiet { "warn" } else { "info" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
      .format_timestamp(None)
      .try_init();
  });
}

/// Lower the maximum level after init, used when quiet mode comes from a
/// config file rather than the command line.
pub fn set_quiet(quiet: bool) {
  if quiet && ::log::max_level() > ::log::LevelFilter::Warn {
    ::log::set_max_level(::log::LevelFilter::Warn);
  }
}
