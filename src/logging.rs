//! Console logging for the `sw-link` binary.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Map `-v`/`-q` counts onto a default filter directive.
pub fn default_directive(verbose: u8, quiet: bool) -> &'static str {
  if quiet {
    return "error";
  }
  match verbose {
    0 => "info",
    1 => "debug",
    _ => "trace",
  }
}

/// Install a stderr subscriber. `RUST_LOG` takes precedence over the flag-derived level.
pub fn init_logging(verbose: u8, quiet: bool) {
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

  let stderr_layer = fmt::layer()
    .with_writer(std::io::stderr)
    .with_target(false)
    .without_time();

  tracing_subscriber::registry()
    .with(filter)
    .with(stderr_layer)
    .init();
}
