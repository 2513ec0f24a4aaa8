//! Data structures describing a link run and its outcome.

use std::path::PathBuf;

/// How a link run treats the deployment config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkMode {
  /// Overwrite the config file with the updated rule.
  #[default]
  Write,
  /// Compute the update and log it without writing.
  DryRun,
  /// Fail unless the rule already points at the current service worker.
  Check,
}

/// Summary of a completed link run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkReport {
  /// Deployment config that was inspected.
  pub config_path: PathBuf,
  /// Service worker file name taken from the build output.
  pub file_name: String,
  /// File name the redirect rule referenced before the run.
  pub previous: Option<String>,
  /// Number of redirect rules found in the config.
  pub matches: usize,
  /// Whether the rule target differs from what was on disk.
  pub changed: bool,
  /// Whether the config file was written.
  pub written: bool,
}
