//! Failure modes of a link run.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while linking the service worker into the deployment config.
#[derive(Debug, Error)]
pub enum LinkError {
  /// No file in the asset directory follows the service-worker naming convention.
  #[error("no service worker matching {pattern} found in {}", .dir.display())]
  AssetNotFound {
    /// Directory that was scanned.
    dir: PathBuf,
    /// Human readable form of the naming convention.
    pattern: String,
  },
  /// More than one candidate matched and the tie-break policy refuses to choose.
  #[error("multiple service workers found in {}: {}", .dir.display(), .candidates.join(", "))]
  AmbiguousAsset {
    /// Directory that was scanned.
    dir: PathBuf,
    /// Sorted candidate file names.
    candidates: Vec<String>,
  },
  /// The asset directory could not be listed.
  #[error("failed to read asset directory {}", .path.display())]
  AssetDirRead {
    /// Directory that failed to list.
    path: PathBuf,
    /// Source I/O error.
    #[source]
    source: std::io::Error,
  },
  /// The deployment config could not be read.
  #[error("failed to read {}", .path.display())]
  ConfigRead {
    /// Config file path.
    path: PathBuf,
    /// Source I/O error.
    #[source]
    source: std::io::Error,
  },
  /// The deployment config could not be written back.
  #[error("failed to write {}", .path.display())]
  ConfigWrite {
    /// Config file path.
    path: PathBuf,
    /// Source I/O error.
    #[source]
    source: std::io::Error,
  },
  /// The deployment config has no redirect rule to update.
  #[error("no redirect rule `to = \"{base}...\"` found in {}", .path.display())]
  RuleNotFound {
    /// Config file path.
    path: PathBuf,
    /// Redirect base the rule was expected to start with.
    base: String,
  },
  /// Check mode found the redirect rule pointing somewhere else.
  #[error(
    "{} points at {}, expected {expected}",
    .path.display(),
    .current.as_deref().unwrap_or("nothing")
  )]
  OutOfDate {
    /// Config file path.
    path: PathBuf,
    /// File name the rule currently references.
    current: Option<String>,
    /// File name discovered in the build output.
    expected: String,
  },
  /// The linker configuration file is unreadable or malformed.
  #[error("invalid linker configuration {}: {reason}", .path.display())]
  InvalidConfig {
    /// Configuration file path.
    path: PathBuf,
    /// Description of the problem.
    reason: String,
  },
}

impl LinkError {
  /// Process exit code reported for this failure.
  pub fn exit_code(&self) -> u8 {
    1
  }
}

/// Result alias used throughout the crate.
pub type LinkResult<T> = Result<T, LinkError>;
