//! Linker configuration describing where build output and deployment rules live.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::discovery::WorkerPattern;
use crate::error::{LinkError, LinkResult};

/// File name searched for in the project root by [`LinkerConfig::discover`].
pub const DEFAULT_CONFIG_FILE: &str = "sw-link.config.json";

/// How to choose when several files follow the service-worker naming convention.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
  /// Lexicographically first candidate.
  #[default]
  First,
  /// Lexicographically last candidate.
  Last,
  /// Refuse to pick and report every candidate.
  Fail,
}

/// What to do when the deployment config carries no redirect rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MissingRule {
  /// Abort without touching the config file.
  #[default]
  Fail,
  /// Rewrite the file unchanged and report success.
  Ignore,
}

/// Discoverable configuration for a link run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LinkerConfig {
  /// Directory the build writes hashed assets into, relative to the project root.
  pub assets_dir: String,
  /// Deployment config holding the redirect rule, relative to the project root.
  pub config_file: String,
  /// File name prefix of the generated service worker.
  pub worker_prefix: String,
  /// File name extension of the generated service worker.
  pub worker_extension: String,
  /// URL prefix the redirect rule target starts with.
  pub redirect_base: String,
  /// Tie-break applied when several service workers are present.
  pub on_multiple: TieBreak,
  /// Behaviour when the redirect rule is absent.
  pub on_missing_rule: MissingRule,
}

impl Default for LinkerConfig {
  fn default() -> Self {
    Self {
      assets_dir: "dist/assets".into(),
      config_file: "netlify.toml".into(),
      worker_prefix: "sw-".into(),
      worker_extension: ".js".into(),
      redirect_base: "/assets/".into(),
      on_multiple: TieBreak::default(),
      on_missing_rule: MissingRule::default(),
    }
  }
}

impl LinkerConfig {
  /// Attempt to load configuration from the provided project root.
  ///
  /// Only a missing file falls back to defaults. An unreadable, malformed or invalid file is an
  /// error.
  pub fn discover(root: &Path) -> LinkResult<Self> {
    let candidate = root.join(DEFAULT_CONFIG_FILE);
    match fs::read_to_string(&candidate) {
      Ok(content) => Self::parse(&candidate, &content),
      Err(err) if err.kind() == ErrorKind::NotFound => Ok(Self::default()),
      Err(err) => Err(LinkError::InvalidConfig {
        path: candidate,
        reason: err.to_string(),
      }),
    }
  }

  /// Read configuration from a specific JSON file.
  pub fn load(path: &Path) -> LinkResult<Self> {
    let content = fs::read_to_string(path).map_err(|err| LinkError::InvalidConfig {
      path: path.to_path_buf(),
      reason: err.to_string(),
    })?;
    Self::parse(path, &content)
  }

  fn parse(path: &Path, content: &str) -> LinkResult<Self> {
    let config: Self = serde_json::from_str(content).map_err(|err| LinkError::InvalidConfig {
      path: path.to_path_buf(),
      reason: err.to_string(),
    })?;
    config.validate(path)?;
    Ok(config)
  }

  fn validate(&self, path: &Path) -> LinkResult<()> {
    let reason = if self.worker_prefix.is_empty() {
      "`worker_prefix` must not be empty"
    } else if self.worker_extension.is_empty() {
      "`worker_extension` must not be empty"
    } else if self.worker_prefix.contains('"') || self.worker_extension.contains('"') {
      "service worker naming must not contain quotes"
    } else {
      return Ok(());
    };
    Err(LinkError::InvalidConfig {
      path: path.to_path_buf(),
      reason: reason.into(),
    })
  }
}

impl LinkerConfig {
  /// Asset directory resolved against the project root.
  pub fn assets_dir_path(&self, root: &Path) -> PathBuf {
    root.join(&self.assets_dir)
  }

  /// Deployment config path resolved against the project root.
  pub fn config_file_path(&self, root: &Path) -> PathBuf {
    root.join(&self.config_file)
  }

  /// Naming convention used to recognise the service worker.
  pub fn worker_pattern(&self) -> WorkerPattern {
    WorkerPattern::new(&self.worker_prefix, &self.worker_extension)
  }
}
