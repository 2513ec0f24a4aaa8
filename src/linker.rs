//! Link orchestrator: discover the service worker, then patch the redirect rule.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::{LinkerConfig, MissingRule};
use crate::deploy::redirect::RedirectRule;
use crate::deploy::rule_file::{read_rule_file, write_rule_file};
use crate::discovery::find_service_worker;
use crate::error::{LinkError, LinkResult};
use crate::models::{LinkMode, LinkReport};

/// Links the current build's service worker into the deployment redirect rule.
#[derive(Debug, Clone)]
pub struct AssetLinker {
  config: LinkerConfig,
  root: PathBuf,
}

impl AssetLinker {
  /// Create a linker resolving configured paths against `root`.
  pub fn new(config: LinkerConfig, root: impl Into<PathBuf>) -> Self {
    Self {
      config,
      root: root.into(),
    }
  }

  /// Configuration in effect for this linker.
  pub fn config(&self) -> &LinkerConfig {
    &self.config
  }

  /// Project root paths are resolved against.
  pub fn root(&self) -> &Path {
    &self.root
  }

  /// Run discovery and substitution once.
  ///
  /// Discovery failures abort before the config file is read, so a failed run never leaves a
  /// partially updated rule behind.
  pub fn link(&self, mode: LinkMode) -> LinkResult<LinkReport> {
    let assets_dir = self.config.assets_dir_path(&self.root);
    let pattern = self.config.worker_pattern();
    debug!(dir = %assets_dir.display(), %pattern, "discovering service worker");
    let asset = find_service_worker(&assets_dir, &pattern, self.config.on_multiple)?;

    let config_path = self.config.config_file_path(&self.root);
    debug!(file = %config_path.display(), worker = %asset.file_name, "substituting redirect rule");
    let original = read_rule_file(&config_path)?;
    let rule = RedirectRule::new(&self.config.redirect_base, &pattern);
    let rewrite = rule.rewrite(&original, &asset.file_name);

    if rewrite.matches == 0 {
      match self.config.on_missing_rule {
        MissingRule::Fail => {
          return Err(LinkError::RuleNotFound {
            path: config_path,
            base: rule.base().to_string(),
          });
        }
        MissingRule::Ignore => warn!(
          "no redirect rule found in {}; leaving it unchanged",
          config_path.display()
        ),
      }
    } else if rewrite.matches > 1 {
      warn!(
        "{} redirect rules found in {}; only the first was updated",
        rewrite.matches,
        config_path.display()
      );
    }

    let written = match mode {
      LinkMode::Write => {
        write_rule_file(&config_path, &rewrite.contents)?;
        true
      }
      LinkMode::DryRun => false,
      LinkMode::Check => {
        if rewrite.matches > 0 && rewrite.changed {
          return Err(LinkError::OutOfDate {
            path: config_path,
            current: rewrite.previous,
            expected: asset.file_name,
          });
        }
        false
      }
    };

    let report = LinkReport {
      config_path,
      file_name: asset.file_name,
      previous: rewrite.previous,
      matches: rewrite.matches,
      changed: rewrite.changed,
      written,
    };
    log_report(mode, &report);
    Ok(report)
  }
}

fn log_report(mode: LinkMode, report: &LinkReport) {
  let file = report.config_path.display();
  match mode {
    LinkMode::Write => info!("updated {file} with {}", report.file_name),
    LinkMode::DryRun if report.changed => info!(
      "would update {file}: {} -> {}",
      report.previous.as_deref().unwrap_or("?"),
      report.file_name
    ),
    LinkMode::DryRun => info!("{file} already points at {}", report.file_name),
    LinkMode::Check => info!("{file} is up to date with {}", report.file_name),
  }
}
