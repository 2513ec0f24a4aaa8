//! `sw-link`: point the deployment redirect rule at the freshly built service worker.
//!
//! Usage: sw-link [--root DIR] [--config FILE] [--dry-run | --check]

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use sw_asset_linker::logging::init_logging;
use sw_asset_linker::{AssetLinker, LinkError, LinkMode, LinkerConfig, MissingRule, TieBreak};

/// Rewrite the service-worker redirect rule after a static build
#[derive(Parser, Debug)]
#[command(name = "sw-link")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Project root that relative paths are resolved against
  #[arg(long, default_value = ".")]
  root: PathBuf,

  /// Linker configuration JSON (defaults to `sw-link.config.json` in the root when present)
  #[arg(long)]
  config: Option<PathBuf>,

  /// Build asset output directory
  #[arg(long)]
  assets_dir: Option<String>,

  /// Deployment config holding the redirect rule
  #[arg(long)]
  config_file: Option<String>,

  /// Service worker file name prefix
  #[arg(long, value_parser = clap::builder::NonEmptyStringValueParser::new())]
  prefix: Option<String>,

  /// Service worker file name extension
  #[arg(long, value_parser = clap::builder::NonEmptyStringValueParser::new())]
  extension: Option<String>,

  /// Redirect target URL prefix
  #[arg(long)]
  redirect_base: Option<String>,

  /// Tie-break when several service workers are present
  #[arg(long, value_enum)]
  on_multiple: Option<TieBreak>,

  /// Behaviour when the deployment config has no redirect rule
  #[arg(long, value_enum)]
  on_missing_rule: Option<MissingRule>,

  /// Show what would change without writing
  #[arg(long, conflicts_with = "check")]
  dry_run: bool,

  /// Fail if the redirect rule is not already up to date
  #[arg(long)]
  check: bool,

  /// Verbosity level (-v, -vv)
  #[arg(short, long, action = clap::ArgAction::Count)]
  verbose: u8,

  /// Only report errors
  #[arg(short, long)]
  quiet: bool,
}

impl Cli {
  fn mode(&self) -> LinkMode {
    if self.check {
      LinkMode::Check
    } else if self.dry_run {
      LinkMode::DryRun
    } else {
      LinkMode::Write
    }
  }

  fn resolve_config(&self) -> Result<LinkerConfig> {
    let mut config = match &self.config {
      Some(path) => LinkerConfig::load(path)?,
      None => LinkerConfig::discover(&self.root)?,
    };

    if let Some(value) = &self.assets_dir {
      config.assets_dir = value.clone();
    }
    if let Some(value) = &self.config_file {
      config.config_file = value.clone();
    }
    if let Some(value) = &self.prefix {
      config.worker_prefix = value.clone();
    }
    if let Some(value) = &self.extension {
      config.worker_extension = value.clone();
    }
    if let Some(value) = &self.redirect_base {
      config.redirect_base = value.clone();
    }
    if let Some(value) = self.on_multiple {
      config.on_multiple = value;
    }
    if let Some(value) = self.on_missing_rule {
      config.on_missing_rule = value;
    }
    Ok(config)
  }
}

fn run(cli: &Cli) -> Result<()> {
  let config = cli.resolve_config()?;
  AssetLinker::new(config, &cli.root).link(cli.mode())?;
  Ok(())
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  init_logging(cli.verbose, cli.quiet);

  match run(&cli) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      tracing::error!("{err:#}");
      let code = err
        .downcast_ref::<LinkError>()
        .map_or(1, LinkError::exit_code);
      ExitCode::from(code)
    }
  }
}
