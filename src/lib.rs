#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod deploy;
pub mod discovery;
pub mod error;
pub mod linker;
pub mod logging;
pub mod models;

pub use config::{LinkerConfig, MissingRule, TieBreak};
pub use error::{LinkError, LinkResult};
pub use linker::AssetLinker;
pub use models::{LinkMode, LinkReport};
