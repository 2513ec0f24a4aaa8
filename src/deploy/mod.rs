//! Helpers for patching the hosting platform's deployment config after a build.

pub mod redirect;
pub mod rule_file;
