//! Reading and writing the deployment config that carries the redirect rule.

use std::fs;
use std::path::Path;

use crate::error::{LinkError, LinkResult};

/// Read the full config file as raw bytes.
pub fn read_rule_file(path: &Path) -> LinkResult<Vec<u8>> {
  fs::read(path).map_err(|source| LinkError::ConfigRead {
    path: path.to_path_buf(),
    source,
  })
}

/// Overwrite the config file with `contents` in full.
pub fn write_rule_file(path: &Path, contents: &[u8]) -> LinkResult<()> {
  fs::write(path, contents).map_err(|source| LinkError::ConfigWrite {
    path: path.to_path_buf(),
    source,
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn round_trips_raw_bytes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("netlify.toml");
    write_rule_file(&path, b"to = \"/assets/sw-a.js\"\r\n\xfe").unwrap();
    assert_eq!(read_rule_file(&path).unwrap(), b"to = \"/assets/sw-a.js\"\r\n\xfe");
  }

  #[test]
  fn missing_file_is_a_read_error() {
    let dir = tempdir().unwrap();
    let err = read_rule_file(&dir.path().join("netlify.toml")).unwrap_err();
    assert!(matches!(err, LinkError::ConfigRead { .. }));
  }

  #[test]
  fn writing_into_missing_directory_is_a_write_error() {
    let dir = tempdir().unwrap();
    let err = write_rule_file(&dir.path().join("missing/netlify.toml"), b"").unwrap_err();
    assert!(matches!(err, LinkError::ConfigWrite { .. }));
  }
}
