use std::fs;
use std::path::Path;

use super::WorkerPattern;
use crate::config::TieBreak;
use crate::error::{LinkError, LinkResult};

/// Service worker chosen from the build output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerAsset {
    /// File name of the selected service worker.
    pub file_name: String,
    /// Every matching file name, sorted.
    pub candidates: Vec<String>,
}

/// Scan `dir` for the service worker and apply the tie-break policy.
///
/// Candidates are sorted before selection so the outcome never depends on directory
/// enumeration order. Directories and names that are not valid UTF-8 are skipped.
pub fn find_service_worker(
    dir: &Path,
    pattern: &WorkerPattern,
    policy: TieBreak,
) -> LinkResult<WorkerAsset> {
    let entries = fs::read_dir(dir).map_err(|source| LinkError::AssetDirRead {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| LinkError::AssetDirRead {
            path: dir.to_path_buf(),
            source,
        })?;
        if entry.file_type().is_ok_and(|kind| kind.is_dir()) {
            continue;
        }
        let Ok(name) = entry.file_name().into_string() else {
            tracing::debug!(dir = %dir.display(), "skipping non UTF-8 entry");
            continue;
        };
        if !pattern.matches(&name) {
            continue;
        }
        if !is_quotable(&name) {
            tracing::debug!(dir = %dir.display(), ?name, "skipping name that cannot be quoted");
            continue;
        }
        candidates.push(name);
    }
    candidates.sort();

    let file_name = select_candidate(&candidates, policy)
        .ok_or_else(|| {
            if candidates.is_empty() {
                LinkError::AssetNotFound {
                    dir: dir.to_path_buf(),
                    pattern: pattern.to_string(),
                }
            } else {
                LinkError::AmbiguousAsset {
                    dir: dir.to_path_buf(),
                    candidates: candidates.clone(),
                }
            }
        })?
        .to_string();

    if candidates.len() > 1 {
        tracing::warn!(
            chosen = %file_name,
            "found {} service workers in {}",
            candidates.len(),
            dir.display()
        );
    }

    Ok(WorkerAsset {
        file_name,
        candidates,
    })
}

/// Names spliced into the quoted redirect target must not end the string or the line.
fn is_quotable(name: &str) -> bool {
    !name.contains(['"', '\r', '\n'])
}

/// Pick one entry from a sorted candidate list.
///
/// Returns `None` when the list is empty or when `policy` is [`TieBreak::Fail`] and there is
/// more than one candidate.
pub fn select_candidate(sorted: &[String], policy: TieBreak) -> Option<&str> {
    match (sorted, policy) {
        ([], _) => None,
        ([only], _) => Some(only.as_str()),
        (_, TieBreak::Fail) => None,
        ([first, ..], TieBreak::First) => Some(first.as_str()),
        ([.., last], TieBreak::Last) => Some(last.as_str()),
    }
}
