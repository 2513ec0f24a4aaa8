//! Locating the content-hashed service worker inside the build output.
//!
//! Name matching and directory scanning live in separate submodules so the naming rules can be
//! tested without touching the filesystem.

mod pattern;
mod scan;

pub use pattern::WorkerPattern;
pub use scan::{WorkerAsset, find_service_worker, select_candidate};
