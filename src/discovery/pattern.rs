use std::fmt;

/// Naming convention of the generated service worker: a literal prefix and extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerPattern {
    prefix: String,
    extension: String,
}

impl WorkerPattern {
    /// Build a pattern from a file name prefix and extension such as `sw-` and `.js`.
    pub fn new(prefix: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            extension: extension.into(),
        }
    }

    /// Returns `true` when the file name starts with the prefix and ends with the extension.
    pub fn matches(&self, file_name: &str) -> bool {
        file_name.starts_with(&self.prefix) && file_name.ends_with(&self.extension)
    }

    /// Literal file name prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Literal file name extension.
    pub fn extension(&self) -> &str {
        &self.extension
    }
}

impl fmt::Display for WorkerPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "`{}*{}`", self.prefix, self.extension)
    }
}

#[cfg(test)]
mod tests {
    use super::WorkerPattern;

    fn pattern() -> WorkerPattern {
        WorkerPattern::new("sw-", ".js")
    }

    #[test]
    fn matches_hashed_worker_names() {
        assert!(pattern().matches("sw-3f9a1c.js"));
        assert!(pattern().matches("sw-.js"));
    }

    #[test]
    fn rejects_other_bundles_and_extensions() {
        let pattern = pattern();
        assert!(!pattern.matches("main-abc123.js"));
        assert!(!pattern.matches("sw-legacy.css"));
        assert!(!pattern.matches("sw-abc.js.map"));
        assert!(!pattern.matches("assets-sw-abc.js"));
    }

    #[test]
    fn displays_as_glob() {
        assert_eq!(pattern().to_string(), "`sw-*.js`");
    }
}
