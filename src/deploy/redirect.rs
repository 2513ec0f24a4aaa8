//! Substitution of the service-worker target inside a static redirect rule.

use regex::bytes::Regex;

use crate::discovery::WorkerPattern;

/// Compiled matcher for `to = "<base><name><extension>"` redirect lines.
#[derive(Debug, Clone)]
pub struct RedirectRule {
  pattern: Regex,
  base: String,
}

/// Outcome of applying [`RedirectRule::rewrite`] to a config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite {
  /// Full file contents after the substitution.
  pub contents: Vec<u8>,
  /// Number of redirect rules found in the original text.
  pub matches: usize,
  /// File name the first rule referenced before the substitution.
  pub previous: Option<String>,
  /// Whether `contents` differs from the input.
  pub changed: bool,
}

impl RedirectRule {
  /// Build a matcher for rules below `base` whose target follows the worker's extension.
  pub fn new(base: &str, worker: &WorkerPattern) -> Self {
    let pattern = Regex::new(&format!(
      r#"\bto[ \t]*=[ \t]*"{}([^"\r\n]*{})""#,
      regex::escape(base),
      regex::escape(worker.extension())
    ))
    .expect("invalid redirect rule regex");
    Self {
      pattern,
      base: base.to_string(),
    }
  }

  /// URL prefix the rule target starts with.
  pub fn base(&self) -> &str {
    &self.base
  }

  /// File name referenced by the first matching rule, if any.
  pub fn current_target(&self, text: &[u8]) -> Option<String> {
    self
      .pattern
      .captures(text)
      .and_then(|caps| caps.get(1))
      .map(|name| String::from_utf8_lossy(name.as_bytes()).into_owned())
  }

  /// Point the first matching rule at `file_name`, leaving every other byte untouched.
  pub fn rewrite(&self, text: &[u8], file_name: &str) -> Rewrite {
    let matches = self.pattern.find_iter(text).count();
    let Some(target) = self.pattern.captures(text).and_then(|caps| caps.get(1)) else {
      return Rewrite {
        contents: text.to_vec(),
        matches,
        previous: None,
        changed: false,
      };
    };

    let mut contents = Vec::with_capacity(text.len() + file_name.len());
    contents.extend_from_slice(&text[..target.start()]);
    contents.extend_from_slice(file_name.as_bytes());
    contents.extend_from_slice(&text[target.end()..]);

    Rewrite {
      changed: contents != text,
      contents,
      matches,
      previous: Some(String::from_utf8_lossy(target.as_bytes()).into_owned()),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const NETLIFY: &str = "[build]\n  command = \"npm run build\"\n  publish = \"dist\"\n\n[[redirects]]\n  from = \"/sw.js\"\n  to = \"/assets/sw-OLD123.js\"\n  status = 200\n";

  fn rule() -> RedirectRule {
    RedirectRule::new("/assets/", &WorkerPattern::new("sw-", ".js"))
  }

  #[test]
  fn rewrites_only_the_rule_target() {
    let rewrite = rule().rewrite(NETLIFY.as_bytes(), "sw-NEW456.js");

    assert_eq!(rewrite.matches, 1);
    assert!(rewrite.changed);
    assert_eq!(rewrite.previous.as_deref(), Some("sw-OLD123.js"));
    assert_eq!(
      String::from_utf8(rewrite.contents).unwrap(),
      NETLIFY.replace("sw-OLD123.js", "sw-NEW456.js")
    );
  }

  #[test]
  fn preserves_crlf_line_endings_and_non_utf8_bytes() {
    let mut text = b"# \xff legacy comment\r\n[[redirects]]\r\n".to_vec();
    text.extend_from_slice(b"  to = \"/assets/sw-a.js\"\r\n  status = 200\r\n");

    let rewrite = rule().rewrite(&text, "sw-b.js");

    let mut expected = b"# \xff legacy comment\r\n[[redirects]]\r\n".to_vec();
    expected.extend_from_slice(b"  to = \"/assets/sw-b.js\"\r\n  status = 200\r\n");
    assert_eq!(rewrite.contents, expected);
  }

  #[test]
  fn replaces_the_first_of_several_rules() {
    let text = "to = \"/assets/sw-a.js\"\nto = \"/assets/sw-b.js\"\n";
    let rewrite = rule().rewrite(text.as_bytes(), "sw-c.js");

    assert_eq!(rewrite.matches, 2);
    assert_eq!(
      rewrite.contents,
      b"to = \"/assets/sw-c.js\"\nto = \"/assets/sw-b.js\"\n".to_vec()
    );
  }

  #[test]
  fn leaves_text_unchanged_without_rule() {
    let text = "[[redirects]]\n  from = \"/*\"\n  to = \"/index.html\"\n";
    let rewrite = rule().rewrite(text.as_bytes(), "sw-new.js");

    assert_eq!(rewrite.matches, 0);
    assert!(!rewrite.changed);
    assert_eq!(rewrite.previous, None);
    assert_eq!(rewrite.contents, text.as_bytes());
  }

  #[test]
  fn does_not_span_lines_or_other_asset_types() {
    let text = "to = \"/assets/app.css\"\nfrom = \"/assets/sw-x.js\"\n";
    assert_eq!(rule().rewrite(text.as_bytes(), "sw-new.js").matches, 0);
  }

  #[test]
  fn reports_unchanged_when_already_current() {
    let rewrite = rule().rewrite(NETLIFY.as_bytes(), "sw-OLD123.js");
    assert_eq!(rewrite.matches, 1);
    assert!(!rewrite.changed);
    assert_eq!(rewrite.contents, NETLIFY.as_bytes());
  }

  #[test]
  fn rule_must_sit_on_one_line() {
    assert_eq!(rule().rewrite(b"to\n=\n\"/assets/sw-a.js\"\n", "sw-b.js").matches, 0);

    let rewrite = rule().rewrite(b"to\t=  \"/assets/sw-a.js\"\n", "sw-b.js");
    assert_eq!(rewrite.matches, 1);
    assert_eq!(rewrite.contents, b"to\t=  \"/assets/sw-b.js\"\n".to_vec());
  }

  #[test]
  fn current_target_reads_first_rule() {
    assert_eq!(
      rule().current_target(NETLIFY.as_bytes()).as_deref(),
      Some("sw-OLD123.js")
    );
    assert_eq!(rule().current_target(b"from = \"/sw.js\""), None);
  }

  #[test]
  fn honours_custom_base() {
    let rule = RedirectRule::new("/static/js/", &WorkerPattern::new("service-worker.", ".mjs"));
    let rewrite = rule.rewrite(b"to = \"/static/js/service-worker.1.mjs\"", "service-worker.2.mjs");
    assert_eq!(rewrite.contents, b"to = \"/static/js/service-worker.2.mjs\"".to_vec());
  }
}
