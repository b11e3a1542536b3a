#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the vpat binary.
#[macro_export]
macro_rules! vpat {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("vpat"))
    };
}

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a `.vpat.toml` in the temp directory.
    pub fn create_config(&self, content: &str) {
        self.create_file(".vpat.toml", content);
    }

    /// Reads a file from the temp directory.
    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// One page with a critical `image-alt` failure.
pub const IMAGE_ALT_RESULT: &str = r#"{
  "url": "https://example.com/",
  "violations": [
    {
      "id": "image-alt",
      "impact": "critical",
      "help": "Images must have alternate text",
      "helpUrl": "https://dequeuniversity.com/rules/axe/4.8/image-alt",
      "nodes": [{"html": "<img src=\"logo.png\">"}]
    }
  ],
  "passes": [{"id": "html-has-lang", "nodes": []}]
}"#;

/// Two pages (one repeating the first URL) with serious contrast failures.
pub const CONTRAST_RESULTS: &str = r#"[
  {
    "url": "https://example.com/",
    "violations": [
      {
        "id": "color-contrast",
        "impact": "serious",
        "help": "Elements must meet minimum color contrast ratio thresholds",
        "nodes": [{"html": "<p class=\"muted\">a</p>"}, {"html": "<p class=\"muted\">b</p>"}]
      }
    ]
  },
  {
    "url": "https://example.com/about",
    "violations": []
  }
]"#;

/// A clean page with no violations.
pub const CLEAN_RESULT: &str = r#"{"url": "https://example.com/clean", "violations": []}"#;
