use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use super::*;

struct MockFileSystem {
    files: HashMap<PathBuf, String>,
    current_dir: PathBuf,
    config_dir: Option<PathBuf>,
}

impl MockFileSystem {
    fn new() -> Self {
        Self {
            files: HashMap::new(),
            current_dir: PathBuf::from("/project"),
            config_dir: Some(PathBuf::from("/home/user/.config/vpat")),
        }
    }

    fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }

    fn with_config_dir(mut self, path: Option<PathBuf>) -> Self {
        self.config_dir = path;
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.current_dir.clone())
    }

    fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir.clone()
    }
}

#[test]
fn returns_default_when_no_config_found() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    assert_eq!(loader.load().unwrap(), Config::default());
}

#[test]
fn returns_default_without_user_config_dir() {
    let fs = MockFileSystem::new().with_config_dir(None);
    let loader = FileConfigLoader::with_fs(fs);
    assert_eq!(loader.load().unwrap(), Config::default());
}

#[test]
fn loads_local_config_from_current_directory() {
    let fs = MockFileSystem::new().with_file(
        "/project/.vpat.toml",
        "[product]\nname = \"Local\"\n",
    );
    let config = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(config.product.name.as_deref(), Some("Local"));
}

#[test]
fn loads_user_config_as_fallback() {
    let fs = MockFileSystem::new().with_file(
        "/home/user/.config/vpat/config.toml",
        "[product]\nname = \"User\"\n",
    );
    let config = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(config.product.name.as_deref(), Some("User"));
}

#[test]
fn local_config_takes_priority_over_user_config() {
    let fs = MockFileSystem::new()
        .with_file("/project/.vpat.toml", "[product]\nname = \"Local\"\n")
        .with_file(
            "/home/user/.config/vpat/config.toml",
            "[product]\nname = \"User\"\n",
        );
    let config = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(config.product.name.as_deref(), Some("Local"));
}

#[test]
fn load_from_path_reports_missing_file() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let err = loader.load_from_path(Path::new("/nowhere.toml")).unwrap_err();
    assert!(matches!(err, VpatError::FileRead { .. }));
    assert_eq!(err.error_type(), "IO");
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let fs = MockFileSystem::new().with_file("/project/.vpat.toml", "[product\nname = 1");
    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();
    assert_eq!(err.error_type(), "TOML");
}

#[test]
fn loaded_config_is_validated() {
    let fs = MockFileSystem::new().with_file(
        "/project/.vpat.toml",
        "[tools.checker]\nname = \"\"\n",
    );
    let err = FileConfigLoader::with_fs(fs).load().unwrap_err();
    assert_eq!(err.error_type(), "Config");
}
