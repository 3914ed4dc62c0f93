#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const TWIG_ALIAS: &str = r#"
[dependencies.aliases]
'Zend\Expressive\Template\TemplateRendererInterface' = 'Zend\Expressive\Twig\TwigRenderer'
"#;

pub const PLATES_ALIAS: &str = r#"
[dependencies.aliases]
'Zend\Expressive\Template\TemplateRendererInterface' = 'Zend\Expressive\Plates\PlatesRenderer'
"#;

/// Throw-away project tree
pub struct Project {
    pub dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp project");
        Self { dir }
    }

    pub fn root(&self) -> PathBuf {
        self.dir.path().canonicalize().expect("canonical project root")
    }

    pub fn with_config(self, toml: &str) -> Self {
        self.write("config/config.toml", toml);
        self
    }

    /// Create a source file, returning its absolute path
    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.root().join(rel);
        fs::create_dir_all(path.parent().expect("parent dir")).expect("create parent dir");
        fs::write(&path, content).expect("write file");
        path
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.root().join(rel).exists()
    }
}

/// Locator answering for exactly one handler
pub fn single_handler(handler: &str, file: &Path) -> impl Fn(&str) -> Option<PathBuf> {
    let handler = handler.to_string();
    let file = file.to_path_buf();
    move |requested: &str| (requested == handler).then(|| file.clone())
}
