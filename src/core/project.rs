//! Project module - Project root and filesystem helpers
//!
//! Provides the filesystem side effects of scaffolding a template

use std::path::{Path, PathBuf};

/// Get the project root directory: the canonical current working directory
pub fn project_root() -> std::io::Result<PathBuf> {
    std::env::current_dir()?.canonicalize()
}

/// Path of `file` relative to `root`, with `/` separators and no leading or
/// trailing separator. Paths outside `root` are kept whole.
pub fn relative_to(root: &Path, file: &Path) -> String {
    let relative = file.strip_prefix(root).unwrap_or(file);
    relative
        .to_string_lossy()
        .replace('\\', "/")
        .trim_matches('/')
        .to_string()
}

/// Create a directory and all parent directories
pub fn create_dir_all(path: &Path) -> std::io::Result<()> {
    if path.is_dir() {
        return Ok(());
    }

    std::fs::create_dir_all(path)?;
    tracing::debug!(path = %path.display(), "created template directory");
    Ok(())
}

/// Write `content` to `path`, replacing any existing file
pub fn write_file(path: &Path, content: &str) -> std::io::Result<()> {
    std::fs::write(path, content)?;
    tracing::info!(path = %path.display(), "wrote template");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_use_forward_slashes() {
        let root = Path::new("/srv/app");
        assert_eq!(
            relative_to(root, Path::new("/srv/app/src/Blog/Handler/ListAction.php")),
            "src/Blog/Handler/ListAction.php"
        );
    }

    #[test]
    fn foreign_paths_are_kept() {
        let root = Path::new("/srv/app");
        assert_eq!(
            relative_to(root, Path::new("/opt/vendor/Handler.php")),
            "opt/vendor/Handler.php"
        );
    }

    #[test]
    fn creating_an_existing_directory_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("templates").join("blog");
        create_dir_all(&nested).unwrap();
        create_dir_all(&nested).unwrap();
        assert!(nested.is_dir());
    }
}
