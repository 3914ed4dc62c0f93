//! Locator module - Finds the source file that declares a handler
//!
//! The scaffolder never inspects handler classes itself; it asks a
//! [`HandlerLocator`] where the handler lives. Closures work as locators, and
//! [`AutoloadLocator`] maps identifiers through the project's autoload prefixes.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::error::ScaffoldError;

/// Separator between namespace segments in a handler identifier
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Resolves a handler identifier to its source file
pub trait HandlerLocator {
    fn locate(&self, handler: &str) -> Option<PathBuf>;
}

impl<F> HandlerLocator for F
where
    F: Fn(&str) -> Option<PathBuf>,
{
    fn locate(&self, handler: &str) -> Option<PathBuf> {
        self(handler)
    }
}

/// Locates handlers via namespace-prefix → directory autoload rules
#[derive(Debug, Clone)]
pub struct AutoloadLocator {
    prefixes: Vec<(String, Vec<PathBuf>)>,
}

#[derive(Debug, Default, Deserialize)]
struct ComposerManifest {
    #[serde(default)]
    autoload: AutoloadSection,
    #[serde(default, rename = "autoload-dev")]
    autoload_dev: AutoloadSection,
}

#[derive(Debug, Default, Deserialize)]
struct AutoloadSection {
    #[serde(default, rename = "psr-4")]
    psr4: BTreeMap<String, OneOrMany>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(dir) => vec![dir],
            Self::Many(dirs) => dirs,
        }
    }
}

impl AutoloadLocator {
    /// Build a locator from prefix rules. Directories are relative to `root`.
    pub fn new<I, P, D>(root: impl Into<PathBuf>, rules: I) -> Self
    where
        I: IntoIterator<Item = (P, Vec<D>)>,
        P: Into<String>,
        D: AsRef<Path>,
    {
        let root: PathBuf = root.into();
        let mut prefixes: Vec<(String, Vec<PathBuf>)> = rules
            .into_iter()
            .map(|(prefix, dirs)| {
                let prefix = prefix.into();
                let prefix = prefix.trim_matches(NAMESPACE_SEPARATOR).to_string();
                let dirs = dirs.iter().map(|d| root.join(d)).collect();
                (prefix, dirs)
            })
            .collect();

        // Longest prefix first
        prefixes.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        Self { prefixes }
    }

    /// Load prefix rules from `composer.json` in the project root
    pub fn from_composer(root: &Path) -> Result<Self, ScaffoldError> {
        let path = root.join("composer.json");
        let content = std::fs::read_to_string(&path)?;
        let manifest: ComposerManifest =
            serde_json::from_str(&content).map_err(|e| ScaffoldError::InvalidConfig {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        let rules = manifest
            .autoload
            .psr4
            .into_iter()
            .chain(manifest.autoload_dev.psr4)
            .map(|(prefix, dirs)| (prefix, dirs.into_vec()));

        Ok(Self::new(root, rules))
    }

    /// Candidate files for a handler, in lookup order
    pub fn candidates(&self, handler: &str) -> Vec<PathBuf> {
        let handler = handler.trim_start_matches(NAMESPACE_SEPARATOR);

        for (prefix, dirs) in &self.prefixes {
            let Some(relative) = strip_namespace_prefix(handler, prefix) else {
                continue;
            };
            let relative = format!("{}.php", relative.replace(NAMESPACE_SEPARATOR, "/"));
            return dirs.iter().map(|dir| dir.join(&relative)).collect();
        }

        Vec::new()
    }
}

impl HandlerLocator for AutoloadLocator {
    fn locate(&self, handler: &str) -> Option<PathBuf> {
        self.candidates(handler).into_iter().find(|p| p.is_file())
    }
}

/// Remainder of `handler` after `prefix`, matching whole namespace segments only
fn strip_namespace_prefix<'a>(handler: &'a str, prefix: &str) -> Option<&'a str> {
    if prefix.is_empty() {
        return Some(handler);
    }
    handler
        .strip_prefix(prefix)?
        .strip_prefix(NAMESPACE_SEPARATOR)
        .filter(|rest| !rest.is_empty())
}
