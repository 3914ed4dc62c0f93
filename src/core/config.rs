//! Configuration module - Project configuration consumed read-only
//!
//! Reads `config/config.toml` from the project root. Only the keys chisel
//! cares about are modelled; everything else in the file is ignored.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::error::{ScaffoldError, UnresolvableRenderer};
use super::renderer::{RENDERER_INTERFACE, RendererType};

/// Project-relative location of the configuration file
pub fn config_file(project_root: &Path) -> PathBuf {
    project_root.join("config").join("config.toml")
}

/// Snapshot of the project configuration
#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
pub struct ProjectConfig {
    #[serde(default)]
    pub dependencies: DependenciesConfig,
    #[serde(default)]
    pub templates: TemplatesConfig,
}

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
pub struct DependenciesConfig {
    /// Service name → concrete service
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
pub struct TemplatesConfig {
    /// Template namespace → directories holding its templates
    #[serde(default)]
    pub paths: BTreeMap<String, Vec<String>>,
    /// File suffix override
    pub extension: Option<String>,
}

impl ProjectConfig {
    /// Load the configuration for a project. A missing file is an empty
    /// configuration.
    pub fn load(project_root: &Path) -> Result<Self, ScaffoldError> {
        let path = config_file(project_root);
        if !path.is_file() {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        Self::parse(&content).map_err(|e| ScaffoldError::InvalidConfig {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// The renderer aliased to the template renderer interface
    pub fn renderer(&self) -> Result<RendererType, UnresolvableRenderer> {
        self.dependencies
            .aliases
            .get(RENDERER_INTERFACE)
            .ok_or(UnresolvableRenderer::MissingAlias)?
            .parse()
    }

    /// The single configured directory for a template namespace.
    ///
    /// `Ok(None)` when the namespace has no configured paths. Relative paths
    /// are later joined onto the project root; absolute paths replace it.
    pub fn template_path(&self, namespace: &str) -> Result<Option<String>, ScaffoldError> {
        let Some(paths) = self.templates.paths.get(namespace) else {
            return Ok(None);
        };

        match paths.as_slice() {
            [path] => Ok(Some(path.trim_end_matches(['/', '\\']).to_string())),
            _ => Err(ScaffoldError::TemplatePathResolution {
                namespace: namespace.to_string(),
                count: paths.len(),
            }),
        }
    }

    /// Configured suffix, or the renderer's default
    pub fn template_suffix(&self, renderer: RendererType) -> &str {
        self.templates
            .extension
            .as_deref()
            .unwrap_or_else(|| renderer.default_suffix())
    }
}
