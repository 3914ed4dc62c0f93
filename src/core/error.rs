//! Error module - Failures raised while scaffolding a template

use thiserror::Error;

/// Errors that can occur while resolving or writing a template
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Handler source path is not under `src/<namespace>/`
    #[error(
        "Unable to detect a namespace from handler path \"{path}\"; expected src/<namespace>/..."
    )]
    UndetectableNamespace { path: String },

    /// Configuration does not identify a supported renderer
    #[error(transparent)]
    UnresolvableRenderer(#[from] UnresolvableRenderer),

    /// Configured path list for a namespace does not hold exactly one entry
    #[error(
        "Expected exactly one template path for namespace \"{namespace}\", found {count}; \
         unable to decide where to place the template"
    )]
    TemplatePathResolution { namespace: String, count: usize },

    /// The handler locator could not place the handler on disk
    #[error("Unable to locate the source file for handler \"{0}\"")]
    HandlerNotFound(String),

    /// A configuration file exists but could not be parsed
    #[error("Invalid configuration in {path}: {message}")]
    InvalidConfig { path: String, message: String },

    /// IO error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Why the renderer could not be resolved
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UnresolvableRenderer {
    #[error(
        "Unable to determine the template renderer: no alias configured for \
         Zend\\Expressive\\Template\\TemplateRendererInterface"
    )]
    MissingAlias,

    #[error("Unable to create templates for renderer \"{0}\"; it is not a known renderer type")]
    UnknownType(String),
}
