//! Template module - Scaffolds placeholder view templates for handlers
//!
//! Given a handler identifier the scaffolder:
//! 1. locates the handler source and derives its namespace (`src/<Namespace>/...`)
//! 2. resolves the renderer from `config/config.toml`
//! 3. picks the template directory, configured or by convention
//! 4. writes `<directory>/<name>.<suffix>` and returns `namespace::name`

use regex::Regex;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use super::config::ProjectConfig;
use super::error::ScaffoldError;
use super::locator::{HandlerLocator, NAMESPACE_SEPARATOR};
use super::normalize::normalize_template_identifier;
use super::project;

static NAMESPACE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^src/(?P<namespace>[^/]+)/").expect("namespace pattern is valid")
});

/// A generated template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// File written on disk
    pub path: PathBuf,
    /// Identifier to render the template with (`namespace::name`)
    pub identifier: String,
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.identifier, self.path.display())
    }
}

/// Creates placeholder templates for handlers of one project
pub struct TemplateScaffolder<L> {
    project_root: PathBuf,
    locator: L,
}

impl<L: HandlerLocator> TemplateScaffolder<L> {
    pub fn new(project_root: impl Into<PathBuf>, locator: L) -> Self {
        Self {
            project_root: project_root.into(),
            locator,
        }
    }

    /// Scaffolder rooted at the current working directory
    pub fn in_current_dir(locator: L) -> Result<Self, ScaffoldError> {
        Ok(Self::new(project::project_root()?, locator))
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Create the template for `handler`, using the namespace its source
    /// path lives under.
    pub fn for_handler(&self, handler: &str) -> Result<Template, ScaffoldError> {
        let handler_path = self.handler_path(handler)?;
        let namespace = namespace_from_path(&handler_path)?;
        let template_namespace = normalize_template_identifier(namespace);
        self.for_handler_in_namespace(handler, &template_namespace)
    }

    /// Create the template for `handler` under an explicit template namespace
    pub fn for_handler_in_namespace(
        &self,
        handler: &str,
        template_namespace: &str,
    ) -> Result<Template, ScaffoldError> {
        let config = ProjectConfig::load(&self.project_root)?;
        let renderer = config.renderer()?;
        tracing::debug!(%renderer, "resolved renderer");

        let handler_path = self.handler_path(handler)?;

        let template_dir = match config.template_path(template_namespace)? {
            Some(configured) => configured,
            None => {
                let namespace = namespace_from_path(&handler_path)?;
                conventional_template_dir(namespace, &handler_path)
            }
        };
        let template_dir = self.project_root.join(template_dir);
        tracing::debug!(dir = %template_dir.display(), "resolved template directory");

        project::create_dir_all(&template_dir)?;

        let template_name = normalize_template_identifier(handler_class_name(handler));
        let suffix = config.template_suffix(renderer);
        let template_file = template_dir.join(format!("{template_name}.{suffix}"));

        project::write_file(&template_file, &format!("Template for {handler}"))?;

        Ok(Template {
            path: template_file,
            identifier: format!("{template_namespace}::{template_name}"),
        })
    }

    /// Handler source path relative to the project root
    fn handler_path(&self, handler: &str) -> Result<String, ScaffoldError> {
        let file = self
            .locator
            .locate(handler)
            .ok_or_else(|| ScaffoldError::HandlerNotFound(handler.to_string()))?;
        let path = project::relative_to(&self.project_root, &file);
        tracing::debug!(handler, path = %path, "located handler");
        Ok(path)
    }
}

fn namespace_from_path(path: &str) -> Result<&str, ScaffoldError> {
    NAMESPACE_PATTERN
        .captures(path)
        .and_then(|caps| caps.name("namespace"))
        .map(|m| m.as_str())
        .ok_or_else(|| ScaffoldError::UndetectableNamespace {
            path: path.to_string(),
        })
}

/// Handlers under `src/<Namespace>/src/` belong to a module that keeps its
/// own templates.
fn path_represents_module(path: &str, namespace: &str) -> bool {
    path.strip_prefix("src/")
        .and_then(|rest| rest.strip_prefix(namespace))
        .is_some_and(|rest| rest.starts_with("/src/"))
}

fn conventional_template_dir(namespace: &str, handler_path: &str) -> String {
    if path_represents_module(handler_path, namespace) {
        format!("src/{namespace}/templates")
    } else {
        format!("templates/{}", normalize_template_identifier(namespace))
    }
}

/// Class name without its namespace and without an `Action`/`Handler` suffix
fn handler_class_name(handler: &str) -> &str {
    let name = handler
        .rsplit_once(NAMESPACE_SEPARATOR)
        .map_or(handler, |(_, name)| name);
    name.strip_suffix("Action")
        .or_else(|| name.strip_suffix("Handler"))
        .unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespace_is_first_segment_under_src() {
        assert_eq!(
            namespace_from_path("src/Blog/Handler/ListAction.php").unwrap(),
            "Blog"
        );
        assert_eq!(
            namespace_from_path("src/App/src/Handler/HomePageHandler.php").unwrap(),
            "App"
        );
    }

    #[test]
    fn namespace_requires_src_prefix() {
        for path in ["lib/Blog/ListAction.php", "src/ListAction.php", "module/src/Blog/X.php"] {
            assert!(matches!(
                namespace_from_path(path),
                Err(ScaffoldError::UndetectableNamespace { .. })
            ));
        }
    }

    #[test]
    fn module_layout_keeps_templates_inside_module() {
        assert_eq!(
            conventional_template_dir("App", "src/App/src/Handler/HomePageHandler.php"),
            "src/App/templates"
        );
        assert_eq!(
            conventional_template_dir("UserProfile", "src/UserProfile/Handler/EditHandler.php"),
            "templates/user-profile"
        );
    }

    #[test]
    fn module_check_matches_the_whole_namespace() {
        assert!(!path_represents_module("src/AppX/src/Handler.php", "App"));
        assert!(path_represents_module("src/App/src/Handler.php", "App"));
    }

    #[test]
    fn class_name_drops_namespace_and_suffix() {
        assert_eq!(handler_class_name(r"Blog\Handler\ListAction"), "List");
        assert_eq!(handler_class_name(r"App\Handler\HomePageHandler"), "HomePage");
        assert_eq!(handler_class_name(r"App\Handler\Ping"), "Ping");
        assert_eq!(handler_class_name("StandaloneHandler"), "Standalone");
    }

    #[test]
    fn display_shows_identifier_then_file() {
        let template = Template {
            path: PathBuf::from("/srv/app/templates/blog/list.phtml"),
            identifier: "blog::list".to_string(),
        };
        assert_eq!(
            template.to_string(),
            "blog::list (/srv/app/templates/blog/list.phtml)"
        );
    }

    #[test]
    fn only_one_suffix_is_stripped() {
        assert_eq!(handler_class_name(r"App\ListHandlerAction"), "ListHandler");
        assert_eq!(handler_class_name(r"App\ActionHandler"), "Action");
    }
}
