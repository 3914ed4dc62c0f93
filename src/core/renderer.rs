//! Renderer module - The renderers templates can be generated for

use std::fmt;
use std::str::FromStr;

use super::error::UnresolvableRenderer;

/// Service key the project aliases to its concrete renderer
pub const RENDERER_INTERFACE: &str = r"Zend\Expressive\Template\TemplateRendererInterface";

/// Renderer identifiers
pub mod identifiers {
    /// Plates renderer
    pub const PLATES: &str = r"Zend\Expressive\Plates\PlatesRenderer";

    /// Twig renderer
    pub const TWIG: &str = r"Zend\Expressive\Twig\TwigRenderer";

    /// zend-view renderer
    pub const ZEND_VIEW: &str = r"Zend\Expressive\ZendView\ZendViewRenderer";
}

/// A renderer chisel knows how to generate templates for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RendererType {
    Plates,
    Twig,
    ZendView,
}

impl RendererType {
    pub const ALL: [RendererType; 3] = [Self::Plates, Self::Twig, Self::ZendView];

    /// Fully-qualified identifier used in the aliases configuration
    pub fn identifier(self) -> &'static str {
        match self {
            Self::Plates => identifiers::PLATES,
            Self::Twig => identifiers::TWIG,
            Self::ZendView => identifiers::ZEND_VIEW,
        }
    }

    /// File suffix used when the project does not configure one.
    ///
    /// Only Twig gets its own suffix; every other renderer writes `phtml`.
    pub fn default_suffix(self) -> &'static str {
        match self {
            Self::Twig => "html.twig",
            Self::Plates | Self::ZendView => "phtml",
        }
    }
}

impl FromStr for RendererType {
    type Err = UnresolvableRenderer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.identifier() == s)
            .ok_or_else(|| UnresolvableRenderer::UnknownType(s.to_string()))
    }
}

impl fmt::Display for RendererType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_identifiers() {
        for renderer in RendererType::ALL {
            assert_eq!(renderer.identifier().parse::<RendererType>(), Ok(renderer));
        }
    }

    #[test]
    fn rejects_unknown_identifier() {
        let err = r"App\Renderer\Mustache".parse::<RendererType>().unwrap_err();
        assert_eq!(
            err,
            UnresolvableRenderer::UnknownType(r"App\Renderer\Mustache".to_string())
        );
    }

    #[test]
    fn short_names_are_not_identifiers() {
        assert!("TwigRenderer".parse::<RendererType>().is_err());
    }

    #[test]
    fn twig_is_the_only_non_phtml_suffix() {
        assert_eq!(RendererType::Twig.default_suffix(), "html.twig");
        assert_eq!(RendererType::Plates.default_suffix(), "phtml");
        assert_eq!(RendererType::ZendView.default_suffix(), "phtml");
    }
}
