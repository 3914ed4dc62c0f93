//! Módulo core - Lógica central do Chisel

pub mod config;
pub mod error;
pub mod locator;
pub mod normalize;
pub mod project;
pub mod renderer;
pub mod template;
pub mod utils;

pub use config::ProjectConfig;
pub use error::{ScaffoldError, UnresolvableRenderer};
pub use locator::{AutoloadLocator, HandlerLocator};
pub use normalize::normalize_template_identifier;
pub use renderer::RendererType;
pub use template::{Template, TemplateScaffolder};
