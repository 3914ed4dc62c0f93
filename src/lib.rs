//! Chisel - Scaffolding de templates de view
//!
//! Given a request handler's fully-qualified identifier, chisel works out
//! where its view template belongs, writes a placeholder file there and
//! returns the template identifier (`namespace::name`) to render it with.
//!
//! # Uso
//! ```no_run
//! use chisel::core::{AutoloadLocator, TemplateScaffolder};
//!
//! # fn main() -> Result<(), chisel::core::ScaffoldError> {
//! let root = std::path::PathBuf::from("/srv/app");
//! let locator = AutoloadLocator::from_composer(&root)?;
//! let scaffolder = TemplateScaffolder::new(root, locator);
//! let template = scaffolder.for_handler(r"App\Handler\HomePageHandler")?;
//! println!("{} -> {}", template.identifier, template.path.display());
//! # Ok(())
//! # }
//! ```

pub mod core;
