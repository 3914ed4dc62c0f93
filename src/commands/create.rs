//! Comando create - Gera o template de um handler

use anyhow::{Context, Result};
use colored::*;
use std::path::Path;

use chisel::core::{AutoloadLocator, TemplateScaffolder, project, utils};

pub fn run(
    project_root: Option<&Path>,
    handler: &str,
    namespace: Option<&str>,
    verbose: bool,
) -> Result<()> {
    println!("{}", format!("🪓 Criando template para {}...", handler).bright_yellow());

    let scaffolder = match project_root {
        Some(dir) => {
            let root = dir
                .canonicalize()
                .context(format!("Project root not found: {}", dir.display()))?;
            let locator = autoload_locator(&root)?;
            TemplateScaffolder::new(root, locator)
        }
        None => {
            let cwd = project::project_root().context("Failed to get current directory")?;
            TemplateScaffolder::in_current_dir(autoload_locator(&cwd)?)
                .context("Failed to get current directory")?
        }
    };
    if verbose {
        utils::print_path("Projeto", scaffolder.project_root());
    }

    let template = match namespace {
        Some(ns) => {
            utils::print_step(&format!("Usando namespace {}", ns.bright_green()));
            scaffolder.for_handler_in_namespace(handler, ns)
        }
        None => scaffolder.for_handler(handler),
    }
    .with_context(|| format!("Failed to create template for {}", handler))?;

    utils::print_success("Template criado com sucesso!");
    utils::print_field("Template", &template.to_string());

    Ok(())
}

fn autoload_locator(root: &Path) -> Result<AutoloadLocator> {
    AutoloadLocator::from_composer(root).context("Failed to read autoload rules from composer.json")
}
