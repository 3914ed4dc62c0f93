//! Comando renderers - Lista renderers suportados
use anyhow::Result;
use colored::*;

use chisel::core::RendererType;

pub fn run(_verbose: bool) -> Result<()> {
    println!("{}", "🎨 Renderers suportados:".bright_cyan());
    println!();
    for renderer in RendererType::ALL {
        println!(
            "  {} (.{})",
            renderer.identifier().bright_green(),
            renderer.default_suffix()
        );
    }
    println!();
    println!(
        "Configure o alias em {}",
        "config/config.toml [dependencies.aliases]".bright_yellow()
    );

    Ok(())
}
