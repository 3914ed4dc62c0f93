//! Chisel - Gerador de templates de view
//!
//! O cinzel que talha os templates dos handlers.
//!
//! # Uso
//! ```bash
//! chisel create 'App\Handler\HomePageHandler'
//! chisel create 'Blog\Handler\ListAction' --namespace blog
//! chisel renderers
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use tracing::Level;

use chisel::core::utils;

mod commands;

#[derive(Parser)]
#[command(name = "chisel")]
#[command(about = "🪓 Chisel - Gera templates de view para handlers", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Raiz do projeto (padrão: diretório atual)
    #[arg(long, global = true)]
    project_root: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Cria o template de um handler
    Create {
        /// Nome completo do handler (ex: App\Handler\HomePageHandler)
        handler: String,

        /// Namespace de template a usar (padrão: derivado de src/<Namespace>/)
        #[arg(long)]
        namespace: Option<String>,
    },

    /// Lista renderers suportados
    Renderers,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run(cli) {
        utils::print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Banner
    if !cli.quiet {
        println!("{}", "🪓 Chisel - Gerador de templates".bright_cyan().bold());
        println!("{}", "   O cinzel que talha os templates".bright_black());
        println!();
    }

    match cli.command {
        Commands::Create { handler, namespace } => {
            commands::create::run(
                cli.project_root.as_deref(),
                &handler,
                namespace.as_deref(),
                cli.verbose,
            )?;
        }
        Commands::Renderers => commands::renderers::run(cli.verbose)?,
    }

    Ok(())
}
