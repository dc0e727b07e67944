//! Draftsite CLI - browser-based website builder wizard.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "draftsite")]
#[command(about = "Browser-based website builder wizard")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to draftsite.toml config file
    #[arg(short, long, default_value = "draftsite.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the wizard server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "7878")]
        port: u16,

        /// Do not open browser
        #[arg(long)]
        no_open: bool,
    },

    /// Render a preview document from a saved preference record
    Render {
        /// Preference record file (TOML); defaults used when omitted
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file
        #[arg(short, long, default_value = "preview.html")]
        output: PathBuf,

        /// Skip CSS minification
        #[arg(long)]
        no_minify: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    fmt().with_env_filter(filter).with_target(false).init();

    // Execute command
    match cli.command {
        Commands::Serve { port, no_open } => {
            commands::serve::run(&cli.config, port, !no_open).await?;
        }
        Commands::Render {
            input,
            output,
            no_minify,
        } => {
            commands::render::run(input, output, !no_minify).await?;
        }
    }

    Ok(())
}
