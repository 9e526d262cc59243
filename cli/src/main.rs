//! trigraph CLI — interactive text menu over the graph contract
//!
//! Builds one graph with the chosen mode and representation, then dispatches
//! numbered menu choices read from stdin to it.

mod menu;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use trigraph::{Backend, GraphConfig, Mode};

use crate::menu::{Menu, OutputFormat};

#[derive(Parser)]
#[command(name = "trigraph", version, about = "Explore graph representations interactively")]
struct Cli {
    /// Edge directionality (directed | undirected)
    #[arg(long, default_value = "directed", env = "TRIGRAPH_MODE")]
    mode: Mode,

    /// Storage representation (list | edges | matrix)
    #[arg(long, default_value = "list", env = "TRIGRAPH_BACKEND")]
    backend: Backend,

    /// Output format
    #[arg(long, default_value = "table", env = "TRIGRAPH_FORMAT")]
    format: OutputFormat,

    /// Log graph mutations to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let config = GraphConfig::new(cli.mode, cli.backend);
    tracing::info!("Starting menu with {} {} graph", config.mode, config.backend);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut menu = Menu::new(config.build(), stdin.lock(), stdout.lock(), cli.format);

    if let Err(e) = menu.run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn setup_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}
