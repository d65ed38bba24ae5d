use anyhow::{Context, Result};
use clap::Parser;
use sandsh::{Sandbox, Shell};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Interactive shell confined to a sandbox directory
#[derive(Parser, Debug)]
#[command(name = "sandsh", version, about)]
struct Cli {
    /// Sandbox root directory (created if missing)
    #[arg(short, long, env = "SANDSH_ROOT", default_value = "root")]
    root: PathBuf,

    /// Print directory listings as JSON
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let sandbox = Sandbox::open(&cli.root)
        .with_context(|| format!("Failed to open sandbox at {}", cli.root.display()))?;
    println!("File system initialized at {}", sandbox.root().display());

    Shell::new(sandbox).json(cli.json).run()
}
