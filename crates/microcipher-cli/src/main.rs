// crates/microcipher-cli/src/main.rs

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "microcipher-cli")]
#[command(about = "Three-wheel rotor cipher with a reflector", long_about = None)]
pub struct Cli {
    /// Log engine activity to stderr (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt or decrypt text (the same operation)
    Cipher(cmd::cipher::CipherArgs),

    /// Key string tools (MCK1)
    Key(cmd::key::KeyCmdArgs),

    /// Print the wiring tables of a wheel set
    Tables(cmd::tables::TablesArgs),

    /// Show rotor offsets and substitutions per character
    Trace(cmd::trace::TraceArgs),
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Commands::Cipher(args) => cmd::cipher::run(args),
        Commands::Key(args) => cmd::key::run(args),
        Commands::Tables(args) => cmd::tables::run(args),
        Commands::Trace(args) => cmd::trace::run(args),
    }
}
