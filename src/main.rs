//! caesar-lab - Caesar ciphers and frequency analysis from the command line.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use caesar_lab::Operation;

use commands::{AlphabetCommand, AnalyzeCommand, CipherArgs, CipherCommand, CommandExecutor, MenuCommand};

/// Standard and keyword-permuted Caesar ciphers with frequency analysis.
///
/// Educational only: every cipher here can be broken by hand.
#[derive(Parser)]
#[command(name = "caesar-lab")]
#[command(version)]
#[command(about = "Caesar ciphers and frequency analysis for classical cryptanalysis")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text with a shift key (and optional permutation keyword)
    Encrypt(CipherArgs),

    /// Decrypt text with a shift key (and optional permutation keyword)
    Decrypt(CipherArgs),

    /// Print the permuted alphabet generated from a keyword
    Alphabet(AlphabetCommand),

    /// Run frequency analysis over an intercepted message file
    Analyze(AnalyzeCommand),

    /// Interactive menu
    Menu(MenuCommand),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encrypt(args) => CipherCommand::new(Operation::Encrypt, args).execute(),
        Commands::Decrypt(args) => CipherCommand::new(Operation::Decrypt, args).execute(),
        Commands::Alphabet(cmd) => cmd.execute(),
        Commands::Analyze(cmd) => cmd.execute(),
        Commands::Menu(cmd) => cmd.execute(),
    }
}
