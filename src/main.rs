//! Tabula - classical cipher workbench.
//!
//! A CLI over the tabula library: Caesar and tabula recta text ciphers with
//! decode-attempt lockout, plus a byte cipher for arbitrary files. Text
//! modes need a settings file declaring the alphabets (see `--settings` or
//! the `SETTINGS_PATH` environment variable).

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{CaesarCommand, CommandExecutor, FileCommand, TabulaCommand};

/// Tabula - configurable polyalphabetic substitution ciphers
///
/// Text modes substitute within alphabets declared in a JSON settings file;
/// repeated decode attempts for the same text inside the configured window
/// lock the session. The file mode ciphers raw bytes over the full
/// 256-value alphabet and needs no settings.
#[derive(Parser)]
#[command(name = "tabula")]
#[command(version = "0.3.0")]
#[command(about = "Classical substitution ciphers with decode-attempt lockout")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cipher text with a fixed Caesar shift
    Caesar(CaesarCommand),

    /// Cipher text with a tabula recta key schedule (vector or keyword)
    Tabula(TabulaCommand),

    /// Cipher a file's bytes with a fixed shift over the 256-value alphabet
    File(FileCommand),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Caesar(cmd) => cmd.execute(),
        Commands::Tabula(cmd) => cmd.execute(),
        Commands::File(cmd) => cmd.execute(),
    }
}
