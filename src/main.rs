use clap::{Parser, Subcommand};
use std::process;
use tracing::{error, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Emit machine-readable JSON instead of tables.
    #[arg(global = true, long, default_value_t = false)]
    json: bool,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Encrypt(cmd::cipher::CipherArgs),
    Decrypt(cmd::cipher::CipherArgs),
    Frequency(cmd::frequency::FrequencyArgs),
    Crack(cmd::crack::CrackArgs),
    Kasiski(cmd::kasiski::KasiskiArgs),
    Challenge(cmd::challenge::ChallengeArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Encrypt(args) => cmd::cipher::run(args, cmd::cipher::Direction::Encrypt, cli.json),
        Commands::Decrypt(args) => cmd::cipher::run(args, cmd::cipher::Direction::Decrypt, cli.json),
        Commands::Frequency(args) => cmd::frequency::run(args, cli.json),
        Commands::Crack(args) => cmd::crack::run(args, cli.json),
        Commands::Kasiski(args) => cmd::kasiski::run(args, cli.json),
        Commands::Challenge(args) => cmd::challenge::run(args, cli.json),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
