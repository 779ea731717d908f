mod args;
mod config;
mod global;
mod handlers;

use args::{ConfigArgs, DecodeArgs, DetectArgs, EncodeArgs};
use clap::{Parser, Subcommand};
use global::GlobalArgs;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "base32k")]
#[command(version)]
#[command(
    about = "Encode binary data as Hangul and CJK text, 15 bits per character",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode data to wide text or Base64
    Encode(EncodeArgs),
    /// Decode wide text or Base64 (format is detected)
    Decode(DecodeArgs),
    /// Report the format of encoded input
    Detect(DetectArgs),
    /// Show the effective configuration
    Config(ConfigArgs),
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    init_tracing(&cli.global);

    let config = config::load_config(&cli.global)?;

    match cli.command {
        Commands::Encode(args) => handlers::encode::handle(args, &cli.global, &config),
        Commands::Decode(args) => handlers::decode::handle(args, &cli.global, &config),
        Commands::Detect(args) => handlers::detect::handle(args, &cli.global, &config),
        Commands::Config(args) => handlers::config::handle(args, &cli.global, &config),
    }
}

fn init_tracing(global: &GlobalArgs) {
    let level = if global.quiet {
        Level::ERROR
    } else {
        match global.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    // RUST_LOG, when set, replaces the -v/-q level entirely
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
