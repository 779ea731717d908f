use clap::{ArgAction, Args};
use std::path::PathBuf;

/// Global arguments that apply to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Suppress informational notices
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Maximum input size in bytes (0 = unlimited, default from config)
    #[arg(long, global = true, value_name = "BYTES")]
    pub max_size: Option<usize>,

    /// Process inputs exceeding --max-size
    #[arg(long, global = true)]
    pub force: bool,

    /// Extra configuration file, applied after the standard locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}
