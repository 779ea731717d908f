use base32k::EncodingMode;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Output mode as accepted on the command line
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ModeArg {
    /// Hangul + CJK alphabet, 15 bits per symbol
    #[value(alias = "base32k")]
    Wide,
    /// Standard padded Base64
    Base64,
}

impl From<ModeArg> for EncodingMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Wide => EncodingMode::Wide,
            ModeArg::Base64 => EncodingMode::Base64,
        }
    }
}

/// Arguments for encoding data
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output mode (default from config)
    #[arg(short = 'm', long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Shorthand for --mode base64
    #[arg(long, conflicts_with = "mode")]
    pub base64: bool,

    /// Wrap output after COLS characters (0 = no wrapping)
    #[arg(short = 'w', long, value_name = "COLS")]
    pub wrap: Option<usize>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Use streaming mode for large files
    #[arg(short = 's', long)]
    pub stream: bool,
}

impl EncodeArgs {
    /// Mode requested on the command line, if any.
    pub fn requested_mode(&self) -> Option<EncodingMode> {
        if self.base64 {
            Some(EncodingMode::Base64)
        } else {
            self.mode.map(EncodingMode::from)
        }
    }
}

/// Arguments for decoding data
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Use streaming mode for large files
    #[arg(short = 's', long)]
    pub stream: bool,
}

/// Arguments for format detection
#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,
}

/// Arguments for showing the effective configuration
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}
