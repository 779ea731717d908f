use crate::cli::{args::DetectArgs, config::read_input, global::GlobalArgs};
use base32k::{CodecConfig, detect_format};

pub fn handle(
    args: DetectArgs,
    global: &GlobalArgs,
    config: &CodecConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(args.file.as_ref(), global, config)?;
    // Only the first significant character matters
    let text = String::from_utf8_lossy(&input);
    println!("{}", detect_format(&text));
    Ok(())
}
