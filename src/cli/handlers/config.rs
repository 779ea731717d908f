use crate::cli::{args::ConfigArgs, config::max_size, global::GlobalArgs};
use base32k::CodecConfig;

pub fn handle(
    args: ConfigArgs,
    global: &GlobalArgs,
    config: &CodecConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let mode = config.default_mode();
    let wrap = config.wrap();
    let max_size = max_size(global, config);

    if args.json {
        let output = serde_json::json!({
            "default_mode": mode,
            "wrap": wrap,
            "max_size": max_size,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("default_mode = {}", mode.as_str());
    println!("wrap = {}", wrap);
    println!(
        "max_size = {}{}",
        max_size,
        if max_size == 0 { " (unlimited)" } else { "" }
    );

    Ok(())
}
