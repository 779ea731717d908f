use crate::cli::global::GlobalArgs;
use base32k::CodecConfig;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Loads the layered configuration, then the `--config` file if one was given.
///
/// Unlike the standard locations, an explicit file that cannot be read or
/// parsed is an error.
pub fn load_config(global: &GlobalArgs) -> Result<CodecConfig, Box<dyn std::error::Error>> {
    let mut config = CodecConfig::load_with_overrides()?;

    if let Some(path) = &global.config {
        let raw = path.to_string_lossy();
        let expanded = shellexpand::tilde(raw.as_ref());
        let explicit = CodecConfig::load_from_file(Path::new(expanded.as_ref()))?;
        debug!("Loaded config from {}", expanded);
        config.merge(explicit);
    }

    Ok(config)
}

/// Size limit in effect: `--max-size` wins over the config file.
pub fn max_size(global: &GlobalArgs, config: &CodecConfig) -> usize {
    global.max_size.unwrap_or_else(|| config.max_size())
}

/// Refuses inputs larger than `limit` unless `--force` was given.
pub fn check_size(
    size: usize,
    limit: usize,
    global: &GlobalArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    if limit == 0 || size <= limit {
        return Ok(());
    }

    if global.force {
        if !global.quiet {
            warn!("Processing large input ({} bytes, limit: {} bytes)", size, limit);
        }
        Ok(())
    } else {
        Err(format!(
            "Input size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
            size, limit
        )
        .into())
    }
}

/// Reads the whole input from `file` or stdin, enforcing the size limit.
pub fn read_input(
    file: Option<&PathBuf>,
    global: &GlobalArgs,
    config: &CodecConfig,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let limit = max_size(global, config);

    if let Some(path) = file {
        let metadata = fs::metadata(path)
            .map_err(|e| format!("Cannot read '{}': {}", path.display(), e))?;
        check_size(metadata.len() as usize, limit, global)?;
        return Ok(fs::read(path)?);
    }

    let mut buffer = Vec::new();
    io::stdin().read_to_end(&mut buffer)?;
    check_size(buffer.len(), limit, global)?;
    Ok(buffer)
}

/// Opens `file` or stdin for streaming.
pub fn open_input(file: Option<&PathBuf>) -> Result<Box<dyn Read>, Box<dyn std::error::Error>> {
    match file {
        Some(path) => {
            let handle = File::open(path)
                .map_err(|e| format!("Cannot read '{}': {}", path.display(), e))?;
            Ok(Box::new(BufReader::new(handle)))
        }
        None => Ok(Box::new(io::stdin().lock())),
    }
}

/// Opens `output` or stdout for writing.
pub fn open_output(output: Option<&PathBuf>) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
    match output {
        Some(path) => {
            let handle = File::create(path)
                .map_err(|e| format!("Cannot write '{}': {}", path.display(), e))?;
            Ok(Box::new(BufWriter::new(handle)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn global(force: bool) -> GlobalArgs {
        GlobalArgs {
            quiet: true,
            verbose: 0,
            max_size: None,
            force,
            config: None,
        }
    }

    #[test]
    fn test_check_size() {
        assert!(check_size(10, 0, &global(false)).is_ok());
        assert!(check_size(10, 10, &global(false)).is_ok());
        assert!(check_size(11, 10, &global(false)).is_err());
        assert!(check_size(11, 10, &global(true)).is_ok());
    }

    #[test]
    fn test_max_size_prefers_flag() {
        let config = CodecConfig::from_toml("[settings]\nmax_size = 50").unwrap();
        let mut args = global(false);
        assert_eq!(max_size(&args, &config), 50);
        args.max_size = Some(7);
        assert_eq!(max_size(&args, &config), 7);
    }
}
