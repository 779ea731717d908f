use crate::cli::{
    args::DecodeArgs,
    config::{open_input, open_output, read_input},
    global::GlobalArgs,
};
use base32k::{Alphabet, CodecConfig, Encoder, StreamingDecoder};
use std::io::Write;

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    config: &CodecConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.stream {
        let alphabet = Alphabet::new();
        let mut reader = open_input(args.file.as_ref())?;
        let writer = open_output(args.output.as_ref())?;
        let mut decoder = StreamingDecoder::new(&alphabet, writer);
        decoder.decode(&mut reader)?;
        decoder.into_inner().flush()?;
        return Ok(());
    }

    let input = read_input(args.file.as_ref(), global, config)?;
    let text = String::from_utf8(input).map_err(|e| {
        format!(
            "error: input is not valid UTF-8 at byte {}",
            e.utf8_error().valid_up_to()
        )
    })?;

    let data = Encoder::new().decode(&text)?;

    let mut writer = open_output(args.output.as_ref())?;
    writer.write_all(&data)?;
    writer.flush()?;

    Ok(())
}
