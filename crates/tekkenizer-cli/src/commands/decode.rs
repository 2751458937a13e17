use std::io::{BufRead, Write};

use tekkenizer::Codec;

use crate::{
    codec_selector::CodecSelectorArgs,
    input_output::{InputArgs, OutputArgs},
};

/// Args for the decode command.
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    #[command(flatten)]
    codec: CodecSelectorArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Replace invalid UTF-8 with U+FFFD instead of failing.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    lossy: bool,
}

impl DecodeArgs {
    /// Run the decode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let codec = self.codec.load_codec()?;

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        run_decode(&mut reader, &mut writer, &codec, self.lossy)
    }
}

/// Parse a whitespace-separated line of token ids.
pub fn parse_token_line(line: &str) -> Result<Vec<u32>, std::num::ParseIntError> {
    line.split_whitespace().map(str::parse).collect()
}

fn run_decode(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    codec: &Codec<u32>,
    lossy: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in reader.lines() {
        let tokens = parse_token_line(&line?)?;

        let text = if lossy {
            codec.decode_lossy(&tokens)?
        } else {
            codec.decode(&tokens)?
        };

        write!(writer, "{text}")?;
        writer.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_token_line() {
        assert_eq!(parse_token_line("1 1259  42\n").unwrap(), vec![1, 1259, 42]);
        assert!(parse_token_line("").unwrap().is_empty());
        assert!(parse_token_line("1 x").is_err());
        assert!(parse_token_line("-3").is_err());
    }
}
