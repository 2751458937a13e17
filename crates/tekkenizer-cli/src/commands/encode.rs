use std::io::{BufRead, Write};

use tekkenizer::Codec;

use crate::{
    codec_selector::CodecSelectorArgs,
    input_output::{InputArgs, OutputArgs},
};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    #[command(flatten)]
    codec: CodecSelectorArgs,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,

    /// Also write a line of token pieces after each line of ids.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pieces: bool,
}

impl EncodeArgs {
    /// Run the encode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let codec = self.codec.load_codec()?;

        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        run_encode(&mut reader, &mut writer, &codec, self.pieces)
    }
}

fn run_encode(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    codec: &Codec<u32>,
    pieces: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    // Lines keep their terminators, so decode restores them.
    let mut line = String::new();
    while reader.read_line(&mut line)? > 0 {
        let (tokens, token_pieces) = codec.encode(&line)?;

        let ids: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
        writeln!(writer, "{}", ids.join(" "))?;
        if pieces {
            let quoted: Vec<String> = token_pieces.iter().map(|p| format!("{p:?}")).collect();
            writeln!(writer, "{}", quoted.join(" "))?;
        }
        writer.flush()?;

        line.clear();
    }
    Ok(())
}
