mod convert;
mod decode;
mod encode;
mod encodings;

/// Subcommands for tekken
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Encode text lines into token ids.
    Encode(encode::EncodeArgs),

    /// Decode token id lines into text.
    Decode(decode::DecodeArgs),

    /// Convert a Tekken JSON vocabulary into a flat rank table.
    Convert(convert::ConvertArgs),

    /// List encoding schemes and model names.
    #[clap(visible_alias = "ls")]
    ListEncodings(encodings::ListEncodingsArgs),
}

impl Commands {
    /// Run the subcommand.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self {
            Commands::Encode(cmd) => cmd.run(),
            Commands::Decode(cmd) => cmd.run(),
            Commands::Convert(cmd) => cmd.run(),
            Commands::ListEncodings(cmd) => cmd.run(),
        }
    }
}
