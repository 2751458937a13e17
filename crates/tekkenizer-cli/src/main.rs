mod codec_selector;
mod commands;
mod input_output;
mod logging;

use clap::Parser;
use commands::Commands;

/// tekken: encode and decode text with BPE vocabularies.
#[derive(clap::Parser, Debug)]
pub struct Args {
    #[command(flatten)]
    logging: logging::LogArgs,

    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.logging.setup_logging(2)?;

    args.command.run()
}
