use tekkenizer::vocab::io::TekkenJson;

use crate::input_output::{InputArgs, OutputArgs};

/// Args for the convert command.
#[derive(clap::Args, Debug)]
pub struct ConvertArgs {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl ConvertArgs {
    /// Run the convert command.
    ///
    /// Rows keep their raw ranks; no special-slot offset is applied.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let tekken = TekkenJson::from_reader(self.input.open_reader()?)?;
        log::info!(
            "converting {} tekken rows (version {:?})",
            tekken.vocab.len(),
            tekken.config.version
        );

        let mut writer = self.output.open_writer()?;
        tekken.write_tiktoken(&mut writer)?;
        Ok(())
    }
}
