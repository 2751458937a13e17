use strum::IntoEnumIterator;
use tekkenizer::{
    EncodingName,
    pretrained::{MODEL_ENCODINGS, MODEL_PREFIX_ENCODINGS},
};

/// Args for the encoding listing command.
#[derive(clap::Args, Debug)]
pub struct ListEncodingsArgs {
    /// Also list the model names mapped to each encoding.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    models: bool,
}

impl ListEncodingsArgs {
    /// Run the encoding listing command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        for encoding in EncodingName::iter() {
            println!(
                "\"{}\" - {} vocabulary, {} special words",
                encoding,
                encoding.vocab_format(),
                encoding.special_words().len()
            );

            if self.models {
                for (model, _) in MODEL_ENCODINGS.iter().filter(|(_, e)| *e == encoding) {
                    println!("  * \"{model}\"");
                }
                for (prefix, _) in MODEL_PREFIX_ENCODINGS.iter().filter(|(_, e)| *e == encoding) {
                    println!("  * \"{prefix}*\"");
                }
            }
        }

        Ok(())
    }
}
