use std::str::FromStr;

use tekkenizer::{
    Codec,
    CodecOptions,
    EncodingName,
    encoders::SpanEncoderSelector,
    encoding_for_model,
};

/// Codec selection arg group.
#[derive(clap::Args, Debug)]
pub struct CodecSelectorArgs {
    /// Path to the vocabulary file (flat rank table or Tekken JSON).
    #[arg(long)]
    vocab: String,

    /// Encoding scheme of the vocabulary.
    #[arg(long, default_value = "mistral_tekken", conflicts_with = "model")]
    encoding: String,

    /// Resolve the encoding scheme from a model name instead.
    #[arg(long, default_value = None)]
    model: Option<String>,

    /// Merge engine ("default", "priority-merge", "merge-scan").
    #[arg(long, default_value = "default")]
    span_encoder: String,

    /// Disable the hand-written lexers for known patterns.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    no_accelerated_lexers: bool,
}

impl CodecSelectorArgs {
    /// Resolve the encoding scheme.
    pub fn encoding(&self) -> Result<EncodingName, Box<dyn std::error::Error>> {
        Ok(match &self.model {
            Some(model) => encoding_for_model(model)?,
            None => EncodingName::from_name(&self.encoding)?,
        })
    }

    /// Build the codec options.
    pub fn options(&self) -> Result<CodecOptions, Box<dyn std::error::Error>> {
        let span_encoder = SpanEncoderSelector::from_str(&self.span_encoder)
            .map_err(|_| format!("unknown span encoder: {:?}", self.span_encoder))?;

        Ok(CodecOptions::default()
            .with_span_encoder(span_encoder)
            .with_accelerated_lexers(!self.no_accelerated_lexers))
    }

    /// Load the codec.
    pub fn load_codec(&self) -> Result<Codec<u32>, Box<dyn std::error::Error>> {
        let encoding = self.encoding()?;
        log::info!("loading {encoding} vocabulary from {:?}", self.vocab);
        Ok(encoding.load_codec_path(&self.vocab, self.options()?)?)
    }
}
