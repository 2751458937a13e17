//! # Encoding Schemes
//!
//! A scheme is data: a split pattern, a special-word table and a vocabulary
//! file format. [`EncodingName`] selects one and builds a [`Codec`] from a
//! caller-supplied vocabulary stream.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
    sync::Arc,
};

use crate::{
    TKResult,
    TekkenizerError,
    codec::{Codec, CodecOptions},
    pretrained::{mistral, openai},
    spanners::TextSpanningConfig,
    support::regex::ConstRegexPattern,
    types::TokenType,
    vocab::{Vocabulary, io::TekkenJson},
};

/// Vocabulary file formats.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    strum::EnumString,
    strum::EnumIter,
    strum::Display,
)]
#[strum(serialize_all = "snake_case")]
pub enum VocabFormat {
    /// `<base64-token> <rank>` lines.
    Tiktoken,

    /// Mistral's Tekken JSON document.
    TekkenJson,
}

/// A const description of an encoding scheme.
#[derive(Debug, Clone, Copy)]
pub struct EncodingScheme {
    /// The scheme identifier.
    pub name: &'static str,

    /// The split pattern.
    pub pattern: ConstRegexPattern,

    /// The special words, as `(word, id)`.
    pub specials: &'static [(&'static str, usize)],

    /// The vocabulary file format.
    pub format: VocabFormat,
}

impl EncodingScheme {
    /// Build the [`TextSpanningConfig`] for this scheme.
    pub fn spanning_config<T: TokenType>(&self) -> TKResult<TextSpanningConfig<T>> {
        TextSpanningConfig::from_pattern(self.pattern)
            .with_special_words(self.specials.iter().copied())
    }

    /// Read this scheme's vocabulary from a stream.
    pub fn read_vocab<T: TokenType, R: BufRead>(
        &self,
        reader: R,
    ) -> TKResult<Vocabulary<T>> {
        match self.format {
            VocabFormat::Tiktoken => Vocabulary::from_flat_reader(reader),
            VocabFormat::TekkenJson => {
                let tekken = TekkenJson::from_reader(reader)?;
                let trained = tekken.config.pattern.as_str();
                if !trained.is_empty() && trained != self.pattern.as_str() {
                    log::warn!(
                        "{}: ignoring vocabulary pattern {:?}; using the scheme pattern",
                        self.name,
                        trained
                    );
                }
                tekken.to_vocabulary()
            }
        }
    }

    /// Build a [`Codec`] from a vocabulary stream.
    ///
    /// ## Arguments
    /// * `reader` - the vocabulary, in [`Self::format`].
    /// * `options` - engine options.
    pub fn read_codec<T: TokenType, R: BufRead>(
        &self,
        reader: R,
        options: CodecOptions,
    ) -> TKResult<Codec<T>> {
        let vocab = Arc::new(self.read_vocab(reader)?);
        Codec::new(self.name, vocab, self.spanning_config()?, options)
    }

    /// Build a [`Codec`] from a vocabulary file.
    pub fn load_codec_path<T: TokenType, P: AsRef<Path>>(
        &self,
        path: P,
        options: CodecOptions,
    ) -> TKResult<Codec<T>> {
        let reader = BufReader::new(File::open(path)?);
        self.read_codec(reader, options)
    }
}

/// The "gpt2" scheme; shares the `r50k_base` vocabulary.
pub const GPT2_SCHEME: EncodingScheme = EncodingScheme {
    name: "gpt2",
    pattern: openai::OA_R50K_BASE_PATTERN,
    specials: openai::OA_R50K_BASE_SPECIALS,
    format: VocabFormat::Tiktoken,
};

/// The "`r50k_base`" scheme.
pub const R50K_BASE_SCHEME: EncodingScheme = EncodingScheme {
    name: "r50k_base",
    pattern: openai::OA_R50K_BASE_PATTERN,
    specials: openai::OA_R50K_BASE_SPECIALS,
    format: VocabFormat::Tiktoken,
};

/// The "`p50k_base`" scheme.
pub const P50K_BASE_SCHEME: EncodingScheme = EncodingScheme {
    name: "p50k_base",
    pattern: openai::OA_P50K_BASE_PATTERN,
    specials: openai::OA_P50K_BASE_SPECIALS,
    format: VocabFormat::Tiktoken,
};

/// The "`p50k_edit`" scheme.
pub const P50K_EDIT_SCHEME: EncodingScheme = EncodingScheme {
    name: "p50k_edit",
    pattern: openai::OA_P50K_BASE_PATTERN,
    specials: openai::OA_P50K_EDIT_SPECIALS,
    format: VocabFormat::Tiktoken,
};

/// The "`cl100k_base`" scheme.
pub const CL100K_BASE_SCHEME: EncodingScheme = EncodingScheme {
    name: "cl100k_base",
    pattern: openai::OA_CL100K_BASE_PATTERN,
    specials: openai::OA_CL100K_BASE_SPECIALS,
    format: VocabFormat::Tiktoken,
};

/// The "`o200k_base`" scheme.
pub const O200K_BASE_SCHEME: EncodingScheme = EncodingScheme {
    name: "o200k_base",
    pattern: openai::OA_O200K_BASE_PATTERN,
    specials: openai::OA_O200K_BASE_SPECIALS,
    format: VocabFormat::Tiktoken,
};

/// The "`mistral_tekken`" scheme.
pub const MISTRAL_TEKKEN_SCHEME: EncodingScheme = EncodingScheme {
    name: mistral::MISTRAL_TEKKEN_NAME,
    pattern: mistral::MISTRAL_TEKKEN_PATTERN,
    specials: mistral::MISTRAL_TEKKEN_SPECIALS,
    format: VocabFormat::TekkenJson,
};

/// Known encoding schemes.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::EnumIter,
    strum::Display,
)]
#[non_exhaustive]
pub enum EncodingName {
    /// GPT-2; an alias of `r50k_base`.
    #[strum(serialize = "gpt2")]
    Gpt2,

    /// GPT-3 "`r50k_base`".
    #[strum(serialize = "r50k_base")]
    R50kBase,

    /// Codex "`p50k_base`".
    #[strum(serialize = "p50k_base")]
    P50kBase,

    /// Edit models "`p50k_edit`".
    #[strum(serialize = "p50k_edit")]
    P50kEdit,

    /// GPT-3.5 / GPT-4 "`cl100k_base`".
    #[strum(serialize = "cl100k_base")]
    Cl100kBase,

    /// GPT-4o / o1 "`o200k_base`".
    #[strum(serialize = "o200k_base")]
    O200kBase,

    /// Mistral "`mistral_tekken`".
    #[strum(serialize = "mistral_tekken")]
    MistralTekken,
}

impl EncodingName {
    /// Look up an encoding by name.
    ///
    /// ## Returns
    /// * `Err(EncodingNotSupported)` - for unknown names.
    pub fn from_name(name: &str) -> TKResult<Self> {
        Self::from_str(name).map_err(|_| TekkenizerError::EncodingNotSupported(name.to_string()))
    }

    /// Get the scheme description.
    pub fn scheme(&self) -> &'static EncodingScheme {
        use EncodingName::*;
        match self {
            Gpt2 => &GPT2_SCHEME,
            R50kBase => &R50K_BASE_SCHEME,
            P50kBase => &P50K_BASE_SCHEME,
            P50kEdit => &P50K_EDIT_SCHEME,
            Cl100kBase => &CL100K_BASE_SCHEME,
            O200kBase => &O200K_BASE_SCHEME,
            MistralTekken => &MISTRAL_TEKKEN_SCHEME,
        }
    }

    /// Get the split pattern.
    pub fn pattern(&self) -> ConstRegexPattern {
        self.scheme().pattern
    }

    /// Get the special words.
    pub fn special_words(&self) -> &'static [(&'static str, usize)] {
        self.scheme().specials
    }

    /// Get the vocabulary file format.
    pub fn vocab_format(&self) -> VocabFormat {
        self.scheme().format
    }

    /// Build the [`TextSpanningConfig`].
    pub fn spanning_config<T: TokenType>(&self) -> TKResult<TextSpanningConfig<T>> {
        self.scheme().spanning_config()
    }

    /// Build a [`Codec`] from a vocabulary stream.
    pub fn read_codec<T: TokenType, R: BufRead>(
        &self,
        reader: R,
        options: CodecOptions,
    ) -> TKResult<Codec<T>> {
        self.scheme().read_codec(reader, options)
    }

    /// Build a [`Codec`] from a vocabulary file.
    pub fn load_codec_path<T: TokenType, P: AsRef<Path>>(
        &self,
        path: P,
        options: CodecOptions,
    ) -> TKResult<Codec<T>> {
        self.scheme().load_codec_path(path, options)
    }
}
