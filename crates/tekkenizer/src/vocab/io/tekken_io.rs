//! # Tekken JSON Vocabulary IO
//!
//! Mistral distributes vocabularies as a single JSON document:
//!
//! ```json
//! {
//!   "config": {"pattern": "...", "num_vocab_tokens": 150000,
//!              "default_vocab_size": 131072, "default_num_special_tokens": 1000,
//!              "version": "v3"},
//!   "vocab": [{"rank": 0, "token_bytes": "AA==", "token_str": "\u0000"}, ...],
//!   "multimodal": {"image_patch_size": 16, "max_image_size": 1024}
//! }
//! ```
//!
//! [`TekkenJson::to_tiktoken`] rewrites the `vocab` rows into the flat
//! rank-table format, which is then the single path into a [`Vocabulary`].

use std::{
    fs::File,
    io::{BufReader, Read, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::{
    TKResult,
    TekkenizerError,
    types::TokenType,
    vocab::{Vocabulary, io::load_flat_vocab},
};

/// Tekken training metadata; passed through, not interpreted by the merge engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TekkenConfig {
    /// The pre-tokenizer pattern used at training time.
    pub pattern: String,

    /// The number of vocabulary rows in the file.
    pub num_vocab_tokens: usize,

    /// The total id space (special slots included) the model uses.
    pub default_vocab_size: usize,

    /// The number of id slots reserved for special tokens.
    pub default_num_special_tokens: usize,

    /// The format version.
    pub version: String,
}

/// One row of the trained vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TekkenVocabEntry {
    /// The merge rank.
    pub rank: i64,

    /// The base64 encoding of the token bytes.
    pub token_bytes: String,

    /// A display form of the token; absent for tokens that are not valid UTF-8.
    #[serde(default)]
    pub token_str: Option<String>,
}

/// Image metadata; passthrough only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TekkenMultimodal {
    /// Image patch edge, in pixels.
    pub image_patch_size: usize,

    /// Maximum image edge, in pixels.
    pub max_image_size: usize,
}

/// A decoded Tekken JSON document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TekkenJson {
    /// Training metadata.
    #[serde(default)]
    pub config: TekkenConfig,

    /// The vocabulary rows; required.
    pub vocab: Vec<TekkenVocabEntry>,

    /// Image metadata.
    #[serde(default)]
    pub multimodal: Option<TekkenMultimodal>,
}

impl TekkenJson {
    /// Parse a Tekken JSON document from a string.
    ///
    /// ## Returns
    /// * `Err(MalformedJson)` - on any structural decode error,
    ///   including a missing `vocab` key.
    pub fn from_json_str(data: &str) -> TKResult<Self> {
        serde_json::from_str(data).map_err(|e| TekkenizerError::MalformedJson(e.to_string()))
    }

    /// Parse a Tekken JSON document from a reader.
    pub fn from_reader<R: Read>(reader: R) -> TKResult<Self> {
        serde_json::from_reader(reader).map_err(|e| TekkenizerError::MalformedJson(e.to_string()))
    }

    /// Parse a Tekken JSON document from a file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> TKResult<Self> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    /// Convert to the flat rank-table format, one `<token_bytes> <rank>` line per row.
    ///
    /// Array order and ranks are preserved; nothing is validated.
    pub fn to_tiktoken(&self) -> Vec<u8> {
        let mut buf = Vec::new();
        for entry in &self.vocab {
            buf.extend_from_slice(entry.token_bytes.as_bytes());
            buf.push(b' ');
            buf.extend_from_slice(entry.rank.to_string().as_bytes());
            buf.push(b'\n');
        }
        buf
    }

    /// Write the flat rank-table form to a writer.
    pub fn write_tiktoken<W: Write>(
        &self,
        writer: &mut W,
    ) -> TKResult<()> {
        writer.write_all(&self.to_tiktoken())?;
        writer.flush()?;
        Ok(())
    }

    /// The number of id slots reserved ahead of the vocabulary rows.
    pub fn num_special_slots(&self) -> usize {
        self.config.default_num_special_tokens
    }

    /// The number of vocabulary rows the model actually uses.
    ///
    /// When `default_vocab_size` is set, the model's id space is
    /// `default_vocab_size` wide, special slots included.
    pub fn inner_vocab_size(&self) -> usize {
        let config = &self.config;
        if config.default_vocab_size > config.default_num_special_tokens {
            self.vocab
                .len()
                .min(config.default_vocab_size - config.default_num_special_tokens)
        } else {
            self.vocab.len()
        }
    }

    /// Build the model-facing [`Vocabulary`].
    ///
    /// Rows are truncated to [`Self::inner_vocab_size`], and every id is
    /// shifted by [`Self::num_special_slots`] so that ids `0..slots`
    /// remain free for special tokens.
    pub fn to_vocabulary<T: TokenType>(&self) -> TKResult<Vocabulary<T>> {
        let keep = self.inner_vocab_size();
        if keep < self.vocab.len() {
            log::warn!(
                "truncating tekken vocabulary from {} to {} rows",
                self.vocab.len(),
                keep
            );
        }

        let offset = i64::try_from(self.num_special_slots())
            .map_err(|_| TekkenizerError::TokenOutOfRange(self.num_special_slots() as u64))?;
        let vocab = self.vocab[..keep]
            .iter()
            .map(|e| {
                // Reject before the shift can hide it.
                if e.rank < 0 {
                    return Err(TekkenizerError::MalformedVocabulary(format!(
                        "negative rank: {}",
                        e.rank
                    )));
                }
                let rank = e
                    .rank
                    .checked_add(offset)
                    .ok_or(TekkenizerError::TokenOutOfRange(e.rank as u64))?;
                Ok(TekkenVocabEntry {
                    rank,
                    token_bytes: e.token_bytes.clone(),
                    token_str: None,
                })
            })
            .collect::<TKResult<Vec<_>>>()?;

        let shifted = TekkenJson {
            config: self.config.clone(),
            vocab,
            multimodal: None,
        };

        load_flat_vocab(shifted.to_tiktoken().as_slice())
    }
}
