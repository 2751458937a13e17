//! # `tekkenizer` BPE Tokenizer Codec
//!
//! Byte-level BPE encoding and decoding for `tiktoken`-style flat
//! vocabularies and Mistral "Tekken" JSON vocabularies.
//!
//! See:
//! * [`vocab`] to load and save [`vocab::Vocabulary`] rank tables.
//! * [`spanners`] to split text into words and special tokens.
//! * [`encoders`] to encode text into tokens.
//! * [`decoders`] to decode tokens into text.
//! * [`codec`] for the bundled [`Codec`] front door.
//!
//! The known public schemes, and the model names that use them, are in:
//! * [`pretrained`]
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//! * ``rayon``
//!
//! #### feature: ``ahash``
//!
//! This swaps all HashMap/HashSet implementations for ``ahash``.
//!
//! This is done by the ``types::TKHash{*}`` type alias machinery.
//!
//! #### feature: ``foldhash``
//!
//! This swaps all HashMap/HashSet implementations for ``foldhash``;
//! ``ahash`` wins if both are enabled.
//!
//! #### feature: ``rayon``
//!
//! This enables batch parallelism wrappers using the ``rayon`` crate.
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//! This is only useful for timing tracing of the library itself.
//!
//! ## Encoding With a Mistral Vocabulary
//!
//! ```rust,no_run
//! use tekkenizer::{Codec, CodecOptions, EncodingName, TKResult};
//!
//! fn example() -> TKResult<()> {
//!     let codec: Codec<u32> = EncodingName::MistralTekken
//!         .load_codec_path("tekken.json", CodecOptions::default())?;
//!
//!     let (tokens, pieces) = codec.encode("<s>Hello world")?;
//!     assert_eq!(tokens.len(), pieces.len());
//!     assert_eq!(codec.decode(&tokens)?, "<s>Hello world");
//!     Ok(())
//! }
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod codec;
pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod pretrained;
pub mod spanners;
pub mod support;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use codec::{Codec, CodecCell, CodecOptions};
#[doc(inline)]
pub use decoders::TokenDecoder;
#[doc(inline)]
pub use encoders::TokenEncoder;
#[doc(inline)]
pub use errors::{TKResult, TekkenizerError};
#[doc(inline)]
pub use pretrained::{EncodingName, encoding_for_model};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::{SpecialVocab, Vocabulary};
