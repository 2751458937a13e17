//! # Token Decoders
//!
//! * [`DictionaryDecoder`] - a single `{ T -> Vec<u8> }` table over vocabulary and specials.
//! * [`ParallelRayonDecoder`](crate::rayon::ParallelRayonDecoder) - batch parallelism
//!   around any [`TokenDecoder`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use tekkenizer::{
//!     TKResult,
//!     decoders::{DictionaryDecoder, TokenDecoder},
//!     vocab::{SpecialVocab, Vocabulary},
//! };
//!
//! fn example(
//!     vocab: &Vocabulary<u32>,
//!     specials: &SpecialVocab<u32>,
//!     tokens: &[u32],
//! ) -> TKResult<String> {
//!     let decoder = DictionaryDecoder::from_vocab(vocab, specials);
//!     decoder.try_decode_to_string(tokens)
//! }
//! ```

mod dictionary_decoder;
mod token_decoder;

#[doc(inline)]
pub use dictionary_decoder::*;
#[doc(inline)]
pub use token_decoder::*;
