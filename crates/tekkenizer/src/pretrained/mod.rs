//! # Public Encoding Schemes
//!
//! Patterns, special words, and vocabulary formats of the known schemes.
//!
//! ## Loading a Codec
//!
//! Vocabulary files are supplied by the caller; nothing is downloaded.
//!
//! ```rust,no_run
//! use tekkenizer::{
//!     TKResult,
//!     codec::{Codec, CodecOptions},
//!     pretrained::{EncodingName, encoding_for_model},
//! };
//!
//! fn example() -> TKResult<Codec<u32>> {
//!     let encoding: EncodingName = encoding_for_model("mistral-nemo")?;
//!     encoding.load_codec_path("tekken.json", CodecOptions::default())
//! }
//! ```

mod encodings;
pub mod mistral;
mod models;
pub mod openai;

#[doc(inline)]
pub use encodings::*;
#[doc(inline)]
pub use models::*;
