//! # Vocabulary IO
//!
//! Two ingestion formats converge on one rank table:
//! * [`tiktoken_io`] - the flat `<base64-token> <rank>` line format.
//! * [`tekken_io`] - Mistral's structured Tekken JSON, convertible to the flat format.

pub mod tekken_io;
pub mod tiktoken_io;

#[doc(inline)]
pub use tekken_io::*;
#[doc(inline)]
pub use tiktoken_io::*;

/// A `(token-bytes, rank)` table, as read from a vocabulary file.
pub type RankTable = Vec<(Vec<u8>, i64)>;
