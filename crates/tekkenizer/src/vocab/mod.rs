//! # Vocabulary
//!
//! * [`Vocabulary`] - the immutable byte-string to id mapping, with its inverse.
//! * [`SpecialVocab`] - literal control markers with reserved ids.
//! * [`io`] - the flat rank-table and Tekken JSON ingestion formats.

pub mod io;
mod special_vocab;
mod vocabulary;

#[cfg(test)]
pub(crate) mod testing;

#[doc(inline)]
pub use special_vocab::*;
#[doc(inline)]
pub use vocabulary::*;

use crate::types::{Pair, TKHashMap};

/// Type Alias for `{ Vec<u8> -> T }` maps.
pub type SpanTokenMap<T> = TKHashMap<Vec<u8>, T>;

/// Type Alias for `{ T -> Vec<u8> }` maps.
pub type TokenSpanMap<T> = TKHashMap<T, Vec<u8>>;

/// Type Alias for `{ (T, T) -> T }` merge maps.
pub type PairTokenMap<T> = TKHashMap<Pair<T>, T>;
