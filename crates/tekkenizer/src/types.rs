//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

use crate::{TKResult, TekkenizerError};

/// A type that can be used as a token id.
///
/// These are constrained to be unsigned primitive integers;
/// such that the max token in a vocabulary is less than `T::max()`.
pub trait TokenType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> TokenType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

/// A pair of tokens.
pub type Pair<T> = (T, T);

/// Convert a signed rank into a token id.
///
/// ## Returns
/// * `Err(MalformedVocabulary)` - for negative ranks.
/// * `Err(TokenOutOfRange)` - when the rank does not fit `T`.
pub fn token_from_rank<T: TokenType>(rank: i64) -> TKResult<T> {
    if rank < 0 {
        return Err(TekkenizerError::MalformedVocabulary(format!(
            "negative rank: {rank}"
        )));
    }
    T::from_i64(rank).ok_or(TekkenizerError::TokenOutOfRange(rank as u64))
}

/// Convert a `usize` id into a token id.
pub fn token_from_usize<T: TokenType>(id: usize) -> TKResult<T> {
    T::from_usize(id).ok_or(TekkenizerError::TokenOutOfRange(id as u64))
}

/// Widen a token id to `u64` for error reporting.
pub fn token_to_u64<T: TokenType>(token: T) -> u64 {
    token.to_u64().unwrap_or(u64::MAX)
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type TKHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> TKHashMap<K, V> {
            TKHashMap::new()
        }

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> TKHashMap<K, V> {
            TKHashMap::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type TKHashSet<V> = ahash::AHashSet<V>;

    } else if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type TKHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> TKHashMap<K, V> {
            foldhash::HashMapExt::new()
        }

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> TKHashMap<K, V> {
            foldhash::HashMapExt::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type TKHashSet<V> = foldhash::HashSet<V>;

    } else {
        /// Type Alias for hash maps in this crate.
        pub type TKHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> TKHashMap<K, V> {
            TKHashMap::new()
        }

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> TKHashMap<K, V> {
            TKHashMap::with_capacity(capacity)
        }

        /// Type Alias for hash sets in this crate.
        pub type TKHashSet<V> = std::collections::HashSet<V>;
    }
}

/// Compile-time check that a value is `Send`.
pub fn check_is_send<S: Send>(_: &S) {}

/// Compile-time check that a value is `Sync`.
pub fn check_is_sync<S: Sync>(_: &S) {}

#[cfg(test)]
mod tests {
    use core::marker::PhantomData;

    use super::*;

    #[test]
    fn test_common_token_types() {
        struct IsToken<T: TokenType>(PhantomData<T>);

        let _: IsToken<u16>;
        let _: IsToken<u32>;
        let _: IsToken<u64>;
        let _: IsToken<usize>;
    }

    #[test]
    fn test_token_from_rank() {
        assert_eq!(token_from_rank::<u32>(7).unwrap(), 7);

        assert!(matches!(
            token_from_rank::<u32>(-1),
            Err(TekkenizerError::MalformedVocabulary(_))
        ));

        assert!(matches!(
            token_from_rank::<u16>(70_000),
            Err(TekkenizerError::TokenOutOfRange(70_000))
        ));
    }

    #[test]
    fn test_token_from_usize() {
        assert_eq!(token_from_usize::<u16>(13).unwrap(), 13);
        assert!(token_from_usize::<u16>(1 << 20).is_err());
        assert_eq!(token_to_u64(42u16), 42);
    }
}
