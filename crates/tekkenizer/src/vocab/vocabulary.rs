//! # Rank Vocabulary

use std::{
    io::{BufRead, Write},
    path::Path,
};

use crate::{
    TKResult,
    TekkenizerError,
    types::{Pair, TokenType, hash_map_with_capacity, token_from_rank},
    vocab::{PairTokenMap, SpanTokenMap, TokenSpanMap, io},
};

/// An immutable BPE vocabulary.
///
/// Maps token byte-strings to ids and back. The id of a multi-byte token
/// doubles as its merge rank: lower ids were merged earlier in training
/// and take priority during encoding.
///
/// Built once with [`Vocabulary::build`]; there is no mutation API.
/// Share it across threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Vocabulary<T: TokenType> {
    span_map: SpanTokenMap<T>,
    token_map: TokenSpanMap<T>,
    byte_tokens: [Option<T>; 256],
    pair_map: PairTokenMap<T>,
}

impl<T: TokenType> Vocabulary<T> {
    /// Build a vocabulary from `(token-bytes, rank)` pairs.
    ///
    /// ## Arguments
    /// * `source` - the rank table; order is irrelevant.
    ///
    /// ## Returns
    /// * `Ok(Vocabulary)` - on success.
    /// * `Err(MalformedVocabulary)` - on a duplicate token, a duplicate rank,
    ///   a negative rank, or an empty token.
    /// * `Err(TokenOutOfRange)` - if a rank does not fit `T`.
    pub fn build<I, S>(source: I) -> TKResult<Self>
    where
        I: IntoIterator<Item = (S, i64)>,
        S: Into<Vec<u8>>,
    {
        let source = source.into_iter();
        let (lower, _) = source.size_hint();

        let mut span_map: SpanTokenMap<T> = hash_map_with_capacity(lower);
        let mut token_map: TokenSpanMap<T> = hash_map_with_capacity(lower);

        for (span, rank) in source {
            let span: Vec<u8> = span.into();
            if span.is_empty() {
                return Err(TekkenizerError::MalformedVocabulary(format!(
                    "empty token at rank {rank}"
                )));
            }
            let token: T = token_from_rank(rank)?;

            if token_map.contains_key(&token) {
                return Err(TekkenizerError::MalformedVocabulary(format!(
                    "duplicate rank: {rank}"
                )));
            }
            if span_map.contains_key(&span) {
                return Err(TekkenizerError::MalformedVocabulary(format!(
                    "duplicate token: {span:?}"
                )));
            }

            span_map.insert(span.clone(), token);
            token_map.insert(token, span);
        }

        let mut byte_tokens = [None; 256];
        for (span, &token) in span_map.iter() {
            if let [byte] = span.as_slice() {
                byte_tokens[*byte as usize] = Some(token);
            }
        }

        let pair_map = build_pair_map(&span_map);

        log::debug!(
            "built vocabulary: {} tokens, {} merge pairs, {} byte tokens",
            span_map.len(),
            pair_map.len(),
            byte_tokens.iter().filter(|t| t.is_some()).count()
        );

        Ok(Self {
            span_map,
            token_map,
            byte_tokens,
            pair_map,
        })
    }

    /// The number of tokens.
    pub fn len(&self) -> usize {
        self.span_map.len()
    }

    /// Is the vocabulary empty?
    pub fn is_empty(&self) -> bool {
        self.span_map.is_empty()
    }

    /// The largest token id, if any.
    pub fn max_token(&self) -> Option<T> {
        self.token_map.keys().copied().max()
    }

    /// Look up the id of a byte-string.
    pub fn lookup(
        &self,
        span: &[u8],
    ) -> Option<T> {
        self.span_map.get(span).copied()
    }

    /// Look up the byte-string of an id.
    pub fn lookup_id(
        &self,
        token: T,
    ) -> Option<&[u8]> {
        self.token_map.get(&token).map(|s| s.as_slice())
    }

    /// Look up the id of a single byte.
    pub fn lookup_byte(
        &self,
        byte: u8,
    ) -> Option<T> {
        self.byte_tokens[byte as usize]
    }

    /// Look up the id of the token formed by joining a pair of tokens.
    ///
    /// Equivalent to `lookup(span(left) ++ span(right))`.
    pub fn lookup_pair(
        &self,
        pair: &Pair<T>,
    ) -> Option<T> {
        self.pair_map.get(pair).copied()
    }

    /// Iterate over `(span, token)` entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], T)> + '_ {
        self.span_map.iter().map(|(s, &t)| (s.as_slice(), t))
    }

    /// All `(span, token)` entries, sorted by token.
    pub fn sorted_entries(&self) -> Vec<(&[u8], T)> {
        let mut entries: Vec<(&[u8], T)> = self.iter().collect();
        entries.sort_by_key(|&(_, t)| t);
        entries
    }

    /// Build from a flat-format stream.
    ///
    /// See [`io::load_flat_vocab`].
    pub fn from_flat_reader<R: BufRead>(reader: R) -> TKResult<Self> {
        io::load_flat_vocab(reader)
    }

    /// Build from a flat-format file.
    pub fn from_flat_path<P: AsRef<Path>>(path: P) -> TKResult<Self> {
        io::load_flat_vocab_path(path)
    }

    /// Write the vocabulary in the flat format, ascending by rank.
    pub fn to_flat_writer<W: Write>(
        &self,
        writer: &mut W,
    ) -> TKResult<()> {
        io::write_flat_vocab(self, writer)
    }
}

/// Derive the `(left, right) -> merged` table from a token set.
///
/// Every split of every multi-byte token whose halves are both tokens
/// contributes one entry.
fn build_pair_map<T: TokenType>(span_map: &SpanTokenMap<T>) -> PairTokenMap<T> {
    let mut pair_map: PairTokenMap<T> = hash_map_with_capacity(span_map.len());
    for (span, &token) in span_map.iter() {
        for split in 1..span.len() {
            let (left, right) = span.split_at(split);
            if let (Some(&l), Some(&r)) = (span_map.get(left), span_map.get(right)) {
                pair_map.insert((l, r), token);
            }
        }
    }
    pair_map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{types::check_is_send, types::check_is_sync, vocab::testing::test_rank_table};

    #[test]
    fn test_build_and_lookup() {
        let vocab = Vocabulary::<u32>::build([
            (b"ab".to_vec(), 5),
            (b"a".to_vec(), 0),
            (b"b".to_vec(), 1),
        ])
        .unwrap();

        check_is_send(&vocab);
        check_is_sync(&vocab);

        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.lookup(b"ab"), Some(5));
        assert_eq!(vocab.lookup(b"ba"), None);
        assert_eq!(vocab.lookup_id(0), Some(&b"a"[..]));
        assert_eq!(vocab.lookup_id(2), None);
        assert_eq!(vocab.lookup_byte(b'b'), Some(1));
        assert_eq!(vocab.lookup_byte(b'c'), None);
        assert_eq!(vocab.lookup_pair(&(0, 1)), Some(5));
        assert_eq!(vocab.lookup_pair(&(1, 0)), None);
        assert_eq!(vocab.max_token(), Some(5));
    }

    #[test]
    fn test_duplicate_token() {
        let res = Vocabulary::<u32>::build([(b"a".to_vec(), 0), (b"a".to_vec(), 1)]);
        assert!(matches!(res, Err(TekkenizerError::MalformedVocabulary(_))));
    }

    #[test]
    fn test_duplicate_rank() {
        let res = Vocabulary::<u32>::build([(b"a".to_vec(), 0), (b"b".to_vec(), 0)]);
        assert!(matches!(res, Err(TekkenizerError::MalformedVocabulary(_))));
    }

    #[test]
    fn test_negative_rank() {
        let res = Vocabulary::<u32>::build([(b"a".to_vec(), -1)]);
        assert!(matches!(res, Err(TekkenizerError::MalformedVocabulary(_))));
    }

    #[test]
    fn test_empty_token() {
        let res = Vocabulary::<u32>::build([(Vec::new(), 0)]);
        assert!(matches!(res, Err(TekkenizerError::MalformedVocabulary(_))));
    }

    #[test]
    fn test_rank_out_of_range() {
        let res = Vocabulary::<u16>::build([(b"a".to_vec(), 1 << 20)]);
        assert!(matches!(res, Err(TekkenizerError::TokenOutOfRange(_))));
    }

    #[test]
    fn test_bijection() {
        let vocab = Vocabulary::<u32>::build(test_rank_table()).unwrap();
        for (span, token) in vocab.iter() {
            assert_eq!(vocab.lookup_id(token), Some(span));
            assert_eq!(vocab.lookup(span), Some(token));
        }
        for b in 0..=255u8 {
            assert_eq!(vocab.lookup_byte(b), Some(b as u32));
        }
    }

    #[test]
    fn test_pair_map_matches_concat_lookup() {
        let vocab = Vocabulary::<u32>::build(test_rank_table()).unwrap();
        let entries = vocab.sorted_entries();
        for &(l_span, l) in &entries {
            for &(r_span, r) in &entries {
                let joined = [l_span, r_span].concat();
                assert_eq!(vocab.lookup_pair(&(l, r)), vocab.lookup(&joined));
            }
        }
    }
}
