//! # Dictionary ``{ T -> Vec<u8> }`` Token Decoder

use crate::{
    TKResult,
    TekkenizerError,
    decoders::TokenDecoder,
    types::{TokenType, hash_map_with_capacity, token_to_u64},
    vocab::{SpecialVocab, TokenSpanMap, Vocabulary},
};

/// A token dictionary [`TokenDecoder<T>`].
///
/// Special words and vocabulary tokens share one table;
/// their ids are disjoint.
#[derive(Debug, Clone)]
pub struct DictionaryDecoder<T: TokenType> {
    token_to_word: TokenSpanMap<T>,
}

impl<T: TokenType> DictionaryDecoder<T> {
    /// Build a [`DictionaryDecoder`] from a vocabulary and its special words.
    ///
    /// A special id that shadows a vocabulary id decodes as the special word.
    pub fn from_vocab(
        vocab: &Vocabulary<T>,
        specials: &SpecialVocab<T>,
    ) -> Self {
        let mut token_to_word: TokenSpanMap<T> =
            hash_map_with_capacity(vocab.len() + specials.len());
        for (span, token) in vocab.iter() {
            token_to_word.insert(token, span.to_vec());
        }
        for (span, token) in specials.span_pairs() {
            token_to_word.insert(token, span.to_vec());
        }
        Self::init(token_to_word)
    }

    /// Creates a new Decoder.
    ///
    /// ## Arguments
    /// * `token_to_word` - The token to word mapping.
    pub fn init(token_to_word: TokenSpanMap<T>) -> Self {
        Self { token_to_word }
    }

    /// Look up the bytes of one token.
    pub fn lookup(
        &self,
        token: T,
    ) -> Option<&[u8]> {
        self.token_to_word.get(&token).map(|w| w.as_slice())
    }
}

impl<T: TokenType> TokenDecoder<T> for DictionaryDecoder<T> {
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all))]
    fn try_decode_append_bytes(
        &self,
        tokens: &[T],
        buf: &mut Vec<u8>,
    ) -> TKResult<()> {
        for &t in tokens {
            let word = self
                .token_to_word
                .get(&t)
                .ok_or_else(|| TekkenizerError::UnknownTokenId(token_to_u64(t)))?;
            buf.extend_from_slice(word);
        }
        Ok(())
    }
}
