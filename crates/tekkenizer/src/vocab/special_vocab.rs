//! # Special Words Vocabulary

use crate::{
    TKResult,
    TekkenizerError,
    types::{TokenType, hash_map_new, token_from_usize, token_to_u64},
    vocab::{SpanTokenMap, TokenSpanMap, Vocabulary},
};

/// Token vocabulary for special words.
///
/// Special words are matched verbatim in input text and never byte-merged.
/// Both the word and the id of each entry are unique.
#[derive(Debug, Clone)]
pub struct SpecialVocab<T: TokenType> {
    span_map: SpanTokenMap<T>,
    token_map: TokenSpanMap<T>,
}

impl<T: TokenType> Default for SpecialVocab<T> {
    fn default() -> Self {
        Self {
            span_map: hash_map_new(),
            token_map: hash_map_new(),
        }
    }
}

impl<T: TokenType> PartialEq for SpecialVocab<T> {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.span_map == other.span_map
    }
}

impl<T: TokenType> SpecialVocab<T> {
    /// Build a special vocab from `(word, id)` pairs.
    ///
    /// ## Arguments
    /// * `words` - the special words and their `usize` ids.
    ///
    /// ## Returns
    /// * `Err(SpecialTokenConflict)` - on a repeated word or id.
    /// * `Err(TokenOutOfRange)` - if an id does not fit `T`.
    pub fn from_words<I, S>(words: I) -> TKResult<Self>
    where
        I: IntoIterator<Item = (S, usize)>,
        S: AsRef<str>,
    {
        let mut vocab = Self::default();
        for (word, id) in words {
            vocab.add_str_word(word.as_ref(), token_from_usize(id)?)?;
        }
        Ok(vocab)
    }

    /// Add a word to the vocab.
    ///
    /// ## Arguments
    /// * `word` - The word string to add.
    /// * `token` - The token value to assign to the word.
    pub fn add_str_word(
        &mut self,
        word: &str,
        token: T,
    ) -> TKResult<()> {
        if word.is_empty() {
            return Err(TekkenizerError::SpecialTokenConflict(
                "empty special word".to_string(),
            ));
        }
        if self.span_map.contains_key(word.as_bytes()) {
            return Err(TekkenizerError::SpecialTokenConflict(format!(
                "duplicate special word: {word:?}"
            )));
        }
        if self.token_map.contains_key(&token) {
            return Err(TekkenizerError::SpecialTokenConflict(format!(
                "duplicate special id: {token}"
            )));
        }
        self.span_map.insert(word.as_bytes().to_vec(), token);
        self.token_map.insert(token, word.as_bytes().to_vec());
        Ok(())
    }

    /// Get the number of special words in the vocab.
    pub fn len(&self) -> usize {
        self.span_map.len()
    }

    /// Check if the vocab is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the associated token for the word, if any.
    pub fn lookup_token(
        &self,
        word: &[u8],
    ) -> Option<T> {
        self.span_map.get(word).copied()
    }

    /// Get the associated word for a token, if any.
    pub fn lookup_span(
        &self,
        token: T,
    ) -> Option<&[u8]> {
        self.token_map.get(&token).map(|s| s.as_slice())
    }

    /// Iterate over `(word, token)` pairs, in no particular order.
    pub fn span_pairs(&self) -> impl Iterator<Item = (&[u8], T)> + '_ {
        self.span_map.iter().map(|(s, &t)| (s.as_slice(), t))
    }

    /// The special words, sorted by id.
    pub fn words(&self) -> Vec<String> {
        let mut pairs: Vec<(&[u8], T)> = self.span_pairs().collect();
        pairs.sort_by_key(|&(_, t)| t);
        pairs
            .into_iter()
            .map(|(s, _)| String::from_utf8_lossy(s).into_owned())
            .collect()
    }

    /// Check that no special id or word is also a vocabulary entry.
    ///
    /// ## Returns
    /// * `Err(SpecialTokenConflict)` - naming the first colliding id.
    pub fn check_disjoint(
        &self,
        vocab: &Vocabulary<T>,
    ) -> TKResult<()> {
        for (word, token) in self.span_pairs() {
            if vocab.lookup_id(token).is_some() {
                return Err(TekkenizerError::SpecialTokenConflict(format!(
                    "special id {} for {:?} is also a vocabulary id",
                    token_to_u64(token),
                    String::from_utf8_lossy(word)
                )));
            }
        }
        Ok(())
    }
}
