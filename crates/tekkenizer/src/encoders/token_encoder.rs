//! # Token Encoder Trait

use std::sync::Arc;

use crate::{TKResult, types::TokenType, vocab::SpecialVocab};

/// Initial output capacity is `text.len() / EXPECTED_BYTES_PER_TOKEN`.
pub const EXPECTED_BYTES_PER_TOKEN: usize = 3;

/// A trait for token encoders.
pub trait TokenEncoder<T: TokenType>: Send + Sync {
    /// Return the attached special vocab.
    fn special_vocab(&self) -> &SpecialVocab<T>;

    /// Encode text, appending to a target buffer.
    ///
    /// ## Arguments
    /// * `text` - The string slice to encode.
    /// * `tokens` - The target token buffer to append to.
    ///
    /// ## Returns
    /// * `Err(UnencodableByte)` - if a chunk cannot be reduced to tokens;
    ///   `tokens` may then hold a partial prefix.
    fn try_encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) -> TKResult<()>;

    /// Encode text into tokens.
    fn try_encode(
        &self,
        text: &str,
    ) -> TKResult<Vec<T>> {
        let mut tokens = Vec::with_capacity(text.len() / EXPECTED_BYTES_PER_TOKEN + 1);
        self.try_encode_append(text, &mut tokens)?;
        Ok(tokens)
    }

    /// Encode a batch of text into tokens.
    ///
    /// ## Returns
    /// The first error encountered, if any.
    fn try_encode_batch(
        &self,
        batch: &[&str],
    ) -> TKResult<Vec<Vec<T>>> {
        batch.iter().map(|s| self.try_encode(s)).collect()
    }
}

impl<T, E> TokenEncoder<T> for Arc<E>
where
    T: TokenType,
    E: TokenEncoder<T> + ?Sized,
{
    fn special_vocab(&self) -> &SpecialVocab<T> {
        (**self).special_vocab()
    }

    fn try_encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) -> TKResult<()> {
        (**self).try_encode_append(text, tokens)
    }

    fn try_encode_batch(
        &self,
        batch: &[&str],
    ) -> TKResult<Vec<Vec<T>>> {
        (**self).try_encode_batch(batch)
    }
}
