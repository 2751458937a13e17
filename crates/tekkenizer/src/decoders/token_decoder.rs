//! # Token Decoder Trait

use crate::{TKResult, TekkenizerError, support::strings::string_from_utf8_lossy, types::TokenType};

/// Trait for token decoders.
pub trait TokenDecoder<T: TokenType>: Send + Sync {
    /// Decode tokens, appending their bytes to a buffer.
    ///
    /// ## Arguments
    /// * `tokens` - the tokens to decode.
    /// * `buf` - the target byte buffer.
    ///
    /// ## Returns
    /// * `Err(UnknownTokenId)` - for the first unknown token; `buf` then
    ///   holds the bytes of the tokens before it.
    fn try_decode_append_bytes(
        &self,
        tokens: &[T],
        buf: &mut Vec<u8>,
    ) -> TKResult<()>;

    /// Decode tokens into bytes, passing them through unvalidated.
    fn try_decode_to_bytes(
        &self,
        tokens: &[T],
    ) -> TKResult<Vec<u8>> {
        let mut buf = Vec::with_capacity(tokens.len() * 4);
        self.try_decode_append_bytes(tokens, &mut buf)?;
        Ok(buf)
    }

    /// Decode tokens into a string.
    ///
    /// ## Returns
    /// * `Err(InvalidUtf8)` - if the joined bytes are not well-formed UTF-8.
    fn try_decode_to_string(
        &self,
        tokens: &[T],
    ) -> TKResult<String> {
        String::from_utf8(self.try_decode_to_bytes(tokens)?)
            .map_err(|_| TekkenizerError::InvalidUtf8)
    }

    /// Decode tokens into a string, replacing malformed UTF-8 with U+FFFD.
    fn try_decode_to_string_lossy(
        &self,
        tokens: &[T],
    ) -> TKResult<String> {
        Ok(string_from_utf8_lossy(self.try_decode_to_bytes(tokens)?))
    }

    /// Decode a batch of token sequences into bytes.
    fn try_decode_batch_to_bytes(
        &self,
        batch: &[Vec<T>],
    ) -> TKResult<Vec<Vec<u8>>> {
        batch
            .iter()
            .map(|tokens| self.try_decode_to_bytes(tokens))
            .collect()
    }

    /// Decode a batch of token sequences into strings.
    ///
    /// See [`try_decode_to_string`](Self::try_decode_to_string).
    fn try_decode_batch_to_strings(
        &self,
        batch: &[Vec<T>],
    ) -> TKResult<Vec<String>> {
        batch
            .iter()
            .map(|tokens| self.try_decode_to_string(tokens))
            .collect()
    }
}

impl<T, D> TokenDecoder<T> for std::sync::Arc<D>
where
    T: TokenType,
    D: TokenDecoder<T> + ?Sized,
{
    fn try_decode_append_bytes(
        &self,
        tokens: &[T],
        buf: &mut Vec<u8>,
    ) -> TKResult<()> {
        (**self).try_decode_append_bytes(tokens, buf)
    }

    fn try_decode_batch_to_bytes(
        &self,
        batch: &[Vec<T>],
    ) -> TKResult<Vec<Vec<u8>>> {
        (**self).try_decode_batch_to_bytes(batch)
    }

    fn try_decode_batch_to_strings(
        &self,
        batch: &[Vec<T>],
    ) -> TKResult<Vec<String>> {
        (**self).try_decode_batch_to_strings(batch)
    }
}
