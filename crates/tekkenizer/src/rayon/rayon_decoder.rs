//! # Parallel Decoder

use std::marker::PhantomData;

use ::rayon::prelude::*;

use crate::{TKResult, decoders::TokenDecoder, types::TokenType};

/// Batch-Level Parallel Decoder Wrapper.
///
/// Enables ``rayon`` decoding of batches.
#[derive(Clone)]
pub struct ParallelRayonDecoder<T: TokenType, D: TokenDecoder<T>> {
    /// Wrapped decoder.
    pub inner: D,

    _marker: PhantomData<T>,
}

impl<T, D> ParallelRayonDecoder<T, D>
where
    T: TokenType,
    D: TokenDecoder<T>,
{
    /// Create a new parallel token decoder.
    ///
    /// ## Arguments
    /// * `inner` - The token decoder to wrap.
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }
}

impl<T, D> TokenDecoder<T> for ParallelRayonDecoder<T, D>
where
    T: TokenType,
    D: TokenDecoder<T>,
{
    fn try_decode_append_bytes(
        &self,
        tokens: &[T],
        buf: &mut Vec<u8>,
    ) -> TKResult<()> {
        self.inner.try_decode_append_bytes(tokens, buf)
    }

    fn try_decode_batch_to_bytes(
        &self,
        batch: &[Vec<T>],
    ) -> TKResult<Vec<Vec<u8>>> {
        batch
            .par_iter()
            .map(|tokens| self.inner.try_decode_to_bytes(tokens))
            .collect()
    }

    fn try_decode_batch_to_strings(
        &self,
        batch: &[Vec<T>],
    ) -> TKResult<Vec<String>> {
        batch
            .par_iter()
            .map(|tokens| self.inner.try_decode_to_string(tokens))
            .collect()
    }
}
