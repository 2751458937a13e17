//! # Parallel Encoder

use std::marker::PhantomData;

use ::rayon::prelude::*;

use crate::{
    TKResult,
    encoders::TokenEncoder,
    types::TokenType,
    vocab::SpecialVocab,
};

/// Batch-Level Parallel Encoder Wrapper.
///
/// Single texts are encoded by the inner encoder; batches fan out
/// over the ``rayon`` pool.
#[derive(Clone)]
pub struct ParallelRayonEncoder<T: TokenType, E: TokenEncoder<T>> {
    /// Inner encoder.
    pub inner: E,

    _marker: PhantomData<T>,
}

impl<T, E> ParallelRayonEncoder<T, E>
where
    T: TokenType,
    E: TokenEncoder<T>,
{
    /// Create a new parallel encoder.
    ///
    /// ## Arguments
    /// * `inner` - The token encoder to wrap.
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            _marker: PhantomData,
        }
    }
}

impl<T, E> TokenEncoder<T> for ParallelRayonEncoder<T, E>
where
    T: TokenType,
    E: TokenEncoder<T>,
{
    fn special_vocab(&self) -> &SpecialVocab<T> {
        self.inner.special_vocab()
    }

    fn try_encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) -> TKResult<()> {
        self.inner.try_encode_append(text, tokens)
    }

    fn try_encode_batch(
        &self,
        batch: &[&str],
    ) -> TKResult<Vec<Vec<T>>> {
        batch.par_iter().map(|text| self.inner.try_encode(text)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        encoders::{SpanEncoderSelector, testing::common_test_encoder},
        types::{check_is_send, check_is_sync},
    };

    #[test]
    fn test_parallel_batch_matches_serial() {
        let serial = common_test_encoder::<u32>(SpanEncoderSelector::Default, false);
        let parallel = ParallelRayonEncoder::new(serial.clone());
        check_is_send(&parallel);
        check_is_sync(&parallel);

        let batch = ["Hello world", "the thing is", "<s>12345</s>", ""];
        assert_eq!(
            parallel.try_encode_batch(&batch).unwrap(),
            serial.try_encode_batch(&batch).unwrap()
        );
    }
}
