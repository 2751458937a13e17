//! # Merge-scan [`SpanEncoder`].
//!
//! Re-scans every adjacent pair for the best available merge,
//! iterating until no more merges remain.

use std::marker::PhantomData;

use crate::{
    TKResult,
    encoders::token_span_encoder::span_encoders::{SpanEncoder, append_byte_tokens},
    types::TokenType,
    vocab::Vocabulary,
};

/// A [`SpanEncoder`] which re-scans for merges after every merge.
///
/// This is the reference implementation: simple, quadratic in span length.
#[derive(Default, Debug, Clone)]
pub struct MergeScanSpanEncoder<T: TokenType> {
    marker: PhantomData<T>,
}

impl<T: TokenType> SpanEncoder<T> for MergeScanSpanEncoder<T> {
    fn encode_append_compound_span(
        &mut self,
        vocab: &Vocabulary<T>,
        span: &[u8],
        tokens: &mut Vec<T>,
    ) -> TKResult<()> {
        // The output buffer tail is the working memory.
        let start = tokens.len();
        append_byte_tokens(vocab, span, tokens)?;

        while tokens.len() >= start + 2 {
            // Lowest rank; `min` on (rank, idx) breaks ties leftmost.
            let Some((token, idx)) = tokens[start..]
                .windows(2)
                .enumerate()
                .filter_map(|(idx, w)| vocab.lookup_pair(&(w[0], w[1])).map(|t| (t, idx)))
                .min()
            else {
                break;
            };

            let idx = start + idx;
            tokens[idx] = token;
            tokens.remove(idx + 1);
        }
        Ok(())
    }
}
