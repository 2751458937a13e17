use std::sync::Arc;

use crate::{
    TKResult,
    encoders::{
        TokenEncoder,
        token_span_encoder::{SpanEncoderSelector, span_encoders::SpanEncoderBuilder},
    },
    spanners::TextSpanner,
    types::TokenType,
    vocab::{SpecialVocab, Vocabulary},
};

/// A [`TokenEncoder`] that composes a [`TextSpanner`] with a [`SpanEncoder`](super::SpanEncoder).
///
/// Each call builds its own span encoder, so concurrent calls share only
/// read-only state.
pub struct TokenSpanEncoder<T>
where
    T: TokenType,
{
    /// The reference vocabulary.
    vocab: Arc<Vocabulary<T>>,

    /// The special words.
    specials: SpecialVocab<T>,

    /// Text Spanner.
    spanner: Arc<dyn TextSpanner>,

    se_builder: SpanEncoderBuilder<T>,
}

impl<T: TokenType> TokenSpanEncoder<T> {
    /// Create a new encoder using the selected [`SpanEncoder`](super::SpanEncoder).
    pub fn new_with_selector(
        spanner: Arc<dyn TextSpanner>,
        vocab: Arc<Vocabulary<T>>,
        specials: SpecialVocab<T>,
        selector: SpanEncoderSelector,
    ) -> Self {
        Self::new_with_builder(spanner, vocab, specials, selector.span_encoder_builder())
    }

    /// Create a new encoder.
    pub fn new_with_builder(
        spanner: Arc<dyn TextSpanner>,
        vocab: Arc<Vocabulary<T>>,
        specials: SpecialVocab<T>,
        se_builder: SpanEncoderBuilder<T>,
    ) -> Self {
        Self {
            vocab,
            specials,
            spanner,
            se_builder,
        }
    }

    /// Get the reference vocabulary.
    pub fn vocab(&self) -> &Arc<Vocabulary<T>> {
        &self.vocab
    }
}

impl<T: TokenType> TokenEncoder<T> for TokenSpanEncoder<T> {
    fn special_vocab(&self) -> &SpecialVocab<T> {
        &self.specials
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip(self, text, tokens))
    )]
    fn try_encode_append(
        &self,
        text: &str,
        tokens: &mut Vec<T>,
    ) -> TKResult<()> {
        let mut se = (self.se_builder)();

        let mut result = Ok(());
        self.spanner.for_each_split_span(text, &mut |span_ref| {
            match se.encode_append_span_ref(&self.vocab, &self.specials, text, span_ref, tokens) {
                Ok(()) => true,
                Err(e) => {
                    result = Err(e);
                    false
                }
            }
        });
        result
    }
}
