use crate::{
    TKResult,
    TekkenizerError,
    spanners::SpanRef,
    types::TokenType,
    vocab::{SpecialVocab, Vocabulary},
};

/// A trait for encoding text spans into tokens.
///
/// Implementations hold reusable scratch buffers; they are not shared
/// between threads, but may move between them.
pub trait SpanEncoder<T: TokenType>: Send {
    /// Encodes a compound span (one with no exact vocabulary match).
    ///
    /// ## Arguments
    /// * `vocab` - The reference vocabulary.
    /// * `span` - The byte span.
    /// * `tokens` - The target token buffer to append to.
    ///
    /// ## Returns
    /// * `Err(UnencodableByte)` - if a byte of `span` has no single-byte token;
    ///   the offset is relative to `span`.
    fn encode_append_compound_span(
        &mut self,
        vocab: &Vocabulary<T>,
        span: &[u8],
        tokens: &mut Vec<T>,
    ) -> TKResult<()>;

    /// Encodes a single [`SpanRef`].
    ///
    /// ## Arguments
    /// * `vocab` - The reference vocabulary.
    /// * `specials` - The special words.
    /// * `text` - The source slice.
    /// * `span_ref` - The labeling and sub-slicing of a span in `text`.
    /// * `tokens` - The target token buffer to append to.
    fn encode_append_span_ref(
        &mut self,
        vocab: &Vocabulary<T>,
        specials: &SpecialVocab<T>,
        text: &str,
        span_ref: SpanRef,
        tokens: &mut Vec<T>,
    ) -> TKResult<()> {
        match span_ref {
            SpanRef::Word(range) | SpanRef::Gap(range) => {
                let base = range.start;
                let span = text[range].as_bytes();
                if let Some(token) = vocab.lookup(span) {
                    // Whole-span hit; also covers tokens with no pair derivation.
                    tokens.push(token);
                    Ok(())
                } else {
                    self.encode_append_compound_span(vocab, span, tokens)
                        .map_err(|e| rebase_offset(e, base))
                }
            }
            SpanRef::Special(range) => {
                let span = text[range].as_bytes();
                let token = specials.lookup_token(span).ok_or_else(|| {
                    TekkenizerError::SpecialTokenConflict(format!(
                        "unregistered special word: {:?}",
                        String::from_utf8_lossy(span)
                    ))
                })?;
                tokens.push(token);
                Ok(())
            }
        }
    }
}

/// Push the single-byte tokens of `span`.
///
/// ## Returns
/// * `Err(UnencodableByte)` - at the first byte with no token.
pub fn append_byte_tokens<T: TokenType>(
    vocab: &Vocabulary<T>,
    span: &[u8],
    tokens: &mut Vec<T>,
) -> TKResult<()> {
    tokens.reserve(span.len());
    for (offset, &byte) in span.iter().enumerate() {
        let token = vocab
            .lookup_byte(byte)
            .ok_or(TekkenizerError::UnencodableByte { byte, offset })?;
        tokens.push(token);
    }
    Ok(())
}

fn rebase_offset(
    err: TekkenizerError,
    base: usize,
) -> TekkenizerError {
    match err {
        TekkenizerError::UnencodableByte { byte, offset } => TekkenizerError::UnencodableByte {
            byte,
            offset: base + offset,
        },
        err => err,
    }
}
