//! # Text Spanner Trait

use core::ops::Range;

/// Span Label/Range Reference for [`TextSpanner`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum SpanRef {
    /// A chunk matched by the word lexer.
    Word(Range<usize>),

    /// A special word.
    Special(Range<usize>),

    /// Text the word lexer did not match.
    Gap(Range<usize>),
}

impl SpanRef {
    /// The byte range of the span.
    pub fn range(&self) -> &Range<usize> {
        match self {
            SpanRef::Word(range) => range,
            SpanRef::Special(range) => range,
            SpanRef::Gap(range) => range,
        }
    }
}

impl From<SpanRef> for Range<usize> {
    fn from(span: SpanRef) -> Self {
        match span {
            SpanRef::Word(range) => range,
            SpanRef::Special(range) => range,
            SpanRef::Gap(range) => range,
        }
    }
}

/// Splits text into an ordered, gapless sequence of [`SpanRef`]s.
pub trait TextSpanner: Send + Sync {
    /// Iterate over all split [`SpanRef`]s in the text.
    ///
    /// ## Arguments
    /// * `text` - the text to split.
    /// * `f` - the function to apply to each span;
    ///   halts when the function returns `false`.
    ///
    /// ## Returns
    /// ``(completed, consumed)`` where:
    /// - `consumed` is the number of bytes covered by spans accepted by `f`;
    /// - `completed` is if all spans were accepted.
    fn for_each_split_span(
        &self,
        text: &str,
        f: &mut dyn FnMut(SpanRef) -> bool,
    ) -> (bool, usize);

    /// Split text into spans.
    fn split_spans(
        &self,
        text: &str,
    ) -> Vec<SpanRef> {
        let mut spans = Vec::with_capacity(text.len() / 4);
        self.for_each_split_span(text, &mut |span_ref| {
            spans.push(span_ref);
            true
        });
        spans
    }
}
