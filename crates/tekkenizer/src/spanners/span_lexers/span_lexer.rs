//! # `SpanLexer` trait

use crate::{spanners::SpanRef, support::ranges::offset_range};

/// Word-scanning plugin trait.
///
/// Implementors provide word-level text segmentation. The default
/// [`for_each_word`](Self::for_each_word) loops over
/// [`next_span`](Self::next_span) matches, emitting `Word` and `Gap` spans.
pub trait SpanLexer: Send + Sync {
    /// Find the next match in `text` starting from `offset`.
    ///
    /// Returns `(start, end)` byte positions relative to `text`, or `None`.
    fn next_span(
        &self,
        text: &str,
        offset: usize,
    ) -> Option<(usize, usize)>;

    /// Scan `text` into [`Word`](SpanRef::Word) and [`Gap`](SpanRef::Gap) spans.
    ///
    /// ## Arguments
    /// * `text` - the text segment to scan (no special tokens).
    /// * `offset` - byte offset to add to emitted span ranges.
    /// * `f` - callback; return `false` to halt early.
    ///
    /// ## Returns
    /// `(completed, consumed)` where `consumed` is the byte count of
    /// accepted spans and `completed` indicates all spans were accepted.
    fn for_each_word(
        &self,
        text: &str,
        offset: usize,
        f: &mut dyn FnMut(SpanRef) -> bool,
    ) -> (bool, usize) {
        let mut last = 0;
        while last < text.len() {
            let Some((start, end)) = self.next_span(text, last) else {
                break;
            };
            if end <= start {
                break;
            }

            if last < start {
                if !f(SpanRef::Gap(offset_range(last..start, offset))) {
                    return (false, last);
                }
                last = start;
            }

            if !f(SpanRef::Word(offset_range(start..end, offset))) {
                return (false, last);
            }
            last = end;
        }

        if last < text.len() {
            if !f(SpanRef::Gap(offset_range(last..text.len(), offset))) {
                return (false, last);
            }
            last = text.len();
        }

        (true, last)
    }
}
