//! # Lexer Text Spanner

use std::sync::Arc;

use crate::{
    spanners::{SpanRef, TextSpanner, span_lexers::SpanLexer},
    support::ranges::offset_range,
};

/// A [`TextSpanner`] composed over [`SpanLexer`] plugins.
///
/// The special lexer (if any) splits the input into segments at special
/// words; the word lexer chunks the text between them.
#[derive(Clone)]
pub struct LexerTextSpanner {
    word_lexer: Arc<dyn SpanLexer>,
    special_lexer: Option<Arc<dyn SpanLexer>>,
}

impl LexerTextSpanner {
    /// Build a new [`LexerTextSpanner`].
    ///
    /// ## Arguments
    /// * `word_lexer` - The lexer for word splitting.
    /// * `special_lexer` - The optional lexer for special word matching.
    pub fn new(
        word_lexer: Arc<dyn SpanLexer>,
        special_lexer: Option<Arc<dyn SpanLexer>>,
    ) -> Self {
        Self {
            word_lexer,
            special_lexer,
        }
    }

    fn next_special_span(
        &self,
        text: &str,
    ) -> Option<(usize, usize)> {
        self.special_lexer
            .as_ref()
            .and_then(|s| s.next_span(text, 0))
    }
}

impl TextSpanner for LexerTextSpanner {
    fn for_each_split_span(
        &self,
        text: &str,
        f: &mut dyn FnMut(SpanRef) -> bool,
    ) -> (bool, usize) {
        let mut current = text;
        let mut offset = 0;

        while let Some((start, end)) = self.next_special_span(current) {
            let pre = &current[..start];

            let (cont, used) = self.word_lexer.for_each_word(pre, offset, f);
            if !cont {
                return (false, offset + used);
            }

            if !f(SpanRef::Special(offset_range(start..end, offset))) {
                return (false, offset + start);
            }

            current = &current[end..];
            offset += end;
        }

        let (cont, used) = self.word_lexer.for_each_word(current, offset, f);
        (cont, offset + used)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        spanners::span_lexers::{RegexSpanLexer, SpecialScanner},
        vocab::SpecialVocab,
    };

    fn spanner(pattern: &str) -> LexerTextSpanner {
        let specials =
            SpecialVocab::<u32>::from_words([("<|FNORD|>", 4000), ("<|NORP|>", 4001)]).unwrap();
        let special: Arc<dyn SpanLexer> =
            Arc::new(SpecialScanner::from_specials(&specials).unwrap().unwrap());
        LexerTextSpanner::new(
            Arc::new(RegexSpanLexer::compile(&pattern.into()).unwrap()),
            Some(special),
        )
    }

    #[test]
    fn test_for_each_split_span() {
        use SpanRef::*;

        let spanner = spanner(r"\w+");

        let source = "abc 1<|FNORD|> def  <|NORP|> ghi   ";

        assert_eq!(
            spanner.split_spans(source),
            vec![
                Word(0..3),
                Gap(3..4),
                Word(4..5),
                Special(5..14),
                Gap(14..15),
                Word(15..18),
                Gap(18..20),
                Special(20..28),
                Gap(28..29),
                Word(29..32),
                Gap(32..35),
            ]
        );

        // The following are white-box tests to exercise the different halting points.

        // Word Exit
        let mut spans: Vec<SpanRef> = Vec::new();
        let res = spanner.for_each_split_span("   abc", &mut |span_ref| match span_ref {
            Word(_) => false,
            _ => {
                spans.push(span_ref);
                true
            }
        });
        assert_eq!(spans, vec![Gap(0..3)]);
        assert_eq!(res, (false, 3));

        // Special Exit
        let mut spans: Vec<SpanRef> = Vec::new();
        let res = spanner.for_each_split_span("abc   def<|FNORD|>", &mut |span_ref| match span_ref {
            Special(_) => false,
            _ => {
                spans.push(span_ref);
                true
            }
        });
        assert_eq!(spans, vec![Word(0..3), Gap(3..6), Word(6..9)]);
        assert_eq!(res, (false, 9));

        // Trailing Gap Exit, after a special.
        let mut spans: Vec<SpanRef> = Vec::new();
        let res = spanner.for_each_split_span("<|NORP|>foo  ", &mut |span_ref| match span_ref {
            Gap(_) => false,
            _ => {
                spans.push(span_ref);
                true
            }
        });
        assert_eq!(spans, vec![Special(0..8), Word(8..11)]);
        assert_eq!(res, (false, 11));
    }

    #[test]
    fn test_completed() {
        let spanner = spanner(r"\w+");
        let res = spanner.for_each_split_span("a<|NORP|>b", &mut |_| true);
        assert_eq!(res, (true, 10));
    }
}
