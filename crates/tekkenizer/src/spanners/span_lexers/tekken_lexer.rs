//! # Tekken Word Lexer
//!
//! A hand-written scanner producing the same chunk boundaries as
//! [`MISTRAL_TEKKEN_PATTERN`](crate::pretrained::mistral::MISTRAL_TEKKEN_PATTERN)
//! under leftmost-first backtracking semantics:
//!
//! ```text
//! 1. [^\r\n\p{L}\p{N}]?[\p{Lu}\p{Lt}\p{Lm}\p{Lo}\p{M}]*[\p{Ll}\p{Lm}\p{Lo}\p{M}]+
//! 2. [^\r\n\p{L}\p{N}]?[\p{Lu}\p{Lt}\p{Lm}\p{Lo}\p{M}]+[\p{Ll}\p{Lm}\p{Lo}\p{M}]*
//! 3. \p{N}
//! 4.  ?[^\s\p{L}\p{N}]+[\r\n/]*
//! 5. \s*[\r\n]+
//! 6. \s+(?!\S)
//! 7. \s+
//! ```
//!
//! Every character starts a match of some rule, so the lexer never emits gaps.

use unicode_general_category::{GeneralCategory, get_general_category};

use crate::spanners::span_lexers::SpanLexer;

fn is_letter(c: char) -> bool {
    use GeneralCategory::*;
    matches!(
        get_general_category(c),
        UppercaseLetter | LowercaseLetter | TitlecaseLetter | ModifierLetter | OtherLetter
    )
}

fn is_number(c: char) -> bool {
    use GeneralCategory::*;
    matches!(
        get_general_category(c),
        DecimalNumber | LetterNumber | OtherNumber
    )
}

/// `[\p{Lu}\p{Lt}\p{Lm}\p{Lo}\p{M}]`
fn is_upper_class(c: char) -> bool {
    use GeneralCategory::*;
    matches!(
        get_general_category(c),
        UppercaseLetter
            | TitlecaseLetter
            | ModifierLetter
            | OtherLetter
            | NonspacingMark
            | SpacingMark
            | EnclosingMark
    )
}

/// `[\p{Ll}\p{Lm}\p{Lo}\p{M}]`
fn is_lower_class(c: char) -> bool {
    use GeneralCategory::*;
    matches!(
        get_general_category(c),
        LowercaseLetter
            | ModifierLetter
            | OtherLetter
            | NonspacingMark
            | SpacingMark
            | EnclosingMark
    )
}

fn is_newline(c: char) -> bool {
    c == '\r' || c == '\n'
}

/// `[^\r\n\p{L}\p{N}]`
fn is_lead(c: char) -> bool {
    !is_newline(c) && !is_letter(c) && !is_number(c)
}

/// `[^\s\p{L}\p{N}]`
fn is_symbol(c: char) -> bool {
    !c.is_whitespace() && !is_letter(c) && !is_number(c)
}

fn char_at(
    text: &str,
    pos: usize,
) -> Option<char> {
    text[pos..].chars().next()
}

/// The byte end of the maximal run of `pred` characters starting at `pos`.
fn run_end(
    text: &str,
    pos: usize,
    pred: impl Fn(char) -> bool,
) -> usize {
    text[pos..]
        .char_indices()
        .find(|&(_, c)| !pred(c))
        .map_or(text.len(), |(i, _)| pos + i)
}

/// The byte position of the character ending at `pos`.
fn prev_boundary(
    text: &str,
    pos: usize,
) -> usize {
    text[..pos]
        .chars()
        .next_back()
        .map_or(pos, |c| pos - c.len_utf8())
}

/// Start positions to try for the optional leading character of rules 1 and 2.
fn lead_options(
    start: usize,
    first: char,
) -> [Option<usize>; 2] {
    if is_lead(first) {
        [Some(start + first.len_utf8()), Some(start)]
    } else {
        [Some(start), None]
    }
}

/// Rule 1: optional lead, upper run (backtracking), then a non-empty lower run.
fn match_cased_word(
    text: &str,
    start: usize,
    first: char,
) -> Option<usize> {
    for from in lead_options(start, first).into_iter().flatten() {
        let upper_end = run_end(text, from, is_upper_class);
        let mut pos = upper_end;
        loop {
            let lower_end = run_end(text, pos, is_lower_class);
            if lower_end > pos {
                return Some(lower_end);
            }
            if pos == from {
                break;
            }
            pos = prev_boundary(text, pos);
        }
    }
    None
}

/// Rule 2: optional lead, a non-empty upper run, then an optional lower run.
fn match_upper_word(
    text: &str,
    start: usize,
    first: char,
) -> Option<usize> {
    for from in lead_options(start, first).into_iter().flatten() {
        let upper_end = run_end(text, from, is_upper_class);
        if upper_end > from {
            return Some(run_end(text, upper_end, is_lower_class));
        }
    }
    None
}

/// Rule 4: optional space, symbols, then trailing line breaks and slashes.
fn match_symbols(
    text: &str,
    start: usize,
    first: char,
) -> Option<usize> {
    let from = if first == ' ' { start + 1 } else { start };
    let symbol_end = run_end(text, from, is_symbol);
    if symbol_end == from {
        return None;
    }
    Some(run_end(text, symbol_end, |c| is_newline(c) || c == '/'))
}

/// Rules 5, 6 and 7, over the whitespace run at `start`.
fn match_whitespace(
    text: &str,
    start: usize,
) -> Option<usize> {
    let ws_end = run_end(text, start, char::is_whitespace);
    if ws_end == start {
        return None;
    }

    // 5: through the last line break in the run.
    if let Some(idx) = text[start..ws_end].rfind(['\r', '\n']) {
        return Some(start + idx + 1);
    }

    // 6: not followed by a non-space.
    if ws_end == text.len() {
        return Some(ws_end);
    }
    let last = prev_boundary(text, ws_end);
    if last > start {
        return Some(last);
    }

    // 7
    Some(ws_end)
}

/// Native lexer for the Mistral Tekken split pattern.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TekkenLexer;

impl TekkenLexer {
    /// The byte end of the chunk starting at `start`.
    ///
    /// `start` must be a char boundary strictly inside `text`.
    pub fn chunk_end(
        text: &str,
        start: usize,
    ) -> usize {
        let Some(first) = char_at(text, start) else {
            return start;
        };

        match_cased_word(text, start, first)
            .or_else(|| match_upper_word(text, start, first))
            .or_else(|| is_number(first).then(|| start + first.len_utf8()))
            .or_else(|| match_symbols(text, start, first))
            .or_else(|| match_whitespace(text, start))
            .unwrap_or(start + first.len_utf8())
    }
}

impl SpanLexer for TekkenLexer {
    fn next_span(
        &self,
        text: &str,
        offset: usize,
    ) -> Option<(usize, usize)> {
        if offset >= text.len() {
            return None;
        }
        Some((offset, Self::chunk_end(text, offset)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        pretrained::mistral::MISTRAL_TEKKEN_PATTERN,
        spanners::{SpanRef, span_lexers::RegexSpanLexer},
    };

    fn words(text: &str) -> Vec<&str> {
        let mut out = Vec::new();
        TekkenLexer.for_each_word(text, 0, &mut |span| {
            match span {
                SpanRef::Word(r) => out.push(&text[r]),
                other => panic!("unexpected {other:?}"),
            }
            true
        });
        out
    }

    fn regex_words(text: &str) -> Vec<&str> {
        let lexer = RegexSpanLexer::compile(&MISTRAL_TEKKEN_PATTERN.to_pattern()).unwrap();
        let mut out = Vec::new();
        lexer.for_each_word(text, 0, &mut |span| {
            let r: core::ops::Range<usize> = span.into();
            out.push(&text[r]);
            true
        });
        out
    }

    #[test]
    fn test_words() {
        assert_eq!(words("Hello world"), vec!["Hello", " world"]);
        assert_eq!(words("HELLO there"), vec!["HELLO", " there"]);
        assert_eq!(words("HELLOworld"), vec!["HELLOworld"]);
        assert_eq!(words("1234"), vec!["1", "2", "3", "4"]);
        assert_eq!(words("a, b!"), vec!["a", ",", " b", "!"]);
        assert_eq!(words("x  y"), vec!["x", " ", " y"]);
        assert_eq!(words("end.  "), vec!["end", ".", "  "]);
        assert_eq!(words("a \n\n b"), vec!["a", " \n\n", " b"]);
        assert_eq!(words("path/to\n"), vec!["path", "/to", "\n"]);
        assert_eq!(words(" ...\n\nx"), vec![" ...\n\n", "x"]);
        assert_eq!(words("\tfoo"), vec!["\tfoo"]);
        assert_eq!(words("日本語"), vec!["日本語"]);
        assert_eq!(words("cafe\u{301}!"), vec!["cafe\u{301}", "!"]);
        assert!(words("").is_empty());
    }

    #[test]
    fn test_matches_regex_on_samples() {
        let samples = [
            "Hello world",
            "  leading and trailing  ",
            "Mixed CASE words LikeThis and ǅemal ʰmod",
            "numbers 12 345 ٣²Ⅻ",
            "punct!? ...\n\n/paths/like/this\r\n",
            "tabs\tand\u{a0}nbsp\u{2028}sep",
            "a \n \n b",
            "[INST] what? [/INST]",
            "emoji 🦀 crab",
            "\n",
            " ",
            "x\n  ",
            "é É e\u{301} \u{301}x",
        ];
        for text in samples {
            assert_eq!(words(text), regex_words(text), "{text:?}");
        }
    }

    proptest::proptest! {
        #![proptest_config(proptest::prelude::ProptestConfig::with_cases(2000))]

        #[test]
        fn structural_invariants(text in "\\PC{0,200}") {
            let mut spans = Vec::new();
            let (done, used) = TekkenLexer.for_each_word(&text, 0, &mut |s| {
                spans.push(s);
                true
            });
            proptest::prop_assert!(done);
            proptest::prop_assert_eq!(used, text.len());

            let mut last = 0;
            for span in spans {
                let is_word = matches!(span, SpanRef::Word(_));
                let r: core::ops::Range<usize> = span.into();
                proptest::prop_assert!(is_word);
                proptest::prop_assert_eq!(r.start, last);
                proptest::prop_assert!(r.start < r.end);
                proptest::prop_assert!(text.is_char_boundary(r.end));
                last = r.end;
            }
            proptest::prop_assert_eq!(last, text.len());
        }

        #[test]
        fn matches_regex(
            text in "[a-zA-Z0-9 \t\r\n.,!?'/$€_ǅʰéÉ日本語٣²Ⅻ\u{a0}\u{2028}\u{301}\u{903}-]{0,64}"
        ) {
            proptest::prop_assert_eq!(words(&text), regex_words(&text), "{:?}", text);
        }
    }
}
