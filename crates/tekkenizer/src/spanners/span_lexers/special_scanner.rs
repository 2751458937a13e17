//! # Special-Token Scanner

use aho_corasick::{AhoCorasick, Input, MatchKind};

use crate::{
    TKResult,
    TekkenizerError,
    spanners::span_lexers::SpanLexer,
    types::TokenType,
    vocab::SpecialVocab,
};

/// A segment of input text, as split by a [`SpecialScanner`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a, T: TokenType> {
    /// A matched special word, by id.
    Literal(T),

    /// Plain text between (or around) special words.
    Text(&'a str),
}

/// Finds special words in text.
///
/// Matches are exact literal substrings. Among matches starting at the
/// same position, the longest word wins; so `"[INST]"` never shadows a
/// longer word sharing its prefix.
#[derive(Debug, Clone)]
pub struct SpecialScanner<T: TokenType> {
    automaton: AhoCorasick,
    tokens: Vec<T>,
}

impl<T: TokenType> SpecialScanner<T> {
    /// Build a scanner over a [`SpecialVocab`].
    ///
    /// ## Returns
    /// * `Ok(None)` - for an empty special vocab.
    pub fn from_specials(specials: &SpecialVocab<T>) -> TKResult<Option<Self>> {
        if specials.is_empty() {
            return Ok(None);
        }

        let (words, tokens): (Vec<&[u8]>, Vec<T>) = specials.span_pairs().unzip();

        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::LeftmostLongest)
            .build(&words)
            .map_err(|e| TekkenizerError::Pattern(e.to_string()))?;

        Ok(Some(Self { automaton, tokens }))
    }

    /// Find the next special word at or after `offset`.
    ///
    /// ## Returns
    /// `Some((start, end, token))`, with byte positions relative to `text`.
    pub fn find_at(
        &self,
        text: &str,
        offset: usize,
    ) -> Option<(usize, usize, T)> {
        if offset > text.len() {
            return None;
        }
        self.automaton
            .find(Input::new(text).span(offset..text.len()))
            .map(|m| (m.start(), m.end(), self.tokens[m.pattern().as_usize()]))
    }

    /// Visit the [`Segment`]s of `text` in order.
    ///
    /// The segments cover `text` exactly once; `Text` segments are never empty.
    pub fn for_each_segment<'a, F>(
        &self,
        text: &'a str,
        mut f: F,
    ) where
        F: FnMut(Segment<'a, T>),
    {
        let mut last = 0;
        while let Some((start, end, token)) = self.find_at(text, last) {
            if last < start {
                f(Segment::Text(&text[last..start]));
            }
            f(Segment::Literal(token));
            last = end;
        }
        if last < text.len() {
            f(Segment::Text(&text[last..]));
        }
    }

    /// Split `text` into [`Segment`]s.
    pub fn segments<'a>(
        &self,
        text: &'a str,
    ) -> Vec<Segment<'a, T>> {
        let mut segments = Vec::new();
        self.for_each_segment(text, |s| segments.push(s));
        segments
    }
}

impl<T: TokenType> SpanLexer for SpecialScanner<T> {
    fn next_span(
        &self,
        text: &str,
        offset: usize,
    ) -> Option<(usize, usize)> {
        self.find_at(text, offset).map(|(start, end, _)| (start, end))
    }
}
