//! # Regex [`SpanLexer`]

use std::sync::Arc;

use crate::{
    TKResult,
    spanners::{
        SpanRef,
        span_lexers::{SpanLexer, get_regex_accelerator},
    },
    support::{
        ranges::offset_range,
        regex::{RegexPattern, RegexWrapper},
    },
};

/// A [`SpanLexer`] driven by a compiled [`RegexWrapper`].
#[derive(Debug, Clone)]
pub struct RegexSpanLexer {
    regex: RegexWrapper,
}

impl From<RegexWrapper> for RegexSpanLexer {
    fn from(regex: RegexWrapper) -> Self {
        Self { regex }
    }
}

impl RegexSpanLexer {
    /// Compile a pattern into a lexer.
    pub fn compile(pattern: &RegexPattern) -> TKResult<Self> {
        let regex = pattern.compile()?;
        log::debug!(
            "compiled split pattern with {}: {:?}",
            if regex.is_fancy() { "fancy-regex" } else { "regex" },
            regex.as_str()
        );
        Ok(regex.into())
    }

    /// The wrapped regex.
    pub fn regex(&self) -> &RegexWrapper {
        &self.regex
    }
}

impl SpanLexer for RegexSpanLexer {
    fn next_span(
        &self,
        text: &str,
        offset: usize,
    ) -> Option<(usize, usize)> {
        match &self.regex {
            RegexWrapper::Basic(re) => re.find_at(text, offset).map(|m| (m.start(), m.end())),
            RegexWrapper::Fancy(re) => match re.find_from_pos(text, offset) {
                Ok(m) => m.map(|m| (m.start(), m.end())),
                Err(err) => {
                    log::warn!("regex scan halted: {err}");
                    None
                }
            },
        }
    }

    fn for_each_word(
        &self,
        text: &str,
        offset: usize,
        f: &mut dyn FnMut(SpanRef) -> bool,
    ) -> (bool, usize) {
        let mut last = 0;
        for range in self.regex.find_iter(text) {
            let (start, end) = (range.start, range.end);

            if last < start {
                if !f(SpanRef::Gap(offset_range(last..start, offset))) {
                    // Leading Gap Exit
                    return (false, last);
                }
                last = start;
            }

            if !f(SpanRef::Word(offset_range(range, offset))) {
                // Word Exit
                return (false, last);
            }
            last = end;
        }

        if last < text.len() {
            if !f(SpanRef::Gap(offset_range(last..text.len(), offset))) {
                // Trailing Gap Exit
                return (false, last);
            }
            last = text.len();
        }

        (true, last)
    }
}

/// Build a word lexer for a pattern.
///
/// ## Arguments
/// * `pattern` - the split pattern.
/// * `accelerated` - prefer a registered native lexer for this exact pattern.
pub fn build_word_lexer(
    pattern: &RegexPattern,
    accelerated: bool,
) -> TKResult<Arc<dyn SpanLexer>> {
    if accelerated && let Some(lexer) = get_regex_accelerator(pattern.as_str()) {
        log::debug!("using accelerated lexer for pattern");
        return Ok(lexer);
    }
    Ok(Arc::new(RegexSpanLexer::compile(pattern)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_each_word() {
        use SpanRef::*;

        let lexer = RegexSpanLexer::compile(&r"\w+".into()).unwrap();

        let mut spans = Vec::new();
        let res = lexer.for_each_word(" ab cd ", 10, &mut |s| {
            spans.push(s);
            true
        });
        assert_eq!(res, (true, 7));
        assert_eq!(
            spans,
            vec![Gap(10..11), Word(11..13), Gap(13..14), Word(14..16), Gap(16..17)]
        );

        assert_eq!(lexer.next_span(" ab cd ", 3), Some((4, 6)));
        assert_eq!(lexer.next_span(" ab cd ", 6), None);
    }

    #[test]
    fn test_fancy_next_span() {
        let lexer = RegexSpanLexer::compile(&r"\s+(?!\S)|\s+|\w+".into()).unwrap();
        assert!(lexer.regex().is_fancy());
        assert_eq!(lexer.next_span("ab   cd", 2), Some((2, 4)));
    }

    #[test]
    fn test_build_word_lexer() {
        let pattern: RegexPattern = r"\w+".into();
        let lexer = build_word_lexer(&pattern, true).unwrap();
        assert_eq!(lexer.next_span("  ab", 0), Some((2, 4)));
    }
}
