//! # `OpenAI` Patterns

use crate::{join_patterns, support::regex::ConstRegexPattern};

/// The "`r50k_base`" (and "gpt2") word pattern.
pub const OA_R50K_BASE_PATTERN: ConstRegexPattern = ConstRegexPattern::Fancy(join_patterns!(
    r"'(?:[sdmt]|ll|ve|re)",
    r" ?\p{L}++",
    r" ?\p{N}++",
    r" ?[^\s\p{L}\p{N}]++",
    r"\s++$",
    r"\s+(?!\S)",
    r"\s",
));

/// The "`p50k_base`" word pattern.
pub const OA_P50K_BASE_PATTERN: ConstRegexPattern = OA_R50K_BASE_PATTERN;

/// The "`cl100k_base`" word pattern.
pub const OA_CL100K_BASE_PATTERN: ConstRegexPattern = ConstRegexPattern::Fancy(join_patterns!(
    r"'(?i:[sdmt]|ll|ve|re)",
    r"[^\r\n\p{L}\p{N}]?+\p{L}++",
    r"\p{N}{1,3}+",
    r" ?[^\s\p{L}\p{N}]++[\r\n]*+",
    r"\s++$",
    r"\s*[\r\n]",
    r"\s+(?!\S)",
    r"\s",
));

/// The "`o200k_base`" word pattern.
pub const OA_O200K_BASE_PATTERN: ConstRegexPattern = ConstRegexPattern::Fancy(join_patterns!(
    r"[^\r\n\p{L}\p{N}]?[\p{Lu}\p{Lt}\p{Lm}\p{Lo}\p{M}]*[\p{Ll}\p{Lm}\p{Lo}\p{M}]+(?i:'s|'t|'re|'ve|'m|'ll|'d)?",
    r"[^\r\n\p{L}\p{N}]?[\p{Lu}\p{Lt}\p{Lm}\p{Lo}\p{M}]+[\p{Ll}\p{Lm}\p{Lo}\p{M}]*(?i:'s|'t|'re|'ve|'m|'ll|'d)?",
    r"\p{N}{1,3}",
    r" ?[^\s\p{L}\p{N}]+[\r\n/]*",
    r"\s*[\r\n]+",
    r"\s+(?!\S)",
    r"\s+",
));

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spanners::span_lexers::{RegexSpanLexer, SpanLexer};

    #[test]
    fn test_patterns_compile() {
        for pattern in [
            OA_R50K_BASE_PATTERN,
            OA_P50K_BASE_PATTERN,
            OA_CL100K_BASE_PATTERN,
            OA_O200K_BASE_PATTERN,
        ] {
            assert!(pattern.compile().is_ok(), "{}", pattern.as_str());
        }
    }

    #[test]
    fn test_cl100k_digits() {
        let lexer = RegexSpanLexer::compile(&OA_CL100K_BASE_PATTERN.to_pattern()).unwrap();
        let text = "1234567 it's";
        let mut words = Vec::new();
        lexer.for_each_word(text, 0, &mut |span| {
            words.push(&text[span.range().clone()]);
            true
        });
        assert_eq!(words, vec!["123", "456", "7", " it", "'s"]);
    }
}
