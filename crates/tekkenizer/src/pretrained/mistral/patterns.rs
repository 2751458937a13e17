//! # Mistral Patterns

use crate::{join_patterns, support::regex::ConstRegexPattern};

/// The Tekken pre-tokenizer pattern.
///
/// Needs look-ahead (`\s+(?!\S)`), so it compiles with `fancy-regex`;
/// [`TekkenLexer`](crate::spanners::span_lexers::TekkenLexer) is its
/// registered accelerator.
pub const MISTRAL_TEKKEN_PATTERN: ConstRegexPattern = ConstRegexPattern::Fancy(join_patterns!(
    r"[^\r\n\p{L}\p{N}]?[\p{Lu}\p{Lt}\p{Lm}\p{Lo}\p{M}]*[\p{Ll}\p{Lm}\p{Lo}\p{M}]+",
    r"[^\r\n\p{L}\p{N}]?[\p{Lu}\p{Lt}\p{Lm}\p{Lo}\p{M}]+[\p{Ll}\p{Lm}\p{Lo}\p{M}]*",
    r"\p{N}",
    r" ?[^\s\p{L}\p{N}]+[\r\n/]*",
    r"\s*[\r\n]+",
    r"\s+(?!\S)",
    r"\s+",
));
