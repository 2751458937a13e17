//! Accelerated native [`SpanLexer`] registry.
//!
//! Accelerators replace the compiled regex for specific, exactly-matching
//! split patterns. Lookup is by pattern text.

use std::sync::Arc;

use crate::{
    pretrained::mistral::MISTRAL_TEKKEN_PATTERN,
    spanners::span_lexers::{SpanLexer, TekkenLexer},
    support::regex::ConstRegexPattern,
};

/// A native lexer registered for one exact regex pattern.
pub struct RegexAccelerator {
    /// The exact regex pattern.
    pub pattern: ConstRegexPattern,

    /// The [`SpanLexer`] builder function.
    pub builder: fn() -> Arc<dyn SpanLexer>,
}

fn tekken_lexer() -> Arc<dyn SpanLexer> {
    Arc::new(TekkenLexer)
}

/// The registered accelerators.
pub static REGEX_ACCELERATORS: &[RegexAccelerator] = &[RegexAccelerator {
    pattern: MISTRAL_TEKKEN_PATTERN,
    builder: tekken_lexer,
}];

/// Get a regex accelerator.
///
/// ## Returns
/// - `Some(Arc<dyn SpanLexer>)` if an accelerator is found,
/// - `None` otherwise.
pub fn get_regex_accelerator(pattern: &str) -> Option<Arc<dyn SpanLexer>> {
    REGEX_ACCELERATORS
        .iter()
        .find(|hook| hook.pattern.as_str() == pattern)
        .map(|hook| (hook.builder)())
}
