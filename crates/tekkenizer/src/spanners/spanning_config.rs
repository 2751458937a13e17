//! # Text Spanning Configuration

use crate::{TKResult, support::regex::RegexPattern, types::TokenType, vocab::SpecialVocab};

/// Description of a text spanning configuration.
///
/// ## Style Hints
///
/// When there is no local ambiguity, instance names should prefer `spanning_config`;
/// and expand to `<context>_spanning_config` when there is ambiguity.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpanningConfig<T: TokenType> {
    pattern: RegexPattern,
    specials: SpecialVocab<T>,
}

impl<T: TokenType> TextSpanningConfig<T> {
    /// Build a new config from a pattern, with no special words.
    pub fn from_pattern<P: Into<RegexPattern>>(pattern: P) -> Self {
        Self {
            pattern: pattern.into(),
            specials: SpecialVocab::default(),
        }
    }

    /// Replace the special words.
    pub fn with_specials(
        mut self,
        specials: SpecialVocab<T>,
    ) -> Self {
        self.specials = specials;
        self
    }

    /// Replace the special words from `(word, id)` pairs.
    pub fn with_special_words<I, S>(
        self,
        words: I,
    ) -> TKResult<Self>
    where
        I: IntoIterator<Item = (S, usize)>,
        S: AsRef<str>,
    {
        Ok(self.with_specials(SpecialVocab::from_words(words)?))
    }

    /// The split pattern.
    pub fn pattern(&self) -> &RegexPattern {
        &self.pattern
    }

    /// The special words.
    pub fn specials(&self) -> &SpecialVocab<T> {
        &self.specials
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config() {
        let config = TextSpanningConfig::<u32>::from_pattern(r"\w+")
            .with_special_words([("<s>", 1)])
            .unwrap();
        assert_eq!(config.pattern().as_str(), r"\w+");
        assert_eq!(config.specials().lookup_token(b"<s>"), Some(1));
    }
}
