//! Text Spanner Builder

use std::sync::Arc;

use crate::{
    TKResult,
    spanners::{
        LexerTextSpanner,
        TextSpanner,
        TextSpanningConfig,
        span_lexers::{SpanLexer, SpecialScanner, build_word_lexer},
    },
    types::TokenType,
};

/// Builder for [`TextSpanner`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct TextSpannerBuilder<T: TokenType> {
    config: TextSpanningConfig<T>,

    accelerated_lexers: bool,
}

impl<T: TokenType> TextSpannerBuilder<T> {
    /// Create a new [`TextSpannerBuilder`] with the given configuration.
    pub fn new(config: TextSpanningConfig<T>) -> Self {
        Self {
            config,
            accelerated_lexers: true,
        }
    }

    /// Get the underlying [`TextSpanningConfig`].
    pub fn config(&self) -> &TextSpanningConfig<T> {
        &self.config
    }

    /// Are accelerated lexers enabled?
    ///
    /// When enabled, and an accelerated lexer is registered for the
    /// configured pattern, it replaces the compiled regex.
    pub fn accelerated_lexers(&self) -> bool {
        self.accelerated_lexers
    }

    /// Set whether accelerated lexers should be enabled.
    pub fn set_accelerated_lexers(
        &mut self,
        accelerated_lexers: bool,
    ) {
        self.accelerated_lexers = accelerated_lexers;
    }

    /// Set whether accelerated lexers should be enabled.
    pub fn with_accelerated_lexers(
        mut self,
        accelerated_lexers: bool,
    ) -> Self {
        self.set_accelerated_lexers(accelerated_lexers);
        self
    }

    /// Build a [`TextSpanner`] with the current configuration.
    ///
    /// ## Returns
    /// * `Err(TekkenizerError::Pattern)` - if the split pattern does not compile.
    pub fn build(&self) -> TKResult<Arc<dyn TextSpanner>> {
        let word_lexer = build_word_lexer(self.config.pattern(), self.accelerated_lexers)?;
        let special_lexer = SpecialScanner::from_specials(self.config.specials())?
            .map(|s| Arc::new(s) as Arc<dyn SpanLexer>);

        Ok(Arc::new(LexerTextSpanner::new(word_lexer, special_lexer)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{pretrained::mistral::MISTRAL_TEKKEN_PATTERN, spanners::SpanRef};

    #[test]
    fn test_accelerated_and_regex_agree() {
        let config = TextSpanningConfig::<u32>::from_pattern(MISTRAL_TEKKEN_PATTERN)
            .with_special_words([("[INST]", 3), ("[/INST]", 4)])
            .unwrap();

        let fast = TextSpannerBuilder::new(config.clone()).build().unwrap();
        let slow = TextSpannerBuilder::new(config)
            .with_accelerated_lexers(false)
            .build()
            .unwrap();

        let text = "[INST] What's the weather in Paris?\n\n[/INST] It's 21°C.  ";
        let spans = fast.split_spans(text);
        assert_eq!(spans, slow.split_spans(text));
        assert_eq!(spans[0], SpanRef::Special(0..6));
        assert!(spans.iter().all(|s| !matches!(s, SpanRef::Gap(_))));
    }

    #[test]
    fn test_bad_pattern() {
        let config = TextSpanningConfig::<u32>::from_pattern("(");
        assert!(TextSpannerBuilder::new(config).build().is_err());
    }
}
