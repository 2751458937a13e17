//! Token Encoder Options
//!
//! Options for building a [`TokenEncoder`].

use std::sync::Arc;

use crate::{
    TKResult,
    encoders::{
        TokenEncoder,
        token_span_encoder::{SpanEncoderSelector, TokenSpanEncoder},
    },
    spanners::{TextSpannerBuilder, TextSpanningConfig},
    types::TokenType,
    vocab::Vocabulary,
};

/// Options for configuring a [`TokenEncoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenEncoderOptions {
    /// The [`SpanEncoderSelector`] to use.
    pub span_encoder: SpanEncoderSelector,

    /// Whether to use accelerated lexers, when available.
    ///
    /// When enabled, and an accelerated lexer can be
    /// found for a given regex pattern; the accelerator
    /// will be used for spanning.
    pub accelerated_lexers: bool,

    /// Should batches be encoded in parallel?
    pub parallel: bool,
}

impl Default for TokenEncoderOptions {
    fn default() -> Self {
        Self {
            span_encoder: SpanEncoderSelector::Default,
            accelerated_lexers: true,
            parallel: cfg!(feature = "rayon"),
        }
    }
}

impl TokenEncoderOptions {
    /// Get the configured [`SpanEncoderSelector`].
    pub fn span_encoder(&self) -> SpanEncoderSelector {
        self.span_encoder
    }

    /// Set the configured [`SpanEncoderSelector`].
    pub fn set_span_encoder(
        &mut self,
        span_encoder: SpanEncoderSelector,
    ) {
        self.span_encoder = span_encoder;
    }

    /// Set the configured [`SpanEncoderSelector`] and return the options.
    pub fn with_span_encoder(
        mut self,
        span_encoder: SpanEncoderSelector,
    ) -> Self {
        self.set_span_encoder(span_encoder);
        self
    }

    /// Are accelerated lexers enabled?
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

    /// Gets the configured parallelism value.
    ///
    /// Has no effect without the `rayon` feature.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Sets the configured parallelism value.
    pub fn set_parallel(
        &mut self,
        parallel: bool,
    ) {
        self.parallel = parallel;
    }

    /// Sets the configured parallelism value.
    pub fn with_parallel(
        mut self,
        parallel: bool,
    ) -> Self {
        self.set_parallel(parallel);
        self
    }

    /// Build a [`TokenEncoder`] for the given vocab and spanning config.
    ///
    /// ## Returns
    /// * `Err(Pattern)` - if the split pattern does not compile.
    pub fn build<T: TokenType>(
        &self,
        vocab: Arc<Vocabulary<T>>,
        spanning_config: &TextSpanningConfig<T>,
    ) -> TKResult<Arc<dyn TokenEncoder<T>>> {
        let spanner = TextSpannerBuilder::new(spanning_config.clone())
            .with_accelerated_lexers(self.accelerated_lexers())
            .build()?;

        #[allow(unused_mut)]
        let mut enc: Arc<dyn TokenEncoder<T>> = Arc::new(TokenSpanEncoder::<T>::new_with_selector(
            spanner,
            vocab,
            spanning_config.specials().clone(),
            self.span_encoder(),
        ));

        #[cfg(feature = "rayon")]
        if self.parallel() {
            enc = Arc::new(crate::rayon::ParallelRayonEncoder::new(enc));
        }

        Ok(enc)
    }
}
