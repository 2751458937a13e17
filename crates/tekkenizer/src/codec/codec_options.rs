//! Codec Options

use crate::encoders::{SpanEncoderSelector, TokenEncoderOptions};

/// Options for building a [`Codec`](super::Codec).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CodecOptions {
    /// Encoder configuration.
    pub encoder: TokenEncoderOptions,
}

impl CodecOptions {
    /// Get the encoder options.
    pub fn encoder(&self) -> &TokenEncoderOptions {
        &self.encoder
    }

    /// Set the merge engine.
    pub fn with_span_encoder(
        mut self,
        span_encoder: SpanEncoderSelector,
    ) -> Self {
        self.encoder.set_span_encoder(span_encoder);
        self
    }

    /// Set whether accelerated lexers should be enabled.
    pub fn with_accelerated_lexers(
        mut self,
        accelerated_lexers: bool,
    ) -> Self {
        self.encoder.set_accelerated_lexers(accelerated_lexers);
        self
    }

    /// Are batches processed in parallel?
    pub fn parallel(&self) -> bool {
        self.encoder.parallel()
    }

    /// Set whether batches are processed in parallel.
    ///
    /// Applies to both batch encode and batch decode.
    pub fn set_parallel(
        &mut self,
        parallel: bool,
    ) {
        self.encoder.set_parallel(parallel);
    }

    /// Set whether batches are processed in parallel.
    pub fn with_parallel(
        mut self,
        parallel: bool,
    ) -> Self {
        self.set_parallel(parallel);
        self
    }
}
