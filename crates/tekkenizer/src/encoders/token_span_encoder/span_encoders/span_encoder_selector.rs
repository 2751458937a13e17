//! # Span Encoder Selector

use std::sync::Arc;

use crate::{
    encoders::token_span_encoder::span_encoders::{
        MergeScanSpanEncoder,
        PriorityMergeSpanEncoder,
        SpanEncoder,
    },
    types::TokenType,
};

/// Shared factory for per-call [`SpanEncoder`]s.
pub type SpanEncoderBuilder<T> = Arc<dyn Fn() -> Box<dyn SpanEncoder<T>> + Send + Sync>;

/// Policy enum for selecting a [`SpanEncoder`] for
/// [`TokenSpanEncoder`](`crate::encoders::TokenSpanEncoder`).
///
/// Every variant yields identical tokens; they differ only in cost.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::EnumString,
    strum::EnumIter,
    strum::Display,
)]
#[strum(serialize_all = "kebab-case")]
#[non_exhaustive]
pub enum SpanEncoderSelector {
    /// The recommended encoder.
    ///
    /// Serialized configs that say "default" follow future improvements.
    ///
    /// This is currently an alias for: [`PriorityMerge`](`Self::PriorityMerge`)
    #[default]
    Default,

    /// The reference encoder, for testing and comparison.
    ///
    /// This is currently an alias for: [`MergeScan`](`Self::MergeScan`)
    Reference,

    /// Use the [`PriorityMergeSpanEncoder`] encoder.
    PriorityMerge,

    /// Use the [`MergeScanSpanEncoder`] encoder.
    MergeScan,
}

impl SpanEncoderSelector {
    /// Get a builder for the configured [`SpanEncoder`].
    pub fn span_encoder_builder<T: TokenType>(&self) -> SpanEncoderBuilder<T> {
        use SpanEncoderSelector::*;
        match self {
            Reference | MergeScan => Arc::new(|| Box::new(MergeScanSpanEncoder::<T>::default())),
            Default | PriorityMerge => {
                Arc::new(|| Box::new(PriorityMergeSpanEncoder::<T>::default()))
            }
        }
    }
}
