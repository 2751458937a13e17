//! # Token Encoders
//!
//! A [`TokenEncoder`] is a [`TextSpanner`](crate::spanners::TextSpanner) feeding
//! a [`SpanEncoder`]; build one with [`TokenEncoderOptions`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use tekkenizer::{
//!     TKResult,
//!     encoders::TokenEncoderOptions,
//!     spanners::TextSpanningConfig,
//!     vocab::Vocabulary,
//! };
//!
//! fn example(
//!     vocab: Arc<Vocabulary<u32>>,
//!     config: &TextSpanningConfig<u32>,
//! ) -> TKResult<Vec<Vec<u32>>> {
//!     let encoder = TokenEncoderOptions::default().build(vocab, config)?;
//!     encoder.try_encode_batch(&["hello", "world"])
//! }
//! ```

mod encoder_options;
#[cfg(test)]
pub(crate) mod testing;
mod token_encoder;
pub mod token_span_encoder;

#[doc(inline)]
pub use encoder_options::*;
#[doc(inline)]
pub use token_encoder::*;
#[doc(inline)]
pub use token_span_encoder::{
    SpanEncoder,
    SpanEncoderSelector,
    TokenSpanEncoder,
    span_encoders::{MergeScanSpanEncoder, PriorityMergeSpanEncoder},
};
