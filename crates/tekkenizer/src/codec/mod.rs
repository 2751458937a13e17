//! # Codec
//!
//! A [`Codec`] binds one vocabulary, one special-word table and one split
//! pattern behind `encode` / `decode`. Schemes differ only in that data;
//! see [`pretrained`](crate::pretrained) for the known ones.
//!
//! [`CodecCell`] builds a shared codec exactly once, on first use.

mod codec_cell;
mod codec_options;
#[allow(clippy::module_inception)]
mod codec;

#[doc(inline)]
pub use codec::*;
#[doc(inline)]
pub use codec_cell::*;
#[doc(inline)]
pub use codec_options::*;
