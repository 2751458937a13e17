//! # Text Spanning
//!
//! Pre-tokenization: partition text into chunks that are merged independently.
//!
//! [`TextSpanningConfig`] describes the declarative needs of a codec:
//! * `pattern` - the word/span split pattern.
//! * `specials` - the special words handled out-of-band.
//!
//! Most users will want to use the [`TextSpannerBuilder`] to construct a [`TextSpanner`].

pub mod span_lexers;

mod lexer_spanner;
mod spanner_builder;
mod spanning_config;
mod text_spanner;

#[doc(inline)]
pub use lexer_spanner::*;
#[doc(inline)]
pub use spanner_builder::*;
#[doc(inline)]
pub use spanning_config::*;
#[doc(inline)]
pub use text_spanner::*;
