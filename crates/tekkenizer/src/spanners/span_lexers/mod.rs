//! # [`SpanLexer`] mechanics for [`TextSpanner`](`crate::spanners::TextSpanner`) implementations.

mod accelerators;
mod regex_lexer;
mod span_lexer;
mod special_scanner;
mod tekken_lexer;

#[doc(inline)]
pub use accelerators::*;
#[doc(inline)]
pub use regex_lexer::*;
#[doc(inline)]
pub use span_lexer::*;
#[doc(inline)]
pub use special_scanner::*;
#[doc(inline)]
pub use tekken_lexer::*;
