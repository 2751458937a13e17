//! Public `OpenAI` Patterns, Constants, and Special Words.

pub mod patterns;
pub mod specials;

#[doc(inline)]
pub use patterns::*;
#[doc(inline)]
pub use specials::*;
