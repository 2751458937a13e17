//! # Regex Utilities
//!
//! Some split patterns (the Tekken and `OpenAI` families among them) use
//! look-around, which needs the [`fancy_regex`] crate. We'd prefer the
//! standard [`regex`] crate when patterns permit this.
//!
//! * Labeling Patterns - [`RegexPattern`]
//!   * [`RegexPattern::Basic`] - a pattern written for basic regular expressions.
//!   * [`RegexPattern::Fancy`] - a pattern written for regex extensions.
//!   * [`RegexPattern::Adaptive`] - unknown target, try basic; then fall-up to fancy.
//! * Wrapping Compiled Regex - [`RegexWrapper`]

mod pattern_tools;
mod regex_pattern;
mod regex_wrapper;

#[doc(inline)]
pub use regex_pattern::*;
#[doc(inline)]
pub use regex_wrapper::*;
