//! # Support Utilities

pub mod ranges;
pub mod regex;
pub mod strings;
