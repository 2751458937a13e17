//! # Pattern Construction Macros

/// Join string literals with a separator, at compile time.
#[macro_export]
macro_rules! join_strs {
    ($sep:literal, ($first:literal $(, $rest:literal)* $(,)?)) => {
        concat!($first $(, $sep, $rest)*)
    };
}

/// Join pattern literals as regex alternatives (`a|b|c`).
#[macro_export]
macro_rules! join_patterns {
    ($first:literal $(, $rest:literal)* $(,)?) => {
        concat!($first $(, "|", $rest)*)
    };
}
