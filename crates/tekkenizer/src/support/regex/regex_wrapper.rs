//! # Regex Wrapper
//! This module provides mechanisms to mix `regex` and `fancy_regex` types.

use core::ops::Range;

/// Wrapper for compiled regex patterns.
#[derive(Debug, Clone)]
pub enum RegexWrapper {
    /// Wrapper for `regex::Regex`.
    Basic(regex::Regex),

    /// Wrapper for `fancy_regex::Regex`.
    Fancy(fancy_regex::Regex),
}

impl From<regex::Regex> for RegexWrapper {
    fn from(regex: regex::Regex) -> Self {
        Self::Basic(regex)
    }
}

impl From<fancy_regex::Regex> for RegexWrapper {
    fn from(regex: fancy_regex::Regex) -> Self {
        Self::Fancy(regex)
    }
}

impl RegexWrapper {
    /// Is this `Fancy`?
    pub fn is_fancy(&self) -> bool {
        matches!(self, Self::Fancy(_))
    }

    /// Get the underlying regex pattern.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Basic(regex) => regex.as_str(),
            Self::Fancy(regex) => regex.as_str(),
        }
    }

    /// Iterate over the byte ranges of successive non-overlapping matches.
    ///
    /// ## Arguments
    /// * `haystack` - The string to search in.
    pub fn find_iter<'r, 'h>(
        &'r self,
        haystack: &'h str,
    ) -> MatchRanges<'r, 'h> {
        match self {
            Self::Basic(regex) => MatchRanges::Basic(regex.find_iter(haystack)),
            Self::Fancy(regex) => MatchRanges::Fancy(regex.find_iter(haystack)),
        }
    }
}

/// Iterator over match ranges of a [`RegexWrapper`].
///
/// A `fancy_regex` runtime failure (backtrack limit) ends the iteration;
/// the unmatched tail is then reported by callers as a gap.
pub enum MatchRanges<'r, 'h> {
    /// Wrapper for `regex::Matches`.
    Basic(regex::Matches<'r, 'h>),

    /// Wrapper for `fancy_regex::Matches`.
    Fancy(fancy_regex::Matches<'r, 'h>),
}

impl Iterator for MatchRanges<'_, '_> {
    type Item = Range<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Basic(matches) => matches.next().map(|m| m.range()),
            Self::Fancy(matches) => match matches.next()? {
                Ok(m) => Some(m.start()..m.end()),
                Err(err) => {
                    log::warn!("regex scan halted: {err}");
                    None
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::support::regex::RegexPattern;

    #[test]
    fn test_find_iter_basic() {
        let re = RegexPattern::Basic(r"\w+".to_string()).compile().unwrap();
        let ranges: Vec<_> = re.find_iter("ab  cd").collect();
        assert_eq!(ranges, vec![0..2, 4..6]);
        assert_eq!(re.as_str(), r"\w+");
    }

    #[test]
    fn test_find_iter_fancy() {
        let re = RegexPattern::Fancy(r"\s+(?!\S)|\s+|\w+".to_string())
            .compile()
            .unwrap();
        let ranges: Vec<_> = re.find_iter("ab   cd").collect();
        assert_eq!(ranges, vec![0..2, 2..4, 4..5, 5..7]);
    }
}
