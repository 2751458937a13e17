//! # Range Utilities

use core::ops::Range;

/// Add an offset to the start and end of a [`Range<usize>`].
pub fn offset_range(
    range: Range<usize>,
    offset: usize,
) -> Range<usize> {
    Range {
        start: range.start + offset,
        end: range.end + offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_range() {
        assert_eq!(offset_range(0..10, 5), 5..15);
        assert_eq!(offset_range(3..3, 0), 3..3);
    }
}
