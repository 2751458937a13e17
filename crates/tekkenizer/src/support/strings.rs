//! # String Utilities

/// Convert owned bytes to a `String`, replacing malformed sequences with U+FFFD.
///
/// Reuses the allocation when the bytes are already valid UTF-8.
pub fn string_from_utf8_lossy(v: Vec<u8>) -> String {
    match String::from_utf8(v) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

/// Render a token's bytes for display.
///
/// Valid UTF-8 is shown verbatim; otherwise each malformed sequence becomes U+FFFD.
pub fn token_piece(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_from_utf8_lossy() {
        let v = vec![0x61, 0x62, 0xff, 0x28];
        assert_eq!(string_from_utf8_lossy(v), "ab\u{FFFD}(");

        let v = vec![0x61, 0x62];
        assert_eq!(string_from_utf8_lossy(v), "ab");
    }

    #[test]
    fn test_token_piece() {
        assert_eq!(token_piece(b" hello"), " hello");
        assert_eq!(token_piece(&[0xe4, 0xbd]), "\u{FFFD}");
    }
}
