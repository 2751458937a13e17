//! # Error Types

/// Errors from tekkenizer operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TekkenizerError {
    /// Vocabulary data is inconsistent (duplicate token, duplicate rank, negative rank).
    #[error("malformed vocabulary: {0}")]
    MalformedVocabulary(String),

    /// A flat rank-table line could not be parsed.
    #[error("invalid vocabulary line {line}: {reason}")]
    InvalidVocabLine {
        /// The 1-based line number.
        line: usize,

        /// What was wrong with the line.
        reason: String,
    },

    /// A Tekken JSON document could not be decoded.
    #[error("malformed json: {0}")]
    MalformedJson(String),

    /// A chunk contains a byte with no single-byte vocabulary entry.
    #[error("unencodable byte 0x{byte:02x} at offset {offset}")]
    UnencodableByte {
        /// The byte value.
        byte: u8,

        /// The byte offset within the encoded text.
        offset: usize,
    },

    /// A token id is present in neither the vocabulary nor the special-token table.
    #[error("unknown token id: {0}")]
    UnknownTokenId(u64),

    /// Decoded bytes are not well-formed UTF-8.
    #[error("decoded bytes are not valid utf-8")]
    InvalidUtf8,

    /// Token value out of range for the target type.
    #[error("token out of range: {0}")]
    TokenOutOfRange(u64),

    /// Special tokens collide with each other or with the vocabulary.
    #[error("special token conflict: {0}")]
    SpecialTokenConflict(String),

    /// The named encoding is not known.
    #[error("encoding not supported: {0}")]
    EncodingNotSupported(String),

    /// The named model is not known.
    #[error("model not supported: {0}")]
    ModelNotSupported(String),

    /// A split pattern failed to compile.
    #[error("pattern error: {0}")]
    Pattern(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for tekkenizer operations.
pub type TKResult<T> = core::result::Result<T, TekkenizerError>;
