//! # Codec

use std::sync::Arc;

use crate::{
    TKResult,
    TekkenizerError,
    codec::CodecOptions,
    decoders::{DictionaryDecoder, TokenDecoder},
    encoders::TokenEncoder,
    spanners::TextSpanningConfig,
    support::strings::token_piece,
    types::{TokenType, token_to_u64},
    vocab::{SpecialVocab, Vocabulary},
};

/// A BPE tokenizer: special-word scanner, pre-tokenizer and merge engine
/// over one shared [`Vocabulary`].
///
/// Every call is independent; a `Codec` holds no mutable state and may be
/// shared across threads.
///
/// ## Style Hints
///
/// Instance names should prefer `codec`.
pub struct Codec<T: TokenType> {
    name: String,
    vocab: Arc<Vocabulary<T>>,
    spanning_config: TextSpanningConfig<T>,
    options: CodecOptions,
    encoder: Arc<dyn TokenEncoder<T>>,
    decoder: Arc<dyn TokenDecoder<T>>,
}

impl<T: TokenType> std::fmt::Debug for Codec<T> {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        f.debug_struct("Codec")
            .field("name", &self.name)
            .field("vocab_size", &self.vocab.len())
            .field("specials", &self.spanning_config.specials().len())
            .field("pattern", &self.spanning_config.pattern().as_str())
            .field("options", &self.options)
            .finish()
    }
}

impl<T: TokenType> Codec<T> {
    /// Build a codec.
    ///
    /// ## Arguments
    /// * `name` - the scheme identifier returned by [`Codec::name`].
    /// * `vocab` - the shared vocabulary.
    /// * `spanning_config` - the split pattern and special words.
    /// * `options` - engine options.
    ///
    /// ## Returns
    /// * `Err(SpecialTokenConflict)` - if a special id is also a vocabulary id.
    /// * `Err(Pattern)` - if the split pattern does not compile.
    pub fn new<S: Into<String>>(
        name: S,
        vocab: Arc<Vocabulary<T>>,
        spanning_config: TextSpanningConfig<T>,
        options: CodecOptions,
    ) -> TKResult<Self> {
        let name = name.into();
        spanning_config.specials().check_disjoint(&vocab)?;

        let encoder = options.encoder().build(vocab.clone(), &spanning_config)?;

        let decoder = DictionaryDecoder::from_vocab(&vocab, spanning_config.specials());
        #[allow(unused_mut)]
        let mut decoder: Arc<dyn TokenDecoder<T>> = Arc::new(decoder);
        #[cfg(feature = "rayon")]
        if options.parallel() {
            decoder = Arc::new(crate::rayon::ParallelRayonDecoder::new(decoder));
        }

        log::info!(
            "built codec {name:?}: {} tokens, {} special words",
            vocab.len(),
            spanning_config.specials().len()
        );

        Ok(Self {
            name,
            vocab,
            spanning_config,
            options,
            encoder,
            decoder,
        })
    }

    /// The fixed identifier of the loaded scheme.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The shared vocabulary.
    pub fn vocab(&self) -> &Arc<Vocabulary<T>> {
        &self.vocab
    }

    /// The special words.
    pub fn specials(&self) -> &SpecialVocab<T> {
        self.spanning_config.specials()
    }

    /// The split pattern and special words.
    pub fn spanning_config(&self) -> &TextSpanningConfig<T> {
        &self.spanning_config
    }

    /// The engine options.
    pub fn options(&self) -> &CodecOptions {
        &self.options
    }

    /// Encode text into ids, with a display piece per id.
    ///
    /// ## Returns
    /// `(ids, pieces)`, aligned index-for-index; see [`Codec::pieces`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, text)))]
    pub fn encode(
        &self,
        text: &str,
    ) -> TKResult<(Vec<T>, Vec<String>)> {
        let tokens = self.encode_tokens(text)?;
        let pieces = self.pieces(&tokens)?;
        Ok((tokens, pieces))
    }

    /// Encode text into ids.
    ///
    /// ## Returns
    /// * `Err(UnencodableByte)` - if the vocabulary lacks a needed byte token.
    pub fn encode_tokens(
        &self,
        text: &str,
    ) -> TKResult<Vec<T>> {
        self.encoder.try_encode(text)
    }

    /// Encode a batch of texts; parallel with the `rayon` feature.
    pub fn encode_batch(
        &self,
        batch: &[&str],
    ) -> TKResult<Vec<Vec<T>>> {
        self.encoder.try_encode_batch(batch)
    }

    /// Render each id as text, for display and auditing.
    ///
    /// Token bytes that are not valid UTF-8 on their own render as U+FFFD.
    pub fn pieces(
        &self,
        tokens: &[T],
    ) -> TKResult<Vec<String>> {
        tokens
            .iter()
            .map(|&t| self.lookup_piece(t).map(token_piece))
            .collect()
    }

    fn lookup_piece(
        &self,
        token: T,
    ) -> TKResult<&[u8]> {
        self.specials()
            .lookup_span(token)
            .or_else(|| self.vocab.lookup_id(token))
            .ok_or_else(|| TekkenizerError::UnknownTokenId(token_to_u64(token)))
    }

    /// Decode ids into text.
    ///
    /// ## Returns
    /// * `Err(UnknownTokenId)` - for an id in neither table.
    /// * `Err(InvalidUtf8)` - if the joined bytes are not valid UTF-8;
    ///   use [`Codec::decode_to_bytes`] or [`Codec::decode_lossy`] to accept them.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, tokens)))]
    pub fn decode(
        &self,
        tokens: &[T],
    ) -> TKResult<String> {
        self.decoder.try_decode_to_string(tokens)
    }

    /// Decode ids into raw bytes, unvalidated.
    pub fn decode_to_bytes(
        &self,
        tokens: &[T],
    ) -> TKResult<Vec<u8>> {
        self.decoder.try_decode_to_bytes(tokens)
    }

    /// Decode ids into text, replacing malformed UTF-8 with U+FFFD.
    pub fn decode_lossy(
        &self,
        tokens: &[T],
    ) -> TKResult<String> {
        self.decoder.try_decode_to_string_lossy(tokens)
    }

    /// Decode a batch of id sequences; parallel with the `rayon` feature.
    pub fn decode_batch(
        &self,
        batch: &[Vec<T>],
    ) -> TKResult<Vec<String>> {
        self.decoder.try_decode_batch_to_strings(batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        encoders::SpanEncoderSelector,
        pretrained::mistral::MISTRAL_TEKKEN_PATTERN,
        types::{check_is_send, check_is_sync},
        vocab::testing::test_rank_table,
    };

    fn test_codec(options: CodecOptions) -> Codec<u32> {
        let vocab = Arc::new(Vocabulary::build(test_rank_table()).unwrap());
        let config = TextSpanningConfig::from_pattern(MISTRAL_TEKKEN_PATTERN)
            .with_special_words([("<s>", 1000), ("</s>", 1001)])
            .unwrap();
        Codec::new("test", vocab, config, options).unwrap()
    }

    #[test]
    fn test_encode_decode() {
        let codec = test_codec(CodecOptions::default());
        check_is_send(&codec);
        check_is_sync(&codec);
        assert_eq!(codec.name(), "test");

        let (ids, pieces) = codec.encode("<s>Hello world!!</s>").unwrap();
        assert_eq!(ids, vec![1000, 259, 264, 278, 1001]);
        assert_eq!(pieces, vec!["<s>", "Hello", " world", "!!", "</s>"]);

        assert_eq!(codec.decode(&ids).unwrap(), "<s>Hello world!!</s>");
    }

    #[test]
    fn test_engines_agree() {
        let text = "Hello there, the world is in thinking mode!!! 12345\n\n  \u{65e5}";
        let a = test_codec(CodecOptions::default().with_span_encoder(SpanEncoderSelector::PriorityMerge));
        let b = test_codec(
            CodecOptions::default()
                .with_span_encoder(SpanEncoderSelector::MergeScan)
                .with_accelerated_lexers(false),
        );
        assert_eq!(a.encode_tokens(text).unwrap(), b.encode_tokens(text).unwrap());
    }

    #[test]
    fn test_decode_policy() {
        let codec = test_codec(CodecOptions::default());

        // 0xe6 0x97 is a truncated sequence.
        assert_eq!(codec.decode_to_bytes(&[283]).unwrap(), vec![0xe6, 0x97]);
        assert!(matches!(
            codec.decode(&[283]),
            Err(TekkenizerError::InvalidUtf8)
        ));
        assert_eq!(codec.decode_lossy(&[283]).unwrap(), "\u{FFFD}");

        assert!(matches!(
            codec.decode(&[72, 4242]),
            Err(TekkenizerError::UnknownTokenId(4242))
        ));
        assert!(matches!(
            codec.pieces(&[4242]),
            Err(TekkenizerError::UnknownTokenId(4242))
        ));
    }

    #[test]
    fn test_batch() {
        let codec = test_codec(CodecOptions::default().with_parallel(true));
        let batch = codec.encode_batch(&["Hello", "<s> the", ""]).unwrap();
        assert_eq!(batch[0], vec![259]);
        assert_eq!(batch[1], vec![1000, 269]);
        assert!(batch[2].is_empty());
        assert_eq!(
            codec.decode_batch(&batch).unwrap(),
            vec!["Hello", "<s> the", ""]
        );
    }

    #[test]
    fn test_special_conflict() {
        let vocab = Arc::new(Vocabulary::<u32>::build(test_rank_table()).unwrap());
        let config = TextSpanningConfig::from_pattern(MISTRAL_TEKKEN_PATTERN)
            .with_special_words([("<s>", 259)])
            .unwrap();
        assert!(matches!(
            Codec::new("bad", vocab, config, CodecOptions::default()),
            Err(TekkenizerError::SpecialTokenConflict(_))
        ));
    }

    #[test]
    fn test_unencodable() {
        let vocab = Arc::new(
            Vocabulary::<u32>::build([(b"a".to_vec(), 0), (b"b".to_vec(), 1)]).unwrap(),
        );
        let codec = Codec::new(
            "partial",
            vocab,
            TextSpanningConfig::from_pattern(MISTRAL_TEKKEN_PATTERN),
            CodecOptions::default(),
        )
        .unwrap();
        assert_eq!(codec.encode_tokens("ab").unwrap(), vec![0, 1]);
        assert!(matches!(
            codec.encode_tokens("ab ca"),
            Err(TekkenizerError::UnencodableByte {
                byte: b' ',
                offset: 2
            })
        ));
    }
}
