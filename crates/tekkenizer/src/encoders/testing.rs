//! # Encoder Test Utilities

use std::sync::Arc;

use crate::{
    TekkenizerError,
    decoders::{DictionaryDecoder, TokenDecoder},
    encoders::{SpanEncoder, SpanEncoderSelector, TokenEncoder, TokenEncoderOptions},
    pretrained::mistral::MISTRAL_TEKKEN_PATTERN,
    spanners::TextSpanningConfig,
    types::{TokenType, check_is_send, check_is_sync},
    vocab::{Vocabulary, testing::test_rank_table},
};

/// Special words layered over the test vocabulary.
pub const TEST_SPECIALS: &[(&str, usize)] = &[("<s>", 300), ("</s>", 301)];

/// Build the common test vocabulary.
pub fn common_encoder_test_vocab<T: TokenType>() -> Arc<Vocabulary<T>> {
    Arc::new(Vocabulary::build(test_rank_table()).unwrap())
}

/// Build a serial encoder over the common test vocabulary.
pub fn common_test_encoder<T: TokenType>(
    selector: SpanEncoderSelector,
    accelerated: bool,
) -> Arc<dyn TokenEncoder<T>> {
    let config = TextSpanningConfig::<T>::from_pattern(MISTRAL_TEKKEN_PATTERN)
        .with_special_words(TEST_SPECIALS.iter().copied())
        .unwrap();
    TokenEncoderOptions::default()
        .with_span_encoder(selector)
        .with_accelerated_lexers(accelerated)
        .with_parallel(false)
        .build(common_encoder_test_vocab(), &config)
        .unwrap()
}

fn tok<T: TokenType>(v: usize) -> T {
    T::from_usize(v).unwrap()
}

fn toks<T: TokenType>(vs: &[usize]) -> Vec<T> {
    vs.iter().map(|&v| tok(v)).collect()
}

/// Common [`SpanEncoder`] tests over compound spans.
pub fn common_span_encoder_tests<T: TokenType, E: SpanEncoder<T>>(se: &mut E) {
    let vocab = common_encoder_test_vocab::<T>();

    let cases: &[(&[u8], &[usize])] = &[
        (b"", &[]),
        (b"x", &[b'x' as usize]),
        (b"Hello", &[259]),
        (b"Hello!!!", &[259, 278, b'!' as usize]),
        (b"aaab", &[97, 97, 285]),
        (b"12345", &[281, b'3' as usize, b'4' as usize, b'5' as usize]),
        // Equal ranks merge leftmost first.
        (b"    ", &[279, 279]),
        (b"   ", &[279, b' ' as usize]),
        // A lower rank deeper in the span wins over an earlier higher one.
        (b" the", &[269]),
        ("\u{65e5}\u{65e5}".as_bytes(), &[284, 284]),
    ];

    for &(span, expected) in cases {
        // Appends after existing content.
        let mut tokens: Vec<T> = vec![tok(7)];
        se.encode_append_compound_span(&vocab, span, &mut tokens)
            .unwrap();
        assert_eq!(tokens[0], tok(7));
        assert_eq!(&tokens[1..], toks::<T>(expected).as_slice(), "span: {span:?}");
    }

    let partial = Vocabulary::<T>::build([(b"a".to_vec(), 0), (b"b".to_vec(), 1)]).unwrap();
    let mut tokens = Vec::new();
    assert!(matches!(
        se.encode_append_compound_span(&partial, b"abc", &mut tokens),
        Err(TekkenizerError::UnencodableByte {
            byte: b'c',
            offset: 2
        })
    ));
}

/// Common [`TokenEncoder`] tests.
pub fn common_encoder_tests<T: TokenType>(selector: SpanEncoderSelector) {
    let encoder = common_test_encoder::<T>(selector, true);
    check_is_send(&encoder);
    check_is_sync(&encoder);

    let vocab = common_encoder_test_vocab::<T>();
    let decoder = DictionaryDecoder::from_vocab(&vocab, encoder.special_vocab());

    assert_eq!(
        encoder.try_encode("<s>Hello world</s>").unwrap(),
        toks::<T>(&[300, 259, 264, 301])
    );
    assert_eq!(encoder.try_encode("").unwrap(), Vec::<T>::new());

    let samples = [
        "Hello world",
        "the thing is, it's not the heat!!!",
        "  multiple   spaces  ",
        "line1\nline2\r\n\n\nline3",
        "123 + 456 = 789",
        "caf\u{e9} na\u{ef}ve \u{65e5}\u{672c}",
        "<s>[INST] hi [/INST]</s>",
        "<s<s>>",
    ];

    let batch = encoder.try_encode_batch(&samples).unwrap();
    for (sample, tokens) in samples.iter().zip(batch.iter()) {
        assert_eq!(&decoder.try_decode_to_string(tokens).unwrap(), sample);

        // The regex path agrees with the accelerated lexer.
        let slow = common_test_encoder::<T>(selector, false);
        assert_eq!(&slow.try_encode(sample).unwrap(), tokens);
    }
}
