//! # Vocabulary Test Fixtures

use base64::{Engine, prelude::BASE64_STANDARD};

use crate::{
    pretrained::mistral::MISTRAL_TEKKEN_PATTERN,
    vocab::io::{RankTable, TekkenConfig, TekkenJson, TekkenVocabEntry},
};

/// Merged tokens layered over the 256 single bytes, in rank order.
///
/// Each entry is the concatenation of two earlier entries.
pub const TEST_MERGES: &[&[u8]] = &[
    b"He",
    b"ll",
    b"llo",
    b"Hello",
    b" w",
    b"or",
    b" wor",
    b"ld",
    b" world",
    b"he",
    b"th",
    b"the",
    b" t",
    b" the",
    b"in",
    b"ing",
    b"er",
    b"an",
    b"at",
    b" i",
    b"is",
    b" is",
    b"!!",
    b"  ",
    b"\n\n",
    b"12",
    b"\xc3\xa9",
    b"\xe6\x97",
    b"\xe6\x97\xa5",
    b"ab",
];

/// A rank table with every single byte at `rank == byte`, then [`TEST_MERGES`].
pub fn test_rank_table() -> RankTable {
    let mut table: RankTable = (0..=255u8).map(|b| (vec![b], b as i64)).collect();
    for (idx, span) in TEST_MERGES.iter().enumerate() {
        table.push((span.to_vec(), 256 + idx as i64));
    }
    table
}

/// A Tekken JSON document over [`test_rank_table`].
pub fn test_tekken_json(num_special: usize) -> String {
    let vocab: Vec<TekkenVocabEntry> = test_rank_table()
        .into_iter()
        .map(|(span, rank)| TekkenVocabEntry {
            rank,
            token_bytes: BASE64_STANDARD.encode(&span),
            token_str: String::from_utf8(span).ok(),
        })
        .collect();

    let tekken = TekkenJson {
        config: TekkenConfig {
            pattern: MISTRAL_TEKKEN_PATTERN.as_str().to_string(),
            num_vocab_tokens: vocab.len(),
            default_vocab_size: vocab.len() + num_special,
            default_num_special_tokens: num_special,
            version: "v3".to_string(),
        },
        vocab,
        multimodal: None,
    };

    serde_json::to_string(&tekken).unwrap()
}
