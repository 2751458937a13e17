#![allow(dead_code)]

use std::sync::Arc;

use base64::{Engine, prelude::BASE64_STANDARD};
use tekkenizer::{
    Codec,
    CodecOptions,
    Vocabulary,
    pretrained::mistral::MISTRAL_TEKKEN_PATTERN,
    spanners::TextSpanningConfig,
};

/// Merges layered over the single bytes, in rank order from 256.
pub const MERGES: &[&str] = &[
    "He", "ll", "llo", "Hello", " w", "or", " wor", "ld", " world", "th", "the", " t", " the",
    "in", "ing", " i", "is", " is", "!!", "  ", "er", "an", "at", "\u{e9}",
];

pub fn rank_table() -> Vec<(Vec<u8>, i64)> {
    let mut table: Vec<(Vec<u8>, i64)> = (0..=255u8).map(|b| (vec![b], b as i64)).collect();
    for (idx, merge) in MERGES.iter().enumerate() {
        table.push((merge.as_bytes().to_vec(), 256 + idx as i64));
    }
    table
}

pub fn vocab() -> Arc<Vocabulary<u32>> {
    Arc::new(Vocabulary::build(rank_table()).unwrap())
}

pub fn codec(options: CodecOptions) -> Codec<u32> {
    let config = TextSpanningConfig::from_pattern(MISTRAL_TEKKEN_PATTERN)
        .with_special_words([("<s>", 5000), ("</s>", 5001), ("<s>x", 5002)])
        .unwrap();
    Codec::new("integration", vocab(), config, options).unwrap()
}

/// A Tekken JSON document over [`rank_table`].
pub fn tekken_json(num_special: usize) -> String {
    let rows: Vec<serde_json::Value> = rank_table()
        .into_iter()
        .map(|(span, rank)| {
            serde_json::json!({
                "rank": rank,
                "token_bytes": BASE64_STANDARD.encode(&span),
                "token_str": String::from_utf8(span).ok(),
            })
        })
        .collect();

    serde_json::json!({
        "config": {
            "pattern": MISTRAL_TEKKEN_PATTERN.as_str(),
            "num_vocab_tokens": rows.len(),
            "default_vocab_size": rows.len() + num_special,
            "default_num_special_tokens": num_special,
            "version": "v3",
        },
        "vocab": rows,
    })
    .to_string()
}
