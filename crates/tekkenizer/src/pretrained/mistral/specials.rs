//! # Mistral Special Words

/// The scheme identifier.
pub const MISTRAL_TEKKEN_NAME: &str = "mistral_tekken";

/// Unknown token.
pub const UNK: &str = "<unk>";
/// Beginning of sequence.
pub const BOS: &str = "<s>";
/// End of sequence.
pub const EOS: &str = "</s>";
/// Instruction start.
pub const INST: &str = "[INST]";
/// Instruction end.
pub const INST_END: &str = "[/INST]";
/// Tool listing start.
pub const AVAILABLE_TOOLS: &str = "[AVAILABLE_TOOLS]";
/// Tool listing end.
pub const AVAILABLE_TOOLS_END: &str = "[/AVAILABLE_TOOLS]";
/// Tool results start.
pub const TOOL_RESULTS: &str = "[TOOL_RESULTS]";
/// Tool results end.
pub const TOOL_RESULTS_END: &str = "[/TOOL_RESULTS]";
/// Tool calls.
pub const TOOL_CALLS: &str = "[TOOL_CALLS]";
/// Padding.
pub const PAD: &str = "<pad>";
/// Fill-in-the-middle prefix.
pub const FIM_PREFIX: &str = "[PREFIX]";
/// Fill-in-the-middle middle.
pub const FIM_MIDDLE: &str = "[MIDDLE]";
/// Fill-in-the-middle suffix.
pub const FIM_SUFFIX: &str = "[SUFFIX]";

/// The Tekken special words, ids `0..14`.
pub const MISTRAL_TEKKEN_SPECIALS: &[(&str, usize)] = &[
    (UNK, 0),
    (BOS, 1),
    (EOS, 2),
    (INST, 3),
    (INST_END, 4),
    (AVAILABLE_TOOLS, 5),
    (AVAILABLE_TOOLS_END, 6),
    (TOOL_RESULTS, 7),
    (TOOL_RESULTS_END, 8),
    (TOOL_CALLS, 9),
    (PAD, 10),
    (FIM_PREFIX, 11),
    (FIM_MIDDLE, 12),
    (FIM_SUFFIX, 13),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocab::SpecialVocab;

    #[test]
    fn test_specials() {
        let specials = SpecialVocab::<u16>::from_words(MISTRAL_TEKKEN_SPECIALS.iter().copied())
            .unwrap();
        assert_eq!(specials.len(), 14);
        assert_eq!(specials.lookup_token(b"<s>"), Some(1));
        assert_eq!(specials.lookup_span(13), Some(&b"[SUFFIX]"[..]));
        assert_eq!(specials.words()[0], "<unk>");
    }
}
