//! # `OpenAI` Special Words

/// End of text.
pub const ENDOFTEXT: &str = "<|endoftext|>";
/// End of prompt.
pub const ENDOFPROMPT: &str = "<|endofprompt|>";
/// Fill-in-the-middle prefix.
pub const FIM_PREFIX: &str = "<|fim_prefix|>";
/// Fill-in-the-middle middle.
pub const FIM_MIDDLE: &str = "<|fim_middle|>";
/// Fill-in-the-middle suffix.
pub const FIM_SUFFIX: &str = "<|fim_suffix|>";

/// The "`r50k_base`" (and "gpt2") special words.
pub const OA_R50K_BASE_SPECIALS: &[(&str, usize)] = &[(ENDOFTEXT, 50256)];

/// The "`p50k_base`" special words.
pub const OA_P50K_BASE_SPECIALS: &[(&str, usize)] = &[(ENDOFTEXT, 50256)];

/// The "`p50k_edit`" special words.
pub const OA_P50K_EDIT_SPECIALS: &[(&str, usize)] = &[
    (ENDOFTEXT, 50256),
    (FIM_PREFIX, 50281),
    (FIM_MIDDLE, 50282),
    (FIM_SUFFIX, 50283),
];

/// The "`cl100k_base`" special words.
pub const OA_CL100K_BASE_SPECIALS: &[(&str, usize)] = &[
    (ENDOFTEXT, 100257),
    (FIM_PREFIX, 100258),
    (FIM_MIDDLE, 100259),
    (FIM_SUFFIX, 100260),
    (ENDOFPROMPT, 100276),
];

/// The "`o200k_base`" special words.
pub const OA_O200K_BASE_SPECIALS: &[(&str, usize)] = &[(ENDOFTEXT, 199999), (ENDOFPROMPT, 200018)];
