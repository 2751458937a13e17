//! # Model Names
//!
//! Maps public model names onto [`EncodingName`]s: exact names first,
//! then the longest matching prefix.

use crate::{TKResult, TekkenizerError, pretrained::EncodingName};

/// Exact model name mappings.
pub const MODEL_ENCODINGS: &[(&str, EncodingName)] = &[
    // o200k
    ("o1-preview", EncodingName::O200kBase),
    ("o1-mini", EncodingName::O200kBase),
    ("gpt-4o", EncodingName::O200kBase),
    // cl100k
    ("gpt-4", EncodingName::Cl100kBase),
    ("gpt-3.5", EncodingName::Cl100kBase),
    ("gpt-3.5-turbo", EncodingName::Cl100kBase),
    ("text-embedding-ada-002", EncodingName::Cl100kBase),
    // p50k
    ("text-davinci-003", EncodingName::P50kBase),
    ("text-davinci-002", EncodingName::P50kBase),
    ("code-davinci-002", EncodingName::P50kBase),
    ("code-davinci-001", EncodingName::P50kBase),
    ("code-cushman-002", EncodingName::P50kBase),
    ("code-cushman-001", EncodingName::P50kBase),
    ("davinci-codex", EncodingName::P50kBase),
    ("cushman-codex", EncodingName::P50kBase),
    // r50k
    ("text-davinci-001", EncodingName::R50kBase),
    ("text-curie-001", EncodingName::R50kBase),
    ("text-babbage-001", EncodingName::R50kBase),
    ("text-ada-001", EncodingName::R50kBase),
    ("davinci", EncodingName::R50kBase),
    ("curie", EncodingName::R50kBase),
    ("babbage", EncodingName::R50kBase),
    ("ada", EncodingName::R50kBase),
    ("text-similarity-davinci-001", EncodingName::R50kBase),
    ("text-similarity-curie-001", EncodingName::R50kBase),
    ("text-similarity-babbage-001", EncodingName::R50kBase),
    ("text-similarity-ada-001", EncodingName::R50kBase),
    ("text-search-davinci-doc-001", EncodingName::R50kBase),
    ("text-search-curie-doc-001", EncodingName::R50kBase),
    ("text-search-ada-doc-001", EncodingName::R50kBase),
    ("text-search-babbage-doc-001", EncodingName::R50kBase),
    ("code-search-babbage-code-001", EncodingName::R50kBase),
    ("code-search-ada-code-001", EncodingName::R50kBase),
    // p50k_edit
    ("text-davinci-edit-001", EncodingName::P50kEdit),
    ("code-davinci-edit-001", EncodingName::P50kEdit),
    // gpt2
    ("gpt2", EncodingName::Gpt2),
    // mistral
    ("mistral_tekken", EncodingName::MistralTekken),
    ("mistral-nemo", EncodingName::MistralTekken),
    ("pixtral-12b", EncodingName::MistralTekken),
    ("ministral-8b", EncodingName::MistralTekken),
];

/// Model name prefix mappings.
pub const MODEL_PREFIX_ENCODINGS: &[(&str, EncodingName)] = &[
    ("o1-", EncodingName::O200kBase),
    ("gpt-4o-", EncodingName::O200kBase),
    ("gpt-4-", EncodingName::Cl100kBase),
    ("gpt-3.5-turbo-", EncodingName::Cl100kBase),
    ("gpt-35-turbo-", EncodingName::Cl100kBase),
    ("ft:gpt-4", EncodingName::Cl100kBase),
    ("ft:gpt-3.5-turbo", EncodingName::Cl100kBase),
    ("ft:davinci-002", EncodingName::Cl100kBase),
    ("ft:babbage-002", EncodingName::Cl100kBase),
];

/// Resolve the encoding used by a model.
///
/// ## Returns
/// * `Err(ModelNotSupported)` - for names matching no entry or prefix.
pub fn encoding_for_model(model: &str) -> TKResult<EncodingName> {
    if let Some(&(_, encoding)) = MODEL_ENCODINGS.iter().find(|(name, _)| *name == model) {
        return Ok(encoding);
    }

    // "gpt-4o-" must win over "gpt-4-"-style shorter overlaps.
    MODEL_PREFIX_ENCODINGS
        .iter()
        .filter(|(prefix, _)| model.starts_with(prefix))
        .max_by_key(|(prefix, _)| prefix.len())
        .map(|&(_, encoding)| encoding)
        .ok_or_else(|| TekkenizerError::ModelNotSupported(model.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact() {
        assert_eq!(encoding_for_model("gpt-4o").unwrap(), EncodingName::O200kBase);
        assert_eq!(encoding_for_model("gpt-4").unwrap(), EncodingName::Cl100kBase);
        assert_eq!(encoding_for_model("davinci").unwrap(), EncodingName::R50kBase);
        assert_eq!(
            encoding_for_model("code-davinci-edit-001").unwrap(),
            EncodingName::P50kEdit
        );
        assert_eq!(encoding_for_model("gpt2").unwrap(), EncodingName::Gpt2);
        assert_eq!(
            encoding_for_model("mistral-nemo").unwrap(),
            EncodingName::MistralTekken
        );
    }

    #[test]
    fn test_prefix() {
        assert_eq!(
            encoding_for_model("gpt-4o-2024-05-13").unwrap(),
            EncodingName::O200kBase
        );
        assert_eq!(encoding_for_model("gpt-4-0613").unwrap(), EncodingName::Cl100kBase);
        assert_eq!(
            encoding_for_model("ft:gpt-3.5-turbo:acme::abc").unwrap(),
            EncodingName::Cl100kBase
        );
        assert_eq!(encoding_for_model("o1-2024-12-17").unwrap(), EncodingName::O200kBase);
    }

    #[test]
    fn test_unknown() {
        for model in ["", "llama-3", "gpt-5x", "GPT-4"] {
            assert!(matches!(
                encoding_for_model(model),
                Err(TekkenizerError::ModelNotSupported(_))
            ));
        }
    }
}
