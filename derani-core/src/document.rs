//! Document decoder
//!
//! Splits a message into sentences, decides per-sentence capitalization
//! from the sentence index and an optional reference string, and
//! concatenates the decoded sentences.

use crate::catalog::{GlyphCatalog, GlyphClass};
use crate::config::RenderConfig;
use crate::error::Result;
use crate::sentence::decode_sentence;

/// Decode a full message. `reference` is a same-meaning string in a third
/// language consulted only for first-sentence capitalization.
pub(crate) fn decode_document(
    catalog: &GlyphCatalog,
    config: &RenderConfig,
    text: &str,
    reference: Option<&str>,
) -> Result<String> {
    let first_capitalized = match reference {
        Some(reference) => reference_is_capitalized(reference),
        None => config.capitalize_without_reference,
    };

    let mut out = String::with_capacity(text.len());
    for (index, sentence) in split_sentences(catalog, text).enumerate() {
        let capitalize = index > 0 || first_capitalized;
        out.push_str(&decode_sentence(catalog, config, sentence, capitalize)?);
    }
    Ok(out)
}

/// Split into sentences: each is the shortest run ending in a
/// sentence-final glyph, with any remainder kept as a final sentence.
pub(crate) fn split_sentences<'a>(
    catalog: &'a GlyphCatalog,
    text: &'a str,
) -> impl Iterator<Item = &'a str> {
    let mut start = 0;
    let mut char_indices = text.char_indices();
    std::iter::from_fn(move || {
        for (index, ch) in char_indices.by_ref() {
            if matches!(catalog.classify(ch), GlyphClass::SentenceFinal(_)) {
                let end = index + ch.len_utf8();
                let sentence = &text[start..end];
                start = end;
                return Some(sentence);
            }
        }
        if start < text.len() {
            let sentence = &text[start..];
            start = text.len();
            return Some(sentence);
        }
        None
    })
}

/// Whether the reference string counts as capitalized: true iff a `%` or
/// an ASCII uppercase letter appears before any other word character.
/// Placeholder-led strings (`%s ...`) therefore count as capitalized.
pub(crate) fn reference_is_capitalized(reference: &str) -> bool {
    for ch in reference.chars() {
        if ch == '%' || ch.is_ascii_uppercase() {
            return true;
        }
        if ch.is_alphanumeric() || ch == '_' {
            return false;
        }
    }
    false
}
