//! Deterministic Derani-script to Latin transliteration
//!
//! The script lives in the private-use block U+F16B0..=U+F16DF. This
//! crate decodes it in four layers: glyph catalog lookups, word decoding
//! (tone, CV slots, morpheme boundaries), sentence decoding (punctuation
//! and capitalization), and document decoding (sentence segmentation with
//! reference-string capitalization inference).
//!
//! The whole pipeline is a pure function of its inputs plus an immutable
//! [`RenderConfig`]; a [`Transliterator`] is safely shared across threads
//! and each message converts independently.

#![warn(missing_docs)]

pub mod catalog;
pub mod config;
pub mod error;

mod document;
mod sentence;
mod word;

// Re-export key types
pub use catalog::{FinalKind, GlyphCatalog, GlyphClass, Tone};
pub use config::{RenderConfig, RenderConfigBuilder};
pub use error::{DeraniError, Result};

/// Dataset key under which the output locale tag is recorded.
pub const LANGUAGE_CODE_KEY: &str = "language.code";

/// Locale tag identifying the Latin-rendered variant of the dataset.
pub const LATIN_LANGUAGE_CODE: &str = "qtq_latn_tqg";

/// Main entry point: a glyph catalog plus a rendering configuration.
///
/// Holds no mutable state; every decode call is independent.
#[derive(Debug, Clone, Default)]
pub struct Transliterator {
    catalog: GlyphCatalog,
    config: RenderConfig,
}

impl Transliterator {
    /// Create a transliterator with the default configuration.
    pub fn new() -> Self {
        Self::with_config(RenderConfig::default())
    }

    /// Create a transliterator with a specific configuration.
    pub fn with_config(config: RenderConfig) -> Self {
        Self {
            catalog: GlyphCatalog::new(),
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// The glyph catalog in use.
    pub fn catalog(&self) -> &GlyphCatalog {
        &self.catalog
    }

    /// Decode one contiguous run of word-composing glyphs.
    pub fn decode_word(&self, word: &str) -> Result<String> {
        word::decode_word(&self.catalog, &self.config, word)
    }

    /// Decode one sentence, optionally uppercasing its first word
    /// character. Strings with no script glyphs are returned unchanged.
    pub fn decode_sentence(&self, sentence: &str, capitalize_first: bool) -> Result<String> {
        sentence::decode_sentence(&self.catalog, &self.config, sentence, capitalize_first)
    }

    /// Decode a full message. The reference string, when given, is
    /// consulted only to infer first-sentence capitalization.
    pub fn decode_document(&self, text: &str, reference: Option<&str>) -> Result<String> {
        document::decode_document(&self.catalog, &self.config, text, reference)
    }

    /// Decode an ordered collection of `(key, text, reference)` triples
    /// into `(key, latin)` pairs, preserving order. Fails on the first
    /// entry containing an unassigned glyph; callers wanting skip
    /// semantics should decode entries individually.
    pub fn convert_entries<'a, I>(&self, entries: I) -> Result<Vec<(String, String)>>
    where
        I: IntoIterator<Item = (&'a str, &'a str, Option<&'a str>)>,
    {
        entries
            .into_iter()
            .map(|(key, text, reference)| {
                Ok((key.to_string(), self.decode_document(text, reference)?))
            })
            .collect()
    }
}

/// Decode a full message with the default configuration.
pub fn decode_document(text: &str, reference: Option<&str>) -> Result<String> {
    Transliterator::new().decode_document(text, reference)
}
