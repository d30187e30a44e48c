//! Sentence decoder
//!
//! Segments one sentence into punctuation, whitespace, and word runs,
//! decodes each run, and applies punctuation translation, whitespace
//! rewrites, and capitalization. Mixed-content strings with no script
//! glyphs pass through untouched.

use crate::catalog::{GlyphCatalog, GlyphClass};
use crate::config::RenderConfig;
use crate::error::Result;
use crate::word::decode_word;

/// Decode one sentence. `capitalize_first` uppercases the first word
/// character of the result, leaving everything before it untouched.
pub(crate) fn decode_sentence(
    catalog: &GlyphCatalog,
    config: &RenderConfig,
    sentence: &str,
    capitalize_first: bool,
) -> Result<String> {
    // Fast path for strings that carry no script at all (placeholders,
    // passthrough messages).
    if !sentence.chars().any(|ch| catalog.is_script(ch)) {
        return Ok(sentence.to_string());
    }

    let text = translate_punctuation(catalog, sentence);

    // Whitespace-conditioned rewrites, elision before the listing comma.
    let text = rewrite_after_whitespace(&text, |ch| {
        matches!(catalog.classify(ch), GlyphClass::Elidable)
    }, "");
    let text = rewrite_after_whitespace(&text, |ch| {
        matches!(catalog.classify(ch), GlyphClass::ListingComma)
    }, ",");

    let mut out = decode_word_runs(catalog, config, &text)?;

    if capitalize_first {
        out = capitalize_first_word_char(&out);
    }

    let out = collapse_space_before_final(&out);

    // Compatibility fixes for the surrounding localization format.
    Ok(out.replace('\u{00A0}', " ").replace("%S", "%s"))
}

/// Translate punctuation glyphs and drop the decorative ones.
fn translate_punctuation(catalog: &GlyphCatalog, sentence: &str) -> String {
    let mut out = String::with_capacity(sentence.len());
    for ch in sentence.chars() {
        match catalog.classify(ch) {
            GlyphClass::SentenceFinal(kind) => out.push(kind.as_char()),
            GlyphClass::WordSpace => out.push(' '),
            GlyphClass::Decorative => {}
            _ => out.push(ch),
        }
    }
    out
}

/// Replace each (whitespace char, target glyph) pair with `replacement`.
/// A target glyph not preceded by whitespace is left alone.
fn rewrite_after_whitespace(
    text: &str,
    is_target: impl Fn(char) -> bool,
    replacement: &str,
) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch.is_whitespace() {
            if let Some(&next) = chars.peek() {
                if is_target(next) {
                    chars.next();
                    out.push_str(replacement);
                    continue;
                }
            }
        }
        out.push(ch);
    }
    out
}

/// Replace every maximal run of word-composing glyphs with its decoding.
fn decode_word_runs(catalog: &GlyphCatalog, config: &RenderConfig, text: &str) -> Result<String> {
    let mut out = String::with_capacity(text.len());
    let mut run = String::new();
    for ch in text.chars() {
        if catalog.is_word_glyph(ch) {
            run.push(ch);
        } else {
            if !run.is_empty() {
                out.push_str(&decode_word(catalog, config, &run)?);
                run.clear();
            }
            out.push(ch);
        }
    }
    if !run.is_empty() {
        out.push_str(&decode_word(catalog, config, &run)?);
    }
    Ok(out)
}

/// Uppercase the single first word character (letter, digit, or `_`).
fn capitalize_first_word_char(text: &str) -> String {
    let Some((index, ch)) = text
        .char_indices()
        .find(|(_, ch)| ch.is_alphanumeric() || *ch == '_')
    else {
        return text.to_string();
    };
    let mut out = String::with_capacity(text.len() + 1);
    out.push_str(&text[..index]);
    out.extend(ch.to_uppercase());
    out.push_str(&text[index + ch.len_utf8()..]);
    out
}

/// Drop a whitespace char sitting directly before sentence-final
/// punctuation, an artifact of punctuation translation after a trailing
/// space.
fn collapse_space_before_final(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch.is_whitespace() && matches!(chars.peek(), Some('.' | '!' | '?')) {
            continue;
        }
        out.push(ch);
    }
    out
}
