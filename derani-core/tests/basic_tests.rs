//! Integration tests for derani-core

use derani_core::*;

// Glyph shorthands: letter glyphs read consonant/vowel by slot.
const T: &str = "\u{F16B7}"; // t
const O: &str = "\u{F16C3}"; // g / o
const B_U: &str = "\u{F16B2}"; // b / u
const J: &str = "\u{F16BE}"; // j
const S_A: &str = "\u{F16BA}"; // s / a
const TONE2: &str = "\u{F16CA}";
const TONE3: &str = "\u{F16CB}";
const TONE4: &str = "\u{F16CC}";
const GLUE: &str = "\u{F16CD}";
const BOUNDARY: &str = "\u{F16D2}";
const PERIOD: &str = "\u{F16D5}";
const EXCLAIM: &str = "\u{F16D6}";
const QUESTION: &str = "\u{F16D7}";

#[test]
fn test_no_script_input_unchanged_byte_for_byte() {
    let t = Transliterator::new();
    for text in ["", "plain text", "%s and %S", "déjà vu.\nLine two!"] {
        assert_eq!(t.decode_document(text, None).unwrap(), text);
        assert_eq!(t.decode_sentence(text, true).unwrap(), text);
    }
}

#[test]
fn test_plain_cv_word_is_catalog_concatenation() {
    let t = Transliterator::new();
    assert_eq!(t.decode_word(&format!("{T}{O}")).unwrap(), "to");
}

#[test]
fn test_tone_placement_per_level() {
    let t = Transliterator::new();
    let word = format!("{T}{O}");
    assert_eq!(t.decode_word(&word).unwrap(), "to");
    assert_eq!(t.decode_word(&format!("{word}{TONE2}")).unwrap(), "tó");
    assert_eq!(t.decode_word(&format!("{word}{TONE3}")).unwrap(), "tö");
    assert_eq!(t.decode_word(&format!("{word}{TONE4}")).unwrap(), "tô");
}

#[test]
fn test_tone_never_reaches_a_later_vowel() {
    let t = Transliterator::new();
    // to + glue + a, tone anywhere: diacritic on the first vowel only.
    for tone in [TONE2, TONE3, TONE4] {
        let word = format!("{T}{O}{GLUE}{S_A}{tone}");
        let latin = t.decode_word(&word).unwrap();
        assert!(latin.ends_with('a'), "later vowel must stay plain: {latin}");
        assert_eq!(latin.chars().count(), 3);
    }
}

#[test]
fn test_morpheme_marking_exclusivity() {
    let word = format!("{B_U}{B_U}{BOUNDARY}{J}{S_A}");

    let with_separator = Transliterator::with_config(
        RenderConfig::builder().morpheme_separator("·").build(),
    );
    let latin = with_separator.decode_word(&word).unwrap();
    assert_eq!(latin, "bu·ja");
    assert!(!latin.contains('\u{0323}'));
    assert!(!latin.contains('ụ'));

    let without = Transliterator::new();
    let latin = without.decode_word(&word).unwrap();
    assert_eq!(latin, "bụja");
    assert!(!latin.contains('·'));
}

#[test]
fn test_multi_sentence_capitalization() {
    let t = Transliterator::new();
    let text = format!("{T}{O}{PERIOD} {B_U}{B_U}{PERIOD} {J}{S_A}{PERIOD}");

    // Lowercase reference: only the first sentence stays lowercase.
    assert_eq!(
        t.decode_document(&text, Some("one. two. three.")).unwrap(),
        "to. Bu. Ja."
    );
    // Uppercase reference capitalizes the first as well.
    assert_eq!(
        t.decode_document(&text, Some("One. two. three.")).unwrap(),
        "To. Bu. Ja."
    );
}

#[test]
fn test_punctuation_round_trip_without_preceding_space() {
    let t = Transliterator::new();
    for (glyph, mark) in [(PERIOD, '.'), (EXCLAIM, '!'), (QUESTION, '?')] {
        let text = format!("{T}{O} {glyph}");
        let latin = t.decode_document(&text, Some("x")).unwrap();
        assert_eq!(latin, format!("to{mark}"));
    }
}

#[test]
fn test_two_message_scenario() {
    let t = Transliterator::new();
    let script = format!("{T}{O}{PERIOD} {B_U}{B_U}{PERIOD}");
    let entries = vec![
        ("menu.plain", "Singleplayer", None),
        ("chat.greeting", script.as_str(), Some("hello there. bye.")),
    ];

    let converted = t.convert_entries(entries).unwrap();
    assert_eq!(
        converted,
        vec![
            ("menu.plain".to_string(), "Singleplayer".to_string()),
            ("chat.greeting".to_string(), "to. Bu.".to_string()),
        ]
    );
}

#[test]
fn test_unknown_glyph_reports_codepoint_and_position() {
    let t = Transliterator::new();
    let err = t
        .decode_word(&format!("{T}{O}\u{F16C8}"))
        .unwrap_err();
    assert_eq!(
        err,
        DeraniError::UnknownGlyph {
            glyph: '\u{F16C8}',
            position: 2,
        }
    );
}

#[test]
fn test_punctuation_only_sentence() {
    let t = Transliterator::new();
    assert_eq!(t.decode_document(PERIOD, None).unwrap(), ".");
}

#[test]
fn test_semivowel_override_applies_everywhere() {
    let t = Transliterator::with_config(
        RenderConfig::builder().semivowel_override("vy").build(),
    );
    let text = format!("\u{F16C1}{S_A}{PERIOD}");
    assert_eq!(t.decode_document(&text, Some("x")).unwrap(), "vya.");
}

#[test]
fn test_transliterator_is_shareable_across_threads() {
    use std::sync::Arc;

    let t = Arc::new(Transliterator::new());
    let text = format!("{T}{O}{PERIOD}");
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let t = Arc::clone(&t);
            let text = text.clone();
            std::thread::spawn(move || t.decode_document(&text, None).unwrap())
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), "To.");
    }
}

#[test]
fn test_locale_tag_constants() {
    assert_eq!(LANGUAGE_CODE_KEY, "language.code");
    assert_eq!(LATIN_LANGUAGE_CODE, "qtq_latn_tqg");
}
