//! Static glyph catalog for the Derani script block
//!
//! The script occupies the private-use block U+F16B0..=U+F16DF. Every
//! assigned codepoint maps to exactly one [`GlyphClass`]; letter glyphs
//! additionally carry a consonant reading and, for some, a vowel reading,
//! selected by the word decoder's CV-slot state.

/// First codepoint of the script block.
pub const SCRIPT_FIRST: char = '\u{F16B0}';

/// Last codepoint of the script block.
pub const SCRIPT_LAST: char = '\u{F16DF}';

/// Last codepoint of the word-composing sub-range.
///
/// A word run is a maximal sequence of glyphs in
/// `SCRIPT_FIRST..=WORD_GLYPH_LAST`. Later revisions of the script widened
/// this bound to include the morpheme-boundary glyph; that wider range is
/// the canonical one.
pub const WORD_GLYPH_LAST: char = '\u{F16D2}';

/// The consonant text whose rendering is configurable
/// (see `RenderConfig::semivowel_override`).
pub const SEMIVOWEL: &str = "ꝡ";

/// Word tone, carried by a tone-mark glyph anywhere in the word and
/// realized as a combining diacritic on the word's first vowel.
///
/// When several tone marks occur in one word, the lowest level wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tone {
    /// Level 2, rendered as a combining acute accent.
    Level2,
    /// Level 3, rendered as a combining diaeresis.
    Level3,
    /// Level 4, rendered as a combining circumflex accent.
    Level4,
}

impl Tone {
    /// The combining diacritic realizing this tone.
    pub fn combining(self) -> char {
        match self {
            Tone::Level2 => '\u{0301}',
            Tone::Level3 => '\u{0308}',
            Tone::Level4 => '\u{0302}',
        }
    }
}

/// Kind of sentence-final punctuation glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FinalKind {
    /// Declarative terminator, rendered `.`
    Period,
    /// Exclamatory terminator, rendered `!`
    Exclaim,
    /// Interrogative terminator, rendered `?`
    Question,
}

impl FinalKind {
    /// The Latin punctuation mark for this terminator.
    pub fn as_char(self) -> char {
        match self {
            FinalKind::Period => '.',
            FinalKind::Exclaim => '!',
            FinalKind::Question => '?',
        }
    }
}

/// Classification of a single codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphClass {
    /// Letter glyph with a consonant reading and possibly a vowel reading.
    Letter,
    /// Syllable-final nasal, rendered `m`.
    NasalFinal,
    /// Syllable-final `q`. Unlike an ordinary letter it closes the
    /// syllable instead of opening a vowel slot.
    QFinal,
    /// Tone mark; stripped from the word and realized on its first vowel.
    ToneMark(Tone),
    /// Hiatus mark reopening the vowel slot, emitting nothing itself.
    GlueVowel,
    /// Prefix/stem juncture, rendered as a literal separator or as a
    /// retroactive under-dot on the preceding raku.
    MorphemeBoundary,
    /// Sentence-final punctuation.
    SentenceFinal(FinalKind),
    /// Listing pause; becomes a comma when preceded by whitespace.
    ListingComma,
    /// Elidable particle; deleted together with preceding whitespace.
    Elidable,
    /// Glyph-script space, rendered as an ASCII space.
    WordSpace,
    /// Stylistic marker with no Latin equivalent, dropped from output.
    Decorative,
    /// Codepoint inside the script block with no assignment; decoding a
    /// word containing one is an error.
    Unassigned,
    /// Codepoint outside the script block.
    NonScript,
}

/// Immutable lookup tables over the script block.
///
/// Constructed once and shared by reference; all lookups are pure.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlyphCatalog;

impl GlyphCatalog {
    /// Create the catalog. The tables use the nine-vowel inventory, the
    /// later and more expressive variant of the script.
    pub const fn new() -> Self {
        GlyphCatalog
    }

    /// Whether `ch` lies inside the script block.
    #[inline]
    pub fn is_script(&self, ch: char) -> bool {
        (SCRIPT_FIRST..=SCRIPT_LAST).contains(&ch)
    }

    /// Whether `ch` participates in word runs.
    #[inline]
    pub fn is_word_glyph(&self, ch: char) -> bool {
        (SCRIPT_FIRST..=WORD_GLYPH_LAST).contains(&ch)
    }

    /// Classify a codepoint. Total: returns [`GlyphClass::NonScript`]
    /// outside the block and [`GlyphClass::Unassigned`] for block
    /// codepoints the script does not assign.
    pub fn classify(&self, ch: char) -> GlyphClass {
        match ch {
            '\u{F16B0}' | '\u{F16B2}'..='\u{F16C1}' | '\u{F16C3}'..='\u{F16C6}' => {
                GlyphClass::Letter
            }
            '\u{F16B1}' => GlyphClass::NasalFinal,
            '\u{F16C2}' => GlyphClass::QFinal,
            '\u{F16CA}' => GlyphClass::ToneMark(Tone::Level2),
            '\u{F16CB}' => GlyphClass::ToneMark(Tone::Level3),
            '\u{F16CC}' => GlyphClass::ToneMark(Tone::Level4),
            '\u{F16CD}' | '\u{F16CE}' => GlyphClass::GlueVowel,
            '\u{F16D2}' => GlyphClass::MorphemeBoundary,
            '\u{F16D3}' | '\u{F16D8}' | '\u{F16D9}' => GlyphClass::Decorative,
            '\u{F16D4}' => GlyphClass::ListingComma,
            '\u{F16D5}' => GlyphClass::SentenceFinal(FinalKind::Period),
            '\u{F16D6}' => GlyphClass::SentenceFinal(FinalKind::Exclaim),
            '\u{F16D7}' => GlyphClass::SentenceFinal(FinalKind::Question),
            '\u{F16DA}' => GlyphClass::Elidable,
            '\u{F16DB}' => GlyphClass::WordSpace,
            _ if self.is_script(ch) => GlyphClass::Unassigned,
            _ => GlyphClass::NonScript,
        }
    }

    /// Consonant reading of a letter glyph.
    pub fn consonant_text(&self, ch: char) -> Option<&'static str> {
        Some(match ch {
            '\u{F16B0}' => "m",
            '\u{F16B2}' => "b",
            '\u{F16B3}' => "p",
            '\u{F16B4}' => "f",
            '\u{F16B5}' => "n",
            '\u{F16B6}' => "d",
            '\u{F16B7}' => "t",
            '\u{F16B8}' => "z",
            '\u{F16B9}' => "c",
            '\u{F16BA}' => "s",
            '\u{F16BB}' => "r",
            '\u{F16BC}' => "l",
            '\u{F16BD}' => "nh",
            '\u{F16BE}' => "j",
            '\u{F16BF}' => "ch",
            '\u{F16C0}' => "sh",
            '\u{F16C1}' => SEMIVOWEL,
            '\u{F16C2}' => "q",
            '\u{F16C3}' => "g",
            '\u{F16C4}' => "k",
            '\u{F16C5}' => "'",
            '\u{F16C6}' => "h",
            _ => return None,
        })
    }

    /// Vowel reading of a letter glyph, where one exists. Includes the
    /// four diphthongs of the nine-vowel inventory.
    pub fn vowel_text(&self, ch: char) -> Option<&'static str> {
        Some(match ch {
            '\u{F16B2}' => "u",
            '\u{F16B3}' => "ao",
            '\u{F16B4}' => "e",
            '\u{F16B6}' => "aı",
            '\u{F16B8}' => "eı",
            '\u{F16B9}' => "ı",
            '\u{F16BA}' => "a",
            '\u{F16BD}' => "oı",
            '\u{F16C3}' => "o",
            _ => return None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_is_total_over_block() {
        let catalog = GlyphCatalog::new();
        for cp in SCRIPT_FIRST as u32..=SCRIPT_LAST as u32 {
            let ch = char::from_u32(cp).unwrap();
            assert_ne!(
                catalog.classify(ch),
                GlyphClass::NonScript,
                "U+{cp:04X} must classify inside the block"
            );
        }
        assert_eq!(catalog.classify('a'), GlyphClass::NonScript);
        assert_eq!(catalog.classify('。'), GlyphClass::NonScript);
    }

    #[test]
    fn test_letter_glyphs_always_have_consonant_reading() {
        let catalog = GlyphCatalog::new();
        for cp in SCRIPT_FIRST as u32..=SCRIPT_LAST as u32 {
            let ch = char::from_u32(cp).unwrap();
            if catalog.classify(ch) == GlyphClass::Letter {
                assert!(
                    catalog.consonant_text(ch).is_some(),
                    "letter U+{cp:04X} has no consonant text"
                );
            }
        }
    }

    #[test]
    fn test_nine_vowel_inventory() {
        let catalog = GlyphCatalog::new();
        let vowels: Vec<_> = (SCRIPT_FIRST as u32..=SCRIPT_LAST as u32)
            .filter_map(char::from_u32)
            .filter_map(|ch| catalog.vowel_text(ch))
            .collect();
        assert_eq!(vowels.len(), 9);
        for diphthong in ["aı", "ao", "eı", "oı"] {
            assert!(vowels.contains(&diphthong));
        }
    }

    #[test]
    fn test_q_final_is_not_a_plain_letter() {
        let catalog = GlyphCatalog::new();
        assert_eq!(catalog.classify('\u{F16C2}'), GlyphClass::QFinal);
        // It still carries its consonant text for display purposes.
        assert_eq!(catalog.consonant_text('\u{F16C2}'), Some("q"));
    }

    #[test]
    fn test_word_glyph_range_includes_morpheme_boundary() {
        let catalog = GlyphCatalog::new();
        assert!(catalog.is_word_glyph('\u{F16D2}'));
        assert!(!catalog.is_word_glyph('\u{F16D3}'));
        assert!(catalog.is_script('\u{F16DF}'));
        assert!(!catalog.is_script('\u{F16E0}'));
    }

    #[test]
    fn test_tone_priority_orders_by_level() {
        assert!(Tone::Level2 < Tone::Level3);
        assert!(Tone::Level3 < Tone::Level4);
        assert_eq!(Tone::Level2.combining(), '\u{0301}');
        assert_eq!(Tone::Level3.combining(), '\u{0308}');
        assert_eq!(Tone::Level4.combining(), '\u{0302}');
    }
}
