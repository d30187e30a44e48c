//! Word decoder
//!
//! Decodes one maximal run of word-composing glyphs into Latin text:
//! tone detection and placement, CV-slot tracking, morpheme-boundary
//! marking, and final NFKC composition. Decoding is total over catalog
//! glyphs and deterministic; only an unassigned codepoint is an error.

use unicode_normalization::UnicodeNormalization;

use crate::catalog::{GlyphCatalog, GlyphClass, Tone, SEMIVOWEL};
use crate::config::RenderConfig;
use crate::error::{DeraniError, Result};

/// Combining dot below, the implicit morpheme-boundary mark.
const UNDER_DOT: char = '\u{0323}';

/// CV-slot state: which reading the next letter glyph takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    /// The next glyph fills a vowel slot if it has a vowel reading.
    ExpectVowel,
    /// The next glyph takes its consonant reading.
    ExpectConsonant,
}

/// Extent of the vowel run (plus optional single coda) at the end of the
/// accumulated output. Byte offsets into [`WordBuffer::out`].
///
/// This replaces a backward text scan at each boundary glyph: the raku
/// that would receive the under-dot is always the trailing run, so its
/// start offset can be maintained incrementally while emitting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RakuTail {
    /// Output ends in something that cannot take the under-dot.
    None,
    /// Output ends in a run of vowel letters and tone diacritics.
    Vowels {
        /// Offset of the first vowel letter of the run.
        start: usize,
    },
    /// Output ends in a vowel run followed by a single `m` or `q` coda.
    Coda {
        /// Offset of the first vowel letter of the run.
        start: usize,
        /// Offset of the coda consonant.
        coda: usize,
    },
}

/// Output accumulator for one word.
#[derive(Debug)]
struct WordBuffer {
    out: String,
    tail: RakuTail,
}

impl WordBuffer {
    fn new() -> Self {
        Self {
            out: String::new(),
            tail: RakuTail::None,
        }
    }

    /// Emit a vowel letter (or diphthong), extending or starting the
    /// trailing vowel run.
    fn push_vowel(&mut self, text: &str) {
        if !matches!(self.tail, RakuTail::Vowels { .. }) {
            self.tail = RakuTail::Vowels {
                start: self.out.len(),
            };
        }
        self.out.push_str(text);
    }

    /// Emit a tone diacritic. Only valid directly after a vowel, so the
    /// trailing run simply absorbs it.
    fn push_tone(&mut self, mark: char) {
        self.out.push(mark);
    }

    /// Emit a fixed coda consonant (`m` or `q`).
    fn push_coda(&mut self, coda: char) {
        self.tail = match self.tail {
            RakuTail::Vowels { start } => RakuTail::Coda {
                start,
                coda: self.out.len(),
            },
            // A second coda, or a coda with no preceding vowel, ends any
            // markable run.
            _ => RakuTail::None,
        };
        self.out.push(coda);
    }

    /// Emit consonant text. The boundary pattern reads the emitted text,
    /// so a letter-glyph `m` or `q` still counts as a coda; any other
    /// consonant ends the trailing run.
    fn push_consonant(&mut self, text: &str) {
        self.tail = match (text, self.tail) {
            ("m" | "q", RakuTail::Vowels { start }) => RakuTail::Coda {
                start,
                coda: self.out.len(),
            },
            _ => RakuTail::None,
        };
        self.out.push_str(text);
    }

    /// Emit the configured literal morpheme separator.
    fn push_separator(&mut self, text: &str) {
        self.tail = RakuTail::None;
        self.out.push_str(text);
    }

    /// Insert the under-dot after the first vowel letter of the trailing
    /// raku. No-op when the output does not end in a markable run.
    fn mark_boundary(&mut self) {
        let (start, coda) = match self.tail {
            RakuTail::None => return,
            RakuTail::Vowels { start } => (start, None),
            RakuTail::Coda { start, coda } => (start, Some(coda)),
        };
        let Some(first) = self.out[start..].chars().next() else {
            return;
        };
        let insert_at = start + first.len_utf8();
        self.out.insert(insert_at, UNDER_DOT);
        let shift = UNDER_DOT.len_utf8();

        // A repeated boundary glyph may only mark whatever vowels remain
        // after the dot, mirroring how the trailing run shrinks.
        let remaining = insert_at + shift;
        self.tail = match coda {
            Some(coda) => {
                let coda = coda + shift;
                if remaining >= coda {
                    RakuTail::None
                } else {
                    RakuTail::Coda {
                        start: remaining,
                        coda,
                    }
                }
            }
            None => {
                if remaining >= self.out.len() {
                    RakuTail::None
                } else {
                    RakuTail::Vowels { start: remaining }
                }
            }
        };
    }

    fn finish(self) -> String {
        self.out
    }
}

/// Decode one word run. See the module docs for the pipeline.
pub(crate) fn decode_word(
    catalog: &GlyphCatalog,
    config: &RenderConfig,
    word: &str,
) -> Result<String> {
    // Tone is a property of the whole word: lowest level present wins,
    // and the marks are stripped before slot seeding.
    let mut tone: Option<Tone> = None;
    let mut glyphs: Vec<(usize, char)> = Vec::with_capacity(word.chars().count());
    for (position, ch) in word.chars().enumerate() {
        if let GlyphClass::ToneMark(level) = catalog.classify(ch) {
            tone = Some(match tone {
                Some(current) if current <= level => current,
                _ => level,
            });
        } else {
            glyphs.push((position, ch));
        }
    }

    // Seed the slot state from the second glyph: a word whose second glyph
    // is not a vowel opens with a vowel slot.
    let mut slot = match glyphs.get(1) {
        Some(&(_, second)) if catalog.vowel_text(second).is_none() => Slot::ExpectVowel,
        _ => Slot::ExpectConsonant,
    };

    let mut buf = WordBuffer::new();
    let mut placed_tone = false;

    for &(position, ch) in &glyphs {
        match catalog.classify(ch) {
            GlyphClass::NasalFinal => {
                buf.push_coda('m');
                slot = Slot::ExpectConsonant;
            }
            GlyphClass::QFinal => {
                buf.push_coda('q');
                slot = Slot::ExpectConsonant;
            }
            GlyphClass::MorphemeBoundary => match &config.morpheme_separator {
                Some(separator) => buf.push_separator(separator),
                None => buf.mark_boundary(),
            },
            GlyphClass::GlueVowel => {
                slot = Slot::ExpectVowel;
            }
            // Stripped above.
            GlyphClass::ToneMark(_) => {}
            _ => {
                if slot == Slot::ExpectVowel {
                    if let Some(vowel) = catalog.vowel_text(ch) {
                        if placed_tone {
                            buf.push_vowel(vowel);
                        } else {
                            // The dotless ı takes its dotted form when it
                            // must anchor a tone mark.
                            let vowel = match tone {
                                Some(_) if vowel == "ı" => "i",
                                _ => vowel,
                            };
                            buf.push_vowel(vowel);
                            if let Some(tone) = tone {
                                buf.push_tone(tone.combining());
                            }
                            placed_tone = true;
                        }
                        slot = Slot::ExpectConsonant;
                        continue;
                    }
                }
                let mut text = catalog
                    .consonant_text(ch)
                    .ok_or(DeraniError::UnknownGlyph {
                        glyph: ch,
                        position,
                    })?;
                if text == SEMIVOWEL {
                    if let Some(replacement) = config.semivowel_override.as_deref() {
                        text = replacement;
                    }
                }
                buf.push_consonant(text);
                slot = Slot::ExpectVowel;
            }
        }
    }

    // Words never open with an audible glottal stop.
    let latin = buf.finish();
    Ok(latin.trim_start_matches('\'').nfkc().collect())
}
