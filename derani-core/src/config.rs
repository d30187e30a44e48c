//! Rendering configuration
//!
//! One immutable value object passed to every decode call. There is no
//! process-wide mutable state; a configuration is fixed for the duration
//! of a conversion run.

/// Rendering options for a conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderConfig {
    /// Literal string emitted at each morpheme-boundary glyph. When unset,
    /// the boundary is instead marked retroactively with a combining
    /// under-dot on the first vowel of the preceding raku.
    pub morpheme_separator: Option<String>,

    /// Replacement text for the semivowel letter `ꝡ`. When unset, the
    /// catalog's default text is emitted.
    pub semivowel_override: Option<String>,

    /// Whether to capitalize the first sentence of a message when no
    /// reference string is available for inference. Observed variants of
    /// this pipeline disagree on the default, so it is an explicit knob.
    pub capitalize_without_reference: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            morpheme_separator: None,
            semivowel_override: None,
            capitalize_without_reference: true,
        }
    }
}

impl RenderConfig {
    /// Create a builder.
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::default()
    }
}

/// Builder for [`RenderConfig`].
#[derive(Debug, Default)]
pub struct RenderConfigBuilder {
    config: RenderConfig,
}

impl RenderConfigBuilder {
    /// Set the literal morpheme separator.
    pub fn morpheme_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.morpheme_separator = Some(separator.into());
        self
    }

    /// Set the semivowel replacement text.
    pub fn semivowel_override(mut self, replacement: impl Into<String>) -> Self {
        self.config.semivowel_override = Some(replacement.into());
        self
    }

    /// Set the first-sentence capitalization default used when no
    /// reference string is supplied.
    pub fn capitalize_without_reference(mut self, capitalize: bool) -> Self {
        self.config.capitalize_without_reference = capitalize;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> RenderConfig {
        self.config
    }
}
