//! Decoder error types

use thiserror::Error;

/// Errors surfaced while decoding script text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeraniError {
    /// A codepoint inside the script block that the catalog does not
    /// assign. Fatal for the containing word; the batch caller decides
    /// whether to skip the message or abort.
    #[error("unassigned script glyph {glyph:?} at position {position} in word run")]
    UnknownGlyph {
        /// The offending codepoint.
        glyph: char,
        /// Character offset of the glyph within its word run.
        position: usize,
    },
}

/// Result type for decoding operations
pub type Result<T> = std::result::Result<T, DeraniError>;
