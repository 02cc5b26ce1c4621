// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Character constants and defaults for kashida placement.
//!
//! Everything the rule engine treats as a fixed character lives here so
//! the scanner, the rules and the text driver agree on one definition.

// ============================================================================
// KASHIDA SETTINGS
// ============================================================================
/// ARABIC TATWEEL, the elongation character inserted between letters
const KASHIDA: char = '\u{0640}';

/// Marks that decorate a tatweel (superscript alef, hamza above).
///
/// A tatweel directly followed by one of these is a carrier for the mark,
/// not a user-authored elongation.
const KASHIDA_DECORATIONS: [char; 2] = ['\u{0670}', '\u{0654}'];

// ============================================================================
// TEXT SETTINGS
// ============================================================================
/// Words are split on this character and joined back with it
const WORD_SEPARATOR: char = ' ';

// ============================================================================
// DEFAULTS
// ============================================================================
/// Strip user kashidas before scanning unless told otherwise
const REMOVE_EXISTING: bool = true;

/// Insert only the best candidate per word unless told otherwise
const INSERT_ALL: bool = false;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// The kashida character and the marks it may carry
pub mod kashida {
    /// ARABIC TATWEEL (U+0640)
    pub const CHAR: char = super::KASHIDA;

    /// Marks that turn a tatweel into a decoration carrier
    pub const DECORATIONS: [char; 2] = super::KASHIDA_DECORATIONS;
}

/// Word splitting for the text driver
pub mod text {
    /// Separator between words
    pub const WORD_SEPARATOR: char = super::WORD_SEPARATOR;
}

/// Default values for the public API and `KashidaOptions`
pub mod defaults {
    pub const REMOVE_EXISTING: bool = super::REMOVE_EXISTING;
    pub const INSERT_ALL: bool = super::INSERT_ALL;
}
