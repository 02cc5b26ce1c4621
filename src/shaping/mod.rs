// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Arabic joining analysis for kashida placement.
//!
//! This module answers the questions the kashida rules ask about a letter:
//! which joining group it belongs to, whether it connects to its
//! neighbors, and which contextual form it would take.
//!
//! # Architecture
//!
//! - **unicode_data**: joining type and joining group lookup from
//!   ArabicShaping.txt, plus letter and mark classification.
//!
//! - **joining**: the letter scanner (marks are transparent, anything
//!   non-Arabic breaks the chain) and the `joins_left` / `joins_right`
//!   predicates built on it.
//!
//! - **PositionalForm**: the contextual form of a letter (isolated,
//!   initial, medial, final) derived from the two predicates.
//!
//! # Example
//!
//! ```
//! use kashida::shaping::PositionalForm;
//!
//! let text: Vec<char> = "بسم".chars().collect();
//!
//! assert_eq!(PositionalForm::at(&text, 0), PositionalForm::Initial); // beh
//! assert_eq!(PositionalForm::at(&text, 1), PositionalForm::Medial); // seen
//! assert_eq!(PositionalForm::at(&text, 2), PositionalForm::Final); // meem
//! ```

pub mod joining;
pub mod unicode_data;

pub use joining::{
    Direction, is_lam_alef, joins_left, joins_right, next_arabic_letter, previous_arabic_letter,
    scan_arabic_letter,
};
pub use unicode_data::{
    JoiningGroup, JoiningType, is_arabic_letter, is_nonspacing_mark, joining_group, joining_type,
};

/// Positional forms for cursive scripts (Arabic, Syriac, etc.)
///
/// In cursive scripts, characters change shape depending on their position
/// within a connected sequence. This enum represents the four possible forms.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PositionalForm {
    /// Standalone form - character not connected to neighbors
    #[default]
    Isolated,
    /// Beginning of a connected sequence
    Initial,
    /// Middle of a connected sequence
    Medial,
    /// End of a connected sequence
    Final,
}

impl PositionalForm {
    /// Connected to the following letter (initial or medial).
    #[inline]
    pub fn joins_left(&self) -> bool {
        matches!(self, Self::Initial | Self::Medial)
    }

    /// Connected to the preceding letter (medial or final).
    #[inline]
    pub fn joins_right(&self) -> bool {
        matches!(self, Self::Medial | Self::Final)
    }

    /// Get a human-readable name for this form.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Isolated => "isolated",
            Self::Initial => "initial",
            Self::Medial => "medial",
            Self::Final => "final",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positional_form_name() {
        assert_eq!(PositionalForm::Isolated.name(), "isolated");
        assert_eq!(PositionalForm::Initial.name(), "initial");
        assert_eq!(PositionalForm::Medial.name(), "medial");
        assert_eq!(PositionalForm::Final.name(), "final");
    }

    #[test]
    fn test_positional_form_sides() {
        assert!(!PositionalForm::Isolated.joins_left());
        assert!(!PositionalForm::Isolated.joins_right());
        assert!(PositionalForm::Initial.joins_left());
        assert!(!PositionalForm::Initial.joins_right());
        assert!(PositionalForm::Medial.joins_left());
        assert!(PositionalForm::Medial.joins_right());
        assert!(!PositionalForm::Final.joins_left());
        assert!(PositionalForm::Final.joins_right());
    }
}
