// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Letter scanning and joining predicates.
//!
//! These answer "does the letter at this index connect to its neighbors"
//! without running a full shaper. Marks are transparent; any other
//! character that is not an Arabic letter ends the joining chain.
//!
//! Combined, the two predicates give the positional form a shaper would
//! pick for ordinary Arabic words.

use super::PositionalForm;
use super::unicode_data::{
    JoiningGroup, is_arabic_letter, is_nonspacing_mark, joining_group, joining_type,
};

/// Direction of a letter scan through a word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// The index one step further in this direction, if it can exist.
    #[inline]
    fn step(self, index: usize) -> Option<usize> {
        match self {
            Self::Forward => index.checked_add(1),
            Self::Backward => index.checked_sub(1),
        }
    }
}

/// Find the nearest Arabic letter starting at `index` (inclusive).
///
/// Nonspacing marks are skipped. The scan fails at the word boundary or
/// at the first character that is neither a mark nor an Arabic letter;
/// it never skips over a non-Arabic run.
///
/// Returns the letter and its index.
pub fn scan_arabic_letter(word: &[char], index: usize, direction: Direction) -> Option<(char, usize)> {
    let mut i = index;
    loop {
        let c = *word.get(i)?;
        if !is_nonspacing_mark(c) {
            return is_arabic_letter(c).then_some((c, i));
        }
        i = direction.step(i)?;
    }
}

/// Forward scan from `index` (inclusive).
#[inline]
pub fn next_arabic_letter(word: &[char], index: usize) -> Option<(char, usize)> {
    scan_arabic_letter(word, index, Direction::Forward)
}

/// Backward scan from `index` (inclusive).
#[inline]
pub fn previous_arabic_letter(word: &[char], index: usize) -> Option<(char, usize)> {
    scan_arabic_letter(word, index, Direction::Backward)
}

/// Backward scan from the position just before `index`.
#[inline]
fn letter_before(word: &[char], index: usize) -> Option<(char, usize)> {
    previous_arabic_letter(word, index.checked_sub(1)?)
}

/// Does the letter at `index` connect to the letter after it?
///
/// False when there is no letter at `index`, when that letter is
/// right-joining, or when nothing joinable follows it.
pub fn joins_left(word: &[char], index: usize) -> bool {
    let Some((c, i)) = next_arabic_letter(word, index) else {
        return false;
    };
    if joining_type(c).is_right_joining() {
        return false;
    }
    next_arabic_letter(word, i + 1).is_some()
}

/// Is the letter at `index` connected to the letter before it?
///
/// False when either letter is missing or when the preceding letter is
/// right-joining and so cannot reach forward.
pub fn joins_right(word: &[char], index: usize) -> bool {
    let Some((_, i)) = previous_arabic_letter(word, index) else {
        return false;
    };
    let Some((prev, _)) = letter_before(word, i) else {
        return false;
    };
    !joining_type(prev).is_right_joining()
}

/// Is the character at `index` the alef of a lam-alef ligature?
pub fn is_lam_alef(word: &[char], index: usize) -> bool {
    let Some(&c) = word.get(index) else {
        return false;
    };
    if joining_group(c) != JoiningGroup::Alef {
        return false;
    }
    letter_before(word, index).is_some_and(|(prev, _)| joining_group(prev) == JoiningGroup::Lam)
}

impl PositionalForm {
    /// Approximate the contextual form of the letter at `index`.
    pub fn at(word: &[char], index: usize) -> Self {
        match (joins_right(word, index), joins_left(word, index)) {
            (false, false) => Self::Isolated,
            (false, true) => Self::Initial,
            (true, false) => Self::Final,
            (true, true) => Self::Medial,
        }
    }
}
