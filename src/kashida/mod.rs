// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Kashida point detection and insertion.
//!
//! A kashida (tatweel, U+0640) lengthens the connection between two
//! joined letters. Where it may go depends on the letters around it:
//! calligraphic convention prefers some positions (after an initial seen,
//! before a final heh) over others, and forbids some entirely (inside a
//! lam-alef ligature).
//!
//! # Pipeline
//!
//! 1. [`find_kashida_points`] optionally strips user kashidas, then runs
//!    the rule table of the requested [`Algorithm`] over the word and
//!    returns the ranked candidates.
//! 2. [`insert_kashidas`] inserts either the best candidate or all of
//!    them.
//! 3. [`make_kashida_string`] does both for every space-separated word of
//!    a text.
//!
//! Indices are `char` offsets into the (cleaned) word.

pub mod options;
pub mod rules;

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::KashidaError;
use crate::settings;

pub use options::{KashidaOptions, OptionsError};
pub use rules::{Rule, SIMPLE_RULES, is_user_kashida};

/// A candidate kashida position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Kashida {
    /// Offset into the word at which the kashida would be inserted
    pub index: usize,
    /// Rule priority, 1 (strongest) to 7 (generic fallback)
    pub priority: u8,
    /// Optional cap on how many kashidas may go here
    pub max: Option<usize>,
}

impl Kashida {
    pub fn new(index: usize, priority: u8) -> Self {
        Self {
            index,
            priority,
            max: None,
        }
    }

    pub fn with_max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }
}

/// Candidates for one word, in scan order, at most one per index.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Kashidas {
    items: Vec<Kashida>,
    taken: HashSet<usize>,
}

impl Kashidas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `kashida` unless its index is already taken.
    ///
    /// Returns whether it was added.
    pub fn push(&mut self, kashida: Kashida) -> bool {
        if !self.taken.insert(kashida.index) {
            return false;
        }
        self.items.push(kashida);
        true
    }

    pub fn as_slice(&self) -> &[Kashida] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<Kashida> {
        self.items
    }
}

impl std::ops::Deref for Kashidas {
    type Target = [Kashida];

    fn deref(&self) -> &[Kashida] {
        &self.items
    }
}

impl<'a> IntoIterator for &'a Kashidas {
    type Item = &'a Kashida;
    type IntoIter = std::slice::Iter<'a, Kashida>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl IntoIterator for Kashidas {
    type Item = Kashida;
    type IntoIter = std::vec::IntoIter<Kashida>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl FromIterator<Kashida> for Kashidas {
    fn from_iter<I: IntoIterator<Item = Kashida>>(iter: I) -> Self {
        let mut kashidas = Self::new();
        for kashida in iter {
            kashidas.push(kashida);
        }
        kashidas
    }
}

impl Serialize for Kashidas {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

/// Kashida placement algorithm.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Contextual seven-rule placement
    #[default]
    Simple,
    /// Naskh calligraphic placement (no rule table yet)
    Naskh,
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Naskh => "naskh",
        }
    }

    /// The rule table for this algorithm.
    pub fn rules(&self) -> Result<&'static [Rule], KashidaError> {
        match self {
            Self::Simple => Ok(&SIMPLE_RULES),
            Self::Naskh => {
                tracing::debug!("Rejecting unsupported kashida algorithm {}", self);
                Err(KashidaError::unsupported(self.name()))
            }
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = KashidaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(Self::Simple),
            "naskh" => Ok(Self::Naskh),
            other => Err(KashidaError::unsupported(other)),
        }
    }
}

/// Remove every user kashida from `word`.
///
/// A tatweel immediately followed by superscript alef or hamza above
/// carries that mark and is kept.
pub fn strip_kashidas(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    chars
        .iter()
        .enumerate()
        .filter(|&(i, _)| !is_user_kashida(&chars, i))
        .map(|(_, &c)| c)
        .collect()
}

/// Find the kashida candidates of a single word.
///
/// With `remove_existing`, user kashidas are stripped first and the
/// candidates refer to the stripped word, which is returned alongside
/// them.
pub fn find_kashida_points(
    word: &str,
    algorithm: Algorithm,
    remove_existing: bool,
) -> Result<(String, Kashidas), KashidaError> {
    let rules = algorithm.rules()?;

    let word = if remove_existing {
        strip_kashidas(word)
    } else {
        word.to_string()
    };

    let chars: Vec<char> = word.chars().collect();
    let kashidas = rules::collect_candidates(&chars, rules);
    tracing::debug!("Found {} kashida points in '{}'", kashidas.len(), word);

    Ok((word, kashidas))
}

/// Insert kashidas into `word` at the given candidates.
///
/// Without `insert_all` only the best candidate is used: lowest priority
/// number, and among equals the highest index. With `insert_all` every
/// candidate is inserted in the given order, each later offset shifted by
/// the insertions before it. Offsets past the end of the word append.
pub fn insert_kashidas(word: &str, kashidas: &[Kashida], insert_all: bool) -> String {
    let selected: Vec<&Kashida> = if insert_all {
        kashidas.iter().collect()
    } else {
        kashidas
            .iter()
            .min_by(|a, b| a.priority.cmp(&b.priority).then(b.index.cmp(&a.index)))
            .into_iter()
            .collect()
    };

    let mut chars: Vec<char> = word.chars().collect();
    for (inserted, kashida) in selected.into_iter().enumerate() {
        let pos = (kashida.index + inserted).min(chars.len());
        chars.insert(pos, settings::kashida::CHAR);
    }
    chars.into_iter().collect()
}

/// Insert kashidas into every space-separated word of `text`.
///
/// Words are processed independently and joined back with single spaces,
/// so runs of spaces survive unchanged.
pub fn make_kashida_string(
    text: &str,
    algorithm: Algorithm,
    remove_existing: bool,
    insert_all: bool,
) -> Result<String, KashidaError> {
    let words = text
        .split(settings::text::WORD_SEPARATOR)
        .map(|word| {
            let (word, kashidas) = find_kashida_points(word, algorithm, remove_existing)?;
            Ok(insert_kashidas(&word, &kashidas, insert_all))
        })
        .collect::<Result<Vec<_>, KashidaError>>()?;

    let separator = settings::text::WORD_SEPARATOR.to_string();
    Ok(words.join(separator.as_str()))
}
