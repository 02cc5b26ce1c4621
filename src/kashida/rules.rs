// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Prioritized kashida rule tables.
//!
//! A rule table is evaluated top to bottom for every Arabic letter in a
//! word. The first rule that applies emits one candidate for that letter
//! and the remaining rules are skipped.

use crate::settings;
use crate::shaping::{
    JoiningGroup, PositionalForm, is_arabic_letter, is_lam_alef, joining_group, next_arabic_letter,
};

use super::{Kashida, Kashidas};

/// Where a rule puts its kashida relative to the letter it matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// Before the next Arabic letter (after the matched one and its marks)
    AfterLetter,
    /// Directly before the matched letter
    BeforeLetter,
}

/// Everything a rule may ask about the letter being examined.
#[derive(Clone, Copy, Debug)]
pub struct LetterContext<'a> {
    pub word: &'a [char],
    pub index: usize,
    pub letter: char,
    pub group: JoiningGroup,
    pub form: PositionalForm,
    /// The following Arabic letter and its index, marks skipped
    pub next: Option<(char, usize)>,
}

impl<'a> LetterContext<'a> {
    /// Build the context for the letter at `index`.
    pub fn new(word: &'a [char], index: usize) -> Option<Self> {
        let letter = *word.get(index)?;
        if !is_arabic_letter(letter) {
            return None;
        }
        Some(Self {
            word,
            index,
            letter,
            group: joining_group(letter),
            form: PositionalForm::at(word, index),
            next: next_arabic_letter(word, index + 1),
        })
    }

    /// Index of the next Arabic letter, or the position right after this
    /// one when the chain ends here.
    pub fn next_index(&self) -> usize {
        self.next.map_or(self.index + 1, |(_, i)| i)
    }

    pub fn next_group(&self) -> JoiningGroup {
        self.next.map(|(c, _)| joining_group(c)).unwrap_or_default()
    }

    fn is_final(&self) -> bool {
        self.form == PositionalForm::Final
    }

    /// A tatweel typed by the user, as opposed to one carrying a mark.
    fn is_user_kashida(&self) -> bool {
        is_user_kashida(self.word, self.index)
    }
}

/// Is the character at `index` a tatweel not immediately followed by
/// superscript alef or hamza above?
pub fn is_user_kashida(word: &[char], index: usize) -> bool {
    word.get(index) == Some(&settings::kashida::CHAR)
        && !word
            .get(index + 1)
            .is_some_and(|next| settings::kashida::DECORATIONS.contains(next))
}

/// One entry of a rule table.
#[derive(Clone, Copy)]
pub struct Rule {
    /// Short description used in trace output
    pub name: &'static str,
    /// 1 is the strongest candidate
    pub priority: u8,
    pub placement: Placement,
    pub applies: fn(&LetterContext<'_>) -> bool,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("priority", &self.priority)
            .field("placement", &self.placement)
            .finish()
    }
}

impl Rule {
    /// The candidate this rule emits for `cx`, if it applies.
    pub fn candidate(&self, cx: &LetterContext<'_>) -> Option<Kashida> {
        if !(self.applies)(cx) {
            return None;
        }
        let index = match self.placement {
            Placement::AfterLetter => cx.next_index(),
            Placement::BeforeLetter => cx.index,
        };
        Some(Kashida::new(index, self.priority))
    }
}

/// The simple algorithm: seven contextual rules in priority order.
pub static SIMPLE_RULES: [Rule; 7] = [
    Rule {
        name: "after user kashida",
        priority: 1,
        placement: Placement::AfterLetter,
        applies: |cx| cx.is_user_kashida(),
    },
    Rule {
        name: "after initial or medial seen or sad",
        priority: 2,
        placement: Placement::AfterLetter,
        applies: |cx| matches!(cx.group, JoiningGroup::Seen | JoiningGroup::Sad) && cx.form.joins_left(),
    },
    Rule {
        name: "before final heh, teh marbuta or dal",
        priority: 3,
        placement: Placement::BeforeLetter,
        applies: |cx| (cx.group.is_heh_like() || cx.group == JoiningGroup::Dal) && cx.is_final(),
    },
    Rule {
        name: "before final alef, tah, kaf or lam",
        priority: 4,
        placement: Placement::BeforeLetter,
        applies: |cx| {
            (matches!(cx.group, JoiningGroup::Alef | JoiningGroup::Tah | JoiningGroup::Lam)
                || cx.group.is_kaf_like())
                && cx.is_final()
                && !is_lam_alef(cx.word, cx.index)
        },
    },
    Rule {
        name: "before medial beh followed by yeh or reh",
        priority: 5,
        placement: Placement::BeforeLetter,
        applies: |cx| {
            let next = cx.next_group();
            cx.group.is_beh_like()
                && cx.form == PositionalForm::Medial
                && (next.is_yeh_like() || next == JoiningGroup::Reh)
        },
    },
    Rule {
        name: "before final waw, ain, qaf or feh",
        priority: 6,
        placement: Placement::BeforeLetter,
        applies: |cx| {
            (matches!(cx.group, JoiningGroup::Waw | JoiningGroup::Ain)
                || cx.group.is_qaf_like()
                || cx.group.is_feh_like())
                && cx.is_final()
        },
    },
    Rule {
        name: "before any final letter",
        priority: 7,
        placement: Placement::BeforeLetter,
        applies: |cx| cx.is_final() && !is_lam_alef(cx.word, cx.index),
    },
];

/// Run a rule table over every letter of `word`.
///
/// The first applicable rule wins for each letter; a candidate whose index
/// is already taken by an earlier letter is dropped.
pub fn collect_candidates(word: &[char], rules: &[Rule]) -> Kashidas {
    let mut kashidas = Kashidas::new();
    for index in 0..word.len() {
        let Some(cx) = LetterContext::new(word, index) else {
            continue;
        };
        let Some((rule, kashida)) = rules
            .iter()
            .find_map(|rule| rule.candidate(&cx).map(|kashida| (rule, kashida)))
        else {
            continue;
        };
        tracing::trace!(
            "Rule '{}' matched letter {} -> kashida at {} (priority {})",
            rule.name,
            index,
            kashida.index,
            kashida.priority
        );
        if !kashidas.push(kashida) {
            tracing::trace!("Index {} already taken, dropping", kashida.index);
        }
    }
    kashidas
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_rule_priorities_are_ordered() {
        for (i, rule) in SIMPLE_RULES.iter().enumerate() {
            assert_eq!(rule.priority as usize, i + 1, "{:?}", rule);
        }
    }

    #[test]
    fn test_user_kashida_detection() {
        let word = chars("بـيت");
        assert!(is_user_kashida(&word, 1));
        assert!(!is_user_kashida(&word, 0));
        assert!(is_user_kashida(&chars("ـ"), 0));
        assert!(is_user_kashida(&chars("بـَيت"), 1));
        assert!(!is_user_kashida(&chars("مـٰن"), 1));
        assert!(!is_user_kashida(&chars("يـٔا"), 1));
    }

    #[test]
    fn test_context_next_defaults() {
        let word = chars("بيت");
        let cx = LetterContext::new(&word, 2).unwrap();
        assert_eq!(cx.next, None);
        assert_eq!(cx.next_index(), 3);
        assert_eq!(cx.next_group(), JoiningGroup::NoJoiningGroup);
        assert_eq!(cx.form, PositionalForm::Final);
    }

    #[test]
    fn test_context_skips_non_letters() {
        let word = chars("بَa");
        assert!(LetterContext::new(&word, 0).is_some());
        assert!(LetterContext::new(&word, 1).is_none());
        assert!(LetterContext::new(&word, 2).is_none());
        assert!(LetterContext::new(&word, 3).is_none());
    }

    #[test]
    fn test_first_matching_rule_wins() {
        // Final seen matches nothing before the generic final rule.
        let word = chars("سمس");
        let cx = LetterContext::new(&word, 2).unwrap();
        let hit = SIMPLE_RULES.iter().find_map(|rule| rule.candidate(&cx));
        assert_eq!(hit, Some(Kashida::new(2, 7)));

        // Initial seen is claimed by the seen/sad rule.
        let cx = LetterContext::new(&word, 0).unwrap();
        let hit = SIMPLE_RULES.iter().find_map(|rule| rule.candidate(&cx));
        assert_eq!(hit, Some(Kashida::new(1, 2)));
    }

    #[test]
    fn test_later_claim_on_same_index_is_dropped() {
        // sad claims index 1 with priority 2; final feh at 1 is dropped.
        let kashidas = collect_candidates(&chars("صف"), &SIMPLE_RULES);
        assert_eq!(kashidas.as_slice(), &[Kashida::new(1, 2)]);
    }

    #[test]
    fn test_consecutive_user_kashidas_each_qualify() {
        let kashidas = collect_candidates(&chars("بــت"), &SIMPLE_RULES);
        assert_eq!(
            kashidas.as_slice(),
            &[Kashida::new(2, 1), Kashida::new(3, 1)]
        );
    }
}
