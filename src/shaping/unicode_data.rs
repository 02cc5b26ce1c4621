// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Unicode character property data for kashida placement.
//!
//! Joining data sourced from ArabicShaping.txt, restricted to the rows
//! whose characters belong to the Arabic script.
//! See: https://www.unicode.org/Public/UCD/latest/ucd/ArabicShaping.txt
//!
//! Letter and mark classification is delegated to the general category
//! and script property crates.

use unicode_general_category::{GeneralCategory, get_general_category};
use unicode_script::{Script, UnicodeScript};

use crate::settings;

/// Arabic joining type from Unicode ArabicShaping.txt
///
/// Each Arabic character has a joining type that determines how it connects
/// to neighboring characters in cursive text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum JoiningType {
    /// Dual-joining (D): Can connect on both sides.
    /// Examples: beh, seen, meem, noon, yeh
    Dual,

    /// Right-joining (R): Connects only to the previous (right-side in RTL) letter.
    /// Examples: alef, dal, reh, waw
    Right,

    /// Left-joining (L): Connects only to the following letter.
    Left,

    /// Non-joining (U): Cannot connect to neighbors.
    /// Examples: hamza, Latin letters, numbers
    #[default]
    NonJoining,

    /// Join-causing (C): Causes adjacent letters to connect.
    /// Example: tatweel (kashida)
    JoinCausing,

    /// Transparent (T): Ignored for joining purposes.
    /// Examples: Arabic marks and diacritics (fatha, kasra, damma, etc.)
    Transparent,
}

impl JoiningType {
    /// Is this a right-joining character (alef, dal, reh, waw, ...)?
    ///
    /// Right-joining letters never connect to the letter that follows them.
    #[inline]
    pub fn is_right_joining(&self) -> bool {
        matches!(self, Self::Right)
    }

    /// Is this character transparent for joining?
    #[inline]
    pub fn is_transparent(&self) -> bool {
        matches!(self, Self::Transparent)
    }
}

/// Arabic joining group from Unicode ArabicShaping.txt
///
/// Letters in the same group share a skeleton and therefore the same
/// contextual shaping behavior (beh, teh and theh are all `Beh`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum JoiningGroup {
    #[default]
    NoJoiningGroup,
    AfricanFeh,
    AfricanNoon,
    AfricanQaf,
    Ain,
    Alef,
    Beh,
    BurushaskiYehBarree,
    Dal,
    FarsiYeh,
    Feh,
    Gaf,
    Hah,
    Heh,
    HehGoal,
    Kaf,
    KnottedHeh,
    Lam,
    Meem,
    Noon,
    Nya,
    Qaf,
    Reh,
    RohingyaYeh,
    Sad,
    Seen,
    StraightWaw,
    SwashKaf,
    Tah,
    TehMarbuta,
    TehMarbutaGoal,
    ThinYeh,
    VerticalTail,
    Waw,
    Yeh,
    YehBarree,
    YehWithTail,
}

impl JoiningGroup {
    /// Beh, noon and the yeh family in their dual-joining (tooth) shapes.
    pub fn is_beh_like(&self) -> bool {
        matches!(
            self,
            Self::Beh
                | Self::Noon
                | Self::AfricanNoon
                | Self::Nya
                | Self::Yeh
                | Self::FarsiYeh
                | Self::BurushaskiYehBarree
        )
    }

    /// Yeh, alef maksura and the yeh barree family.
    pub fn is_yeh_like(&self) -> bool {
        matches!(
            self,
            Self::Yeh
                | Self::FarsiYeh
                | Self::YehBarree
                | Self::BurushaskiYehBarree
                | Self::YehWithTail
        )
    }

    /// Heh, heh goal and teh marbuta.
    pub fn is_heh_like(&self) -> bool {
        matches!(
            self,
            Self::Heh | Self::HehGoal | Self::TehMarbuta | Self::TehMarbutaGoal
        )
    }

    /// Kaf and gaf (including keheh).
    pub fn is_kaf_like(&self) -> bool {
        matches!(self, Self::Kaf | Self::Gaf)
    }

    pub fn is_feh_like(&self) -> bool {
        matches!(self, Self::Feh | Self::AfricanFeh)
    }

    pub fn is_qaf_like(&self) -> bool {
        matches!(self, Self::Qaf | Self::AfricanQaf)
    }
}

/// One contiguous run of codepoints sharing joining properties.
#[derive(Clone, Copy, Debug)]
struct JoiningRow {
    first: u32,
    last: u32,
    joining_type: JoiningType,
    group: JoiningGroup,
}

const fn row(first: u32, last: u32, joining_type: JoiningType, group: JoiningGroup) -> JoiningRow {
    JoiningRow {
        first,
        last,
        joining_type,
        group,
    }
}

use table::JOINING_TABLE;

// Generated from ArabicShaping.txt, Arabic script rows only. Sorted by
// codepoint, ranges never overlap.
#[rustfmt::skip]
mod table {
    use super::{JoiningRow, row};
    use super::JoiningGroup::*;
    use super::JoiningType::{Dual as D, JoinCausing as C, NonJoining as U, Right as R};

    pub(super) static JOINING_TABLE: &[JoiningRow] = &[
        // Arabic
        row(0x0620, 0x0620, D, Yeh),            // KASHMIRI YEH
        row(0x0621, 0x0621, U, NoJoiningGroup), // HAMZA
        row(0x0622, 0x0623, R, Alef),           // ALEF WITH MADDA/HAMZA ABOVE
        row(0x0624, 0x0624, R, Waw),            // WAW WITH HAMZA ABOVE
        row(0x0625, 0x0625, R, Alef),           // ALEF WITH HAMZA BELOW
        row(0x0626, 0x0626, D, Yeh),            // YEH WITH HAMZA ABOVE
        row(0x0627, 0x0627, R, Alef),           // ALEF
        row(0x0628, 0x0628, D, Beh),            // BEH
        row(0x0629, 0x0629, R, TehMarbuta),     // TEH MARBUTA
        row(0x062A, 0x062B, D, Beh),            // TEH, THEH
        row(0x062C, 0x062E, D, Hah),            // JEEM, HAH, KHAH
        row(0x062F, 0x0630, R, Dal),            // DAL, THAL
        row(0x0631, 0x0632, R, Reh),            // REH, ZAIN
        row(0x0633, 0x0634, D, Seen),           // SEEN, SHEEN
        row(0x0635, 0x0636, D, Sad),            // SAD, DAD
        row(0x0637, 0x0638, D, Tah),            // TAH, ZAH
        row(0x0639, 0x063A, D, Ain),            // AIN, GHAIN
        row(0x063B, 0x063C, D, Gaf),            // KEHEH WITH DOTS
        row(0x063D, 0x063F, D, FarsiYeh),       // FARSI YEH VARIANTS
        row(0x0640, 0x0640, C, NoJoiningGroup), // TATWEEL
        row(0x0641, 0x0641, D, Feh),            // FEH
        row(0x0642, 0x0642, D, Qaf),            // QAF
        row(0x0643, 0x0643, D, Kaf),            // KAF
        row(0x0644, 0x0644, D, Lam),            // LAM
        row(0x0645, 0x0645, D, Meem),           // MEEM
        row(0x0646, 0x0646, D, Noon),           // NOON
        row(0x0647, 0x0647, D, Heh),            // HEH
        row(0x0648, 0x0648, R, Waw),            // WAW
        row(0x0649, 0x064A, D, Yeh),            // ALEF MAKSURA, YEH
        row(0x066E, 0x066E, D, Beh),            // DOTLESS BEH
        row(0x066F, 0x066F, D, Qaf),            // DOTLESS QAF
        row(0x0671, 0x0673, R, Alef),           // ALEF WASLA, ALEF WITH WAVY HAMZA
        row(0x0674, 0x0674, U, NoJoiningGroup), // HIGH HAMZA
        row(0x0675, 0x0675, R, Alef),           // HIGH HAMZA ALEF
        row(0x0676, 0x0677, R, Waw),            // HIGH HAMZA WAW, U WITH HAMZA ABOVE
        row(0x0678, 0x0678, D, Yeh),            // HIGH HAMZA YEH
        row(0x0679, 0x0680, D, Beh),            // TTEH .. BEHEH
        row(0x0681, 0x0687, D, Hah),            // HAH WITH HAMZA ABOVE .. TCHEHEH
        row(0x0688, 0x0690, R, Dal),            // DDAL .. DAL WITH FOUR DOTS ABOVE
        row(0x0691, 0x0699, R, Reh),            // RREH .. REH WITH FOUR DOTS ABOVE
        row(0x069A, 0x069C, D, Seen),           // SEEN WITH DOTS
        row(0x069D, 0x069E, D, Sad),            // SAD WITH DOTS
        row(0x069F, 0x069F, D, Tah),            // TAH WITH THREE DOTS ABOVE
        row(0x06A0, 0x06A0, D, Ain),            // AIN WITH THREE DOTS ABOVE
        row(0x06A1, 0x06A6, D, Feh),            // DOTLESS FEH .. PEHEH
        row(0x06A7, 0x06A8, D, Qaf),            // QAF WITH DOT ABOVE, QAF WITH THREE DOTS ABOVE
        row(0x06A9, 0x06A9, D, Gaf),            // KEHEH
        row(0x06AA, 0x06AA, D, SwashKaf),       // SWASH KAF
        row(0x06AB, 0x06AB, D, Gaf),            // KAF WITH RING
        row(0x06AC, 0x06AE, D, Kaf),            // KAF WITH DOTS
        row(0x06AF, 0x06B4, D, Gaf),            // GAF .. GAF WITH THREE DOTS ABOVE
        row(0x06B5, 0x06B8, D, Lam),            // LAM WITH SMALL V .. LAM WITH THREE DOTS BELOW
        row(0x06B9, 0x06BC, D, Noon),           // NOON WITH DOT BELOW .. NOON WITH RING
        row(0x06BD, 0x06BD, D, Nya),            // NOON WITH THREE DOTS ABOVE
        row(0x06BE, 0x06BE, D, KnottedHeh),     // HEH DOACHASHMEE
        row(0x06BF, 0x06BF, D, Hah),            // TCHEH WITH DOT ABOVE
        row(0x06C0, 0x06C0, R, TehMarbuta),     // HEH WITH YEH ABOVE
        row(0x06C1, 0x06C2, D, HehGoal),        // HEH GOAL, HEH GOAL WITH HAMZA ABOVE
        row(0x06C3, 0x06C3, R, TehMarbutaGoal), // TEH MARBUTA GOAL
        row(0x06C4, 0x06CB, R, Waw),            // WAW WITH RING .. VE
        row(0x06CC, 0x06CC, D, FarsiYeh),       // FARSI YEH
        row(0x06CD, 0x06CD, R, YehWithTail),    // YEH WITH TAIL
        row(0x06CE, 0x06CE, D, FarsiYeh),       // YEH WITH SMALL V
        row(0x06CF, 0x06CF, R, Waw),            // WAW WITH DOT ABOVE
        row(0x06D0, 0x06D1, D, Yeh),            // E, YEH WITH THREE DOTS BELOW
        row(0x06D2, 0x06D3, R, YehBarree),      // YEH BARREE, YEH BARREE WITH HAMZA ABOVE
        row(0x06D5, 0x06D5, R, TehMarbuta),     // AE
        row(0x06EE, 0x06EE, R, Dal),            // DAL WITH INVERTED V
        row(0x06EF, 0x06EF, R, Reh),            // REH WITH INVERTED V
        row(0x06FA, 0x06FA, D, Seen),           // SHEEN WITH DOT BELOW
        row(0x06FB, 0x06FB, D, Sad),            // DAD WITH DOT BELOW
        row(0x06FC, 0x06FC, D, Ain),            // GHAIN WITH DOT BELOW
        row(0x06FF, 0x06FF, D, KnottedHeh),     // HEH WITH INVERTED V

        // Arabic Supplement
        row(0x0750, 0x0756, D, Beh),
        row(0x0757, 0x0758, D, Hah),
        row(0x0759, 0x075A, R, Dal),
        row(0x075B, 0x075B, R, Reh),
        row(0x075C, 0x075C, D, Seen),
        row(0x075D, 0x075F, D, Ain),
        row(0x0760, 0x0761, D, Feh),
        row(0x0762, 0x0764, D, Gaf),
        row(0x0765, 0x0766, D, Meem),
        row(0x0767, 0x0769, D, Noon),
        row(0x076A, 0x076A, D, Lam),
        row(0x076B, 0x076C, R, Reh),
        row(0x076D, 0x076D, D, Seen),
        row(0x076E, 0x076F, D, Hah),
        row(0x0770, 0x0770, D, Seen),
        row(0x0771, 0x0771, R, Reh),
        row(0x0772, 0x0772, D, Hah),
        row(0x0773, 0x0774, R, Alef),
        row(0x0775, 0x0776, D, FarsiYeh),
        row(0x0777, 0x0777, D, Yeh),
        row(0x0778, 0x0779, R, Waw),
        row(0x077A, 0x077B, D, BurushaskiYehBarree),
        row(0x077C, 0x077C, D, Hah),
        row(0x077D, 0x077E, D, Seen),
        row(0x077F, 0x077F, D, Kaf),

        // Arabic Extended-B
        row(0x0870, 0x0882, R, Alef),
        row(0x0883, 0x0885, C, NoJoiningGroup),
        row(0x0886, 0x0886, D, ThinYeh),
        row(0x0889, 0x0889, D, Noon),
        row(0x088A, 0x088A, D, Hah),
        row(0x088B, 0x088C, D, Tah),
        row(0x088D, 0x088D, D, Gaf),
        row(0x088E, 0x088E, R, VerticalTail),

        // Arabic Extended-A
        row(0x08A0, 0x08A1, D, Beh),
        row(0x08A2, 0x08A2, D, Hah),
        row(0x08A3, 0x08A3, D, Tah),
        row(0x08A4, 0x08A4, D, Feh),
        row(0x08A5, 0x08A5, D, Qaf),
        row(0x08A6, 0x08A6, D, Lam),
        row(0x08A7, 0x08A7, D, Meem),
        row(0x08A8, 0x08A9, D, Yeh),
        row(0x08AA, 0x08AA, R, Reh),
        row(0x08AB, 0x08AB, R, Waw),
        row(0x08AC, 0x08AC, R, RohingyaYeh),
        row(0x08AD, 0x08AD, U, NoJoiningGroup),
        row(0x08AE, 0x08AE, R, Dal),
        row(0x08AF, 0x08AF, D, Sad),
        row(0x08B0, 0x08B0, D, Gaf),
        row(0x08B1, 0x08B1, R, StraightWaw),
        row(0x08B2, 0x08B2, R, Reh),
        row(0x08B3, 0x08B3, D, Ain),
        row(0x08B4, 0x08B4, D, Kaf),
        row(0x08B5, 0x08B5, D, Qaf),
        row(0x08B6, 0x08B8, D, Beh),
        row(0x08B9, 0x08B9, R, Reh),
        row(0x08BA, 0x08BA, D, Yeh),
        row(0x08BB, 0x08BB, D, AfricanFeh),
        row(0x08BC, 0x08BC, D, AfricanQaf),
        row(0x08BD, 0x08BD, D, AfricanNoon),
        row(0x08BE, 0x08C0, D, Beh),
        row(0x08C1, 0x08C1, D, Hah),
        row(0x08C2, 0x08C2, D, Gaf),
        row(0x08C3, 0x08C3, D, Ain),
        row(0x08C4, 0x08C4, D, AfricanQaf),
        row(0x08C5, 0x08C6, D, Hah),
        row(0x08C7, 0x08C7, D, Lam),
        row(0x08C8, 0x08C8, D, Gaf),

        // Arabic Extended-C
        row(0x10EC2, 0x10EC2, R, Dal),
        row(0x10EC3, 0x10EC3, D, Tah),
        row(0x10EC4, 0x10EC4, D, Kaf),
    ];
}

fn lookup(c: char) -> Option<&'static JoiningRow> {
    let cp = c as u32;
    JOINING_TABLE
        .binary_search_by(|row| {
            if row.last < cp {
                std::cmp::Ordering::Less
            } else if row.first > cp {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .ok()
        .map(|index| &JOINING_TABLE[index])
}

/// Get the joining type for a Unicode codepoint.
///
/// Codepoints missing from the table are `NonJoining`, except nonspacing
/// marks which are implicitly `Transparent`.
pub fn joining_type(c: char) -> JoiningType {
    match lookup(c) {
        Some(row) => row.joining_type,
        None if is_nonspacing_mark(c) => JoiningType::Transparent,
        None => JoiningType::NonJoining,
    }
}

/// Get the joining group for a Unicode codepoint.
pub fn joining_group(c: char) -> JoiningGroup {
    lookup(c).map(|row| row.group).unwrap_or_default()
}

/// General category Mn (fatha, shadda, superscript alef, ...).
#[inline]
pub fn is_nonspacing_mark(c: char) -> bool {
    matches!(get_general_category(c), GeneralCategory::NonspacingMark)
}

/// General category L*.
#[inline]
pub fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Check if a character takes part in Arabic joining chains.
///
/// The kashida itself counts as a letter even though its script is
/// Common; everything else must be an Arabic-script letter.
#[inline]
pub fn is_arabic_letter(c: char) -> bool {
    c == settings::kashida::CHAR || (is_letter(c) && c.script() == Script::Arabic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_sorted_and_disjoint() {
        for pair in JOINING_TABLE.windows(2) {
            assert!(pair[0].first <= pair[0].last);
            assert!(
                pair[0].last < pair[1].first,
                "rows U+{:04X} and U+{:04X} overlap or are out of order",
                pair[0].first,
                pair[1].first
            );
        }
    }

    #[test]
    fn test_alef_is_right_joining() {
        assert_eq!(joining_type('\u{0627}'), JoiningType::Right);
        assert_eq!(joining_group('\u{0627}'), JoiningGroup::Alef);
        assert!(joining_type('\u{0627}').is_right_joining());
    }

    #[test]
    fn test_beh_is_dual_joining() {
        assert_eq!(joining_type('\u{0628}'), JoiningType::Dual);
        assert_eq!(joining_group('\u{0628}'), JoiningGroup::Beh);
        assert!(!joining_type('\u{0628}').is_right_joining());
    }

    #[test]
    fn test_hamza_is_non_joining() {
        assert_eq!(joining_type('\u{0621}'), JoiningType::NonJoining);
        assert_eq!(joining_group('\u{0621}'), JoiningGroup::NoJoiningGroup);
    }

    #[test]
    fn test_tatweel_is_join_causing() {
        assert_eq!(joining_type('\u{0640}'), JoiningType::JoinCausing);
        assert_eq!(joining_group('\u{0640}'), JoiningGroup::NoJoiningGroup);
    }

    #[test]
    fn test_marks_are_transparent() {
        assert_eq!(joining_type('\u{064E}'), JoiningType::Transparent); // fatha
        assert_eq!(joining_type('\u{0651}'), JoiningType::Transparent); // shadda
        assert_eq!(joining_type('\u{0670}'), JoiningType::Transparent); // superscript alef
    }

    #[test]
    fn test_unmapped_defaults() {
        for c in ['A', 'z', '5', ' ', '\u{FEFB}'] {
            assert_eq!(joining_type(c), JoiningType::NonJoining, "{c:?}");
            assert_eq!(joining_group(c), JoiningGroup::NoJoiningGroup, "{c:?}");
        }
    }

    #[test]
    fn test_extended_blocks() {
        assert_eq!(joining_group('\u{06A9}'), JoiningGroup::Gaf); // keheh
        assert_eq!(joining_group('\u{06CC}'), JoiningGroup::FarsiYeh);
        assert_eq!(joining_type('\u{06D2}'), JoiningType::Right); // yeh barree
        assert_eq!(joining_group('\u{0763}'), JoiningGroup::Gaf);
        assert_eq!(joining_group('\u{08BD}'), JoiningGroup::AfricanNoon);
        assert_eq!(joining_type('\u{10EC2}'), JoiningType::Right);
    }

    #[test]
    fn test_group_families() {
        assert!(JoiningGroup::Noon.is_beh_like());
        assert!(JoiningGroup::Yeh.is_beh_like());
        assert!(JoiningGroup::Yeh.is_yeh_like());
        assert!(!JoiningGroup::YehBarree.is_beh_like());
        assert!(JoiningGroup::YehBarree.is_yeh_like());
        assert!(JoiningGroup::TehMarbuta.is_heh_like());
        assert!(!JoiningGroup::KnottedHeh.is_heh_like());
        assert!(JoiningGroup::Gaf.is_kaf_like());
        assert!(!JoiningGroup::SwashKaf.is_kaf_like());
        assert!(JoiningGroup::AfricanFeh.is_feh_like());
        assert!(JoiningGroup::AfricanQaf.is_qaf_like());
    }

    #[test]
    fn test_is_arabic_letter() {
        assert!(is_arabic_letter('\u{0627}')); // Alef
        assert!(is_arabic_letter('\u{0628}')); // Beh
        assert!(is_arabic_letter('\u{0621}')); // Hamza
        assert!(is_arabic_letter('\u{0640}')); // Tatweel
        assert!(!is_arabic_letter('\u{064E}')); // Fatha mark
        assert!(!is_arabic_letter('\u{060C}')); // Arabic comma
        assert!(!is_arabic_letter('\u{0661}')); // Arabic-Indic digit one
        assert!(!is_arabic_letter('A'));
        assert!(!is_arabic_letter('('));
    }

    #[test]
    fn test_is_nonspacing_mark() {
        assert!(is_nonspacing_mark('\u{064E}'));
        assert!(is_nonspacing_mark('\u{0654}'));
        assert!(is_nonspacing_mark('\u{0670}'));
        assert!(!is_nonspacing_mark('\u{0628}'));
        assert!(!is_nonspacing_mark('\u{0640}'));
    }
}
