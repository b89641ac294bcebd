// Sandhi: vowel merging at the boundary of two joined strings
//
// Two rule sets exist. Root sandhi joins a verb stem and a conjugational
// suffix; word sandhi joins nominal stems, suffixes and numeral parts. Each
// set is an ordered table of rules; the first rule whose boundary letters
// match decides the output, and when no rule applies (or either side is
// empty) the two strings are simply concatenated.

use crate::character::{drop_first_chars, drop_last_chars, first_char, last_char};

// ---------------------------------------------------------------------------
// Rule machinery
// ---------------------------------------------------------------------------

/// How a matching rule builds the joined string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Merge {
    /// `drop_last(w1) + infix + drop_first(w2)`
    Fuse(&'static str),
    /// `drop_last(w1) + infix + w2`
    DropLeft(&'static str),
    /// `w1 + infix + drop_first(w2)`
    DropRight(&'static str),
}

/// One boundary rule: the last letter of the left side and the first letter
/// of the right side it applies to, and the merge to perform.
#[derive(Debug, Clone, Copy)]
struct SandhiRule {
    left: &'static [char],
    right: &'static [char],
    merge: Merge,
}

impl SandhiRule {
    fn applies(&self, last: char, first: char) -> bool {
        self.left.contains(&last) && self.right.contains(&first)
    }

    fn join(&self, w1: &str, w2: &str) -> String {
        match self.merge {
            Merge::Fuse(infix) => {
                [drop_last_chars(w1, 1), infix, drop_first_chars(w2, 1)].concat()
            }
            Merge::DropLeft(infix) => [drop_last_chars(w1, 1), infix, w2].concat(),
            Merge::DropRight(infix) => [w1, infix, drop_first_chars(w2, 1)].concat(),
        }
    }
}

const A_AA: &[char] = &['a', 'ā'];
const I_II: &[char] = &['i', 'ī'];

const ROOT_RULES: &[SandhiRule] = &[
    // a/ā + a/ā -> ā
    SandhiRule { left: A_AA, right: A_AA, merge: Merge::Fuse("ā") },
    // a/e + e -> e
    SandhiRule { left: &['a', 'e'], right: &['e'], merge: Merge::DropLeft("") },
    // a + ī -> ī
    SandhiRule { left: &['a'], right: &['ī'], merge: Merge::DropLeft("") },
    // e + a/ā -> e
    SandhiRule { left: &['e'], right: A_AA, merge: Merge::DropRight("") },
    // e + i/ī -> i/ī
    SandhiRule { left: &['e'], right: I_II, merge: Merge::DropLeft("") },
    // o + a/ā -> o
    SandhiRule { left: &['o'], right: A_AA, merge: Merge::DropRight("") },
];

const WORD_RULES: &[SandhiRule] = &[
    // a/ā + a/ā -> ā
    SandhiRule { left: A_AA, right: A_AA, merge: Merge::Fuse("ā") },
    // u + a -> urā
    SandhiRule { left: &['u'], right: &['a'], merge: Merge::DropRight("rā") },
    // a/u + u -> u
    SandhiRule { left: &['a', 'u'], right: &['u'], merge: Merge::DropLeft("") },
    // i/ī + u -> ayu
    SandhiRule { left: I_II, right: &['u'], merge: Merge::DropLeft("ay") },
];

fn apply_rules(rules: &[SandhiRule], w1: &str, w2: &str) -> String {
    let (Some(last), Some(first)) = (last_char(w1), first_char(w2)) else {
        return [w1, w2].concat();
    };
    rules
        .iter()
        .find(|rule| rule.applies(last, first))
        .map(|rule| rule.join(w1, w2))
        .unwrap_or_else(|| [w1, w2].concat())
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// The two sandhi rule sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SandhiKind {
    /// Verb stem + conjugational suffix.
    Root,
    /// Nominal stem + suffix, numeral composition.
    Word,
}

impl SandhiKind {
    pub fn join(self, w1: &str, w2: &str) -> String {
        match self {
            SandhiKind::Root => root_sandhi(w1, w2),
            SandhiKind::Word => word_sandhi(w1, w2),
        }
    }
}

/// Joins a verb stem and a suffix.
///
/// ```
/// use pali_core::sandhi::root_sandhi;
/// assert_eq!(root_sandhi("paca", "ati"), "pacāti");
/// assert_eq!(root_sandhi("pace", "ati"), "paceti");
/// assert_eq!(root_sandhi("pac", "ati"), "pacati");
/// ```
pub fn root_sandhi(w1: &str, w2: &str) -> String {
    apply_rules(ROOT_RULES, w1, w2)
}

/// Joins nominal parts.
///
/// ```
/// use pali_core::sandhi::word_sandhi;
/// assert_eq!(word_sandhi("dvi", "uttara"), "dvayuttara");
/// assert_eq!(word_sandhi("eka", "ūna"), "ekaūna");
/// ```
pub fn word_sandhi(w1: &str, w2: &str) -> String {
    apply_rules(WORD_RULES, w1, w2)
}
