// Inflectable words: nouns, adjectives, pronouns and numerals
//
// A word is built from its citation form plus part-of-speech tags. From
// those it infers:
//
// - the genders it can take, in the order the tags introduce them
// - per gender, the stem ending that selects a noun paradigm (`a`, `ā`,
//   `i`, ...) and an insertion placed between stem and suffix
//
// The stem is the citation form minus its final letter, minus `-ant` after
// a final t, or minus two letters after a final r or ṃ.

pub mod degree;
pub mod numeral;
pub mod pronoun;

use pali_core::character::{char_len, drop_last_chars, last_char};
use pali_core::ending::Ending;
use pali_core::enums::Gender;
use pali_core::sandhi::word_sandhi;
use pali_tables::GENERIC_PARADIGM;
use serde::Serialize;

pub use numeral::NumeralCatalog;
pub use pronoun::PronounCatalog;

/// Part-of-speech tags that make a word declinable.
const DECLINABLE_TAGS: [&str; 6] = ["3", "n.", "m.", "f.", "nt.", "adj."];

/// Rewrites the last letter of `word` into the stem ending used for `gender`.
///
/// ```
/// use pali_core::enums::Gender;
/// use pali_grammar::word::transform_ending;
///
/// assert_eq!(transform_ending("tara", Gender::Feminine), "tarā");
/// assert_eq!(transform_ending("ā", Gender::Masculine), "a");
/// assert_eq!(transform_ending("r", Gender::Neuter), "u");
/// ```
pub fn transform_ending(word: &str, gender: Gender) -> String {
    let Some(last) = last_char(word) else {
        return String::new();
    };
    let base = drop_last_chars(word, 1);
    let end = match (last, gender) {
        ('r', _) => 'u',
        ('e', _) => 'i',
        ('ā' | 'o', Gender::Masculine | Gender::Neuter) => 'a',
        ('a' | 'o', Gender::Feminine) => 'ā',
        ('ī', Gender::Neuter) => 'i',
        ('ū', Gender::Neuter) => 'u',
        (c, _) => c,
    };
    format!("{base}{end}")
}

/// A noun, adjective, pronoun or numeral ready for declension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Word {
    term: String,
    stem: String,
    genders: Vec<Gender>,
    endings: [String; Gender::COUNT],
    insertions: [String; Gender::COUNT],
    pos: Vec<String>,
    paradigms: Vec<String>,
    meanings: Vec<String>,
    value: u32,
    exp: u32,
}

impl Word {
    /// A word with no genders or paradigms yet.
    pub fn new(term: &str) -> Self {
        let cut = match last_char(term) {
            Some('t') => 3,
            Some('r' | 'ṃ') => 2,
            _ => 1,
        };
        Word {
            term: term.to_string(),
            stem: drop_last_chars(term, cut).to_string(),
            genders: Vec::new(),
            endings: Default::default(),
            insertions: Default::default(),
            pos: Vec::new(),
            paradigms: Vec::new(),
            meanings: Vec::new(),
            value: 0,
            exp: 0,
        }
    }

    /// A word from a typed stem, classified by its ending: `-ant` words are
    /// adjectives of the `-vant` classes, `-ar` words agent nouns, anything
    /// else a generic noun of the genders its final letter allows.
    ///
    /// ```
    /// use pali_core::enums::Gender;
    /// use pali_grammar::word::Word;
    ///
    /// let w = Word::typed("kathā");
    /// assert_eq!(w.genders(), [Gender::Feminine]);
    /// assert_eq!(w.paradigms(), ["generic"]);
    /// ```
    pub fn typed(term: &str) -> Self {
        let mut word = Word::new(term);
        if term.ends_with("ant") {
            word.set_paradigms("guṇavant,himavant,antcommon");
            word.add_pos_info("adj.");
        } else if term.ends_with("ar") {
            word.add_paradigm("kattu");
            word.add_pos_info("m.");
        } else {
            word.add_paradigm(GENERIC_PARADIGM);
            word.add_pos_info("n.");
        }
        word
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    fn last(&self) -> Option<char> {
        last_char(&self.term)
    }

    /// Genders in inference order.
    pub fn genders(&self) -> &[Gender] {
        &self.genders
    }

    pub fn first_gender(&self) -> Option<Gender> {
        self.genders.first().copied()
    }

    /// Stem ending selecting the noun paradigm for `gender`; empty when the
    /// word does not take that gender.
    pub fn ending(&self, gender: Gender) -> &str {
        &self.endings[gender.index()]
    }

    pub fn insertion(&self, gender: Gender) -> &str {
        &self.insertions[gender.index()]
    }

    pub fn pos_info(&self) -> &[String] {
        &self.pos
    }

    /// Tags joined with `"; "`.
    pub fn pos_string(&self) -> String {
        self.pos.join("; ")
    }

    pub fn paradigms(&self) -> &[String] {
        &self.paradigms
    }

    pub fn meanings(&self) -> &[String] {
        &self.meanings
    }

    pub fn add_meaning(&mut self, meaning: &str) {
        self.meanings.push(meaning.to_string());
    }

    pub fn numeric_value(&self) -> u32 {
        self.value
    }

    /// Power of ten the numeric value is scaled by (`1e7` for koṭi).
    pub fn exp_value(&self) -> u32 {
        self.exp
    }

    // -----------------------------------------------------------------------
    // Genders and endings
    // -----------------------------------------------------------------------

    /// Records `;`-separated part-of-speech tags and adds the genders they
    /// imply.
    ///
    /// `3` and `adj.` give all genders. A bare `n.` (noun) decides by the
    /// final letter: ā is feminine, a masculine and neuter, ī/ū masculine
    /// and feminine, anything else all three. Otherwise `m.`, `f.` and `nt.`
    /// name a gender each.
    pub fn add_pos_info(&mut self, pos: &str) {
        let tags: Vec<&str> = pos.split(';').map(str::trim).collect();
        for tag in &tags {
            if !self.pos.iter().any(|p| p == tag) {
                self.pos.push(tag.to_string());
            }
        }

        let mut implied: Vec<Gender> = Vec::with_capacity(Gender::COUNT);
        for tag in &tags {
            let genders: &[Gender] = if *tag == "3" || tag.contains("adj.") {
                &Gender::ALL
            } else if *tag == "n." {
                match self.last() {
                    Some('ā') => &[Gender::Feminine],
                    Some('a') => &[Gender::Masculine, Gender::Neuter],
                    Some('ī' | 'ū') => &[Gender::Masculine, Gender::Feminine],
                    _ => &Gender::ALL,
                }
            } else if tag.contains("m.") {
                &[Gender::Masculine]
            } else if tag.contains("f.") {
                &[Gender::Feminine]
            } else if tag.contains("nt.") {
                &[Gender::Neuter]
            } else {
                &[]
            };
            for g in genders {
                if !implied.contains(g) {
                    implied.push(*g);
                }
            }
        }

        let last = self.last().map(String::from).unwrap_or_default();
        for gender in implied {
            if self.genders.contains(&gender) {
                continue;
            }
            self.genders.push(gender);
            let mut ending = transform_ending(&last, gender);
            let mut insertion = String::new();
            // adjectives in -i/-ī decline their feminine as -inī
            if gender == Gender::Feminine
                && !self.is_number()
                && self.is_adjective()
                && matches!(self.last(), Some('i' | 'ī'))
            {
                ending = "ī".to_string();
                insertion = "in".to_string();
            }
            self.endings[gender.index()] = ending;
            self.insertions[gender.index()] = insertion;
        }
    }

    /// Gives the word every gender. Endings are set by [`Word::set_ending`].
    pub fn set_all_genders(&mut self) {
        self.genders = Gender::ALL.to_vec();
    }

    /// Sets the ending of every current gender from the final letter, a
    /// final ṃ counting as a. Used by pronouns and numerals, whose genders
    /// do not come from tags.
    pub fn set_ending(&mut self) {
        let end = match self.last() {
            Some('ṃ') => "a".to_string(),
            Some(c) => c.to_string(),
            None => String::new(),
        };
        for &gender in &self.genders {
            self.endings[gender.index()] = transform_ending(&end, gender);
            self.insertions[gender.index()].clear();
        }
    }

    // -----------------------------------------------------------------------
    // Paradigms
    // -----------------------------------------------------------------------

    /// Appends a comma-separated paradigm list; `0` stands for the generic
    /// paradigm.
    pub fn set_paradigms(&mut self, list: &str) {
        for name in list.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            let name = if name.starts_with('0') { GENERIC_PARADIGM } else { name };
            self.paradigms.push(name.to_string());
        }
    }

    /// Adds one paradigm unless already present.
    pub fn add_paradigm(&mut self, name: &str) {
        let name = if name == "0" { GENERIC_PARADIGM } else { name };
        if !self.paradigms.iter().any(|p| p == name) {
            self.paradigms.push(name.to_string());
        }
    }

    pub fn clear_paradigms(&mut self) {
        self.paradigms.clear();
    }

    // -----------------------------------------------------------------------
    // Classification
    // -----------------------------------------------------------------------

    pub fn is_adjective(&self) -> bool {
        self.pos.iter().any(|p| p == "adj.")
    }

    /// Whether the word follows one of the cardinal numeral paradigms.
    pub fn is_number(&self) -> bool {
        self.paradigms.iter().any(|p| {
            matches!(p.as_str(), "eka" | "dvi" | "ti" | "catu") || p.starts_with("number")
        })
    }

    pub fn is_declinable(&self) -> bool {
        self.pos
            .iter()
            .any(|p| DECLINABLE_TAGS.contains(&p.as_str()))
    }

    // -----------------------------------------------------------------------
    // Suffixation
    // -----------------------------------------------------------------------

    /// Attaches a paradigm ending for `gender`.
    ///
    /// The base is the stem plus the gender's insertion. A deletion ending
    /// cuts the bare stem instead, unless it is shorter than the deletion.
    ///
    /// ```
    /// use pali_core::enums::Gender;
    /// use pali_grammar::word::Word;
    ///
    /// let w = Word::typed("kathā");
    /// assert_eq!(w.with_suffix(&"āya".parse().unwrap(), Gender::Feminine), "kathāya");
    /// ```
    pub fn with_suffix(&self, ending: &Ending, gender: Gender) -> String {
        let base = format!("{}{}", self.stem, self.insertion(gender));
        match ending {
            Ending::Bare => base,
            Ending::Delete { count, tail } if char_len(&self.stem) >= *count => {
                word_sandhi(drop_last_chars(&self.stem, *count), tail)
            }
            Ending::Delete { tail, .. } => word_sandhi(&base, tail),
            Ending::Append(text) => word_sandhi(&base, text),
        }
    }
}
