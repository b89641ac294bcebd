// Numerals
//
// Numeral words pick their paradigm and genders from their value:
//
//   cardinal 1..4      eka / dvi / ti / catu, all genders
//   cardinal 5..18     number18, all genders
//   cardinal 19..98    number98, neuter in -ṃ, otherwise feminine
//   cardinal 99+       number99 (generic when scaled by a power of ten),
//                      feminine in -i/-ī, otherwise neuter
//   ordinal            ordinal (1..3, 19+), ordinal4 (4..10),
//                      ordinal11 (11..18), all genders
//
// Compounds in -uttara ("N more than ...") and -adhika are neuter generic
// nouns.
//
// The catalog lists the attested cardinal terms; everything up to 999 999
// is composed from them.

use indexmap::IndexMap;
use pali_core::enums::{Gender, Number};
use pali_core::sandhi::word_sandhi;
use pali_tables::GENERIC_PARADIGM;
use pali_tables::format::data_lines;

use super::Word;
use crate::data::NUMERALS_FILE;
use crate::error::GrammarError;

/// Largest value [`NumeralCatalog::cardinal`] composes.
pub const MAX_COMPOSED: u32 = 999_999;

/// Irregular names of 1½, 2½ and 3½ (hundred).
const HALF_HUNDREDS: [&str; 3] = ["diyaḍḍha", "aḍḍhateyya", "aḍḍhuḍḍha"];

/// Ordinals 1..6, which are not built from the cardinal.
const IRREGULAR_ORDINALS: [&str; 6] = ["paṭhama", "dutiya", "tatiya", "catuttha", "pañcama", "chaṭṭha"];

impl Word {
    /// A numeral word with its value, genders and paradigm set.
    ///
    /// ```
    /// use pali_core::enums::Gender;
    /// use pali_grammar::word::Word;
    ///
    /// let w = Word::numeral("vīsati", 20, 0, false);
    /// assert_eq!(w.genders(), [Gender::Feminine]);
    /// assert_eq!(w.paradigms(), ["number98"]);
    /// assert_eq!(w.ending(Gender::Feminine), "i");
    /// ```
    pub fn numeral(term: &str, value: u32, exp: u32, ordinal: bool) -> Self {
        let mut word = Word::new(term);
        word.value = value;
        word.exp = exp;
        word.add_pos_info("numerals");
        if term.ends_with("uttara") || term.ends_with("dhika") {
            word.set_paradigms(GENERIC_PARADIGM);
            word.add_pos_info("nt.");
        } else {
            word.paradigms = vec![numeral_paradigm(value, exp, ordinal).to_string()];
            word.genders = word.numeral_genders(ordinal);
        }
        word.set_ending();
        word
    }

    fn numeral_genders(&self, ordinal: bool) -> Vec<Gender> {
        if ordinal || (self.value <= 18 && self.exp == 0) {
            Gender::ALL.to_vec()
        } else if self.value >= 99 || self.exp > 0 {
            match self.last() {
                Some('i' | 'ī') => vec![Gender::Feminine],
                _ => vec![Gender::Neuter],
            }
        } else if self.last() == Some('ṃ') {
            vec![Gender::Neuter]
        } else {
            vec![Gender::Feminine]
        }
    }

    /// Whether this is an `-uttara` compound, which always declines as a
    /// neuter plural.
    pub fn is_uttara(&self) -> bool {
        self.term.ends_with("uttara")
    }

    /// The gender and number a numeral is declined in when `gender` is
    /// requested, or `None` for a word without a value.
    ///
    /// One is singular, 2..18 plural, 19..98 singular (they are collective
    /// nouns) and larger values plural. From 19 up the word's own gender
    /// replaces the requested one.
    pub fn numeral_coordinates(&self, gender: Gender) -> Option<(Gender, Number)> {
        if self.value == 0 {
            return None;
        }
        let uttara = self.is_uttara();
        let gender = if uttara {
            Gender::Neuter
        } else if self.value > 18 {
            self.first_gender().unwrap_or(gender)
        } else {
            gender
        };
        let number = match self.value {
            1 | 19..=98 if !uttara => Number::Singular,
            _ => Number::Plural,
        };
        Some((gender, number))
    }
}

/// Paradigm name for a numeral value.
pub fn numeral_paradigm(value: u32, exp: u32, ordinal: bool) -> &'static str {
    if ordinal {
        return match value {
            4..=10 => "ordinal4",
            11..=18 => "ordinal11",
            _ => "ordinal",
        };
    }
    if exp > 0 {
        return GENERIC_PARADIGM;
    }
    match value {
        1 => "eka",
        2 => "dvi",
        3 => "ti",
        4 => "catu",
        0..=18 => "number18",
        19..=98 => "number98",
        _ => "number99",
    }
}

fn composable(term: &str) -> bool {
    !term.ends_with('ā') && !term.ends_with('ṃ')
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Attested numeral terms and the composition of the rest.
#[derive(Debug, Clone, Default)]
pub struct NumeralCatalog {
    words: IndexMap<String, Word>,
    cardinals: IndexMap<(u32, u32), Vec<String>>,
    ordinals: IndexMap<u32, Vec<String>>,
}

impl NumeralCatalog {
    /// Parses `term|value` lines, the value optionally scaled as `1e7`.
    pub fn from_text(text: &str) -> Result<Self, GrammarError> {
        let mut catalog = NumeralCatalog::default();
        for (line, entry) in data_lines(text) {
            let (term, value, exp) = parse_line(line, entry)?;
            let mut word = Word::numeral(term, value, exp, false);
            let meaning = if exp > 0 {
                format!("{value}e{exp}")
            } else {
                value.to_string()
            };
            word.add_meaning(&meaning);
            catalog.words.insert(term.to_string(), word);
            catalog
                .cardinals
                .entry((value, exp))
                .or_default()
                .push(term.to_string());
        }
        catalog.build_ordinals();
        tracing::debug!(
            terms = catalog.words.len(),
            values = catalog.cardinals.len(),
            "loaded numeral catalog"
        );
        Ok(catalog)
    }

    fn build_ordinals(&mut self) {
        for (value, term) in (1..).zip(IRREGULAR_ORDINALS) {
            self.ordinals.insert(value, vec![term.to_string()]);
        }
        for value in 7..=10 {
            // the last listed cardinal names the ordinal
            let ordinal = self.terms(value, 0).last().map(|t| format!("{t}ma"));
            if let Some(ordinal) = ordinal {
                self.ordinals.insert(value, vec![ordinal]);
            }
        }
    }

    /// A listed cardinal word.
    pub fn get(&self, term: &str) -> Option<&Word> {
        self.words.get(term)
    }

    /// Listed cardinal words in file order.
    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.words.values()
    }

    /// Listed terms for `value * 10^exp`.
    pub fn terms(&self, value: u32, exp: u32) -> &[String] {
        self.cardinals
            .get(&(value, exp))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Ordinal terms of 1..10.
    pub fn ordinal_terms(&self, value: u32) -> &[String] {
        self.ordinals
            .get(&value)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Cardinal terms for `value`, composed where not listed. Empty for 0
    /// and for values above [`MAX_COMPOSED`].
    pub fn cardinal(&self, value: u32) -> Vec<String> {
        if value == 0 || value > MAX_COMPOSED {
            return Vec::new();
        }
        let lower = self.three_digit(value % 1000);
        let thousands = value / 1000;
        if thousands == 0 {
            return lower;
        }
        let mut result = Vec::new();
        for upper in self.three_digit(thousands).iter().filter(|t| composable(t)) {
            let prefix = if upper == "eka" { "" } else { upper.as_str() };
            if lower.is_empty() {
                result.push(format!("{prefix}sahassa"));
            }
            for low in &lower {
                result.push(format!("{}{prefix}sahassa", word_sandhi(low, "adhika")));
            }
        }
        result
    }

    /// Ordinal terms for `value`: listed up to ten, otherwise the cardinal
    /// plus `-ma`.
    pub fn ordinal(&self, value: u32) -> Vec<String> {
        if value <= 10 {
            return self.ordinal_terms(value).to_vec();
        }
        self.cardinal(value)
            .into_iter()
            .filter(|t| !t.ends_with('ṃ'))
            .map(|t| t + "ma")
            .collect()
    }

    /// Numeral words for every term of `value`.
    pub fn numeral_words(&self, value: u32, ordinal: bool) -> Vec<Word> {
        let terms = if ordinal {
            self.ordinal(value)
        } else {
            self.cardinal(value)
        };
        terms
            .iter()
            .map(|t| Word::numeral(t, value, 0, ordinal))
            .collect()
    }

    fn two_digit(&self, value: u32) -> Vec<String> {
        let listed = self.terms(value, 0);
        if !listed.is_empty() {
            return listed.to_vec();
        }
        let (firsts, seconds): (Vec<&str>, &[String]) = if value % 10 == 9 {
            // 29 is "one less than thirty"
            (vec!["ekūna", "ūna"], self.terms(value + 1, 0))
        } else {
            (
                self.terms(value % 10, 0).iter().map(String::as_str).collect(),
                self.terms(value / 10 * 10, 0),
            )
        };
        firsts
            .iter()
            .flat_map(|f| seconds.iter().map(move |s| word_sandhi(f, s)))
            .collect()
    }

    fn three_digit(&self, value: u32) -> Vec<String> {
        let value = value % 1000;
        let (hundreds, low) = (value / 100, value % 100);
        let lower = if low > 0 { self.two_digit(low) } else { Vec::new() };
        if hundreds == 0 {
            return lower;
        }

        let multipliers = (hundreds > 1).then(|| self.terms(hundreds, 0));
        let mut uppers = Vec::new();
        for hundred in self.terms(100, 0) {
            match multipliers {
                None => uppers.push(hundred.clone()),
                Some(multipliers) => uppers.extend(
                    multipliers
                        .iter()
                        .filter(|f| composable(f))
                        .map(|f| word_sandhi(f, hundred)),
                ),
            }
        }
        if lower.is_empty() {
            return uppers;
        }

        let mut result = Vec::new();
        for upper in &uppers {
            for low in lower.iter().filter(|t| composable(t)) {
                result.push(format!("{}{upper}", word_sandhi(low, "uttara")));
            }
        }
        result.extend(self.half_hundreds(value));
        result
    }

    /// Forms like aḍḍhateyyasata (250): x50..x59 named by the half of the
    /// next hundred.
    fn half_hundreds(&self, value: u32) -> Vec<String> {
        let hundreds = value / 100;
        let rest = value % 100;
        if value > 860 || hundreds == 0 || rest / 10 != 5 {
            return Vec::new();
        }
        let halves: Vec<String> = match hundreds {
            1..=3 => vec![HALF_HUNDREDS[hundreds as usize - 1].to_string()],
            _ => self
                .ordinal_terms(hundreds + 1)
                .iter()
                .map(|t| format!("aḍḍha{t}"))
                .collect(),
        };
        let units = rest % 10;
        let mut result = Vec::new();
        for half in &halves {
            if units == 0 {
                result.push(format!("{half}sata"));
                continue;
            }
            for unit in self
                .terms(units, 0)
                .iter()
                .filter(|t| composable(t) && !t.ends_with('e'))
            {
                let joined = word_sandhi(&word_sandhi(unit, "uttara"), half);
                result.push(format!("{joined}sata"));
            }
        }
        result
    }
}

fn parse_line(line: usize, entry: &str) -> Result<(&str, u32, u32), GrammarError> {
    let malformed = |reason: String| GrammarError::Catalog {
        file: NUMERALS_FILE,
        line,
        reason,
    };
    let (term, number) = entry
        .split_once('|')
        .ok_or_else(|| malformed("missing '|' separator".to_string()))?;
    let (value, exp) = number.split_once('e').unwrap_or((number, "0"));
    let parse = |s: &str| {
        s.trim()
            .parse::<u32>()
            .map_err(|_| malformed(format!("bad numeral value {number:?}")))
    };
    Ok((term.trim(), parse(value)?, parse(exp)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    const NUMERALS: &str = "\
# term|value
eka|1
dvi|2
ti|3
catu|4
pañca|5
cha|6
satta|7
aṭṭha|8
nava|9
dasa|10
vīsati|20
vīsaṃ|20
tiṃsā|30
tiṃsati|30
paññāsa|50
sata|100
sahassa|1000
koṭi|1e7
";

    fn catalog() -> NumeralCatalog {
        NumeralCatalog::from_text(NUMERALS).unwrap()
    }

    #[test]
    fn paradigm_bands() {
        assert_eq!(numeral_paradigm(1, 0, false), "eka");
        assert_eq!(numeral_paradigm(4, 0, false), "catu");
        assert_eq!(numeral_paradigm(18, 0, false), "number18");
        assert_eq!(numeral_paradigm(98, 0, false), "number98");
        assert_eq!(numeral_paradigm(99, 0, false), "number99");
        assert_eq!(numeral_paradigm(1, 7, false), "generic");
        assert_eq!(numeral_paradigm(3, 0, true), "ordinal");
        assert_eq!(numeral_paradigm(10, 0, true), "ordinal4");
        assert_eq!(numeral_paradigm(18, 0, true), "ordinal11");
        assert_eq!(numeral_paradigm(19, 0, true), "ordinal");
    }

    #[test]
    fn genders_by_value() {
        assert_eq!(Word::numeral("pañca", 5, 0, false).genders(), Gender::ALL);
        assert_eq!(Word::numeral("vīsaṃ", 20, 0, false).genders(), [Gender::Neuter]);
        assert_eq!(Word::numeral("sata", 100, 0, false).genders(), [Gender::Neuter]);
        assert_eq!(Word::numeral("koṭi", 1, 7, false).genders(), [Gender::Feminine]);
        assert_eq!(Word::numeral("vīsatima", 20, 0, true).genders(), Gender::ALL);
        let uttara = Word::numeral("ekuttara", 101, 0, false);
        assert_eq!(uttara.genders(), [Gender::Neuter]);
        assert_eq!(uttara.paradigms(), ["generic"]);
    }

    #[test]
    fn number_band() {
        for v in 2..18 {
            let w = Word::numeral("x", v, 0, false);
            assert_eq!(w.numeral_coordinates(Gender::Masculine).unwrap().1, Number::Plural, "{v}");
        }
        let one = Word::numeral("eka", 1, 0, false);
        assert_eq!(
            one.numeral_coordinates(Gender::Feminine),
            Some((Gender::Feminine, Number::Singular))
        );
        let twenty = Word::numeral("vīsati", 20, 0, false);
        assert_eq!(
            twenty.numeral_coordinates(Gender::Masculine),
            Some((Gender::Feminine, Number::Singular))
        );
        let uttara = Word::numeral("ekuttara", 1, 0, false);
        assert_eq!(
            uttara.numeral_coordinates(Gender::Masculine),
            Some((Gender::Neuter, Number::Plural))
        );
        assert_eq!(Word::numeral("sata", 100, 0, false).numeral_coordinates(Gender::Neuter).unwrap().1, Number::Plural);
        assert!(Word::new("x").numeral_coordinates(Gender::Neuter).is_none());
    }

    #[test]
    fn catalog_lookup() {
        let c = catalog();
        assert_eq!(c.terms(20, 0), ["vīsati", "vīsaṃ"]);
        assert_eq!(c.terms(1, 7), ["koṭi"]);
        assert_eq!(c.get("koṭi").unwrap().meanings(), ["1e7"]);
        assert_eq!(c.get("dasa").unwrap().meanings(), ["10"]);
        assert!(c.terms(11, 0).is_empty());
    }

    #[test]
    fn composed_tens() {
        let c = catalog();
        assert_eq!(c.cardinal(25), ["pañcavīsati", "pañcavīsaṃ"]);
        assert_eq!(c.cardinal(29), ["ekūnatiṃsā", "ekūnatiṃsati", "ūnatiṃsā", "ūnatiṃsati"]);
    }

    #[test]
    fn composed_hundreds() {
        let c = catalog();
        assert_eq!(c.cardinal(100), ["sata"]);
        assert_eq!(c.cardinal(200), ["dvisata"]);
        assert_eq!(c.cardinal(105), ["pañcuttarasata"]);
        // x50 also has its half-hundred name
        let c150 = c.cardinal(150);
        assert!(c150.contains(&"diyaḍḍhasata".to_string()));
        assert_eq!(c.half_hundreds(650), ["aḍḍhasattamasata"]);
        assert_eq!(c.half_hundreds(252), ["dvayuttarāḍḍhateyyasata"]);
        assert!(c.half_hundreds(900).is_empty());
    }

    #[test]
    fn composed_thousands() {
        let c = catalog();
        assert_eq!(c.cardinal(1000), ["sahassa"]);
        assert_eq!(c.cardinal(2000), ["dvisahassa"]);
        assert_eq!(c.cardinal(1005), ["pañcādhikasahassa"]);
        assert!(c.cardinal(0).is_empty());
        assert!(c.cardinal(1_000_000).is_empty());
    }

    #[test]
    fn ordinals() {
        let c = catalog();
        assert_eq!(c.ordinal(1), ["paṭhama"]);
        assert_eq!(c.ordinal(7), ["sattama"]);
        assert_eq!(c.ordinal(10), ["dasama"]);
        assert_eq!(c.ordinal(20), ["vīsatima"]);
        let words = c.numeral_words(4, true);
        assert_eq!(words[0].term(), "catuttha");
        assert_eq!(words[0].paradigms(), ["ordinal4"]);
    }

    #[test]
    fn malformed_lines() {
        assert!(NumeralCatalog::from_text("eka").is_err());
        assert!(NumeralCatalog::from_text("eka|one").is_err());
        assert!(NumeralCatalog::from_text("koṭi|1ex").is_err());
    }
}
