// Grammar vocabulary: voice, tense/mood, pada, person, number, case, gender,
// derivational suffix and root group.
//
// Declaration order is significant everywhere: it is the iteration order of
// generated tables, the segment order of paradigm data files and the order
// in which default selections are made. Each enum therefore exposes an `ALL`
// array and an `index()` usable for fixed-size tables.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::VocabularyError;

// ---------------------------------------------------------------------------
// Verb side
// ---------------------------------------------------------------------------

/// Verbal voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Voice {
    Active,
    Passive,
    Causative,
    CausalPassive,
}

impl Voice {
    pub const COUNT: usize = 4;
    pub const ALL: [Voice; Self::COUNT] = [
        Voice::Active,
        Voice::Passive,
        Voice::Causative,
        Voice::CausalPassive,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Voice::Active => "Active",
            Voice::Passive => "Passive",
            Voice::Causative => "Causative",
            Voice::CausalPassive => "Causal Passive",
        }
    }
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Voice {
    type Err = VocabularyError;

    /// Accepts the display name or the short forms used on command lines.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "active" | "acti" | "act" => Ok(Voice::Active),
            "passive" | "pass" | "pas" => Ok(Voice::Passive),
            "causative" | "caus" | "cau" => Ok(Voice::Causative),
            "causal passive" | "causal-passive" | "caupas" => Ok(Voice::CausalPassive),
            _ => Err(VocabularyError::UnknownVoice(s.to_string())),
        }
    }
}

/// The eight traditional tense/mood categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum TenseMood {
    /// Vattamānā, present.
    Vat,
    /// Pañcamī, imperative.
    Pan,
    /// Sattamī, optative.
    Sat,
    /// Parokkhā, perfect.
    Par,
    /// Hiyyattanī, imperfect.
    Hiy,
    /// Ajjattanī, aorist.
    Ajj,
    /// Bhavissantī, future.
    Bha,
    /// Kālātipatti, conditional.
    Kal,
}

const TENSE_PALI_NAMES: [&str; TenseMood::COUNT] = [
    "Vattamānā",
    "Pañcamī",
    "Sattamī",
    "Parokkhā",
    "Hiyyattanī",
    "Ajjattanī",
    "Bhavissantī",
    "Kālātipatti",
];

const TENSE_ENG_NAMES: [&str; TenseMood::COUNT] = [
    "present",
    "imperative",
    "optative",
    "past/preterit/perfect",
    "past/imperfect",
    "past/aorist",
    "future",
    "conditional",
];

const TENSE_ENG_ABBRS: [&str; TenseMood::COUNT] = [
    "Pres.", "Imp.", "Opt.", "Perf.", "Imperf.", "Aor.", "Fut.", "Cond.",
];

impl TenseMood {
    pub const COUNT: usize = 8;
    pub const ALL: [TenseMood; Self::COUNT] = [
        TenseMood::Vat,
        TenseMood::Pan,
        TenseMood::Sat,
        TenseMood::Par,
        TenseMood::Hiy,
        TenseMood::Ajj,
        TenseMood::Bha,
        TenseMood::Kal,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Three-letter code used in paradigm keys.
    pub fn code(self) -> &'static str {
        match self {
            TenseMood::Vat => "vat",
            TenseMood::Pan => "pan",
            TenseMood::Sat => "sat",
            TenseMood::Par => "par",
            TenseMood::Hiy => "hiy",
            TenseMood::Ajj => "ajj",
            TenseMood::Bha => "bha",
            TenseMood::Kal => "kal",
        }
    }

    pub fn pali_name(self) -> &'static str {
        TENSE_PALI_NAMES[self.index()]
    }

    pub fn eng_name(self) -> &'static str {
        TENSE_ENG_NAMES[self.index()]
    }

    pub fn abbr(self) -> &'static str {
        TENSE_ENG_ABBRS[self.index()]
    }

    /// First three letters of the Pali name followed by a dot, e.g. "Vat.".
    pub fn pali_abbr(self) -> String {
        let head: String = self.pali_name().chars().take(3).collect();
        format!("{head}.")
    }

    /// Whether this tense/mood is formed outside the active voice.
    ///
    /// The perfect and the imperfect only exist in the active voice.
    pub fn formed_in_derived_voices(self) -> bool {
        !matches!(self, TenseMood::Par | TenseMood::Hiy)
    }

    /// Whether non-active stems take the `a-` augment in this tense/mood.
    pub fn takes_augment(self) -> bool {
        matches!(self, TenseMood::Ajj | TenseMood::Kal)
    }

    /// Past and conditional tenses, whose augmented stems may be hidden in
    /// generated tables.
    pub fn is_augmentable(self) -> bool {
        matches!(self, TenseMood::Hiy | TenseMood::Ajj | TenseMood::Kal)
    }
}

impl fmt::Display for TenseMood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pali_name())
    }
}

impl FromStr for TenseMood {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        TenseMood::ALL
            .into_iter()
            .find(|t| t.code() == lower || t.pali_name().to_lowercase() == lower)
            .ok_or_else(|| VocabularyError::UnknownTenseMood(s.to_string()))
    }
}

/// Parassapada (active for others) or Attanopada (active for oneself).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Pada {
    Parassa,
    Attano,
}

impl Pada {
    pub const COUNT: usize = 2;
    pub const ALL: [Pada; Self::COUNT] = [Pada::Parassa, Pada::Attano];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn code(self) -> char {
        match self {
            Pada::Parassa => 'p',
            Pada::Attano => 'a',
        }
    }

    pub fn from_code(code: char) -> Result<Self, VocabularyError> {
        match code {
            'p' => Ok(Pada::Parassa),
            'a' => Ok(Pada::Attano),
            other => Err(VocabularyError::UnknownPada(other.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Pada::Parassa => "Parassapada",
            Pada::Attano => "Attanopada",
        }
    }

    pub fn abbr(self) -> &'static str {
        match self {
            Pada::Parassa => "Par.",
            Pada::Attano => "Att.",
        }
    }
}

/// Grammatical person, in the traditional order: third, second, first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Person {
    Pathama,
    Majjhima,
    Uttama,
}

impl Person {
    pub const COUNT: usize = 3;
    pub const ALL: [Person; Self::COUNT] = [Person::Pathama, Person::Majjhima, Person::Uttama];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn abbr(self) -> &'static str {
        match self {
            Person::Pathama => "3rd",
            Person::Majjhima => "2nd",
            Person::Uttama => "1st",
        }
    }

    /// e.g. "Pathama (3rd)".
    pub fn name(self) -> String {
        let base = match self {
            Person::Pathama => "Pathama",
            Person::Majjhima => "Majjhima",
            Person::Uttama => "Uttama",
        };
        format!("{base} ({})", self.abbr())
    }
}

/// Grammatical number, shared by verbs and nouns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Number {
    Singular,
    Plural,
}

impl Number {
    pub const COUNT: usize = 2;
    pub const ALL: [Number; Self::COUNT] = [Number::Singular, Number::Plural];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Number::Singular => "Singular",
            Number::Plural => "Plural",
        }
    }

    pub fn abbr(self) -> &'static str {
        match self {
            Number::Singular => "Sin.",
            Number::Plural => "Plu.",
        }
    }
}

/// Derivational suffix (paccaya) categories producing participles and the
/// absolutive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DeriPaccaya {
    Nta,
    Mana,
    Aniya,
    Tabba,
    Ta,
    Tva,
}

impl DeriPaccaya {
    pub const COUNT: usize = 6;
    pub const ALL: [DeriPaccaya; Self::COUNT] = [
        DeriPaccaya::Nta,
        DeriPaccaya::Mana,
        DeriPaccaya::Aniya,
        DeriPaccaya::Tabba,
        DeriPaccaya::Ta,
        DeriPaccaya::Tva,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            DeriPaccaya::Nta => "nta",
            DeriPaccaya::Mana => "māna",
            DeriPaccaya::Aniya => "anīya",
            DeriPaccaya::Tabba => "tabba",
            DeriPaccaya::Ta => "ta",
            DeriPaccaya::Tva => "tvā",
        }
    }

    /// The stem fragment contributed by the suffix: "nt", "mān", "anīy",
    /// "abb", "t", "tvā".
    pub fn stem_part(self) -> &'static str {
        match self {
            DeriPaccaya::Nta => "nt",
            DeriPaccaya::Mana => "mān",
            DeriPaccaya::Aniya => "anīy",
            DeriPaccaya::Tabba => "abb",
            DeriPaccaya::Ta => "t",
            DeriPaccaya::Tva => "tvā",
        }
    }

    /// Stub appended to stems listed literally in a root's derivation field.
    ///
    /// Literal `anīya`, `ta` and `tvā` stems already carry the suffix.
    pub fn literal_stub(self) -> &'static str {
        match self {
            DeriPaccaya::Nta | DeriPaccaya::Mana | DeriPaccaya::Tabba => self.stem_part(),
            DeriPaccaya::Aniya | DeriPaccaya::Ta | DeriPaccaya::Tva => "",
        }
    }

    pub fn pos(self) -> &'static str {
        match self {
            DeriPaccaya::Nta | DeriPaccaya::Mana => "Present participle",
            DeriPaccaya::Aniya | DeriPaccaya::Tabba => "Potential/Future passive participle",
            DeriPaccaya::Ta => "Past participle",
            DeriPaccaya::Tva => "Absolutive",
        }
    }

    /// Absolutives are indeclinable; every other category is declined.
    pub fn is_declinable(self) -> bool {
        self != DeriPaccaya::Tva
    }
}

impl FromStr for DeriPaccaya {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nta" => Ok(DeriPaccaya::Nta),
            "māna" | "mana" => Ok(DeriPaccaya::Mana),
            "anīya" | "aniya" => Ok(DeriPaccaya::Aniya),
            "tabba" => Ok(DeriPaccaya::Tabba),
            "ta" => Ok(DeriPaccaya::Ta),
            "tvā" | "tva" => Ok(DeriPaccaya::Tva),
            _ => Err(VocabularyError::UnknownPaccaya(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Noun side
// ---------------------------------------------------------------------------

/// Nominal case in traditional order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Case {
    Nom,
    Acc,
    Ins,
    Dat,
    Abl,
    Gen,
    Loc,
    Voc,
}

impl Case {
    pub const COUNT: usize = 8;
    pub const ALL: [Case; Self::COUNT] = [
        Case::Nom,
        Case::Acc,
        Case::Ins,
        Case::Dat,
        Case::Abl,
        Case::Gen,
        Case::Loc,
        Case::Voc,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Case::Nom => "Nominative",
            Case::Acc => "Accusative",
            Case::Ins => "Instrumental",
            Case::Dat => "Dative",
            Case::Abl => "Ablative",
            Case::Gen => "Genitive",
            Case::Loc => "Locative",
            Case::Voc => "Vocative",
        }
    }

    /// e.g. "nom.".
    pub fn abbr(self) -> String {
        let head: String = self.name().chars().take(3).collect();
        format!("{}.", head.to_lowercase())
    }

    /// Traditional case numbering: 1..7, with the vocative written "ā".
    pub fn num_abbr(self) -> String {
        match self {
            Case::Voc => "ā".to_string(),
            other => (other.index() + 1).to_string(),
        }
    }

    pub fn simple_meaning(self) -> &'static str {
        match self {
            Case::Acc => "towards",
            Case::Ins => "by/with",
            Case::Dat => "for/to",
            Case::Abl => "from",
            Case::Gen => "of",
            Case::Loc => "in/at",
            Case::Nom | Case::Voc => "",
        }
    }
}

impl FromStr for Case {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim_end_matches('.').to_lowercase();
        Case::ALL
            .into_iter()
            .find(|c| {
                c.name().to_lowercase() == lower || c.abbr().trim_end_matches('.') == lower
            })
            .ok_or_else(|| VocabularyError::UnknownCase(s.to_string()))
    }
}

/// Grammatical gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Gender {
    Masculine,
    Feminine,
    Neuter,
}

impl Gender {
    pub const COUNT: usize = 3;
    pub const ALL: [Gender; Self::COUNT] = [Gender::Masculine, Gender::Feminine, Gender::Neuter];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Single-letter code used in noun paradigm keys.
    pub fn code(self) -> char {
        match self {
            Gender::Masculine => 'm',
            Gender::Feminine => 'f',
            Gender::Neuter => 'n',
        }
    }

    pub fn from_code(code: char) -> Result<Self, VocabularyError> {
        match code {
            'm' => Ok(Gender::Masculine),
            'f' => Ok(Gender::Feminine),
            'n' => Ok(Gender::Neuter),
            other => Err(VocabularyError::UnknownGender(other.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Gender::Masculine => "Masculine",
            Gender::Feminine => "Feminine",
            Gender::Neuter => "Neuter",
        }
    }

    /// Dictionary abbreviation without the trailing dot: "m", "f", "nt".
    pub fn abbr(self) -> &'static str {
        match self {
            Gender::Masculine => "m",
            Gender::Feminine => "f",
            Gender::Neuter => "nt",
        }
    }
}

impl FromStr for Gender {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_end_matches('.').to_lowercase().as_str() {
            "m" | "masculine" => Ok(Gender::Masculine),
            "f" | "feminine" => Ok(Gender::Feminine),
            "n" | "nt" | "neuter" => Ok(Gender::Neuter),
            _ => Err(VocabularyError::UnknownGender(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Root classification
// ---------------------------------------------------------------------------

/// Conjugation class (gaṇa) of a verb root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum RootGroup {
    I,
    II,
    III,
    IV,
    V,
    VI,
    VII,
    VIII,
}

impl RootGroup {
    pub const COUNT: usize = 8;
    pub const ALL: [RootGroup; Self::COUNT] = [
        RootGroup::I,
        RootGroup::II,
        RootGroup::III,
        RootGroup::IV,
        RootGroup::V,
        RootGroup::VI,
        RootGroup::VII,
        RootGroup::VIII,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn numeral(self) -> &'static str {
        ["I", "II", "III", "IV", "V", "VI", "VII", "VIII"][self.index()]
    }

    /// The root that names the class.
    pub fn representative(self) -> &'static str {
        ["bhū", "rudh", "div", "su", "kī", "gah", "tan", "cur"][self.index()]
    }

    /// e.g. "I (bhū)".
    pub fn name(self) -> String {
        format!("{} ({})", self.numeral(), self.representative())
    }

    /// Class from its 1-based number; out-of-range numbers map to class I.
    pub fn from_number(num: usize) -> Self {
        num.checked_sub(1)
            .and_then(|i| RootGroup::ALL.get(i).copied())
            .unwrap_or(RootGroup::I)
    }
}

impl fmt::Display for RootGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.numeral())
    }
}

impl FromStr for RootGroup {
    type Err = VocabularyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RootGroup::ALL
            .into_iter()
            .find(|g| g.numeral() == s)
            .ok_or_else(|| VocabularyError::UnknownRootGroup(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_order_matches_index() {
        for (i, t) in TenseMood::ALL.iter().enumerate() {
            assert_eq!(t.index(), i);
        }
        for (i, c) in Case::ALL.iter().enumerate() {
            assert_eq!(c.index(), i);
        }
        assert_eq!(Person::ALL[0].abbr(), "3rd");
    }

    #[test]
    fn tense_codes_round_trip() {
        for t in TenseMood::ALL {
            assert_eq!(t.code().parse::<TenseMood>().unwrap(), t);
        }
        assert!("xyz".parse::<TenseMood>().is_err());
    }

    #[test]
    fn tense_names() {
        assert_eq!(TenseMood::Kal.pali_name(), "Kālātipatti");
        assert_eq!(TenseMood::Kal.pali_abbr(), "Kāl.");
        assert_eq!(TenseMood::Ajj.abbr(), "Aor.");
    }

    #[test]
    fn derived_voices_skip_perfect_and_imperfect() {
        let formed: Vec<_> = TenseMood::ALL
            .into_iter()
            .filter(|t| t.formed_in_derived_voices())
            .collect();
        assert_eq!(formed.len(), 6);
        assert!(!formed.contains(&TenseMood::Par));
        assert!(!formed.contains(&TenseMood::Hiy));
    }

    #[test]
    fn pada_codes() {
        assert_eq!(Pada::from_code('p').unwrap(), Pada::Parassa);
        assert_eq!(Pada::from_code('a').unwrap(), Pada::Attano);
        assert!(Pada::from_code('x').is_err());
    }

    #[test]
    fn paccaya_stem_parts() {
        assert_eq!(DeriPaccaya::Nta.stem_part(), "nt");
        assert_eq!(DeriPaccaya::Mana.stem_part(), "mān");
        assert_eq!(DeriPaccaya::Tabba.stem_part(), "abb");
        assert_eq!(DeriPaccaya::Tva.stem_part(), "tvā");
        assert_eq!(DeriPaccaya::Ta.literal_stub(), "");
        assert!(!DeriPaccaya::Tva.is_declinable());
    }

    #[test]
    fn case_labels() {
        assert_eq!(Case::Loc.abbr(), "loc.");
        assert_eq!(Case::Loc.num_abbr(), "7");
        assert_eq!(Case::Voc.num_abbr(), "ā");
        assert_eq!("ins".parse::<Case>().unwrap(), Case::Ins);
        assert_eq!("Genitive".parse::<Case>().unwrap(), Case::Gen);
    }

    #[test]
    fn gender_codes() {
        for g in Gender::ALL {
            assert_eq!(Gender::from_code(g.code()).unwrap(), g);
        }
        assert_eq!(Gender::Neuter.abbr(), "nt");
        assert_eq!("nt.".parse::<Gender>().unwrap(), Gender::Neuter);
    }

    #[test]
    fn root_group_lookup() {
        assert_eq!(RootGroup::from_number(3), RootGroup::III);
        assert_eq!(RootGroup::from_number(0), RootGroup::I);
        assert_eq!(RootGroup::from_number(42), RootGroup::I);
        assert_eq!("VIII".parse::<RootGroup>().unwrap(), RootGroup::VIII);
        assert_eq!(RootGroup::I.name(), "I (bhū)");
        assert!("IX".parse::<RootGroup>().is_err());
    }

    #[test]
    fn voice_parsing() {
        assert_eq!("passive".parse::<Voice>().unwrap(), Voice::Passive);
        assert_eq!("caupas".parse::<Voice>().unwrap(), Voice::CausalPassive);
        assert_eq!(Voice::CausalPassive.to_string(), "Causal Passive");
    }
}
