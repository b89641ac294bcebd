// Declension tables
//
// A word's form for one (gender, case, number) cell comes from the first of
// its paradigms that declares any ending for that cell; later paradigms are
// not consulted. Paradigms are looked up by name, the word's stem ending for
// the gender and the gender itself, falling back to the generic paradigm.
//
// Numerals fix their own gender and number from their value before the same
// lookup. Participles are declined as three ad-hoc words, one per gender.

use indexmap::IndexSet;
use pali_core::enums::{Case, DeriPaccaya, Gender, Number, Voice};
use pali_tables::{GENERIC_PARADIGM, NounParadigmTable};
use serde::Serialize;

use crate::root::Root;
use crate::word::Word;

/// Paradigm of present active participles.
const PARTICIPLE_PARADIGM: &str = "ntgen";

/// Participles declined like `gacchanta` in the masculine and neuter.
const GACCHANTA_STEMS: [&str; 2] = ["gacchant", "sant"];

/// Part-of-speech tag of each gender's participle word.
const GENDER_TAGS: [&str; Gender::COUNT] = ["m.", "f.", "nt."];

/// Forms of one cell, first-match policy. Empty when no paradigm declares
/// the cell.
///
/// ```
/// use pali_core::enums::{Case, Gender, Number};
/// use pali_grammar::declension::compute_declension;
/// use pali_grammar::word::Word;
/// use pali_tables::NounParadigmTable;
///
/// let nouns = NounParadigmTable::from_text(
///     "generic;ā,f:ā;ā,āyo|aṃ;ā,āyo|āya;āhi|āya;ānaṃ|āya;āhi|āya;ānaṃ|āya,āyaṃ;āsu|e;ā",
/// ).unwrap();
/// let katha = Word::typed("kathā");
/// assert_eq!(
///     compute_declension(&nouns, &katha, Gender::Feminine, Case::Loc, Number::Singular),
///     ["kathāya", "kathāyaṃ"]
/// );
/// ```
pub fn compute_declension(
    nouns: &NounParadigmTable,
    word: &Word,
    gender: Gender,
    case: Case,
    number: Number,
) -> Vec<String> {
    let ending = word.ending(gender);
    let Some(endings) = word
        .paradigms()
        .iter()
        .filter_map(|name| nouns.resolve(name, ending, gender))
        .map(|paradigm| paradigm.endings(case, number))
        .find(|endings| !endings.is_empty())
    else {
        return Vec::new();
    };
    let forms: IndexSet<String> = endings
        .iter()
        .map(|e| word.with_suffix(e, gender))
        .collect();
    forms.into_iter().collect()
}

/// The first form of a cell, or an empty string.
pub fn decline(
    nouns: &NounParadigmTable,
    word: &Word,
    gender: Gender,
    case: Case,
    number: Number,
) -> String {
    compute_declension(nouns, word, gender, case, number)
        .into_iter()
        .next()
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Full tables
// ---------------------------------------------------------------------------

/// The Case x Number grid of one word in one gender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeclensionTable {
    pub term: String,
    pub gender: Gender,
    cells: [[Vec<String>; Number::COUNT]; Case::COUNT],
}

impl DeclensionTable {
    pub fn forms(&self, case: Case, number: Number) -> &[String] {
        &self.cells[case.index()][number.index()]
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(Vec::is_empty)
    }
}

/// Declines `word` in every case and number for `gender`.
pub fn declension_table(nouns: &NounParadigmTable, word: &Word, gender: Gender) -> DeclensionTable {
    let mut cells: [[Vec<String>; Number::COUNT]; Case::COUNT] = Default::default();
    for case in Case::ALL {
        for number in Number::ALL {
            cells[case.index()][number.index()] =
                compute_declension(nouns, word, gender, case, number);
        }
    }
    DeclensionTable {
        term: word.term().to_string(),
        gender,
        cells,
    }
}

// ---------------------------------------------------------------------------
// Numerals
// ---------------------------------------------------------------------------

/// Forms of a numeral in `case`, with gender and number taken from its
/// value. Empty for a word without a value.
pub fn compute_numeral_declension(
    nouns: &NounParadigmTable,
    word: &Word,
    gender: Gender,
    case: Case,
) -> Vec<String> {
    match word.numeral_coordinates(gender) {
        Some((gender, number)) => compute_declension(nouns, word, gender, case, number),
        None => Vec::new(),
    }
}

pub fn decline_numeral(nouns: &NounParadigmTable, word: &Word, gender: Gender, case: Case) -> String {
    compute_numeral_declension(nouns, word, gender, case)
        .into_iter()
        .next()
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Participles and absolutives
// ---------------------------------------------------------------------------

/// Declension of one participle stem in the three genders, indexed by
/// [`Gender::index`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedDeclension {
    pub stem: String,
    pub tables: [DeclensionTable; Gender::COUNT],
}

/// Forms derived from a root with one derivational suffix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "forms", rename_all = "lowercase")]
pub enum DerivedForms {
    /// Participles, declined per stem.
    Declined(Vec<DerivedDeclension>),
    /// Absolutives, which do not inflect.
    Indeclinable(Vec<String>),
}

impl DerivedForms {
    pub fn is_empty(&self) -> bool {
        match self {
            DerivedForms::Declined(stems) => stems.is_empty(),
            DerivedForms::Indeclinable(terms) => terms.is_empty(),
        }
    }
}

/// The citation term and paradigm of a participle stem in `gender`.
fn participle_word(stem: &str, paccaya: DeriPaccaya, gender: Gender) -> (String, &'static str) {
    let ending = match gender {
        Gender::Feminine if paccaya == DeriPaccaya::Nta => "ī",
        Gender::Feminine => "ā",
        Gender::Masculine | Gender::Neuter => "a",
    };
    let paradigm = if paccaya != DeriPaccaya::Nta {
        GENERIC_PARADIGM
    } else if !GACCHANTA_STEMS.contains(&stem) {
        PARTICIPLE_PARADIGM
    } else if gender == Gender::Feminine {
        GENERIC_PARADIGM
    } else {
        "gacchanta"
    };
    (format!("{stem}{ending}"), paradigm)
}

fn decline_participle(
    nouns: &NounParadigmTable,
    stem: &str,
    paccaya: DeriPaccaya,
) -> DerivedDeclension {
    let tables = Gender::ALL.map(|gender| {
        let (term, paradigm) = participle_word(stem, paccaya, gender);
        let mut word = Word::new(&term);
        word.set_paradigms(paradigm);
        word.add_pos_info(GENDER_TAGS[gender.index()]);
        declension_table(nouns, &word, gender)
    });
    DerivedDeclension {
        stem: stem.to_string(),
        tables,
    }
}

/// Declines every derived stem of a root for `voice` and `paccaya`.
/// Absolutives are listed with their `-tvāna` variants instead.
pub fn derived_forms(
    nouns: &NounParadigmTable,
    root: &Root,
    voice: Voice,
    paccaya: DeriPaccaya,
) -> DerivedForms {
    let stems = root.derived_stems(voice, paccaya);
    if !paccaya.is_declinable() {
        let mut terms = Vec::with_capacity(stems.len() * 2);
        for stem in stems {
            terms.push(stem.clone());
            if stem.ends_with("tvā") {
                terms.push(format!("{stem}na"));
            }
        }
        return DerivedForms::Indeclinable(terms);
    }
    DerivedForms::Declined(
        stems
            .iter()
            .map(|stem| decline_participle(nouns, stem, paccaya))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pali_core::enums::RootGroup;

    const NOUNS: &str = "\
generic;a,m:o;ā|aṃ;e|ena;ehi|āya,assa;ānaṃ|ā,asmā,amhā;ehi|assa;ānaṃ|e,asmiṃ,amhi;esu|a,ā;ā
generic;a,nt:aṃ;āni|aṃ;āni|ena;ehi|āya,assa;ānaṃ|ā,asmā;ehi|assa;ānaṃ|e,asmiṃ;esu|a;āni
generic;ā,f:ā;ā,āyo|aṃ;ā,āyo|āya;āhi|āya;ānaṃ|āya;āhi|āya;ānaṃ|āya,āyaṃ;āsu|e;ā,āyo
generic;ī,f:ī;ī,iyo|iṃ;ī,iyo|iyā;īhi|iyā;īnaṃ|iyā;īhi|iyā;īnaṃ|iyā,iyaṃ;īsu|i;ī,iyo
ntgen;a,m:aṃ,o;ā|aṃ;e|atā;ehi|ato;ataṃ|atā;ehi|ato;ataṃ|ati;esu|aṃ,a;ā
ntgen;ī,f:ī;iyo|iṃ;iyo|iyā;īhi|iyā;īnaṃ|iyā;īhi|iyā;īnaṃ|iyā;īsu|i;iyo
ntgen;a,nt:aṃ;āni|aṃ;āni|atā;ehi|ato;ataṃ|atā;ehi|ato;ataṃ|ati;esu|aṃ;āni
gacchanta;a,m:aṃ;ā|aṃ;e|atā;ehi|ato;ataṃ|atā;ehi|ato;ataṃ|ati;esu|aṃ;ā
sparse;a,m:|;|;|;|;|;|;|;
";

    fn nouns() -> NounParadigmTable {
        NounParadigmTable::from_text(NOUNS).unwrap()
    }

    fn noun(term: &str, pos: &str, paradigms: &str) -> Word {
        let mut w = Word::new(term);
        w.set_paradigms(paradigms);
        w.add_pos_info(pos);
        w
    }

    #[test]
    fn alternatives_of_the_matching_paradigm() {
        let dhamma = noun("dhamma", "m.", "0");
        assert_eq!(
            compute_declension(&nouns(), &dhamma, Gender::Masculine, Case::Abl, Number::Singular),
            ["dhammā", "dhammasmā", "dhammamhā"]
        );
        assert_eq!(
            decline(&nouns(), &dhamma, Gender::Masculine, Case::Ins, Number::Plural),
            "dhammehi"
        );
    }

    #[test]
    fn first_paradigm_with_a_form_wins() {
        let nouns = nouns();
        let w = noun("buddha", "m.", "sparse,ntgen");
        // sparse declares nothing, so ntgen decides
        assert_eq!(decline(&nouns, &w, Gender::Masculine, Case::Ins, Number::Singular), "buddhatā");
        let w = noun("buddha", "m.", "ntgen,generic");
        assert_eq!(
            compute_declension(&nouns, &w, Gender::Masculine, Case::Nom, Number::Singular),
            ["buddhaṃ", "buddho"]
        );
    }

    #[test]
    fn unknown_paradigm_falls_back_to_generic() {
        let w = noun("citta", "nt.", "nosuch");
        assert_eq!(decline(&nouns(), &w, Gender::Neuter, Case::Nom, Number::Plural), "cittāni");
    }

    #[test]
    fn missing_gender_or_paradigm_is_empty() {
        let nouns = nouns();
        let dhamma = noun("dhamma", "m.", "0");
        assert!(compute_declension(&nouns, &dhamma, Gender::Feminine, Case::Nom, Number::Singular).is_empty());
        assert_eq!(decline(&nouns, &dhamma, Gender::Feminine, Case::Nom, Number::Singular), "");
        let bare = Word::new("dhamma");
        assert!(declension_table(&nouns, &bare, Gender::Masculine).is_empty());
    }

    #[test]
    fn full_table() {
        let katha = Word::typed("kathā");
        let table = declension_table(&nouns(), &katha, Gender::Feminine);
        assert_eq!(table.term, "kathā");
        assert_eq!(table.forms(Case::Nom, Number::Plural), ["kathā", "kathāyo"]);
        assert_eq!(table.forms(Case::Loc, Number::Singular), ["kathāya", "kathāyaṃ"]);
        assert_eq!(table.forms(Case::Voc, Number::Singular), ["kathe"]);
        assert!(!table.is_empty());
    }

    #[test]
    fn numerals_choose_gender_and_number() {
        let nouns = nouns();
        let mut w = Word::numeral("sata", 100, 0, false);
        w.clear_paradigms();
        w.add_paradigm("0");
        assert_eq!(w.genders(), [Gender::Neuter]);
        // 100 is plural and neuter whatever gender is asked for
        assert_eq!(decline_numeral(&nouns, &w, Gender::Masculine, Case::Nom), "satāni");
        let zero = Word::new("suñña");
        assert_eq!(decline_numeral(&nouns, &zero, Gender::Masculine, Case::Nom), "");
    }

    fn pac() -> Root {
        Root::parse(
            1,
            "pac",
            RootGroup::I,
            "paca.0|paca.0|paca.0|papaca.0|apaca.0|apaci.0|pacissa.0|apacissa.0",
            "pacciy;pāc",
            "-;-;-;-;pakk;pacitvā",
        )
        .unwrap()
    }

    #[test]
    fn present_participle_in_three_genders() {
        let DerivedForms::Declined(stems) = derived_forms(&nouns(), &pac(), Voice::Active, DeriPaccaya::Nta) else {
            panic!("participles decline");
        };
        assert_eq!(stems.len(), 1);
        let [m, f, nt] = &stems[0].tables;
        assert_eq!(stems[0].stem, "pacant");
        assert_eq!(m.term, "pacanta");
        assert_eq!(m.forms(Case::Nom, Number::Singular), ["pacantaṃ", "pacanto"]);
        assert_eq!(f.term, "pacantī");
        assert_eq!(f.forms(Case::Acc, Number::Singular), ["pacantiṃ"]);
        assert_eq!(nt.forms(Case::Nom, Number::Plural), ["pacantāni"]);
    }

    #[test]
    fn gacchanta_class() {
        assert_eq!(
            participle_word("gacchant", DeriPaccaya::Nta, Gender::Masculine),
            ("gacchanta".to_string(), "gacchanta")
        );
        assert_eq!(
            participle_word("sant", DeriPaccaya::Nta, Gender::Feminine),
            ("santī".to_string(), GENERIC_PARADIGM)
        );
        assert_eq!(
            participle_word("pakk", DeriPaccaya::Ta, Gender::Feminine),
            ("pakkā".to_string(), GENERIC_PARADIGM)
        );
    }

    #[test]
    fn past_participle_uses_generic() {
        let DerivedForms::Declined(stems) = derived_forms(&nouns(), &pac(), Voice::Active, DeriPaccaya::Ta) else {
            panic!("participles decline");
        };
        let [m, f, _] = &stems[0].tables;
        assert_eq!(m.forms(Case::Nom, Number::Singular), ["pakko"]);
        assert_eq!(f.forms(Case::Nom, Number::Singular), ["pakkā"]);
    }

    #[test]
    fn absolutives_are_indeclinable() {
        let forms = derived_forms(&nouns(), &pac(), Voice::Active, DeriPaccaya::Tva);
        assert_eq!(
            forms,
            DerivedForms::Indeclinable(vec!["pacitvā".into(), "pacitvāna".into()])
        );
        assert!(derived_forms(&nouns(), &pac(), Voice::Active, DeriPaccaya::Aniya).is_empty());
    }
}
