// Conjugation tables
//
// A root's conjugation for one voice and tense/mood is built stem by stem:
//
//   1. collect the paradigm names the stem follows
//   2. for every (pada, person, number) cell, union the ending alternatives
//      of all those paradigms, keeping first-seen order
//   3. attach each ending through root sandhi and drop degenerate forms
//
// Unlike declension, every matching paradigm contributes. A cell with no
// forms is a valid result and stays empty.

use indexmap::IndexSet;
use pali_core::enums::{Number, Pada, Person, TenseMood, Voice};
use pali_tables::VerbParadigmTable;
use serde::Serialize;

use crate::root::Root;
use crate::suffix::{MIN_FORM_LENGTH, verb_form};

/// Switches for conjugation table generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConjugationOptions {
    /// Keep `a-` augmented stems in the imperfect, aorist and conditional.
    pub show_augmented: bool,
    /// Forms with fewer letters are dropped.
    pub min_form_length: usize,
}

impl Default for ConjugationOptions {
    fn default() -> Self {
        ConjugationOptions {
            show_augmented: false,
            min_form_length: MIN_FORM_LENGTH,
        }
    }
}

/// One conjugation cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct VerbCoordinates {
    pub voice: Voice,
    pub tense: TenseMood,
    pub pada: Pada,
    pub person: Person,
    pub number: Number,
}

type Cells = [[[Vec<String>; Number::COUNT]; Person::COUNT]; Pada::COUNT];

/// The Pada x Person x Number forms of one stem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StemConjugation {
    pub stem: String,
    cells: Cells,
}

impl StemConjugation {
    pub fn forms(&self, pada: Pada, person: Person, number: Number) -> &[String] {
        &self.cells[pada.index()][person.index()][number.index()]
    }

    /// Whether any cell of `pada` has a form.
    pub fn has_pada(&self, pada: Pada) -> bool {
        self.cells[pada.index()]
            .iter()
            .flatten()
            .any(|forms| !forms.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        !Pada::ALL.into_iter().any(|pada| self.has_pada(pada))
    }

    /// Cell forms joined with `", "`, the way tables display them.
    pub fn cell_text(&self, pada: Pada, person: Person, number: Number) -> String {
        self.forms(pada, person, number).join(", ")
    }
}

/// Whether `stem` is an augmented form hidden by default.
fn is_augmented(tense: TenseMood, stem: &str) -> bool {
    tense.is_augmentable() && stem.starts_with('a')
}

/// The distinct stems a table is built from, augmented ones filtered out
/// unless requested.
fn table_stems<'a>(
    root: &'a Root,
    voice: Voice,
    tense: TenseMood,
    options: &ConjugationOptions,
) -> IndexSet<&'a str> {
    root.stems(voice, tense)
        .iter()
        .map(String::as_str)
        .filter(|stem| options.show_augmented || !is_augmented(tense, stem))
        .collect()
}

fn conjugate_stem(
    verbs: &VerbParadigmTable,
    root: &Root,
    voice: Voice,
    tense: TenseMood,
    stem: &str,
    options: &ConjugationOptions,
) -> StemConjugation {
    let paradigms = root.paradigms(voice, stem);
    let mut cells = Cells::default();
    for pada in Pada::ALL {
        for person in Person::ALL {
            for number in Number::ALL {
                let endings: IndexSet<_> = paradigms
                    .iter()
                    .flat_map(|name| verbs.endings(name, tense, pada, person, number))
                    .collect();
                let forms: IndexSet<String> = endings
                    .into_iter()
                    .filter_map(|ending| verb_form(stem, ending, options.min_form_length))
                    .collect();
                cells[pada.index()][person.index()][number.index()] = forms.into_iter().collect();
            }
        }
    }
    StemConjugation {
        stem: stem.to_string(),
        cells,
    }
}

/// Conjugation of a root for one voice and tense/mood, one entry per stem.
///
/// Empty when the root does not form the voice or tense.
pub fn compute_conjugation(
    verbs: &VerbParadigmTable,
    root: &Root,
    voice: Voice,
    tense: TenseMood,
    options: &ConjugationOptions,
) -> Vec<StemConjugation> {
    table_stems(root, voice, tense, options)
        .into_iter()
        .map(|stem| conjugate_stem(verbs, root, voice, tense, stem, options))
        .collect()
}

/// The forms of a single cell, over all stems, without duplicates.
pub fn conjugate(
    verbs: &VerbParadigmTable,
    root: &Root,
    at: &VerbCoordinates,
    options: &ConjugationOptions,
) -> Vec<String> {
    let mut forms = IndexSet::new();
    for stem in table_stems(root, at.voice, at.tense, options) {
        for name in root.paradigms(at.voice, stem) {
            let endings = verbs.endings(name, at.tense, at.pada, at.person, at.number);
            forms.extend(
                endings
                    .iter()
                    .filter_map(|e| verb_form(stem, e, options.min_form_length)),
            );
        }
    }
    forms.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pali_core::enums::RootGroup;

    const VERBS: &str = "\
generic;vatp:ti;nti|si;tha|mi;ma
generic;vata:te;nte|se;vhe|e;mhe
generic;ajjp:-1ā,-1a;-1uṃ|-1o;-1attha|-1aṃ;-1āma
generic;hiyp:-1ā;-1ū|-1o;-1attha|-1aṃ;-1amhā
vgena;vatp:ati;anti|asi;atha|āmi;āma
vgene;vatp:ti;nti|si;tha|mi;ma
short;vatp:-3;|;|;
";

    fn verbs() -> VerbParadigmTable {
        VerbParadigmTable::from_text(VERBS).unwrap()
    }

    fn pac() -> Root {
        Root::parse(
            1,
            "pac",
            RootGroup::I,
            "paca.0|paca.0|paca.0|papaca.0|apaca.0|apaci.0,paci.0|pacissa.0|apacissa.0",
            "pacciy;pāc",
            "-;-;-;-;pakk;pacitvā",
        )
        .unwrap()
    }

    #[test]
    fn present_active() {
        let table = compute_conjugation(
            &verbs(),
            &pac(),
            Voice::Active,
            TenseMood::Vat,
            &ConjugationOptions::default(),
        );
        assert_eq!(table.len(), 1);
        let paca = &table[0];
        assert_eq!(paca.stem, "paca");
        assert_eq!(paca.forms(Pada::Parassa, Person::Pathama, Number::Singular), ["pacati"]);
        assert_eq!(paca.forms(Pada::Parassa, Person::Uttama, Number::Plural), ["pacama"]);
        assert_eq!(paca.forms(Pada::Attano, Person::Majjhima, Number::Plural), ["pacavhe"]);
        assert!(paca.has_pada(Pada::Attano));
    }

    #[test]
    fn paradigms_of_a_stem_are_unioned() {
        let root = Root::parse(
            2,
            "pac",
            RootGroup::I,
            "paca.0.vgena|||||||",
            "-;-",
            "-;-;-;-;-;-",
        )
        .unwrap();
        let forms = conjugate(
            &verbs(),
            &root,
            &VerbCoordinates {
                voice: Voice::Active,
                tense: TenseMood::Vat,
                pada: Pada::Parassa,
                person: Person::Pathama,
                number: Number::Singular,
            },
            &ConjugationOptions::default(),
        );
        assert_eq!(forms, ["pacati", "pacāti"]);
    }

    #[test]
    fn generated_voices_use_generated_paradigms() {
        let table = compute_conjugation(
            &verbs(),
            &pac(),
            Voice::Causative,
            TenseMood::Vat,
            &ConjugationOptions::default(),
        );
        let stems: Vec<&str> = table.iter().map(|s| s.stem.as_str()).collect();
        assert_eq!(stems, ["pāce", "pācay", "pācāpe", "pācāpay"]);
        assert_eq!(table[0].forms(Pada::Parassa, Person::Pathama, Number::Plural), ["pācenti"]);
        assert_eq!(table[1].forms(Pada::Parassa, Person::Pathama, Number::Plural), ["pācayanti"]);
        // vgen* paradigms declare no attanopada
        assert!(!table[1].has_pada(Pada::Attano));
    }

    #[test]
    fn augmented_stems_hidden_by_default() {
        let verbs = verbs();
        let root = pac();
        let hidden = compute_conjugation(&verbs, &root, Voice::Active, TenseMood::Ajj, &ConjugationOptions::default());
        let stems: Vec<&str> = hidden.iter().map(|s| s.stem.as_str()).collect();
        assert_eq!(stems, ["paci"]);
        assert!(compute_conjugation(&verbs, &root, Voice::Active, TenseMood::Hiy, &ConjugationOptions::default()).is_empty());

        let options = ConjugationOptions {
            show_augmented: true,
            ..Default::default()
        };
        let shown = compute_conjugation(&verbs, &root, Voice::Active, TenseMood::Ajj, &options);
        assert_eq!(shown.len(), 2);
        assert_eq!(shown[0].forms(Pada::Parassa, Person::Pathama, Number::Singular), ["apacā", "apaca"]);
        assert_eq!(shown[0].cell_text(Pada::Parassa, Person::Pathama, Number::Plural), "apacuṃ");
    }

    #[test]
    fn missing_voice_and_tense_are_empty() {
        let verbs = verbs();
        let root = pac();
        let options = ConjugationOptions::default();
        assert!(compute_conjugation(&verbs, &root, Voice::Causative, TenseMood::Par, &options).is_empty());
        // a stem with no paradigm for the tense yields empty cells
        let table = compute_conjugation(&verbs, &root, Voice::Active, TenseMood::Pan, &options);
        assert_eq!(table.len(), 1);
        assert!(table[0].is_empty());
    }

    #[test]
    fn degenerate_forms_are_dropped() {
        let root = Root::parse(3, "hū", RootGroup::I, "hoti.short|||||||", "-;-", "-;-;-;-;-;-").unwrap();
        let table = compute_conjugation(&verbs(), &root, Voice::Active, TenseMood::Vat, &ConjugationOptions::default());
        assert!(table[0].forms(Pada::Parassa, Person::Pathama, Number::Singular).is_empty());
        let lenient = ConjugationOptions {
            min_form_length: 1,
            ..Default::default()
        };
        let table = compute_conjugation(&verbs(), &root, Voice::Active, TenseMood::Vat, &lenient);
        assert_eq!(table[0].forms(Pada::Parassa, Person::Pathama, Number::Singular), ["h"]);
    }
}
