// Verb paradigm table
//
// File format, one paradigm per line:
//
//   <name>;<tense code><pada code>:<3rd>|<2nd>|<1st>
//
// e.g. `generic;vatp:ti;nti|si;tha|mi;ma`.

use hashbrown::HashMap;
use pali_core::ending::Ending;
use pali_core::enums::{Number, Pada, Person, TenseMood};

use crate::TableError;
use crate::format::{data_lines, split_entry, split_key};
use crate::grid::{Row, parse_grid};

/// One verb paradigm: the Person x Number endings for a single tense/mood and
/// pada.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbParadigm {
    name: String,
    tense: TenseMood,
    pada: Pada,
    grid: [Row; Person::COUNT],
}

impl VerbParadigm {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tense(&self) -> TenseMood {
        self.tense
    }

    pub fn pada(&self) -> Pada {
        self.pada
    }

    /// Ending alternatives for a cell, in declared order.
    pub fn endings(&self, person: Person, number: Number) -> &[Ending] {
        &self.grid[person.index()][number.index()]
    }
}

/// Per-name slots indexed by tense and pada.
type TenseSlots = [[Option<VerbParadigm>; Pada::COUNT]; TenseMood::COUNT];

/// All verb paradigms, keyed by name, tense/mood and pada.
#[derive(Debug, Clone, Default)]
pub struct VerbParadigmTable {
    by_name: HashMap<String, TenseSlots>,
    len: usize,
}

impl VerbParadigmTable {
    /// Parses a verb paradigm file.
    ///
    /// A repeated key replaces the earlier entry.
    pub fn from_text(text: &str) -> Result<Self, TableError> {
        let mut table = VerbParadigmTable::default();
        for (line, entry) in data_lines(text) {
            let paradigm = parse_line(line, entry)?;
            table.insert(line, paradigm);
        }
        tracing::debug!(
            paradigms = table.len,
            names = table.by_name.len(),
            "loaded verb paradigm table"
        );
        Ok(table)
    }

    fn insert(&mut self, line: usize, paradigm: VerbParadigm) {
        let slots = self.by_name.entry(paradigm.name.clone()).or_default();
        let slot = &mut slots[paradigm.tense.index()][paradigm.pada.index()];
        if slot.is_some() {
            tracing::warn!(
                line,
                paradigm = %paradigm.name,
                tense = paradigm.tense.code(),
                "duplicate verb paradigm replaces earlier entry"
            );
        } else {
            self.len += 1;
        }
        *slot = Some(paradigm);
    }

    pub fn get(&self, name: &str, tense: TenseMood, pada: Pada) -> Option<&VerbParadigm> {
        self.by_name.get(name)?[tense.index()][pada.index()].as_ref()
    }

    /// Ending alternatives for a cell; empty when the paradigm is unknown.
    pub fn endings(
        &self,
        name: &str,
        tense: TenseMood,
        pada: Pada,
        person: Person,
        number: Number,
    ) -> &[Ending] {
        self.get(name, tense, pada)
            .map(|p| p.endings(person, number))
            .unwrap_or_default()
    }

    /// The padas a paradigm declares for a tense/mood, in declaration order.
    pub fn padas(&self, name: &str, tense: TenseMood) -> Vec<Pada> {
        Pada::ALL
            .into_iter()
            .filter(|&pada| self.get(name, tense, pada).is_some())
            .collect()
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Number of (name, tense, pada) entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

fn parse_line(line: usize, entry: &str) -> Result<VerbParadigm, TableError> {
    let (key, spec) = split_entry(line, entry)?;
    let (name, params) = split_key(line, key)?;
    let malformed = || TableError::MalformedKey {
        line,
        key: key.to_string(),
    };

    let mut chars = params.chars();
    let code: String = chars.by_ref().take(3).collect();
    let pada_code = chars.next().ok_or_else(malformed)?;
    if chars.next().is_some() {
        return Err(malformed());
    }
    let tense = code
        .parse::<TenseMood>()
        .map_err(|source| TableError::Vocabulary { line, source })?;
    let pada =
        Pada::from_code(pada_code).map_err(|source| TableError::Vocabulary { line, source })?;

    Ok(VerbParadigm {
        name: name.to_string(),
        tense,
        pada,
        grid: parse_grid(line, spec)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# verb paradigms
generic;vatp:ti;nti|si;tha|mi;ma
generic;vata:te;nte|se;vhe|e;mhe
generic;panp:tu;ntu|hi,0;tha|mi;ma
vgena;vatp:ati;anti|asi;atha|āmi;āma
";

    fn texts(endings: &[Ending]) -> Vec<String> {
        endings.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn lookup_cells() {
        let table = VerbParadigmTable::from_text(SAMPLE).unwrap();
        assert_eq!(table.len(), 4);
        let e = table.endings(
            "generic",
            TenseMood::Vat,
            Pada::Parassa,
            Person::Pathama,
            Number::Singular,
        );
        assert_eq!(texts(e), ["ti"]);
        let e = table.endings(
            "generic",
            TenseMood::Pan,
            Pada::Parassa,
            Person::Majjhima,
            Number::Singular,
        );
        assert_eq!(e, [Ending::Append("hi".into()), Ending::Bare]);
    }

    #[test]
    fn missing_lookups_are_empty() {
        let table = VerbParadigmTable::from_text(SAMPLE).unwrap();
        assert!(table.get("nosuch", TenseMood::Vat, Pada::Parassa).is_none());
        assert!(
            table
                .endings("vgena", TenseMood::Kal, Pada::Attano, Person::Uttama, Number::Plural)
                .is_empty()
        );
    }

    #[test]
    fn padas_in_declaration_order() {
        let table = VerbParadigmTable::from_text(SAMPLE).unwrap();
        assert_eq!(
            table.padas("generic", TenseMood::Vat),
            [Pada::Parassa, Pada::Attano]
        );
        assert_eq!(table.padas("generic", TenseMood::Pan), [Pada::Parassa]);
        assert!(table.padas("generic", TenseMood::Bha).is_empty());
    }

    #[test]
    fn bad_keys_are_rejected() {
        for text in [
            "generic;vat:ti;nti|si;tha|mi;ma",
            "generic;vatpx:ti;nti|si;tha|mi;ma",
            "generic;xyzp:ti;nti|si;tha|mi;ma",
            "generic;vatq:ti;nti|si;tha|mi;ma",
            "generic:ti;nti|si;tha|mi;ma",
            "generic;vatp",
        ] {
            assert!(VerbParadigmTable::from_text(text).is_err(), "{text}");
        }
    }

    #[test]
    fn error_carries_line_number() {
        let text = "generic;vatp:ti;nti|si;tha|mi;ma\n\ngeneric;panp:tu;ntu|hi\n";
        let err = VerbParadigmTable::from_text(text).unwrap_err();
        assert_eq!(
            err,
            TableError::SegmentCount {
                line: 3,
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn duplicate_key_replaces() {
        let text = "g;vatp:a;b|c;d|e;f\ng;vatp:x;b|c;d|e;f\n";
        let table = VerbParadigmTable::from_text(text).unwrap();
        assert_eq!(table.len(), 1);
        let e = table.endings("g", TenseMood::Vat, Pada::Parassa, Person::Pathama, Number::Singular);
        assert_eq!(texts(e), ["x"]);
    }
}
