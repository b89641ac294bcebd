// Noun paradigm table
//
// File format, one paradigm per line:
//
//   <name>;<stem ending>,<gender code>:<nom>|<acc>|...|<voc>
//
// e.g. `generic;ā,f:ā;ā,āyo|aṃ;ā,āyo|...`. The stem ending is the
// citation-form final (`a`, `ā`, `i`, ...) the paradigm applies to.

use hashbrown::HashMap;
use pali_core::ending::Ending;
use pali_core::enums::{Case, Gender, Number};

use crate::format::{data_lines, split_entry, split_key};
use crate::grid::{Row, parse_grid};
use crate::{GENERIC_PARADIGM, TableError};

/// One noun paradigm: the Case x Number endings for a stem ending and gender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NounParadigm {
    name: String,
    ending: String,
    gender: Gender,
    grid: [Row; Case::COUNT],
}

impl NounParadigm {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stem_ending(&self) -> &str {
        &self.ending
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Ending alternatives for a cell, in declared order.
    pub fn endings(&self, case: Case, number: Number) -> &[Ending] {
        &self.grid[case.index()][number.index()]
    }
}

type GenderSlots = [Option<NounParadigm>; Gender::COUNT];

/// All noun paradigms, keyed by name, stem ending and gender.
#[derive(Debug, Clone, Default)]
pub struct NounParadigmTable {
    by_name: HashMap<String, HashMap<String, GenderSlots>>,
    len: usize,
}

impl NounParadigmTable {
    /// Parses a noun paradigm file.
    ///
    /// A repeated key replaces the earlier entry.
    pub fn from_text(text: &str) -> Result<Self, TableError> {
        let mut table = NounParadigmTable::default();
        for (line, entry) in data_lines(text) {
            let paradigm = parse_line(line, entry)?;
            table.insert(line, paradigm);
        }
        tracing::debug!(
            paradigms = table.len,
            names = table.by_name.len(),
            "loaded noun paradigm table"
        );
        Ok(table)
    }

    fn insert(&mut self, line: usize, paradigm: NounParadigm) {
        let slot = &mut self
            .by_name
            .entry(paradigm.name.clone())
            .or_default()
            .entry(paradigm.ending.clone())
            .or_default()[paradigm.gender.index()];
        if slot.is_some() {
            tracing::warn!(
                line,
                paradigm = %paradigm.name,
                ending = %paradigm.ending,
                "duplicate noun paradigm replaces earlier entry"
            );
        } else {
            self.len += 1;
        }
        *slot = Some(paradigm);
    }

    /// Exact lookup, without fallback.
    pub fn get(&self, name: &str, ending: &str, gender: Gender) -> Option<&NounParadigm> {
        self.by_name.get(name)?.get(ending)?[gender.index()].as_ref()
    }

    /// Looks up a paradigm, falling back to the generic paradigm with the
    /// same stem ending and gender when `name` has no such entry.
    pub fn resolve(&self, name: &str, ending: &str, gender: Gender) -> Option<&NounParadigm> {
        self.get(name, ending, gender).or_else(|| {
            let fallback = self.get(GENERIC_PARADIGM, ending, gender);
            if fallback.is_some() && name != GENERIC_PARADIGM {
                tracing::trace!(paradigm = name, ending, "noun paradigm falls back to generic");
            }
            fallback
        })
    }

    /// Ending alternatives for a cell of the resolved paradigm; empty when
    /// neither the paradigm nor the generic fallback exists.
    pub fn endings(
        &self,
        name: &str,
        ending: &str,
        gender: Gender,
        case: Case,
        number: Number,
    ) -> &[Ending] {
        self.resolve(name, ending, gender)
            .map(|p| p.endings(case, number))
            .unwrap_or_default()
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Number of (name, ending, gender) entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

fn parse_line(line: usize, entry: &str) -> Result<NounParadigm, TableError> {
    let (key, spec) = split_entry(line, entry)?;
    let (name, params) = split_key(line, key)?;
    let malformed = || TableError::MalformedKey {
        line,
        key: key.to_string(),
    };

    let (ending, code) = params.split_once(',').ok_or_else(malformed)?;
    let mut code_chars = code.chars();
    let (Some(code), None) = (code_chars.next(), code_chars.next()) else {
        return Err(malformed());
    };
    let gender = Gender::from_code(code).map_err(|source| TableError::Vocabulary { line, source })?;

    Ok(NounParadigm {
        name: name.to_string(),
        ending: ending.to_string(),
        gender,
        grid: parse_grid(line, spec)?,
    })
}
