// GrammarData: the reference tables every generator reads
//
// Built once, either from in-memory texts or from a data directory, and
// then passed by reference. Nothing is mutated after loading.

use std::path::{Path, PathBuf};

use pali_core::enums::{DeriPaccaya, Gender, TenseMood, Voice};
use pali_tables::{NounParadigmTable, VerbParadigmTable};

use crate::conjugation::{ConjugationOptions, StemConjugation, compute_conjugation};
use crate::declension::{DeclensionTable, DerivedForms, declension_table, derived_forms};
use crate::error::GrammarError;
use crate::root::{Root, RootCatalog};
use crate::word::{NumeralCatalog, PronounCatalog, Word};

/// Verb paradigm file name.
pub const VERB_PARADIGM_FILE: &str = "paradv.csv";
/// Noun paradigm file name.
pub const NOUN_PARADIGM_FILE: &str = "paradn.csv";
/// Root catalog file name.
pub const ROOTS_FILE: &str = "roots.csv";
/// Root gloss list file name.
pub const ROOT_GLOSS_FILE: &str = "rootlist.csv";
/// Pronoun catalog file name.
pub const PRONOUNS_FILE: &str = "pronouns.csv";
/// Numeral catalog file name.
pub const NUMERALS_FILE: &str = "numerals.csv";

/// Paradigm tables plus the root, pronoun and numeral catalogs.
#[derive(Debug, Clone, Default)]
pub struct GrammarData {
    verbs: VerbParadigmTable,
    nouns: NounParadigmTable,
    roots: RootCatalog,
    pronouns: PronounCatalog,
    numerals: NumeralCatalog,
}

impl GrammarData {
    /// Builds data from the two paradigm files. Catalogs start empty.
    pub fn from_texts(verbs: &str, nouns: &str) -> Result<Self, GrammarError> {
        Ok(GrammarData {
            verbs: VerbParadigmTable::from_text(verbs)?,
            nouns: NounParadigmTable::from_text(nouns)?,
            ..Default::default()
        })
    }

    pub fn with_roots(mut self, text: &str) -> Result<Self, GrammarError> {
        self.roots = RootCatalog::from_text(text)?;
        Ok(self)
    }

    /// Attaches glosses to the roots already loaded.
    pub fn with_root_glosses(mut self, text: &str) -> Result<Self, GrammarError> {
        self.roots.attach_glosses(text)?;
        Ok(self)
    }

    pub fn with_pronouns(mut self, text: &str) -> Result<Self, GrammarError> {
        self.pronouns = PronounCatalog::from_text(text)?;
        Ok(self)
    }

    pub fn with_numerals(mut self, text: &str) -> Result<Self, GrammarError> {
        self.numerals = NumeralCatalog::from_text(text)?;
        Ok(self)
    }

    /// Loads a data directory.
    ///
    /// The two paradigm files are required. The catalogs are loaded when
    /// present and left empty otherwise.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, GrammarError> {
        let dir = dir.as_ref();
        let verbs = read_required(dir, VERB_PARADIGM_FILE)?;
        let nouns = read_required(dir, NOUN_PARADIGM_FILE)?;
        let mut data = GrammarData::from_texts(&verbs, &nouns)?;

        if let Some(text) = read_optional(dir, ROOTS_FILE)? {
            data = data.with_roots(&text)?;
            if let Some(glosses) = read_optional(dir, ROOT_GLOSS_FILE)? {
                data = data.with_root_glosses(&glosses)?;
            }
        }
        if let Some(text) = read_optional(dir, PRONOUNS_FILE)? {
            data = data.with_pronouns(&text)?;
        }
        if let Some(text) = read_optional(dir, NUMERALS_FILE)? {
            data = data.with_numerals(&text)?;
        }

        tracing::info!(
            dir = %dir.display(),
            verb_paradigms = data.verbs.len(),
            noun_paradigms = data.nouns.len(),
            roots = data.roots.len(),
            pronouns = data.pronouns.len(),
            "grammar data loaded"
        );
        Ok(data)
    }

    pub fn verbs(&self) -> &VerbParadigmTable {
        &self.verbs
    }

    pub fn nouns(&self) -> &NounParadigmTable {
        &self.nouns
    }

    pub fn roots(&self) -> &RootCatalog {
        &self.roots
    }

    pub fn pronouns(&self) -> &PronounCatalog {
        &self.pronouns
    }

    pub fn numerals(&self) -> &NumeralCatalog {
        &self.numerals
    }

    pub fn root(&self, text: &str) -> Option<&Root> {
        self.roots.get(text)
    }

    pub fn conjugation(
        &self,
        root: &Root,
        voice: Voice,
        tense: TenseMood,
        options: &ConjugationOptions,
    ) -> Vec<StemConjugation> {
        compute_conjugation(&self.verbs, root, voice, tense, options)
    }

    pub fn declension(&self, word: &Word, gender: Gender) -> DeclensionTable {
        declension_table(&self.nouns, word, gender)
    }

    pub fn derived(&self, root: &Root, voice: Voice, paccaya: DeriPaccaya) -> DerivedForms {
        derived_forms(&self.nouns, root, voice, paccaya)
    }
}

fn read_file(path: PathBuf) -> Result<String, GrammarError> {
    std::fs::read_to_string(&path).map_err(|source| GrammarError::Io { path, source })
}

fn read_required(dir: &Path, name: &str) -> Result<String, GrammarError> {
    read_file(dir.join(name))
}

fn read_optional(dir: &Path, name: &str) -> Result<Option<String>, GrammarError> {
    let path = dir.join(name);
    if !path.is_file() {
        tracing::warn!(file = name, dir = %dir.display(), "optional data file not found");
        return Ok(None);
    }
    read_file(path).map(Some)
}
