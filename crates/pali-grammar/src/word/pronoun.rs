// Pronoun catalog, one `term:paradigm:meaning` entry per line.

use indexmap::IndexMap;
use pali_tables::format::data_lines;

use super::Word;
use crate::data::PRONOUNS_FILE;
use crate::error::GrammarError;

/// Pronouns keyed by citation term, in file order. Every pronoun takes all
/// three genders.
#[derive(Debug, Clone, Default)]
pub struct PronounCatalog {
    words: IndexMap<String, Word>,
}

impl PronounCatalog {
    pub fn from_text(text: &str) -> Result<Self, GrammarError> {
        let mut words = IndexMap::new();
        for (line, entry) in data_lines(text) {
            let fields: Vec<&str> = entry.split(':').collect();
            let [term, paradigm, meaning] = fields.as_slice() else {
                return Err(GrammarError::Catalog {
                    file: PRONOUNS_FILE,
                    line,
                    reason: format!("expected 3 fields, found {}", fields.len()),
                });
            };
            let mut word = Word::new(term);
            word.add_paradigm(paradigm);
            word.add_meaning(meaning);
            word.add_pos_info("pron.");
            word.set_all_genders();
            word.set_ending();
            words.insert(term.to_string(), word);
        }
        tracing::debug!(pronouns = words.len(), "loaded pronoun catalog");
        Ok(PronounCatalog { words })
    }

    pub fn get(&self, term: &str) -> Option<&Word> {
        self.words.get(term)
    }

    pub fn words(&self) -> impl Iterator<Item = &Word> {
        self.words.values()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
