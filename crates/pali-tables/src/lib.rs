//! Paradigm tables for the Pali morphology engine.
//!
//! A paradigm is a named grid of inflectional endings. Verb paradigms are
//! keyed by name, tense/mood and pada and hold a Person x Number grid; noun
//! paradigms are keyed by name, stem ending and gender and hold a
//! Case x Number grid. Both are loaded from line-oriented text files:
//!
//! ```text
//! # comment
//! generic;vatp:ti;nti|si;tha|mi;ma
//! generic;ā,f:ā;ā,āyo|aṃ;ā,āyo|...
//! ```
//!
//! # Architecture
//!
//! - [`format`] -- Line, entry and key splitting shared by both files
//! - [`grid`] -- The `|`/`;`/`,` suffix grid parser
//! - [`verb`] -- Verb paradigms and their table
//! - [`noun`] -- Noun paradigms and their table

pub mod format;
pub mod grid;
pub mod noun;
pub mod verb;

pub use noun::{NounParadigm, NounParadigmTable};
pub use verb::{VerbParadigm, VerbParadigmTable};

/// Name of the catch-all paradigm. A `0` paradigm marker in root data stands
/// for it, and noun lookups fall back to it.
pub const GENERIC_PARADIGM: &str = "generic";

/// Error type for paradigm file parsing. Line numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("line {line}: missing {separator:?} separator")]
    MissingSeparator { line: usize, separator: char },
    #[error("line {line}: malformed paradigm key {key:?}")]
    MalformedKey { line: usize, key: String },
    #[error("line {line}: expected {expected} segments, found {actual}")]
    SegmentCount {
        line: usize,
        expected: usize,
        actual: usize,
    },
    #[error("line {line}: segment {segment} has {actual} number fields, expected 2")]
    SubSegmentCount {
        line: usize,
        segment: usize,
        actual: usize,
    },
    #[error("line {line}: {source}")]
    Vocabulary {
        line: usize,
        #[source]
        source: pali_core::VocabularyError,
    },
}
