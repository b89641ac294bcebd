//! Shared building blocks of the Pali morphology engine.
//!
//! # Architecture
//!
//! - [`enums`] -- Closed grammatical vocabularies (voice, tense/mood, case, ...)
//! - [`character`] -- Pali letter classes used by stem rules
//! - [`sandhi`] -- Phonological merge rules at stem/suffix boundaries
//! - [`ending`] -- The compact suffix encoding used by paradigm tables

pub mod character;
pub mod ending;
pub mod enums;
pub mod sandhi;

/// Error type for vocabulary codes and ending encodings found in data files.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VocabularyError {
    #[error("unknown tense/mood code: {0:?}")]
    UnknownTenseMood(String),
    #[error("unknown pada code: {0:?}")]
    UnknownPada(String),
    #[error("unknown gender code: {0:?}")]
    UnknownGender(String),
    #[error("unknown root group: {0:?}")]
    UnknownRootGroup(String),
    #[error("unknown voice: {0:?}")]
    UnknownVoice(String),
    #[error("unknown derivational suffix: {0:?}")]
    UnknownPaccaya(String),
    #[error("unknown case: {0:?}")]
    UnknownCase(String),
    #[error("malformed ending {0:?}: deletion prefix needs a single digit")]
    MalformedEnding(String),
}
