//! Pali verb conjugation and noun declension.
//!
//! Generates inflection tables from verb roots and nominal words, driven by
//! the paradigm tables of [`pali_tables`]. All reference data lives in a
//! [`GrammarData`] value that is built once and passed by reference; table
//! generation never fails, a lookup miss yields an empty cell.
//!
//! ```no_run
//! use pali_core::enums::{Number, Pada, Person, TenseMood, Voice};
//! use pali_grammar::{ConjugationOptions, GrammarData};
//!
//! let data = GrammarData::from_dir("/usr/share/pali/grammar")?;
//! let pac = data.root("pac").expect("pac is in the catalog");
//! let table = data.conjugation(pac, Voice::Active, TenseMood::Vat, &ConjugationOptions::default());
//! println!("{:?}", table[0].forms(Pada::Parassa, Person::Pathama, Number::Singular));
//! # Ok::<(), pali_grammar::GrammarError>(())
//! ```
//!
//! # Architecture
//!
//! - [`root`] -- Verb roots, stem specifications and derived stems
//! - [`word`] -- Nominal words, gender inference, numerals, pronouns, degrees
//! - [`suffix`] -- Verb-stem suffixation and the minimum-length filter
//! - [`conjugation`] -- Conjugation tables (union of all matching paradigms)
//! - [`declension`] -- Declension tables (first matching paradigm wins)
//! - [`data`] -- The loaded reference tables and data-file names

pub mod conjugation;
pub mod data;
pub mod declension;
pub mod error;
pub mod root;
pub mod suffix;
pub mod word;

pub use conjugation::{ConjugationOptions, StemConjugation, VerbCoordinates, compute_conjugation, conjugate};
pub use data::GrammarData;
pub use declension::{
    DeclensionTable, DerivedDeclension, DerivedForms, compute_declension,
    compute_numeral_declension, decline, decline_numeral, declension_table, derived_forms,
};
pub use error::GrammarError;
pub use root::{Root, RootCatalog};
pub use word::{NumeralCatalog, PronounCatalog, Word};
