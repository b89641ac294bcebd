// Error type for grammar data loading.

use std::path::PathBuf;

use pali_tables::TableError;

/// Errors raised while assembling [`GrammarData`](crate::GrammarData).
///
/// Only loading can fail. Table generation treats every lookup miss as an
/// empty result.
#[derive(Debug, thiserror::Error)]
pub enum GrammarError {
    /// A paradigm file could not be parsed.
    #[error("paradigm table: {0}")]
    Table(#[from] TableError),

    /// A catalog line (roots, glosses, pronouns, numerals) is malformed.
    #[error("{file} line {line}: {reason}")]
    Catalog {
        file: &'static str,
        line: usize,
        reason: String,
    },

    /// A root's stem specification is malformed.
    #[error("root {root:?}: {reason}")]
    StemSpec { root: String, reason: String },

    /// A data file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
