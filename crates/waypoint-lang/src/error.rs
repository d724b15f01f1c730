//! Catalog error types.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised while loading or persisting language files.
///
/// These never escape [`crate::MessageCatalog`] lookups; the catalog logs them
/// and degrades to the base layer.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Reading or writing a language file failed
    #[error("failed to access language file {path:?}: {source}")]
    Io {
        /// File or folder being accessed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A language file line could not be parsed
    #[error("{path:?} line {line}: {reason}")]
    Parse {
        /// File being parsed
        path: PathBuf,
        /// 1-based line number
        line: usize,
        /// What was wrong with the line
        reason: String,
    },
}

/// Placeholder substitution failed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatError {
    /// The template consumes a different number of arguments than supplied
    #[error("template expects {expected} arguments, got {got}")]
    ArgumentCount {
        /// Number of `%s` placeholders in the template
        expected: usize,
        /// Number of arguments supplied
        got: usize,
    },
}
