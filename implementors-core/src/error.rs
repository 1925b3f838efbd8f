//! Error types for implementor tables.
//!
//! Publishing a table never fails. The errors here come from the surfaces
//! around it:
//!
//! - [`RegistryError`] - Top-level error type
//! - [`TableError`] - Errors while assembling a table
//! - [`ScriptError`] - Errors while reading or writing the script form

use thiserror::Error;

/// Top-level error type for all registry operations.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// A table could not be assembled.
    #[error("table error: {0}")]
    Table(#[from] TableError),

    /// A script could not be read or written.
    #[error("script error: {0}")]
    Script(#[from] ScriptError),
}

/// Errors that can occur while assembling a table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The same library was added twice.
    #[error("library already present in table: {0}")]
    DuplicateLibrary(String),

    /// A library was added with an empty name.
    #[error("library name must not be empty")]
    EmptyLibraryName,
}

/// Errors that can occur while handling the script form of a table.
#[derive(Error, Debug)]
pub enum ScriptError {
    /// The script does not open with the table declaration.
    #[error("script does not start with the implementors prelude")]
    MissingPrelude,

    /// The script does not close with the hand-off statement.
    #[error("script does not end with the registration epilogue")]
    MissingEpilogue,

    /// A table line could not be understood.
    #[error("malformed entry on line {line}: {reason}")]
    MalformedEntry {
        /// One-based line number within the script.
        line: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// The descriptor array for a library is not valid JSON.
    #[error("invalid descriptor array for library `{library}`")]
    Json {
        /// Library whose entry failed to decode.
        library: String,
        /// Underlying decoder error.
        #[source]
        source: serde_json::Error,
    },

    /// The table itself was inconsistent (e.g. a library listed twice).
    #[error(transparent)]
    Table(#[from] TableError),

    /// A path segment would leave the script directory.
    #[error("invalid script path segment: {0:?}")]
    InvalidPathSegment(String),

    /// Reading or writing the script failed.
    #[error("script i/o failed")]
    Io(#[from] std::io::Error),
}
