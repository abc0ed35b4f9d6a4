//! Errors raised while turning raw rows into a [`Dataset`](crate::Dataset).
//!
//! Tree induction, prediction and evaluation never fail;
//! every fallible step happens before the first tree is grown.
use std::io;
use std::path::PathBuf;


/// Result type used by the ingestion side of this crate.
pub type Result<T> = std::result::Result<T, Id3Error>;


/// Error taxonomy for reading and aggregating labelled samples.
#[derive(Debug, thiserror::Error)]
pub enum Id3Error {
    /// The input file is missing or cannot be opened.
    #[error("failed to open `{path}`: {source}")]
    FileAccess {
        /// Path given by the caller.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// Reading failed after the file was opened.
    #[error("failed to read the input: {0}")]
    Io(#[from] io::Error),

    /// The input has no header row or no data rows.
    #[error("the input has no data rows")]
    EmptyDataset,

    /// A data row or a recorded key does not have the same column count
    /// as the header.
    #[error(
        "row {row} has {found} columns, \
        but the header declares {expected}"
    )]
    SchemaMismatch {
        /// 1-based line of the row in the input, the header being line 1.
        /// For [`Dataset::record`](crate::Dataset::record), the position
        /// the row would have taken in the table.
        row: usize,
        /// Column count of the header.
        expected: usize,
        /// Column count of the offending row.
        found: usize,
    },

    /// The last token of a data row is neither `yes` nor `no`.
    #[error("row {row} has label `{label}`, expected `yes` or `no`")]
    InvalidLabel {
        /// 1-based line of the row in the input.
        row: usize,
        /// The token found in the label column.
        label: String,
    },

    /// The header names the same attribute twice.
    #[error("attribute `{name}` appears more than once in the header")]
    DuplicateAttribute {
        /// Repeated attribute name.
        name: String,
    },
}
