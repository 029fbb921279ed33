//!
//! Output writing error.
//!

use std::path::PathBuf;

///
/// Output writing error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document backend rejected an operation.
    #[error("Document rendering: {0}")]
    Document(#[from] rust_xlsxwriter::XlsxError),
    /// The benchmark cannot be serialized.
    #[error("Benchmark serialization: {0}")]
    Serialization(#[from] serde_json::Error),
    /// A row or a chart was added before the table was opened.
    #[error("The results table is not open")]
    TableNotOpen,
    /// A cell outside of the written rows was addressed.
    #[error("Cell ({row}, {column}) is outside of the results table")]
    OutOfTable {
        /// The 0-based sheet row.
        row: u32,
        /// The 0-based sheet column.
        column: u16,
    },
    /// The destination cannot be written.
    #[error("Output file {path:?} writing: {error}")]
    Write {
        /// The underlying IO error.
        error: std::io::Error,
        /// The output path.
        path: PathBuf,
    },
}
