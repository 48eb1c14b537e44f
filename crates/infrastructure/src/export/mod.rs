//! Export infrastructure.

mod members_csv;

pub use members_csv::{MEMBERS_CSV_HEADER, MembersCsvExporter};

use std::path::PathBuf;

use thiserror::Error;

/// Export error type.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The export file could not be written.
    #[error("unable to save {path}: {source}")]
    Io {
        /// Destination file.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}
