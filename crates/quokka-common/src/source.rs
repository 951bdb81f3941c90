//! Loading HTML input for the CLI.
//!
//! The parser itself is a pure in-process transform and never touches the
//! filesystem; this module is the one place where I/O (and therefore
//! fallibility) lives.

use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Where a document's HTML text comes from.
#[derive(Debug, Clone)]
pub enum HtmlSource {
    /// Read the document from a file on disk.
    Path(PathBuf),
    /// Use an inline HTML string supplied on the command line.
    Inline(String),
}

/// A document that could not be loaded.
#[derive(Debug, Error)]
#[error("failed to read `{path}`")]
pub struct SourceError {
    /// The path that could not be read.
    pub path: PathBuf,
    /// The underlying I/O error.
    #[source]
    pub source: io::Error,
}

impl HtmlSource {
    /// Load the HTML text from this source.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if a [`HtmlSource::Path`] source cannot be
    /// read. Inline sources never fail.
    pub fn read(&self) -> Result<String, SourceError> {
        match self {
            Self::Path(path) => fs::read_to_string(path).map_err(|source| SourceError {
                path: path.clone(),
                source,
            }),
            Self::Inline(html) => Ok(html.clone()),
        }
    }
}
