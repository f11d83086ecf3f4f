use std::io::Error;

use crate::core::document::{Document, TypeSystem};

/// Pull-based interface for corpora that produce `Document`s.
///
/// Implementations may represent finite collections (e.g., directories) or
/// unbounded generators. Every span kind a reader emits must be declared by
/// the same, immutable [`TypeSystem`] for the lifetime of the reader.
pub trait DocumentReader {
    /// Returns the type system declaring every span kind this reader emits.
    fn type_system(&self) -> &TypeSystem;

    /// Indicates whether the reader *may* produce more documents.
    ///
    /// Finite corpora should return `false` once exhausted. This call should
    /// be cheap and side effect free. If it returns `false`, a subsequent
    /// call to [`next_document`] must return `None`.
    ///
    /// [`next_document`]: DocumentReader::next_document
    fn has_more_documents(&self) -> bool;

    /// Produces the next document, or `None` if the corpus is exhausted.
    ///
    /// Sources that can contain unreadable entries may skip them and
    /// continue, or end the corpus early by returning `None`.
    fn next_document(&mut self) -> Option<Document>;

    /// Resets the reader to its initial state.
    ///
    /// Directory-backed readers rewind to their first file; generators
    /// re-seed their RNG so the same documents come out again.
    fn restart(&mut self) -> Result<(), Error>;
}
