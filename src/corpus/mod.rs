pub mod reader;

mod directory;
mod synthetic;

pub use directory::LabeledDirectoryReader;
pub use reader::DocumentReader;
pub use synthetic::SyntheticReader;

/// Span kind used for whole-document annotations.
pub const DOCUMENT_KIND: &str = "document";

/// Span kind used for token annotations.
pub const TOKEN_KIND: &str = "token";
