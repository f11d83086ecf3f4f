pub mod documents;

pub use documents::{labeled_sentence, token_type_system, unlabeled_sentence};
