pub mod access;
pub mod classifier_annotator;
pub mod declaration;

pub use access::{AttributeAccess, LabelAccess, OutcomeAccess};
pub use classifier_annotator::ClassifierAnnotator;
pub use declaration::AnnotatorDeclaration;
