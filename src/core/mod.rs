pub mod document;
pub mod feature;
pub mod instance;
pub mod outcome;

pub use document::{Document, Span, TypeSystem};
pub use feature::{Feature, FeatureValue};
pub use instance::Instance;
pub use outcome::{OutcomeType, ScoredOutcome};
