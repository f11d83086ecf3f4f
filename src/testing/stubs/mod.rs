pub mod builders;
pub mod classifiers;
pub mod factories;
pub mod readers;

pub use builders::{NoTrainBuilder, no_train_builder};
pub use classifiers::{ConstClassifier, EchoClassifier, FailingClassifier};
pub use readers::VecReader;
