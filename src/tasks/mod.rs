mod pipeline;
mod train;

pub use pipeline::{Pipeline, PipelineSummary};
pub use train::train_model;
