mod covered_text;
mod extractor;
mod preceding;
mod span_length;
mod text_slice;

pub use covered_text::CoveredTextExtractor;
pub use extractor::FeatureExtractor;
pub use preceding::PrecedingTextExtractor;
pub use span_length::SpanLengthExtractor;
pub use text_slice::TextSliceExtractor;
