use crate::core::document::{Document, Span};
use crate::core::feature::Feature;
use crate::error::ExtractError;
use crate::extractors::extractor::FeatureExtractor;

/// A character slice of the span text, for prefix and suffix features.
///
/// Indices are character offsets into the covered text; negative values
/// count back from its end, so `TextSliceExtractor::new(-2)` is a two-letter
/// suffix. A negative index reaching past the start clamps to the start
/// (short words yield their whole text). A positive begin past the end of
/// the text is an error.
#[derive(Debug, Clone)]
pub struct TextSliceExtractor {
    begin: isize,
    end: Option<isize>,
}

impl TextSliceExtractor {
    /// From `begin` to the end of the span text.
    pub fn new(begin: isize) -> Self {
        Self { begin, end: None }
    }

    pub fn bounded(begin: isize, end: isize) -> Self {
        Self {
            begin,
            end: Some(end),
        }
    }

    fn feature_name(&self) -> String {
        match self.end {
            None => format!("slice({},end)", self.begin),
            Some(end) => format!("slice({},{})", self.begin, end),
        }
    }

    fn resolve(index: isize, len: usize) -> usize {
        if index >= 0 {
            index as usize
        } else {
            len.saturating_sub(index.unsigned_abs())
        }
    }
}

impl FeatureExtractor for TextSliceExtractor {
    fn extract(&self, document: &Document, span: &Span) -> Result<Vec<Feature>, ExtractError> {
        let chars: Vec<char> = document.covered_text(span).chars().collect();
        let len = chars.len();

        let begin = Self::resolve(self.begin, len);
        if begin > len {
            return Err(ExtractError::SliceOutOfRange {
                slice: self.feature_name(),
                len,
            });
        }
        let end = match self.end {
            None => len,
            Some(e) => Self::resolve(e, len).min(len),
        };
        if begin > end {
            return Err(ExtractError::InvertedSlice {
                slice: self.feature_name(),
            });
        }

        let text: String = chars[begin..end].iter().collect();
        Ok(vec![Feature::new(self.feature_name(), text)])
    }
}
