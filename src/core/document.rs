use std::collections::{BTreeMap, BTreeSet};
use std::io::{Error, ErrorKind};

/// A labeled region of a document.
///
/// `begin`/`end` are byte offsets into the owning document's text and must
/// fall on character boundaries. The gold label is what a corpus annotated
/// the span with; the predicted label is what a classifier assigned. The two
/// are kept separate so classification never clobbers reference data.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub kind: String,
    pub begin: usize,
    pub end: usize,
    pub gold: Option<String>,
    pub predicted: Option<String>,
    pub attributes: BTreeMap<String, String>,
}

impl Span {
    pub fn new<K: Into<String>>(kind: K, begin: usize, end: usize) -> Self {
        Self {
            kind: kind.into(),
            begin,
            end,
            gold: None,
            predicted: None,
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_gold<L: Into<String>>(mut self, label: L) -> Self {
        self.gold = Some(label.into());
        self
    }

    pub fn with_attribute<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute<K: Into<String>, V: Into<String>>(&mut self, name: K, value: V) {
        self.attributes.insert(name.into(), value.into());
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }
}

/// One unit of text under analysis, with its annotated spans.
///
/// Spans are kept in insertion order; corpus readers are expected to add
/// them in document order.
#[derive(Debug, Clone)]
pub struct Document {
    name: String,
    text: String,
    spans: Vec<Span>,
}

impl Document {
    pub fn new<N: Into<String>, T: Into<String>>(name: N, text: T) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
            spans: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Adds a span after checking that its offsets are sane: `begin <= end`,
    /// within the text, and on character boundaries.
    pub fn add_span(&mut self, span: Span) -> Result<(), Error> {
        if span.begin > span.end || span.end > self.text.len() {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!(
                    "span {}..{} out of range for text of {} bytes",
                    span.begin,
                    span.end,
                    self.text.len()
                ),
            ));
        }
        if !self.text.is_char_boundary(span.begin) || !self.text.is_char_boundary(span.end) {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!("span {}..{} not on character boundaries", span.begin, span.end),
            ));
        }
        self.spans.push(span);
        Ok(())
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn spans_mut(&mut self) -> &mut [Span] {
        &mut self.spans
    }

    pub fn spans_of_kind<'a>(&'a self, kind: &'a str) -> impl Iterator<Item = &'a Span> {
        self.spans.iter().filter(move |s| s.kind == kind)
    }

    /// Indices of all spans of the given kind, in document order. Used where
    /// the caller needs to re-borrow spans mutably one at a time.
    pub fn span_indices_of_kind(&self, kind: &str) -> Vec<usize> {
        self.spans
            .iter()
            .enumerate()
            .filter(|(_, s)| s.kind == kind)
            .map(|(i, _)| i)
            .collect()
    }

    /// The text covered by a span. The span must have passed [`add_span`]
    /// validation against this document.
    ///
    /// [`add_span`]: Document::add_span
    pub fn covered_text(&self, span: &Span) -> &str {
        &self.text[span.begin..span.end]
    }
}

/// The set of span kinds a corpus declares.
///
/// Annotators check their target kind against this at initialization so a
/// misconfigured pipeline fails before any document is read. Nothing beyond
/// the kind names is modeled here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeSystem {
    kinds: BTreeSet<String>,
}

impl TypeSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kinds<I, K>(kinds: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            kinds: kinds.into_iter().map(Into::into).collect(),
        }
    }

    pub fn declare<K: Into<String>>(&mut self, kind: K) {
        self.kinds.insert(kind.into());
    }

    pub fn declares(&self, kind: &str) -> bool {
        self.kinds.contains(kind)
    }

    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.kinds.iter().map(String::as_str)
    }
}
