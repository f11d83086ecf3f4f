use std::fmt;

/// Describes the kind of outcome a component produces or consumes.
///
/// Types form single-inheritance chains built at compile time from `static`
/// descriptors. Compatibility between an annotator and the classifier or
/// data writer plugged into it is decided by [`is_assignable_to`]: a
/// component producing a subtype can always stand in where the supertype is
/// expected, never the reverse.
///
/// [`is_assignable_to`]: OutcomeType::is_assignable_to
#[derive(Debug)]
pub struct OutcomeType {
    name: &'static str,
    supertype: Option<&'static OutcomeType>,
}

/// Plain string labels; the outcome type of every built-in backend.
pub static STRING: OutcomeType = OutcomeType::root("string");

/// Whole-number labels such as cluster ids.
pub static INTEGER: OutcomeType = OutcomeType::root("integer");

/// Binary yes/no labels.
pub static BOOLEAN: OutcomeType = OutcomeType::root("boolean");

impl OutcomeType {
    pub const fn root(name: &'static str) -> Self {
        Self {
            name,
            supertype: None,
        }
    }

    pub const fn extending(name: &'static str, supertype: &'static OutcomeType) -> Self {
        Self {
            name,
            supertype: Some(supertype),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn supertype(&self) -> Option<&'static OutcomeType> {
        self.supertype
    }

    /// Whether a value of this type can be used where `other` is expected.
    /// True when the types match or `other` appears anywhere in this type's
    /// supertype chain.
    pub fn is_assignable_to(&self, other: &OutcomeType) -> bool {
        let mut current = Some(self);
        while let Some(ty) = current {
            if ty.name == other.name {
                return true;
            }
            current = ty.supertype;
        }
        false
    }
}

impl PartialEq for OutcomeType {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for OutcomeType {}

impl fmt::Display for OutcomeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// One ranked prediction from [`Classifier::score`].
///
/// [`Classifier::score`]: crate::classifiers::Classifier::score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredOutcome {
    pub outcome: String,
    pub score: f64,
}

impl ScoredOutcome {
    pub fn new<O: Into<String>>(outcome: O, score: f64) -> Self {
        Self {
            outcome: outcome.into(),
            score,
        }
    }
}
