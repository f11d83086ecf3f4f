use crate::core::document::{Document, Span, TypeSystem};

pub fn token_type_system() -> TypeSystem {
    TypeSystem::with_kinds(["document", "token"])
}

/// "she walked home", tokenized, with gold past-tense labels.
pub fn labeled_sentence() -> Document {
    let mut doc = Document::new("labeled", "she walked home");
    doc.add_span(Span::new("token", 0, 3).with_gold("NONE"))
        .unwrap();
    doc.add_span(Span::new("token", 4, 10).with_gold("PAST"))
        .unwrap();
    doc.add_span(Span::new("token", 11, 15).with_gold("NONE"))
        .unwrap();
    doc
}

/// The same sentence and tokens without any gold labels.
pub fn unlabeled_sentence() -> Document {
    let mut doc = Document::new("unlabeled", "she walked home");
    doc.add_span(Span::new("token", 0, 3)).unwrap();
    doc.add_span(Span::new("token", 4, 10)).unwrap();
    doc.add_span(Span::new("token", 11, 15)).unwrap();
    doc
}
