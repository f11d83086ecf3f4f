use std::io::{Error, ErrorKind};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::document::{Document, Span, TypeSystem};
use crate::corpus::TOKEN_KIND;
use crate::corpus::reader::DocumentReader;

/// Generates documents of random tokens drawn from labeled vocabularies.
///
/// Every token span carries the label of the vocabulary it was drawn from as
/// its gold outcome, so the corpus is fully labeled and, for a fixed seed,
/// fully reproducible.
#[derive(Debug)]
pub struct SyntheticReader {
    seed: u64,
    rng: StdRng,
    type_system: TypeSystem,
    vocabularies: Vec<(String, Vec<String>)>,
    words_per_document: usize,
    max_documents: Option<usize>,
    produced: usize,
}

impl SyntheticReader {
    pub fn new(
        vocabularies: Vec<(String, Vec<String>)>,
        words_per_document: usize,
        max_documents: Option<usize>,
        seed: u64,
    ) -> Result<Self, Error> {
        if vocabularies.is_empty() {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "At least one labeled vocabulary is required",
            ));
        }
        if vocabularies.iter().any(|(_, words)| words.is_empty()) {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "Vocabularies must not be empty",
            ));
        }
        if words_per_document == 0 {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "Words per document must be positive",
            ));
        }

        Ok(Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            type_system: TypeSystem::with_kinds([TOKEN_KIND]),
            vocabularies,
            words_per_document,
            max_documents,
            produced: 0,
        })
    }
}

impl DocumentReader for SyntheticReader {
    fn type_system(&self) -> &TypeSystem {
        &self.type_system
    }

    fn has_more_documents(&self) -> bool {
        self.max_documents.map_or(true, |max| self.produced < max)
    }

    fn next_document(&mut self) -> Option<Document> {
        if !self.has_more_documents() {
            return None;
        }

        let mut text = String::new();
        let mut tokens = Vec::with_capacity(self.words_per_document);
        for i in 0..self.words_per_document {
            let label_idx = self.rng.random_range(0..self.vocabularies.len());
            let (label, words) = &self.vocabularies[label_idx];
            let word = &words[self.rng.random_range(0..words.len())];

            if i > 0 {
                text.push(' ');
            }
            let begin = text.len();
            text.push_str(word);
            tokens.push((begin, text.len(), label.clone()));
        }

        let mut doc = Document::new(format!("synthetic-{}", self.produced), text);
        for (begin, end, label) in tokens {
            // word boundaries are always character boundaries
            doc.add_span(Span::new(TOKEN_KIND, begin, end).with_gold(label))
                .ok()?;
        }
        self.produced += 1;
        Some(doc)
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.produced = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabularies() -> Vec<(String, Vec<String>)> {
        vec![
            (
                "PAST".into(),
                vec!["walked".into(), "ran".into(), "spoke".into()],
            ),
            (
                "NONE".into(),
                vec!["walks".into(), "runs".into(), "speaks".into()],
            ),
        ]
    }

    fn outcomes(doc: &Document) -> Vec<(String, String)> {
        doc.spans()
            .iter()
            .map(|span| {
                (
                    doc.covered_text(span).to_string(),
                    span.gold.clone().unwrap(),
                )
            })
            .collect()
    }

    #[test]
    fn the_same_seed_reproduces_the_corpus() {
        let mut a = SyntheticReader::new(vocabularies(), 5, Some(3), 42).unwrap();
        let mut b = SyntheticReader::new(vocabularies(), 5, Some(3), 42).unwrap();

        while let Some(doc_a) = a.next_document() {
            let doc_b = b.next_document().unwrap();
            assert_eq!(doc_a.text(), doc_b.text());
            assert_eq!(outcomes(&doc_a), outcomes(&doc_b));
        }
        assert!(b.next_document().is_none());
    }

    #[test]
    fn restart_reseeds_the_generator() {
        let mut reader = SyntheticReader::new(vocabularies(), 4, Some(2), 7).unwrap();
        let first: Vec<String> = std::iter::from_fn(|| reader.next_document())
            .map(|doc| doc.text().to_string())
            .collect();
        assert_eq!(first.len(), 2);

        reader.restart().unwrap();
        let second: Vec<String> = std::iter::from_fn(|| reader.next_document())
            .map(|doc| doc.text().to_string())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn gold_labels_match_the_vocabulary_of_each_word() {
        let vocabularies = vocabularies();
        let mut reader = SyntheticReader::new(vocabularies.clone(), 6, Some(4), 999).unwrap();

        while let Some(doc) = reader.next_document() {
            for (word, label) in outcomes(&doc) {
                let (_, words) = vocabularies
                    .iter()
                    .find(|(name, _)| *name == label)
                    .unwrap();
                assert!(words.contains(&word), "{word} not in {label} vocabulary");
            }
        }
    }

    #[test]
    fn max_documents_bounds_the_corpus() {
        let mut reader = SyntheticReader::new(vocabularies(), 2, Some(2), 1).unwrap();
        assert!(reader.next_document().is_some());
        assert!(reader.next_document().is_some());
        assert!(!reader.has_more_documents());
        assert!(reader.next_document().is_none());
    }

    #[test]
    fn degenerate_configurations_are_rejected() {
        assert_eq!(
            SyntheticReader::new(Vec::new(), 3, None, 0).unwrap_err().kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            SyntheticReader::new(vec![("PAST".into(), Vec::new())], 3, None, 0)
                .unwrap_err()
                .kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            SyntheticReader::new(vocabularies(), 0, None, 0)
                .unwrap_err()
                .kind(),
            ErrorKind::InvalidInput
        );
    }
}
