use std::io;

use crate::core::document::{Document, TypeSystem};
use crate::corpus::reader::DocumentReader;

pub struct VecReader {
    pub type_system: TypeSystem,
    pub documents: Vec<Document>,
    idx: usize,
}

impl VecReader {
    pub fn new(type_system: TypeSystem, documents: Vec<Document>) -> Self {
        Self {
            type_system,
            documents,
            idx: 0,
        }
    }
}

impl DocumentReader for VecReader {
    fn type_system(&self) -> &TypeSystem {
        &self.type_system
    }

    fn has_more_documents(&self) -> bool {
        self.idx < self.documents.len()
    }

    fn next_document(&mut self) -> Option<Document> {
        if !self.has_more_documents() {
            return None;
        }

        let doc = self.documents[self.idx].clone();
        self.idx += 1;
        Some(doc)
    }

    fn restart(&mut self) -> io::Result<()> {
        self.idx = 0;
        Ok(())
    }
}
