use std::fs;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use crate::core::document::{Document, Span, TypeSystem};
use crate::corpus::DOCUMENT_KIND;
use crate::corpus::reader::DocumentReader;
use crate::utils::files::files_under;

/// Reads a directory tree in which every subdirectory names a gold label and
/// every file under it is one document.
///
/// Each document carries a single `document` span covering its whole text,
/// with the subdirectory name as the gold outcome. Labels and files are
/// visited in sorted order, so the corpus sequence is deterministic. Files
/// that cannot be read as UTF-8 text are skipped.
#[derive(Debug)]
pub struct LabeledDirectoryReader {
    type_system: TypeSystem,
    entries: Vec<(String, PathBuf)>,
    idx: usize,
}

impl LabeledDirectoryReader {
    pub fn new(root: &Path) -> Result<Self, Error> {
        if !root.is_dir() {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                format!("Not a directory: {}", root.display()),
            ));
        }

        let mut label_dirs: Vec<PathBuf> = fs::read_dir(root)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect();
        label_dirs.sort();

        let mut entries = Vec::new();
        for label_dir in label_dirs {
            let Some(label) = label_dir.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            for file in files_under(&label_dir)? {
                entries.push((label.to_string(), file));
            }
        }

        Ok(Self {
            type_system: TypeSystem::with_kinds([DOCUMENT_KIND]),
            entries,
            idx: 0,
        })
    }

    /// Number of files found at construction, readable or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DocumentReader for LabeledDirectoryReader {
    fn type_system(&self) -> &TypeSystem {
        &self.type_system
    }

    fn has_more_documents(&self) -> bool {
        self.idx < self.entries.len()
    }

    fn next_document(&mut self) -> Option<Document> {
        while self.idx < self.entries.len() {
            let (label, path) = &self.entries[self.idx];
            self.idx += 1;

            let Ok(text) = fs::read_to_string(path) else {
                continue;
            };
            let name = match path.file_name().and_then(|file| file.to_str()) {
                Some(file) => format!("{label}/{file}"),
                None => label.clone(),
            };

            let mut doc = Document::new(name, text);
            let end = doc.text().len();
            let span = Span::new(DOCUMENT_KIND, 0, end).with_gold(label);
            // a whole-text span always satisfies the boundary checks
            doc.add_span(span).ok()?;
            return Some(doc);
        }
        None
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.idx = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write(root: &Path, label: &str, file: &str, text: &str) {
        let dir = root.join(label);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(file), text).unwrap();
    }

    #[test]
    fn reads_labels_and_files_in_sorted_order() {
        let dir = tempdir().unwrap();
        write(dir.path(), "past", "b.txt", "she walked");
        write(dir.path(), "past", "a.txt", "he ran");
        write(dir.path(), "none", "only.txt", "she walks");

        let mut reader = LabeledDirectoryReader::new(dir.path()).unwrap();
        assert_eq!(reader.len(), 3);
        assert!(reader.type_system().declares(DOCUMENT_KIND));

        let mut seen = Vec::new();
        while let Some(doc) = reader.next_document() {
            let span = &doc.spans()[0];
            seen.push((
                doc.name().to_string(),
                span.gold.clone().unwrap(),
                doc.covered_text(span).to_string(),
            ));
        }
        assert_eq!(
            seen,
            vec![
                ("none/only.txt".into(), "none".into(), "she walks".into()),
                ("past/a.txt".into(), "past".into(), "he ran".into()),
                ("past/b.txt".into(), "past".into(), "she walked".into()),
            ]
        );
        assert!(!reader.has_more_documents());
    }

    #[test]
    fn files_outside_a_label_directory_are_ignored() {
        let dir = tempdir().unwrap();
        write(dir.path(), "none", "a.txt", "text");
        fs::write(dir.path().join("stray.txt"), "unlabeled").unwrap();

        let reader = LabeledDirectoryReader::new(dir.path()).unwrap();
        assert_eq!(reader.len(), 1);
    }

    #[test]
    fn unreadable_files_are_skipped() {
        let dir = tempdir().unwrap();
        write(dir.path(), "none", "a.txt", "good");
        fs::write(dir.path().join("none").join("bad.txt"), [0xFF, 0xFE, 0xFD]).unwrap();

        let mut reader = LabeledDirectoryReader::new(dir.path()).unwrap();
        assert_eq!(reader.len(), 2);
        let doc = reader.next_document().unwrap();
        assert_eq!(doc.name(), "none/a.txt");
        assert!(reader.next_document().is_none());
    }

    #[test]
    fn restart_rewinds_to_the_first_file() {
        let dir = tempdir().unwrap();
        write(dir.path(), "past", "a.txt", "he ran");

        let mut reader = LabeledDirectoryReader::new(dir.path()).unwrap();
        assert!(reader.next_document().is_some());
        assert!(!reader.has_more_documents());

        reader.restart().unwrap();
        assert!(reader.has_more_documents());
        assert_eq!(reader.next_document().unwrap().name(), "past/a.txt");
    }

    #[test]
    fn a_plain_file_is_rejected() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("corpus.txt");
        fs::write(&file, "not a directory").unwrap();

        let err = LabeledDirectoryReader::new(&file).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
