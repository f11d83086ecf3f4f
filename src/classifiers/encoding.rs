use std::collections::HashMap;
use std::io::{self, Error, ErrorKind};
use std::path::Path;

/// Interned feature names for backends that put numeric ids in their
/// training data instead of full names. Ids are dense and assigned in
/// first-seen order, so the same extraction sequence always produces the
/// same lookup.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FeatureLookup {
    ids: HashMap<String, u32>,
    names: Vec<String>,
}

impl FeatureLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `name`, assigning the next free one on first use.
    pub fn intern(&mut self, name: &str) -> u32 {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = self.names.len() as u32;
        self.ids.insert(name.to_string(), id);
        self.names.push(name.to_string());
        id
    }

    pub fn id(&self, name: &str) -> Option<u32> {
        self.ids.get(name).copied()
    }

    pub fn name(&self, id: u32) -> Option<&str> {
        self.names.get(id as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// One `name<TAB>id` line per feature, in id order.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let mut out = String::new();
        for (id, name) in self.names.iter().enumerate() {
            out.push_str(name);
            out.push('\t');
            out.push_str(&id.to_string());
            out.push('\n');
        }
        std::fs::write(path, out)
    }

    pub fn load(path: &Path) -> io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    pub fn parse(text: &str) -> io::Result<Self> {
        let mut lookup = Self::new();
        for (lineno, line) in text.lines().enumerate() {
            if line.is_empty() {
                continue;
            }
            let (name, id) = line.split_once('\t').ok_or_else(|| {
                Error::new(
                    ErrorKind::InvalidData,
                    format!("lookup line {} has no tab separator", lineno + 1),
                )
            })?;
            let id: u32 = id.parse().map_err(|_| {
                Error::new(
                    ErrorKind::InvalidData,
                    format!("lookup line {} has a non-numeric id", lineno + 1),
                )
            })?;
            if id as usize != lookup.names.len() {
                return Err(Error::new(
                    ErrorKind::InvalidData,
                    format!("lookup ids must be dense and ordered, got {id} on line {}", lineno + 1),
                ));
            }
            lookup.intern(name);
        }
        Ok(lookup)
    }
}
