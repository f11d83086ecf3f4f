use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::Path;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAGIC: [u8; 4] = *b"STAG";
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("not a model archive (bad magic)")]
    BadMagic,

    #[error("unsupported archive version {0}")]
    UnsupportedVersion(u32),

    #[error("checksum mismatch in entry `{0}`")]
    ChecksumMismatch(String),

    #[error("archive has no entry named `{0}`")]
    MissingEntry(String),

    #[error("corrupt archive: {0}")]
    Corrupt(String),

    #[error("manifest error: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Archive metadata, stored as length-prefixed JSON in the header.
///
/// The backend key tells the loading side which builder understands the
/// entries; the outcome type is recorded for inspection. The manifest is
/// part of the header, not an entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub backend: String,
    pub outcome_type: String,
    pub created_at: String,
}

impl Manifest {
    pub fn new<B: Into<String>, O: Into<String>>(backend: B, outcome_type: O) -> Self {
        Self {
            backend: backend.into(),
            outcome_type: outcome_type.into(),
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

/// Writes a model archive: magic, version, manifest, then named entries.
///
/// All multi-byte values are little-endian. Each entry carries a CRC32 of
/// its data so corruption is caught at open time rather than when a model
/// misbehaves.
pub struct ArchiveWriter {
    out: BufWriter<File>,
    entries: usize,
}

impl ArchiveWriter {
    /// Creates the archive file and writes the header and manifest.
    pub fn create(path: &Path, manifest: &Manifest) -> Result<Self, ArchiveError> {
        let file = File::create(path)?;
        let mut out = BufWriter::new(file);
        out.write_all(&MAGIC)?;
        out.write_u32::<LittleEndian>(FORMAT_VERSION)?;
        let manifest_json = serde_json::to_vec(manifest)?;
        out.write_u32::<LittleEndian>(manifest_json.len() as u32)?;
        out.write_all(&manifest_json)?;
        Ok(Self { out, entries: 0 })
    }

    pub fn add_entry(&mut self, name: &str, data: &[u8]) -> Result<(), ArchiveError> {
        if name.is_empty() || name.len() > u16::MAX as usize {
            return Err(ArchiveError::Io(io::Error::new(
                ErrorKind::InvalidInput,
                format!("entry name must be between 1 and {} bytes", u16::MAX),
            )));
        }
        self.out.write_u16::<LittleEndian>(name.len() as u16)?;
        self.out.write_all(name.as_bytes())?;
        self.out.write_u64::<LittleEndian>(data.len() as u64)?;
        self.out.write_u32::<LittleEndian>(crc32fast::hash(data))?;
        self.out.write_all(data)?;
        self.entries += 1;
        Ok(())
    }

    /// Copies a file from disk into the archive under the given entry name.
    pub fn add_file(&mut self, name: &str, path: &Path) -> Result<(), ArchiveError> {
        let data = std::fs::read(path)?;
        self.add_entry(name, &data)
    }

    pub fn entry_count(&self) -> usize {
        self.entries
    }

    pub fn finish(mut self) -> Result<(), ArchiveError> {
        self.out.flush()?;
        Ok(())
    }
}

/// A fully loaded model archive.
///
/// Opening reads the whole file, verifying the magic, the format version,
/// and every entry checksum. Model files are small; holding the entries in
/// memory keeps the loading side free of IO.
#[derive(Debug)]
pub struct ModelArchive {
    manifest: Manifest,
    entries: HashMap<String, Vec<u8>>,
}

impl ModelArchive {
    pub fn open(path: &Path) -> Result<Self, ArchiveError> {
        let file = File::open(path)?;
        Self::read_from(BufReader::new(file))
    }

    pub fn read_from<R: Read>(mut input: R) -> Result<Self, ArchiveError> {
        let mut magic = [0u8; 4];
        input.read_exact(&mut magic)?;
        if magic != MAGIC {
            return Err(ArchiveError::BadMagic);
        }

        let version = input.read_u32::<LittleEndian>()?;
        if version != FORMAT_VERSION {
            return Err(ArchiveError::UnsupportedVersion(version));
        }

        let manifest_len = input.read_u32::<LittleEndian>()? as usize;
        let mut manifest_json = vec![0u8; manifest_len];
        input.read_exact(&mut manifest_json).map_err(truncated)?;
        let manifest: Manifest = serde_json::from_slice(&manifest_json)?;

        let mut entries = HashMap::new();
        // Only a clean EOF at an entry boundary ends the archive; running
        // out inside the length field is truncation like anywhere else.
        while let Some(name_len) = next_entry_name_len(&mut input)? {
            let mut name = vec![0u8; name_len as usize];
            input.read_exact(&mut name).map_err(truncated)?;
            let name = String::from_utf8(name)
                .map_err(|_| ArchiveError::Corrupt("entry name is not UTF-8".to_string()))?;
            let data_len = input.read_u64::<LittleEndian>().map_err(truncated)?;
            let checksum = input.read_u32::<LittleEndian>().map_err(truncated)?;
            let mut data = vec![0u8; data_len as usize];
            input.read_exact(&mut data).map_err(truncated)?;
            if crc32fast::hash(&data) != checksum {
                return Err(ArchiveError::ChecksumMismatch(name));
            }
            entries.insert(name, data);
        }

        Ok(Self { manifest, entries })
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn entry(&self, name: &str) -> Option<&[u8]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    pub fn require_entry(&self, name: &str) -> Result<&[u8], ArchiveError> {
        self.entry(name)
            .ok_or_else(|| ArchiveError::MissingEntry(name.to_string()))
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Entry names in sorted order, for deterministic inspection.
    pub fn entry_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Reads the next entry's name-length field, or `None` at a clean EOF.
///
/// The first byte is read on its own so that EOF before it (end of the
/// archive) can be told apart from EOF inside the field (a truncated file).
fn next_entry_name_len<R: Read>(input: &mut R) -> Result<Option<u16>, ArchiveError> {
    let mut len = [0u8; 2];
    loop {
        match input.read(&mut len[..1]) {
            Ok(0) => return Ok(None),
            Ok(_) => break,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(ArchiveError::Io(e)),
        }
    }
    input.read_exact(&mut len[1..]).map_err(truncated)?;
    Ok(Some(u16::from_le_bytes(len)))
}

fn truncated(e: io::Error) -> ArchiveError {
    if e.kind() == ErrorKind::UnexpectedEof {
        ArchiveError::Corrupt("truncated entry".to_string())
    } else {
        ArchiveError::Io(e)
    }
}
