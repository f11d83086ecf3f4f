use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Collects every file under `root` recursively, in sorted order. A file
/// path yields itself; a path that does not exist yields nothing.
pub fn files_under(root: &Path) -> io::Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    collect(root, &mut out)?;
    out.sort();
    Ok(out)
}

pub fn files_with_suffix(root: &Path, suffix: &str) -> io::Result<Vec<PathBuf>> {
    let mut files = files_under(root)?;
    files.retain(|path| {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(suffix))
    });
    Ok(files)
}

pub fn files_named<'a, I>(root: &Path, names: I) -> io::Result<Vec<PathBuf>>
where
    I: IntoIterator<Item = &'a str>,
{
    let names: HashSet<&str> = names.into_iter().collect();
    let mut files = files_under(root)?;
    files.retain(|path| {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| names.contains(name))
    });
    Ok(files)
}

fn collect(path: &Path, out: &mut Vec<PathBuf>) -> io::Result<()> {
    if path.is_file() {
        out.push(path.to_path_buf());
        return Ok(());
    }
    if path.is_dir() {
        for entry in fs::read_dir(path)? {
            collect(&entry?.path(), out)?;
        }
    }
    Ok(())
}
