use crate::config::VCS_DIR_SEGMENT;
use crate::error::Result;
use ignore::{DirEntry, WalkBuilder};
use std::fs;
use std::io::ErrorKind;
use std::path::{MAIN_SEPARATOR, Path, PathBuf};

/// Recursive directory walk.
///
/// Returns every file at or below `root` as an absolute path, in the order
/// the filesystem enumerates them. Symbolic links are reported in place of
/// their target (dangling ones included) unless they point at a directory;
/// linked directories are never descended into. Files inside a
/// version-control metadata directory are left out. Hidden files and ignore
/// files get no special treatment.
///
/// A root that does not exist, or is not a directory, yields an empty list.
///
/// # Errors
/// Any traversal error (unreadable root or subdirectory, I/O failure while
/// listing) aborts the walk and is returned to the caller.
pub fn walk(root: &Path) -> Result<Vec<PathBuf>> {
    match fs::metadata(root) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            log::debug!("root {} is not a directory, nothing to scan", root.display());
            return Ok(Vec::new());
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("root {} does not exist, nothing to scan", root.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e.into()),
    }

    let root = root.canonicalize()?;
    log::info!("scanning {}", root.display());

    let mut builder = WalkBuilder::new(&root);
    builder.standard_filters(false).follow_links(false);

    // Prune metadata directories so their contents are never listed.
    builder.filter_entry(|entry| {
        if entry.file_type().is_some_and(|ft| ft.is_dir()) && is_vcs_dir(entry.path()) {
            log::debug!("skipping {}", entry.path().display());
            return false;
        }
        true
    });

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        if !is_file_like(&entry) {
            continue;
        }

        let path = entry.into_path();
        // The root itself is not subject to filter_entry.
        if path.parent().is_some_and(is_vcs_dir) {
            continue;
        }
        files.push(path);
    }

    log::debug!("walk found {} files", files.len());
    Ok(files)
}

/// Regular files, plus symlinks that do not resolve to a directory.
fn is_file_like(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        Some(ft) if ft.is_symlink() => {
            // Dangling links stay in; counting them reports the failure.
            !fs::metadata(entry.path()).is_ok_and(|meta| meta.is_dir())
        }
        _ => false,
    }
}

/// Whether `dir`, read as a directory path with a trailing separator,
/// contains the metadata segment followed by a separator.
///
/// Only the directory path is inspected: a *file* named `.git` sitting in an
/// ordinary directory does not match.
#[must_use]
pub fn is_vcs_dir(dir: &Path) -> bool {
    let needle = format!("{VCS_DIR_SEGMENT}{MAIN_SEPARATOR}");
    let mut haystack = dir.to_string_lossy().into_owned();
    haystack.push(MAIN_SEPARATOR);
    haystack.contains(&needle)
}
