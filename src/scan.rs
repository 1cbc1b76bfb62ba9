//! Directory traversal and manifest tree construction.
//!
//! Walks the content root depth-first and turns every directory into a
//! [`FolderRecord`]:
//!
//! ```text
//! videos/                      →  "videos"
//! ├── 2.mp4                        files: 2.mp4, 10.mp4, intro.html
//! ├── 10.mp4
//! ├── intro.html
//! ├── notes.txt                    (not listed)
//! ├── Season 10/               →    subfolders: "Season 2", "Season 10", "Extras"
//! │   └── 1.mp4
//! ├── Season 2/
//! │   └── 1.webm
//! ├── Extras/
//! │   └── trailer.avi
//! └── scratch/                     (pruned: nothing listable inside)
//!     └── todo.txt
//! ```
//!
//! ## Listing Rules
//!
//! - Only `.mp4`, `.webm`, `.avi` (video) and `.html`, `.htm` (link) files are
//!   listed; suffixes match case-insensitively.
//! - Entries that are neither regular files nor directories after following
//!   symlinks are ignored.
//! - Folders with nothing listable anywhere below them are pruned.
//! - Files and folders are ordered by [`crate::ordering`].
//!
//! ## Failure Policy
//!
//! Only a missing root fails the scan. A directory that cannot be listed
//! (permission denied, removed mid-scan) is treated as empty, reported as a
//! [`ScanEvent::Skipped`], and pruned like any other empty folder. Its
//! siblings are scanned normally.

use crate::manifest::{EntryKind, FileRecord, FolderRecord, Tree};
use crate::ordering::{compare_files, compare_folders};
use crate::url;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

/// Name given to the root folder when its path has no final segment.
pub const ROOT_FALLBACK_NAME: &str = "Root Directory";

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("The directory '{}' does not exist", .0.display())]
    MissingRoot(PathBuf),
    #[error("'{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Progress and diagnostics emitted while scanning.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanEvent {
    /// The URL prefix every file URL starts with.
    BaseUrl { url: String },
    /// A directory that could not be listed and was treated as empty.
    Skipped { path: PathBuf, reason: SkipReason },
}

#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    PermissionDenied,
    NotFound,
    Other(String),
}

impl From<&io::Error> for SkipReason {
    fn from(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => SkipReason::PermissionDenied,
            io::ErrorKind::NotFound => SkipReason::NotFound,
            _ => SkipReason::Other(err.to_string()),
        }
    }
}

fn emit(events: Option<&Sender<ScanEvent>>, event: ScanEvent) {
    if let Some(tx) = events {
        // A dropped receiver only means nobody is printing diagnostics.
        let _ = tx.send(event);
    }
}

/// Scan `root` into a manifest tree.
///
/// Relative roots are resolved against the working directory. Fails only if
/// the root is missing or not a directory.
pub fn scan(root: &Path, events: Option<&Sender<ScanEvent>>) -> Result<Tree, ScanError> {
    let root = absolute_root(root)?;
    if !root.exists() {
        return Err(ScanError::MissingRoot(root));
    }
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root));
    }

    let base_url = url::base_url(&root);
    emit(
        events,
        ScanEvent::BaseUrl {
            url: base_url.clone(),
        },
    );

    let folder = build_folder(&root, &root, &base_url, events);
    Ok(Tree::from_root(folder))
}

/// Make `root` absolute and resolve `.` and `..` lexically, without touching
/// symlinks, so `videos/./x/..` is named and addressed as `videos`.
pub fn absolute_root(root: &Path) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(root)?;
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    Ok(normalized)
}

/// Display name for the folder at `current`.
///
/// The root is named after the last segment of its path, with
/// [`ROOT_FALLBACK_NAME`] for paths like `/` that have none.
pub fn folder_name(current: &Path, root: &Path) -> String {
    match current.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None if current == root => ROOT_FALLBACK_NAME.to_string(),
        None => current.to_string_lossy().into_owned(),
    }
}

/// Build the record for `current` and everything below it.
///
/// Never fails: an unreadable directory yields an empty record.
pub fn build_folder(
    current: &Path,
    root: &Path,
    base_url: &str,
    events: Option<&Sender<ScanEvent>>,
) -> FolderRecord {
    build_folder_with(current, root, base_url, events, &list_entries)
}

/// Directory listing used by the walk; tests swap in failing listers.
type Lister<'a> = &'a dyn Fn(&Path) -> io::Result<Entries>;

fn build_folder_with(
    current: &Path,
    root: &Path,
    base_url: &str,
    events: Option<&Sender<ScanEvent>>,
    list: Lister<'_>,
) -> FolderRecord {
    let mut folder = FolderRecord::empty(folder_name(current, root));

    let entries = match list(current) {
        Ok(entries) => entries,
        Err(err) => {
            emit(
                events,
                ScanEvent::Skipped {
                    path: current.to_path_buf(),
                    reason: SkipReason::from(&err),
                },
            );
            return folder;
        }
    };

    folder.files = entries
        .files
        .iter()
        .filter_map(|(name, path)| {
            let kind = EntryKind::from_file_name(name)?;
            let url = url::file_url(base_url, root, path)?;
            Some(FileRecord {
                kind,
                name: name.clone(),
                url,
            })
        })
        .collect();
    folder.files.sort_by(|a, b| compare_files(&a.name, &b.name));

    let mut subdirs = entries.dirs;
    subdirs.sort_by_cached_key(|(name, _)| name.to_lowercase());

    folder.subfolders = subdirs
        .iter()
        .map(|(_, path)| build_folder_with(path, root, base_url, events, list))
        .filter(|child| !child.is_empty())
        .collect();
    folder.subfolders.sort_by(compare_folders);

    folder
}

/// Directory contents split by kind, as `(name, path)` pairs.
#[derive(Debug, Default)]
struct Entries {
    files: Vec<(String, PathBuf)>,
    dirs: Vec<(String, PathBuf)>,
}

/// List `dir`, one metadata lookup per entry.
///
/// Fails only if the directory itself cannot be read. Entries whose metadata
/// cannot be read, and entries that are neither files nor directories, are
/// left out.
fn list_entries(dir: &Path) -> io::Result<Entries> {
    let mut entries = Entries::default();
    for entry in fs::read_dir(dir)?.filter_map(|e| e.ok()) {
        let path = entry.path();
        let Ok(meta) = fs::metadata(&path) else {
            continue;
        };
        let name = entry.file_name().to_string_lossy().into_owned();
        if meta.is_file() {
            entries.files.push((name, path));
        } else if meta.is_dir() {
            entries.dirs.push((name, path));
        }
    }
    Ok(entries)
}
