//! The manifest data model and its JSON form.
//!
//! These are the records the website reads. Field order in the structs is the
//! field order in the JSON, so reordering fields changes the output bytes.
//!
//! ```json
//! [
//!     {
//!         "name": "videos",
//!         "files": [
//!             { "type": "video", "name": "1-intro.mp4", "url": "file:///data/videos/1-intro.mp4" }
//!         ],
//!         "subfolders": []
//!     }
//! ]
//! ```

use serde::{Deserialize, Serialize};

/// What the website should do with a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Played inline (`.mp4`, `.webm`, `.avi`).
    Video,
    /// Opened as a page (`.html`, `.htm`).
    Link,
}

const VIDEO_SUFFIXES: &[&str] = &[".mp4", ".webm", ".avi"];
const LINK_SUFFIXES: &[&str] = &[".html", ".htm"];

impl EntryKind {
    /// Classify a file name by its suffix, ignoring case.
    ///
    /// Returns `None` for anything the manifest does not list.
    pub fn from_file_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        if VIDEO_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
            Some(EntryKind::Video)
        } else if LINK_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
            Some(EntryKind::Link)
        } else {
            None
        }
    }
}

/// A listed file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub name: String,
    pub url: String,
}

/// A directory with its listed files and non-empty subdirectories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderRecord {
    pub name: String,
    pub files: Vec<FileRecord>,
    pub subfolders: Vec<FolderRecord>,
}

impl FolderRecord {
    /// A folder with no content, as returned for unreadable directories.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty() && self.subfolders.is_empty()
    }

    /// Files in this folder and all folders below it.
    pub fn file_count(&self) -> usize {
        self.files.len()
            + self
                .subfolders
                .iter()
                .map(FolderRecord::file_count)
                .sum::<usize>()
    }

    /// Folders below this one, not counting itself.
    pub fn folder_count(&self) -> usize {
        self.subfolders
            .iter()
            .map(|f| 1 + f.folder_count())
            .sum()
    }
}

/// The top-level manifest: the root folder, or nothing if it had no content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tree {
    pub roots: Vec<FolderRecord>,
}

impl Tree {
    /// Wrap the root record, dropping it if it is empty.
    pub fn from_root(root: FolderRecord) -> Self {
        let roots = if root.is_empty() { vec![] } else { vec![root] };
        Self { roots }
    }

    pub fn root(&self) -> Option<&FolderRecord> {
        self.roots.first()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Serialize with `indent` spaces per level.
    pub fn to_json(&self, indent: usize) -> Result<String, serde_json::Error> {
        let pad = " ".repeat(indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(pad.as_bytes());
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        // serde_json only ever writes valid UTF-8.
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
