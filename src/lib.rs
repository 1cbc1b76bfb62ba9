//! # media-manifest
//!
//! Walks a directory of videos and HTML pages and writes `content_data.json`,
//! a nested, sorted description of the tree that a static media browsing site
//! loads to build its navigation. Every file carries an absolute `file://` URL
//! so the site can open it directly from disk.
//!
//! # Pipeline
//!
//! ```text
//! root path  →  scan  →  Tree  →  content_data.json
//! (arg/prompt)   (walk, filter, sort, prune)
//! ```
//!
//! The scan is a pure function of the directory contents: the same tree
//! always produces the same bytes, so re-running simply overwrites the
//! manifest with identical content.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Depth-first walk producing the [`manifest::Tree`], skip policy for unreadable directories |
//! | [`manifest`] | `FileRecord` / `FolderRecord` / `Tree` and their JSON form |
//! | [`ordering`] | Numeric-aware sort policies for files and folders |
//! | [`url`] | `file://` base URL and percent-encoding of relative paths |
//! | [`config`] | Optional `media-manifest.toml` in the content root |
//! | [`root`] | Obtaining the root path from the command line or a prompt |
//! | [`output`] | CLI output formatting |
//!
//! # Ordering
//!
//! Numbers in names order entries the way people expect (`2` before `10`),
//! but files and folders look for the number in different places: a file
//! counts only a *leading* number, a folder counts the first number
//! *anywhere* in its name. See [`ordering`].

pub mod config;
pub mod manifest;
pub mod ordering;
pub mod output;
pub mod root;
pub mod scan;
pub mod url;

#[cfg(test)]
pub(crate) mod test_helpers;
