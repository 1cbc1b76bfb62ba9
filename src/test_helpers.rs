//! Shared test utilities.
//!
//! Fixture setup plus lookup helpers and tree assertions for
//! [`FolderRecord`] trees.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let tree = scan(tmp.path(), None).unwrap();
//!
//! let season = find_folder(tree.root().unwrap(), "Season 10");
//! assert_eq!(file_names(season), vec!["1 Pilot.mp4", "2-reunion.webm"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::manifest::{FileRecord, FolderRecord};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/library/` to a temp directory and return it.
///
/// Tests get an isolated copy they can mutate without affecting other tests
/// or the source fixtures.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/library");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

// =========================================================================
// Lookups: panic with a clear message on miss
// =========================================================================

/// Find a direct subfolder by name. Panics if not found.
pub fn find_folder<'a>(folder: &'a FolderRecord, name: &str) -> &'a FolderRecord {
    folder
        .subfolders
        .iter()
        .find(|f| f.name == name)
        .unwrap_or_else(|| {
            panic!(
                "folder '{name}' not found in '{}'. Available: {:?}",
                folder.name,
                subfolder_names(folder)
            )
        })
}

/// Find a direct file by name. Panics if not found.
pub fn find_file<'a>(folder: &'a FolderRecord, name: &str) -> &'a FileRecord {
    folder
        .files
        .iter()
        .find(|f| f.name == name)
        .unwrap_or_else(|| {
            panic!(
                "file '{name}' not found in '{}'. Available: {:?}",
                folder.name,
                file_names(folder)
            )
        })
}

// =========================================================================
// Bulk extractors
// =========================================================================

/// File names in manifest order.
pub fn file_names(folder: &FolderRecord) -> Vec<&str> {
    folder.files.iter().map(|f| f.name.as_str()).collect()
}

/// Subfolder names in manifest order.
pub fn subfolder_names(folder: &FolderRecord) -> Vec<&str> {
    folder.subfolders.iter().map(|f| f.name.as_str()).collect()
}

/// Every file name in the tree, depth-first.
pub fn all_file_names(folder: &FolderRecord) -> Vec<String> {
    let mut names: Vec<String> = folder.files.iter().map(|f| f.name.clone()).collect();
    for sub in &folder.subfolders {
        names.extend(all_file_names(sub));
    }
    names
}

/// Every file URL in the tree, depth-first.
pub fn all_urls(folder: &FolderRecord) -> Vec<String> {
    let mut urls: Vec<String> = folder.files.iter().map(|f| f.url.clone()).collect();
    for sub in &folder.subfolders {
        urls.extend(all_urls(sub));
    }
    urls
}

// =========================================================================
// Tree assertions
// =========================================================================

/// Assert no folder anywhere below `folder` is empty.
pub fn assert_no_empty_subfolders(folder: &FolderRecord) {
    for sub in &folder.subfolders {
        assert!(
            !sub.is_empty(),
            "empty folder '{}' kept under '{}'",
            sub.name,
            folder.name
        );
        assert_no_empty_subfolders(sub);
    }
}
