//! CLI output formatting.
//!
//! Each display has a `format_*` function returning lines, kept free of I/O so
//! it can be tested, and a `print_*` wrapper that writes them to stdout.
//!
//! # Scan diagnostics
//!
//! ```text
//! Generating URLs with base: file:///data/videos/
//! Warning: Permission denied to access '/data/videos/Locked'. Skipping this directory.
//! ```
//!
//! # Tree (`check`)
//!
//! ```text
//! videos (6 files, 3 folders)
//!     001 2.mp4 [video]
//!     002 intro.html [link]
//!     001 Season 2/
//!         001 1.webm [video]
//! ```
//!
//! Files and folders are numbered separately, in manifest order.

use crate::config::{CONFIG_FILE_NAME, ConfigError};
use crate::manifest::{EntryKind, FolderRecord, Tree};
use crate::scan::{ScanEvent, SkipReason};
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, one: &str, many: &str) -> String {
    format!("{} {}", n, if n == 1 { one } else { many })
}

fn kind_label(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Video => "video",
        EntryKind::Link => "link",
    }
}

// ============================================================================
// Scan events
// ============================================================================

pub fn format_scan_event(event: &ScanEvent) -> Vec<String> {
    match event {
        ScanEvent::BaseUrl { url } => vec![format!("Generating URLs with base: {}", url)],
        ScanEvent::Skipped { path, reason } => {
            let line = match reason {
                SkipReason::PermissionDenied => format!(
                    "Warning: Permission denied to access '{}'. Skipping this directory.",
                    path.display()
                ),
                SkipReason::NotFound => {
                    format!("Warning: Directory '{}' not found. Skipping.", path.display())
                }
                SkipReason::Other(msg) => format!(
                    "Warning: Could not read '{}' ({}). Skipping.",
                    path.display(),
                    msg
                ),
            };
            vec![line]
        }
    }
}

// ============================================================================
// Config
// ============================================================================

/// Warning shown when the config file exists but cannot be used.
pub fn format_config_warning(err: &ConfigError) -> Vec<String> {
    vec![format!(
        "Warning: Ignoring {} ({}). Using default settings.",
        CONFIG_FILE_NAME, err
    )]
}

// ============================================================================
// Tree display
// ============================================================================

/// Format the manifest tree for the `check` command.
pub fn format_tree(tree: &Tree) -> Vec<String> {
    let Some(root) = tree.root() else {
        return vec!["(no video or link files found)".to_string()];
    };
    let mut lines = vec![format!(
        "{} ({}, {})",
        root.name,
        plural(root.file_count(), "file", "files"),
        plural(root.folder_count(), "folder", "folders"),
    )];
    format_folder_body(root, 1, &mut lines);
    lines
}

fn format_folder_body(folder: &FolderRecord, depth: usize, lines: &mut Vec<String>) {
    let pad = indent(depth);
    for (i, file) in folder.files.iter().enumerate() {
        lines.push(format!(
            "{}{} {} [{}]",
            pad,
            format_index(i + 1),
            file.name,
            kind_label(file.kind)
        ));
    }
    for (i, sub) in folder.subfolders.iter().enumerate() {
        lines.push(format!("{}{} {}/", pad, format_index(i + 1), sub.name));
        format_folder_body(sub, depth + 1, lines);
    }
}

// ============================================================================
// Summary
// ============================================================================

/// Final confirmation after the manifest is written.
pub fn format_write_summary(tree: &Tree, output: &Path) -> Vec<String> {
    let counts = match tree.root() {
        Some(root) => format!(
            "{}, {}",
            plural(root.file_count(), "file", "files"),
            plural(root.folder_count() + 1, "folder", "folders"),
        ),
        None => "empty".to_string(),
    };
    vec![format!(
        "Content data successfully generated and saved to {} ({})",
        output.display(),
        counts
    )]
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}

pub fn print_scan_event(event: &ScanEvent) {
    print_lines(format_scan_event(event));
}

pub fn print_config_warning(err: &ConfigError) {
    print_lines(format_config_warning(err));
}

pub fn print_tree(tree: &Tree) {
    print_lines(format_tree(tree));
}

pub fn print_write_summary(tree: &Tree, output: &Path) {
    print_lines(format_write_summary(tree, output));
}
