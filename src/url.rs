//! `file://` URL construction.
//!
//! A manifest URL has two parts:
//!
//! ```text
//! file:///data/videos/   sub/clip%201.mp4
//! └──── base_url ────┘   └ encode_relative ┘
//! ```
//!
//! The base comes from the absolute root path and is used verbatim apart from
//! slash normalization. Only the root-relative part is percent-encoded.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::path::{Component, Path};

/// Bytes left as-is in the relative part: unreserved characters and `/`.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

/// Build the `file://` prefix for an absolute root directory.
///
/// - `/data/videos` → `file:///data/videos/`
/// - `C:\media\videos` → `file:///C:/media/videos/`
///
/// The result always ends with `/`.
pub fn base_url(root: &Path) -> String {
    let raw = root.to_string_lossy().replace('\\', "/");
    let path = if has_drive_letter(&raw) {
        format!("/{raw}")
    } else {
        raw
    };
    let mut url = format!("file://{path}");
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

fn has_drive_letter(path: &str) -> bool {
    let bytes = path.as_bytes();
    bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Join the components of a relative path with `/`, whatever the OS separator.
pub fn relative_url_path(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Percent-encode a `/`-separated relative path, keeping the slashes.
pub fn encode_relative(relative: &str) -> String {
    utf8_percent_encode(relative, PATH_SEGMENT).to_string()
}

/// Full URL for `file` under `root`, or `None` if `file` is not inside `root`.
pub fn file_url(base_url: &str, root: &Path, file: &Path) -> Option<String> {
    let relative = file.strip_prefix(root).ok()?;
    Some(format!(
        "{}{}",
        base_url,
        encode_relative(&relative_url_path(relative))
    ))
}
