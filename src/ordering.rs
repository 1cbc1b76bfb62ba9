//! Sort policies for files and folders.
//!
//! Both policies put names carrying a number ahead of names without one and
//! order the numbered ones by value, so `2.mp4` comes before `10.mp4` and
//! `Season 2` before `Season 10`. They differ in *where* the number may sit:
//!
//! | Entry | Number must be | Example key source |
//! |-------|----------------|--------------------|
//! | File | at the very start of the name | `10-finale.mp4` → 10 |
//! | Folder | anywhere, first run wins | `Season 10 (2019)` → 10 |
//!
//! A file called `Part 2.mp4` therefore sorts with the unnumbered files while
//! a folder called `Part 2` sorts with the numbered folders.
//!
//! Ties on the numeric value fall back to a case-insensitive comparison of the
//! whole name, and finally to the raw name so the result never depends on the
//! order the OS listed the directory in.

use crate::manifest::FolderRecord;
use std::cmp::Ordering;

/// A run of ASCII digits, compared by numeric value.
///
/// Values are compared without parsing, so arbitrarily long runs neither
/// overflow nor collapse into each other: leading zeros are ignored, a longer
/// significant run is larger, equal-length runs compare digit by digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericRun<'a> {
    digits: &'a str,
}

impl<'a> NumericRun<'a> {
    /// The run that begins at the first byte of `name`, if any.
    pub fn leading(name: &'a str) -> Option<Self> {
        let end = name
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(name.len());
        (end > 0).then(|| Self::new(&name[..end]))
    }

    /// The first run found scanning `name` left to right, if any.
    pub fn first(name: &'a str) -> Option<Self> {
        let start = name.find(|c: char| c.is_ascii_digit())?;
        Self::leading(&name[start..])
    }

    fn new(run: &'a str) -> Self {
        let significant = run.trim_start_matches('0');
        Self {
            digits: if significant.is_empty() { "0" } else { significant },
        }
    }

    /// Digits with leading zeros removed (`"0"` for an all-zero run).
    pub fn digits(&self) -> &'a str {
        self.digits
    }
}

impl Ord for NumericRun<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.digits
            .len()
            .cmp(&other.digits.len())
            .then_with(|| self.digits.cmp(other.digits))
    }
}

impl PartialOrd for NumericRun<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sort key shared by both policies: numbered names first, then by value,
/// then case-insensitively by the full name, then by the raw name.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct SortKey<'a> {
    unnumbered: bool,
    number: Option<NumericRun<'a>>,
    folded: String,
    raw: &'a str,
}

impl<'a> SortKey<'a> {
    fn new(name: &'a str, number: Option<NumericRun<'a>>) -> Self {
        Self {
            unnumbered: number.is_none(),
            number,
            folded: name.to_lowercase(),
            raw: name,
        }
    }
}

/// Order two file names within one folder. Only a leading number counts.
pub fn compare_files(a: &str, b: &str) -> Ordering {
    SortKey::new(a, NumericRun::leading(a)).cmp(&SortKey::new(b, NumericRun::leading(b)))
}

/// Order two sibling folders by name. The first number anywhere counts.
pub fn compare_folders(a: &FolderRecord, b: &FolderRecord) -> Ordering {
    compare_folder_names(&a.name, &b.name)
}

/// Name-level form of [`compare_folders`].
pub fn compare_folder_names(a: &str, b: &str) -> Ordering {
    SortKey::new(a, NumericRun::first(a)).cmp(&SortKey::new(b, NumericRun::first(b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted_files(names: &[&str]) -> Vec<String> {
        let mut v: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        v.sort_by(|a, b| compare_files(a, b));
        v
    }

    fn sorted_folders(names: &[&str]) -> Vec<String> {
        let mut v: Vec<String> = names.iter().map(|s| s.to_string()).collect();
        v.sort_by(|a, b| compare_folder_names(a, b));
        v
    }

    // =========================================================================
    // NumericRun
    // =========================================================================

    #[test]
    fn leading_run_requires_digit_at_start() {
        assert_eq!(NumericRun::leading("12-intro.mp4").unwrap().digits(), "12");
        assert_eq!(NumericRun::leading("intro 12.mp4"), None);
        assert_eq!(NumericRun::leading(""), None);
    }

    #[test]
    fn first_run_found_anywhere() {
        assert_eq!(NumericRun::first("Season 10 (2019)").unwrap().digits(), "10");
        assert_eq!(NumericRun::first("Extras"), None);
    }

    #[test]
    fn leading_zeros_do_not_change_value() {
        assert_eq!(NumericRun::leading("007").unwrap(), NumericRun::leading("7").unwrap());
        assert_eq!(NumericRun::leading("000").unwrap().digits(), "0");
    }

    #[test]
    fn long_runs_compare_by_magnitude() {
        let big = NumericRun::leading("123456789012345678901234567890").unwrap();
        let bigger = NumericRun::leading("123456789012345678901234567891").unwrap();
        let small = NumericRun::leading("99").unwrap();
        assert!(small < big);
        assert!(big < bigger);
    }

    #[test]
    fn non_ascii_digits_are_not_numbers() {
        assert_eq!(NumericRun::leading("٣ clips"), None);
    }

    // =========================================================================
    // File policy
    // =========================================================================

    #[test]
    fn files_numeric_before_alphabetic() {
        assert_eq!(
            sorted_files(&["10.mp4", "2.mp4", "intro.html"]),
            vec!["2.mp4", "10.mp4", "intro.html"]
        );
    }

    #[test]
    fn files_ignore_numbers_after_the_start() {
        assert_eq!(
            sorted_files(&["Part 2.mp4", "b.mp4", "1 Pilot.mp4"]),
            vec!["1 Pilot.mp4", "b.mp4", "Part 2.mp4"]
        );
    }

    #[test]
    fn files_same_number_fall_back_to_name() {
        assert_eq!(
            sorted_files(&["01-b.mp4", "1-A.mp4", "001-c.mp4"]),
            vec!["001-c.mp4", "01-b.mp4", "1-A.mp4"]
        );
    }

    #[test]
    fn files_case_insensitive_among_unnumbered() {
        assert_eq!(
            sorted_files(&["beta.mp4", "Alpha.mp4", "gamma.htm"]),
            vec!["Alpha.mp4", "beta.mp4", "gamma.htm"]
        );
    }

    #[test]
    fn files_differing_only_in_case_are_ordered() {
        assert_eq!(compare_files("A.mp4", "a.mp4"), Ordering::Less);
        assert_eq!(compare_files("a.mp4", "A.mp4"), Ordering::Greater);
    }

    // =========================================================================
    // Folder policy
    // =========================================================================

    #[test]
    fn folders_numbered_anywhere_first() {
        assert_eq!(
            sorted_folders(&["Season 2", "Extras", "Season 10"]),
            vec!["Season 2", "Season 10", "Extras"]
        );
    }

    #[test]
    fn folders_use_first_run_only() {
        assert_eq!(
            sorted_folders(&["Disc 3 of 4", "Disc 1 of 9", "Disc 2 of 1"]),
            vec!["Disc 1 of 9", "Disc 2 of 1", "Disc 3 of 4"]
        );
    }

    #[test]
    fn folders_equal_number_fall_back_to_name() {
        assert_eq!(
            sorted_folders(&["b 1", "A 1", "Bonus"]),
            vec!["A 1", "b 1", "Bonus"]
        );
    }

    #[test]
    fn same_name_differs_between_policies() {
        // "Part 2" is numbered as a folder but not as a file.
        assert_eq!(compare_folder_names("Part 2", "Alpha"), Ordering::Less);
        assert_eq!(compare_files("Part 2", "Alpha"), Ordering::Greater);
    }
}
