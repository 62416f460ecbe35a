//! Locating the event file in a directory.
//!
//! Event files are named `<timestamp_ns>_<digits>_<digits>.<ext>`. Exactly
//! one such file must be present; zero or several matches are errors so the
//! selection never depends on directory listing order.

use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::{InspectError, Result};

/// The selected event file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputFile {
    /// Full path to the file
    pub path: PathBuf,
    /// File name without directories
    pub file_name: String,
}

impl InputFile {
    /// Wrap an explicitly chosen path without scanning.
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                InspectError::invalid_file_name(path.display().to_string(), "no file name")
            })?
            .to_string();

        Ok(Self { path, file_name })
    }
}

/// Pattern for event file names with the given extension.
pub fn file_pattern(extension: &str) -> String {
    format!(r"^\d+_\d+_\d+\.{}$", regex::escape(extension))
}

/// Whether a file name follows the event naming convention.
pub fn matches_convention(file_name: &str, extension: &str) -> bool {
    Regex::new(&file_pattern(extension))
        .map(|re| re.is_match(file_name))
        .unwrap_or(false)
}

/// Find the single event file in `dir`.
pub fn locate(dir: &Path, extension: &str) -> Result<InputFile> {
    let pattern = file_pattern(extension);
    let re = Regex::new(&pattern).map_err(|e| InspectError::invalid_config(e.to_string()))?;

    let mut candidates = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if re.is_match(name) {
                candidates.push(name.to_string());
            }
        }
    }
    candidates.sort();

    log::debug!(
        "Found {} candidate(s) for {} in {}",
        candidates.len(),
        pattern,
        dir.display()
    );

    match candidates.len() {
        0 => Err(InspectError::NoInputFile {
            dir: dir.to_path_buf(),
            pattern,
        }),
        1 => {
            let file_name = candidates.remove(0);
            Ok(InputFile {
                path: dir.join(&file_name),
                file_name,
            })
        }
        _ => Err(InspectError::AmbiguousInput {
            dir: dir.to_path_buf(),
            pattern,
            candidates,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn test_matches_convention() {
        assert!(matches_convention("1541962108935000000_167_838.h5", "h5"));
        assert!(!matches_convention("1541962108935000000_167.h5", "h5"));
        assert!(!matches_convention("a_1_2.h5", "h5"));
        assert!(!matches_convention("1_2_3.h5.bak", "h5"));
        assert!(!matches_convention("1_2_3xh5", "h5"));
    }

    #[test]
    fn test_locate_single() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "1541962108935000000_167_838.h5");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "awake_csv.csv");

        let input = locate(dir.path(), "h5").unwrap();
        assert_eq!(input.file_name, "1541962108935000000_167_838.h5");
        assert_eq!(input.path, dir.path().join("1541962108935000000_167_838.h5"));
    }

    #[test]
    fn test_locate_none() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "data.h5");

        assert!(matches!(
            locate(dir.path(), "h5"),
            Err(InspectError::NoInputFile { .. })
        ));
    }

    #[test]
    fn test_locate_ambiguous_lists_sorted_candidates() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "2_0_0.h5");
        touch(dir.path(), "1_0_0.h5");

        match locate(dir.path(), "h5") {
            Err(InspectError::AmbiguousInput { candidates, .. }) => {
                assert_eq!(candidates, vec!["1_0_0.h5", "2_0_0.h5"]);
            }
            other => panic!("expected ambiguous input, got {:?}", other),
        }
    }

    #[test]
    fn test_locate_ignores_directories() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("1_2_3.h5")).unwrap();

        assert!(matches!(
            locate(dir.path(), "h5"),
            Err(InspectError::NoInputFile { .. })
        ));
    }

    #[test]
    fn test_from_path() {
        let input = InputFile::from_path("/data/runs/1_2_3.h5").unwrap();
        assert_eq!(input.file_name, "1_2_3.h5");
    }
}
