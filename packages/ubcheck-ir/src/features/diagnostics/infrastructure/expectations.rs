//! Expected-output loading for the verifier
//!
//! Self-test sources annotate the line that should fire:
//!
//! ```c
//! return abs(x); // expected-bug: abs
//! ```
//!
//! With marker `expected-bug:` the expected text at that line is `abs`.

use crate::shared::models::SourceFrame;
use rustc_hash::FxHashMap;
use std::fmt::Debug;
use std::path::PathBuf;

/// Supplies the expected message for a source position
pub trait ExpectationSource: Debug {
    /// Text following `marker` on the frame's line, if annotated with a
    /// non-empty text
    fn expected_at(&mut self, frame: &SourceFrame, marker: &str) -> Option<String>;
}

/// Reads annotations from source files on disk; each file is read once
#[derive(Debug, Default)]
pub struct SourceAnnotations {
    /// Joined against relative frame paths instead of the frame's directory
    root: Option<PathBuf>,
    /// `None` for files that could not be read
    files: FxHashMap<PathBuf, Option<Vec<String>>>,
}

impl SourceAnnotations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
            ..Self::default()
        }
    }

    fn path_of(&self, frame: &SourceFrame) -> PathBuf {
        match &self.root {
            Some(root) if !frame.filename.starts_with('/') => root.join(&frame.filename),
            _ => PathBuf::from(frame.path()),
        }
    }

    fn lines(&mut self, path: PathBuf) -> Option<&[String]> {
        self.files
            .entry(path)
            .or_insert_with_key(|path| match std::fs::read_to_string(path) {
                Ok(text) => Some(text.lines().map(str::to_string).collect()),
                Err(e) => {
                    tracing::debug!("verify: cannot read {}: {}", path.display(), e);
                    None
                }
            })
            .as_deref()
    }
}

impl ExpectationSource for SourceAnnotations {
    fn expected_at(&mut self, frame: &SourceFrame, marker: &str) -> Option<String> {
        let index = frame.line.checked_sub(1)? as usize;
        let path = self.path_of(frame);
        let line = self.lines(path)?.get(index)?;
        let (_, rest) = line.split_once(marker)?;
        // A bare marker carries no expectation
        let expected = rest.trim();
        (!expected.is_empty()).then(|| expected.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let dir = TempDir::new().unwrap();
        let mut f = std::fs::File::create(dir.path().join("t.c")).unwrap();
        writeln!(f, "int f(int x) {{").unwrap();
        writeln!(f, "  return abs(x); // expected-bug: abs").unwrap();
        writeln!(f, "}}").unwrap();
        dir
    }

    #[test]
    fn test_reads_annotation() {
        let dir = fixture();
        let mut source = SourceAnnotations::new();
        let frame = SourceFrame::new(dir.path().to_str().unwrap(), "t.c", 2, 10);
        assert_eq!(
            source.expected_at(&frame, "expected-bug:"),
            Some("abs".to_string())
        );
    }

    #[test]
    fn test_unannotated_and_out_of_range_lines() {
        let dir = fixture();
        let mut source = SourceAnnotations::with_root(dir.path());
        let line = |n| SourceFrame::new("ignored", "t.c", n, 0);
        assert_eq!(source.expected_at(&line(1), "expected-bug:"), None);
        assert_eq!(source.expected_at(&line(0), "expected-bug:"), None);
        assert_eq!(source.expected_at(&line(42), "expected-bug:"), None);
        assert_eq!(
            source.expected_at(&line(2), "expected-bug:"),
            Some("abs".to_string())
        );
    }

    #[test]
    fn test_bare_marker_is_not_an_annotation() {
        let dir = TempDir::new().unwrap();
        let mut f = std::fs::File::create(dir.path().join("bare.c")).unwrap();
        writeln!(f, "  return div(n, d).quot; // expected-bug:").unwrap();
        writeln!(f, "  return abs(x); // expected-bug:   ").unwrap();

        let mut source = SourceAnnotations::with_root(dir.path());
        let line = |n| SourceFrame::new("", "bare.c", n, 0);
        assert_eq!(source.expected_at(&line(1), "expected-bug:"), None);
        assert_eq!(source.expected_at(&line(2), "expected-bug:"), None);
    }

    #[test]
    fn test_missing_file() {
        let mut source = SourceAnnotations::new();
        let frame = SourceFrame::new("/nonexistent", "nope.c", 1, 0);
        assert_eq!(source.expected_at(&frame, "x"), None);
        assert_eq!(source.expected_at(&frame, "x"), None);
    }
}
