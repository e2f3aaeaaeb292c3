//! Round-trip cases and golden reference comparison.

use crate::error::HarnessError;
use crate::render::{render, RenderFn};
use hdlconv_ast::Language;
use similar::TextDiff;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Parse in one language, render in another, compare with a reference.
///
/// The reference lives in `<dst dir>/expected/`. Its name defaults to the
/// source name with the extension replaced by the destination suffix.
#[derive(Clone, Copy)]
pub struct TranslateCase<'a> {
    /// Source file name, relative to the source language directory.
    pub file_name: &'a str,
    /// Language to parse as.
    pub src: Language,
    /// Language to render as.
    pub dst: Language,
    /// Explicit reference name, relative to `expected/`.
    pub ref_file_name: Option<&'a str>,
    /// Source directory override.
    pub src_dir: Option<&'a Path>,
    /// Destination directory override.
    pub dst_dir: Option<&'a Path>,
    /// Rendering function.
    pub render: RenderFn<'a>,
}

impl<'a> TranslateCase<'a> {
    /// Creates a case with default directories, reference name and renderer.
    pub fn new(file_name: &'a str, src: Language, dst: Language) -> Self {
        Self {
            file_name,
            src,
            dst,
            ref_file_name: None,
            src_dir: None,
            dst_dir: None,
            render: &render,
        }
    }

    /// Sets the reference file name.
    pub fn ref_file(mut self, name: &'a str) -> Self {
        self.ref_file_name = Some(name);
        self
    }

    /// Overrides the source directory.
    pub fn src_dir(mut self, dir: &'a Path) -> Self {
        self.src_dir = Some(dir);
        self
    }

    /// Overrides the destination directory.
    pub fn dst_dir(mut self, dir: &'a Path) -> Self {
        self.dst_dir = Some(dir);
        self
    }

    /// Replaces the default renderer.
    pub fn render_with(mut self, render: RenderFn<'a>) -> Self {
        self.render = render;
        self
    }
}

/// Parse and render in the same language, compare with a reference.
///
/// The reference name defaults to the source name itself.
#[derive(Clone, Copy)]
pub struct ParseCase<'a> {
    /// Source file name, relative to the language directory.
    pub file_name: &'a str,
    /// Language to parse and render as.
    pub language: Language,
    /// Directory override.
    pub lang_dir: Option<&'a Path>,
    /// Explicit reference name, relative to `expected/`.
    pub ref_file_name: Option<&'a str>,
    /// Rendering function.
    pub render: RenderFn<'a>,
}

impl<'a> ParseCase<'a> {
    /// Creates a case with the default directory, reference name and renderer.
    pub fn new(file_name: &'a str, language: Language) -> Self {
        Self {
            file_name,
            language,
            lang_dir: None,
            ref_file_name: None,
            render: &render,
        }
    }

    /// Overrides the language directory.
    pub fn lang_dir(mut self, dir: &'a Path) -> Self {
        self.lang_dir = Some(dir);
        self
    }

    /// Sets the reference file name.
    pub fn ref_file(mut self, name: &'a str) -> Self {
        self.ref_file_name = Some(name);
        self
    }

    /// Replaces the default renderer.
    pub fn render_with(mut self, render: RenderFn<'a>) -> Self {
        self.render = render;
        self
    }
}

/// Compares `actual` with the content of `reference`, byte for byte.
///
/// No normalization of whitespace, line endings, or case is applied. A
/// missing reference is a [`HarnessError::Fixture`].
pub fn compare_with_reference(reference: &Path, actual: &str) -> Result<(), HarnessError> {
    let expected = fs::read_to_string(reference).map_err(|source| HarnessError::Fixture {
        path: reference.to_path_buf(),
        source,
    })?;
    debug!(reference = %reference.display(), bytes = actual.len(), "comparing with reference");
    if expected == actual {
        return Ok(());
    }
    Err(HarnessError::Mismatch {
        reference: reference.to_path_buf(),
        diff: text_diff(&expected, actual),
    })
}

/// Overwrites `reference` with `actual`, creating parent directories.
pub fn update_reference(reference: &Path, actual: &str) -> Result<(), HarnessError> {
    let fixture_err = |source| HarnessError::Fixture {
        path: reference.to_path_buf(),
        source,
    };
    if let Some(parent) = reference.parent() {
        fs::create_dir_all(parent).map_err(fixture_err)?;
    }
    fs::write(reference, actual).map_err(fixture_err)?;
    info!(reference = %reference.display(), "golden reference updated");
    Ok(())
}

/// Builds a unified diff from `expected` to `actual`.
///
/// When the texts only differ in line endings the diff alone is unreadable,
/// so a note says so.
pub fn text_diff(expected: &str, actual: &str) -> String {
    let mut out = TextDiff::from_lines(expected, actual)
        .unified_diff()
        .context_radius(3)
        .header("expected", "actual")
        .to_string();
    if expected.replace("\r\n", "\n") == actual.replace("\r\n", "\n") {
        out.push_str("note: texts differ only in line endings\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn case_builders() {
        let dir = Path::new("custom");
        let case = TranslateCase::new("a.v", Language::Verilog, Language::Vhdl)
            .ref_file("b.vhd")
            .src_dir(dir)
            .dst_dir(dir);
        assert_eq!(case.ref_file_name, Some("b.vhd"));
        assert_eq!(case.src_dir, Some(dir));
        assert_eq!(case.dst_dir, Some(dir));

        let case = ParseCase::new("a.vhd", Language::Vhdl).lang_dir(dir);
        assert_eq!(case.lang_dir, Some(dir));
        assert_eq!(case.ref_file_name, None);
    }

    #[test]
    fn identical_text_passes() {
        let dir = TempDir::new().unwrap();
        let reference = dir.path().join("a.v");
        fs::write(&reference, "module a;\nendmodule\n").unwrap();
        compare_with_reference(&reference, "module a;\nendmodule\n").unwrap();
    }

    #[test]
    fn trailing_whitespace_is_significant() {
        let dir = TempDir::new().unwrap();
        let reference = dir.path().join("a.v");
        fs::write(&reference, "module a;\nendmodule\n").unwrap();
        let err = compare_with_reference(&reference, "module a; \nendmodule\n").unwrap_err();
        let HarnessError::Mismatch { diff, .. } = err else {
            panic!("expected mismatch");
        };
        assert!(diff.contains("-module a;\n"), "{diff}");
        assert!(diff.contains("+module a; \n"), "{diff}");
    }

    #[test]
    fn line_endings_are_significant() {
        let dir = TempDir::new().unwrap();
        let reference = dir.path().join("a.v");
        fs::write(&reference, "module a;\r\nendmodule\r\n").unwrap();
        let err = compare_with_reference(&reference, "module a;\nendmodule\n").unwrap_err();
        let HarnessError::Mismatch { diff, .. } = err else {
            panic!("expected mismatch");
        };
        assert!(diff.contains("only in line endings"), "{diff}");
    }

    #[test]
    fn missing_reference_is_fixture_error() {
        let dir = TempDir::new().unwrap();
        let err = compare_with_reference(&dir.path().join("nope.v"), "").unwrap_err();
        assert!(matches!(err, HarnessError::Fixture { .. }));
    }

    #[test]
    fn update_creates_expected_dir() {
        let dir = TempDir::new().unwrap();
        let reference = dir.path().join("verilog").join("expected").join("a.v");
        update_reference(&reference, "module a;\n").unwrap();
        assert_eq!(fs::read_to_string(&reference).unwrap(), "module a;\n");
        compare_with_reference(&reference, "module a;\n").unwrap();
    }
}
