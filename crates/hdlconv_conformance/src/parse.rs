//! Parser invocation against the fixture tree.

use crate::error::HarnessError;
use crate::lang_path::lang_dir;
use hdlconv_ast::{HdlContext, Language};
use hdlconv_backend::HdlParser;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Parses `<test_dir>/<lang dir>/<file_name>` as `language`.
///
/// The language directory doubles as the only include directory, so the
/// parsed design can reference sibling files. A relative `test_dir` is
/// resolved against the current directory, so the parser always sees
/// absolute paths. Returns the absolute source path together with the
/// context. Parser errors are returned as they are.
pub fn parse_file<P: HdlParser + ?Sized>(
    parser: &P,
    test_dir: &Path,
    file_name: &str,
    language: Language,
    dir: Option<&Path>,
    debug: bool,
) -> Result<(PathBuf, HdlContext), HarnessError> {
    let root = std::path::absolute(test_dir).map_err(|source| HarnessError::Fixture {
        path: test_dir.to_path_buf(),
        source,
    })?;
    let inc_dir = root.join(lang_dir(dir, language)?);
    let file = inc_dir.join(file_name);
    debug!(
        file = %file.display(),
        %language,
        include = %inc_dir.display(),
        "parsing fixture"
    );
    let context = parser.parse(std::slice::from_ref(&file), language, &[inc_dir], debug)?;
    Ok((file, context))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hdlconv_backend::ParseError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        seen: RefCell<Vec<(Vec<PathBuf>, Vec<PathBuf>)>>,
    }

    impl HdlParser for Recorder {
        fn parse(
            &self,
            files: &[PathBuf],
            _language: Language,
            include_dirs: &[PathBuf],
            _debug: bool,
        ) -> Result<HdlContext, ParseError> {
            self.seen
                .borrow_mut()
                .push((files.to_vec(), include_dirs.to_vec()));
            Ok(HdlContext::new())
        }
    }

    #[test]
    fn relative_root_yields_absolute_paths() {
        let parser = Recorder::default();
        let (file, _) = parse_file(
            &parser,
            Path::new("fixtures"),
            "a.v",
            Language::Verilog,
            None,
            false,
        )
        .unwrap();
        assert!(file.is_absolute());
        assert!(file.ends_with("fixtures/verilog/a.v"));

        let seen = parser.seen.borrow();
        let (files, include_dirs) = &seen[0];
        assert_eq!(files, &vec![file.clone()]);
        assert!(include_dirs[0].is_absolute());
        assert!(include_dirs[0].ends_with("fixtures/verilog"));
    }

    #[test]
    #[cfg(unix)]
    fn absolute_root_is_kept() {
        let parser = Recorder::default();
        let (file, _) = parse_file(
            &parser,
            Path::new("/srv/tests"),
            "b.vhd",
            Language::Vhdl,
            None,
            true,
        )
        .unwrap();
        assert_eq!(file, PathBuf::from("/srv/tests/vhdl/b.vhd"));
    }
}
