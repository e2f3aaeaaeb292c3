//! The parse capability.

use crate::error::ParseError;
use hdlconv_ast::{HdlContext, Language};
use std::path::PathBuf;

/// Parses HDL (or interchange) source files into an [`HdlContext`].
///
/// `include_dirs` are searched when the parsed design refers to other files;
/// `debug` asks the parser for extra diagnostics. Objects from all `files`
/// land in one context in file order.
pub trait HdlParser {
    /// Parses `files` as `language`.
    fn parse(
        &self,
        files: &[PathBuf],
        language: Language,
        include_dirs: &[PathBuf],
        debug: bool,
    ) -> Result<HdlContext, ParseError>;
}

impl<P: HdlParser + ?Sized> HdlParser for &P {
    fn parse(
        &self,
        files: &[PathBuf],
        language: Language,
        include_dirs: &[PathBuf],
        debug: bool,
    ) -> Result<HdlContext, ParseError> {
        (**self).parse(files, language, include_dirs, debug)
    }
}

impl<P: HdlParser + ?Sized> HdlParser for Box<P> {
    fn parse(
        &self,
        files: &[PathBuf],
        language: Language,
        include_dirs: &[PathBuf],
        debug: bool,
    ) -> Result<HdlContext, ParseError> {
        (**self).parse(files, language, include_dirs, debug)
    }
}
