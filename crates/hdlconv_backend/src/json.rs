//! Native reader for the JSON interchange format.

use crate::error::ParseError;
use crate::parser::HdlParser;
use hdlconv_ast::{HdlContext, Language};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Parses JSON interchange files directly into an [`HdlContext`].
///
/// Only [`Language::HdlConvertorJson`] is accepted. Include directories have
/// no meaning for the interchange format and are ignored.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonParser;

impl JsonParser {
    /// Creates a new interchange parser.
    pub fn new() -> Self {
        Self
    }
}

/// Deserializes one interchange document, attributing errors to `path`.
pub fn parse_interchange(text: &str, path: &Path) -> Result<HdlContext, ParseError> {
    serde_json::from_str(text).map_err(|e| ParseError::Syntax {
        path: path.to_path_buf(),
        line: e.line(),
        column: e.column(),
        message: e.to_string(),
    })
}

impl HdlParser for JsonParser {
    fn parse(
        &self,
        files: &[PathBuf],
        language: Language,
        include_dirs: &[PathBuf],
        debug: bool,
    ) -> Result<HdlContext, ParseError> {
        if language != Language::HdlConvertorJson {
            return Err(ParseError::UnsupportedLanguage(language));
        }
        if !include_dirs.is_empty() {
            trace!(count = include_dirs.len(), "include directories ignored for JSON input");
        }

        let mut context = HdlContext::new();
        for path in files {
            let text = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
                path: path.clone(),
                source,
            })?;
            let part = parse_interchange(&text, path)?;
            if debug {
                debug!(file = %path.display(), objs = part.len(), "parsed interchange file");
            }
            context.extend(part);
        }
        Ok(context)
    }
}
