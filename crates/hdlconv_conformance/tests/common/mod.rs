//! Shared fixtures and a recording parser double for the harness tests.

#![allow(dead_code)]

use hdlconv_ast::{HdlContext, Language};
use hdlconv_backend::{HdlParser, ParseError};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// The checked-in fixture tree.
pub fn fixture_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests")
}

/// Loads `json/<name>` as a context.
pub fn load_json(name: &str) -> HdlContext {
    let path = fixture_root().join("json").join(name);
    let text = fs::read_to_string(&path).unwrap();
    serde_json::from_str(&text).unwrap()
}

/// Arguments of one `parse` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCall {
    pub files: Vec<PathBuf>,
    pub language: Language,
    pub include_dirs: Vec<PathBuf>,
    pub debug: bool,
}

/// Stands in for an external converter: checks the source exists, records
/// the call, and returns a fixed context.
pub struct CannedParser {
    context: HdlContext,
    calls: Mutex<Vec<ParseCall>>,
}

impl CannedParser {
    pub fn new(context: HdlContext) -> Self {
        Self {
            context,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<ParseCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl HdlParser for CannedParser {
    fn parse(
        &self,
        files: &[PathBuf],
        language: Language,
        include_dirs: &[PathBuf],
        debug: bool,
    ) -> Result<HdlContext, ParseError> {
        self.calls.lock().unwrap().push(ParseCall {
            files: files.to_vec(),
            language,
            include_dirs: include_dirs.to_vec(),
            debug,
        });
        for file in files {
            fs::metadata(file).map_err(|source| ParseError::Io {
                path: file.clone(),
                source,
            })?;
        }
        Ok(self.context.clone())
    }
}
