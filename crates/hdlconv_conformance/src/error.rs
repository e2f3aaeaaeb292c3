//! Error types for harness failures.

use hdlconv_ast::{Language, ObjKind};
use hdlconv_backend::{ParseError, SerializeError};
use hdlconv_config::ConfigError;
use std::path::PathBuf;

/// Every way a harness operation can fail.
///
/// Configuration errors (`UnsupportedLanguage`, `RenderNotImplemented`,
/// `Config`) point at a broken test setup. `Parse` is the parser's own error,
/// passed through untouched. `Mismatch` and `NamesMismatch` are assertion
/// failures. `Fixture` is an I/O failure on a reference file.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// No fixture directory or file suffix is defined for the language.
    #[error("unsupported language '{0}'")]
    UnsupportedLanguage(Language),

    /// No serializer exists for the language.
    #[error("rendering to '{0}' is not implemented")]
    RenderNotImplemented(Language),

    /// The harness configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The parser rejected the input.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The serializer failed.
    #[error(transparent)]
    Render(#[from] SerializeError),

    /// Rendered text differs from the reference file.
    #[error("output differs from '{}':\n{diff}", .reference.display())]
    Mismatch {
        /// The reference file compared against.
        reference: PathBuf,
        /// A unified diff from expected to actual.
        diff: String,
    },

    /// The ordered names of a node kind differ from the expected list.
    #[error("{kind} names differ: expected {expected:?}, found [{}]", found_names(.actual))]
    NamesMismatch {
        /// The inspected node kind.
        kind: ObjKind,
        /// The expected names.
        expected: Vec<String>,
        /// The names found in the context; `None` marks an unnamed object.
        actual: Vec<Option<String>>,
    },

    /// A reference file could not be read or written.
    #[error("fixture '{}': {source}", .path.display())]
    Fixture {
        /// The reference file.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}

fn found_names(names: &[Option<String>]) -> String {
    names
        .iter()
        .map(|n| match n {
            Some(name) => format!("{name:?}"),
            None => "<unnamed>".to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}
