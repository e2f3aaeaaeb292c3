//! Error types raised at the parser and serializer boundaries.

use hdlconv_ast::Language;
use std::path::PathBuf;

/// A failure reported by an [`HdlParser`](crate::HdlParser).
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// A source file could not be read.
    #[error("failed to read '{}': {source}", .path.display())]
    Io {
        /// The file that failed to load.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The input is malformed.
    #[error("{}:{line}:{column}: {message}", .path.display())]
    Syntax {
        /// The offending file.
        path: PathBuf,
        /// 1-based line, or 0 when unknown.
        line: usize,
        /// 1-based column, or 0 when unknown.
        column: usize,
        /// Description of the problem.
        message: String,
    },

    /// The parser cannot handle the requested language.
    #[error("parser does not support language '{0}'")]
    UnsupportedLanguage(Language),

    /// The external converter could not be started.
    #[error("failed to run '{}': {source}", .program.display())]
    Spawn {
        /// The converter executable.
        program: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The external converter exited unsuccessfully.
    #[error("'{}' exited with status {}: {stderr}", .program.display(), .status.map_or_else(|| "<signal>".to_string(), |c| c.to_string()))]
    External {
        /// The converter executable.
        program: PathBuf,
        /// The exit code, or `None` if terminated by a signal.
        status: Option<i32>,
        /// Captured standard error.
        stderr: String,
    },

    /// The external converter produced output that is not a valid context.
    #[error("invalid output from '{}': {message}", .program.display())]
    InvalidOutput {
        /// The converter executable.
        program: PathBuf,
        /// Description of the problem.
        message: String,
    },
}

/// A failure while rendering a context to text.
#[derive(Debug, thiserror::Error)]
pub enum SerializeError {
    /// The sink rejected a write.
    #[error("failed to write output: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// A module definition has neither an inner declaration nor a module name.
    #[error("module definition{} names no module", .0.as_deref().map(|n| format!(" '{n}'")).unwrap_or_default())]
    MissingModuleName(Option<String>),
}
