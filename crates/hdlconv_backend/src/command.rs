//! Subprocess bridge to an external HDL converter.
//!
//! The converter is invoked once per parse as
//!
//! ```text
//! <program> [args...] --language <tag> [-I <dir>]... [--debug] <file>...
//! ```
//!
//! and must print the resulting context as interchange JSON on stdout.

use crate::error::ParseError;
use crate::json::parse_interchange;
use crate::parser::HdlParser;
use hdlconv_ast::{HdlContext, Language};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// An [`HdlParser`] that delegates to an external executable.
#[derive(Debug, Clone)]
pub struct CommandParser {
    program: PathBuf,
    args: Vec<String>,
}

impl CommandParser {
    /// Creates a bridge to `program`.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Adds fixed arguments placed before the generated ones.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Returns the converter executable.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Returns `true` if `<program> --version` runs successfully.
    pub fn is_available(&self) -> bool {
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg("--version")
            .stdin(Stdio::null())
            .output();
        matches!(output, Ok(out) if out.status.success())
    }

    /// Builds the command line for one parse.
    pub fn command(
        &self,
        files: &[PathBuf],
        language: Language,
        include_dirs: &[PathBuf],
        debug: bool,
    ) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        cmd.arg("--language").arg(language.as_str());
        for dir in include_dirs {
            cmd.arg("-I").arg(dir);
        }
        if debug {
            cmd.arg("--debug");
        }
        cmd.args(files);
        cmd.stdin(Stdio::null());
        cmd
    }
}

impl HdlParser for CommandParser {
    fn parse(
        &self,
        files: &[PathBuf],
        language: Language,
        include_dirs: &[PathBuf],
        debug: bool,
    ) -> Result<HdlContext, ParseError> {
        debug!(
            program = %self.program.display(),
            %language,
            files = files.len(),
            "running external converter"
        );
        let output = self
            .command(files, language, include_dirs, debug)
            .output()
            .map_err(|source| ParseError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        if !output.status.success() {
            return Err(ParseError::External {
                program: self.program.clone(),
                status: output.status.code(),
                stderr,
            });
        }
        if !stderr.is_empty() {
            warn!(program = %self.program.display(), "converter stderr: {}", stderr.trim_end());
        }

        let stdout = String::from_utf8(output.stdout).map_err(|e| ParseError::InvalidOutput {
            program: self.program.clone(),
            message: e.to_string(),
        })?;
        parse_interchange(&stdout, &self.program).map_err(|e| match e {
            ParseError::Syntax { message, .. } => ParseError::InvalidOutput {
                program: self.program.clone(),
                message,
            },
            other => other,
        })
    }
}
