//! Language-based routing between the native JSON reader and a bridge.

use crate::command::CommandParser;
use crate::error::ParseError;
use crate::json::JsonParser;
use crate::parser::HdlParser;
use hdlconv_ast::{HdlContext, Language};
use std::path::PathBuf;

/// Sends interchange input to [`JsonParser`] and HDL input to an optional
/// [`CommandParser`].
///
/// Without a bridge, any HDL language fails with
/// [`ParseError::UnsupportedLanguage`].
#[derive(Debug, Clone, Default)]
pub struct RoutingParser {
    json: JsonParser,
    bridge: Option<CommandParser>,
}

impl RoutingParser {
    /// Creates a router that only understands the interchange format.
    pub fn new() -> Self {
        Self::default()
    }

    /// Routes HDL languages to `bridge`.
    pub fn with_bridge(mut self, bridge: CommandParser) -> Self {
        self.bridge = Some(bridge);
        self
    }

    /// Returns the configured bridge, if any.
    pub fn bridge(&self) -> Option<&CommandParser> {
        self.bridge.as_ref()
    }
}

impl HdlParser for RoutingParser {
    fn parse(
        &self,
        files: &[PathBuf],
        language: Language,
        include_dirs: &[PathBuf],
        debug: bool,
    ) -> Result<HdlContext, ParseError> {
        if language == Language::HdlConvertorJson {
            return self.json.parse(files, language, include_dirs, debug);
        }
        match &self.bridge {
            Some(bridge) => bridge.parse(files, language, include_dirs, debug),
            None => Err(ParseError::UnsupportedLanguage(language)),
        }
    }
}
