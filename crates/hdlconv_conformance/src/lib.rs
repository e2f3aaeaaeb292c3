//! Golden-file conformance harness for HDL parsers and serializers.
//!
//! [`HdlParseTc`] drives an [`HdlParser`] over a fixture tree, renders the
//! resulting context through the serializer for a target language, and
//! compares the text with a checked-in reference under `expected/`. The
//! [`inspect`] helpers check a parsed context structurally instead.
//!
//! Fixture layout beneath the root:
//!
//! ```text
//! verilog/            Verilog sources
//! verilog/expected/   Verilog references
//! vhdl/  vhdl/expected/
//! sv_test/others/  sv_test/others/expected/
//! json/  json/expected/
//! ```

#![warn(missing_docs)]

pub mod compare;
pub mod error;
pub mod inspect;
pub mod lang_path;
pub mod parse;
pub mod render;

pub use compare::{ParseCase, TranslateCase};
pub use error::HarnessError;
pub use inspect::{check_obj_names, find_by_name, find_module_dec, names_of_kind};
pub use lang_path::{lang_dir, lang_suffix, ref_name_for, EXPECTED_DIR};
pub use render::{render, RenderFn};

use hdlconv_ast::{HdlContext, Language};
use hdlconv_backend::{CommandParser, HdlParser, RoutingParser};
use hdlconv_config::HarnessConfig;
use std::path::{Path, PathBuf};

/// A conformance harness bound to a fixture root and a parser.
pub struct HdlParseTc<P> {
    test_dir: PathBuf,
    parser: P,
    debug: bool,
    update_golden: bool,
}

impl<P: HdlParser> HdlParseTc<P> {
    /// Creates a harness over `test_dir`, with parser debugging on and
    /// golden-update mode off.
    pub fn new(test_dir: impl Into<PathBuf>, parser: P) -> Self {
        Self {
            test_dir: test_dir.into(),
            parser,
            debug: true,
            update_golden: false,
        }
    }

    /// Creates a harness from a loaded configuration.
    ///
    /// A relative fixture root is resolved against `base_dir`.
    pub fn from_config(config: &HarnessConfig, base_dir: &Path, parser: P) -> Self {
        Self::new(config.fixture_root(base_dir), parser)
            .with_debug(config.fixtures.debug)
            .with_update_golden(config.golden.update)
    }

    /// Sets the debug flag forwarded to the parser.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Switches golden-update mode: references are rewritten, not compared.
    pub fn with_update_golden(mut self, update: bool) -> Self {
        self.update_golden = update;
        self
    }

    /// Returns the fixture root.
    pub fn test_dir(&self) -> &Path {
        &self.test_dir
    }

    /// Returns the parser.
    pub fn parser(&self) -> &P {
        &self.parser
    }

    /// Parses a fixture; see [`parse::parse_file`].
    pub fn parse_file(
        &self,
        file_name: &str,
        language: Language,
        lang_dir: Option<&Path>,
    ) -> Result<(PathBuf, HdlContext), HarnessError> {
        parse::parse_file(
            &self.parser,
            &self.test_dir,
            file_name,
            language,
            lang_dir,
            self.debug,
        )
    }

    /// Parses in the source language, renders in the destination language,
    /// and compares with the reference.
    pub fn translate_with_ref(&self, case: &TranslateCase<'_>) -> Result<(), HarnessError> {
        let ref_name = match case.ref_file_name {
            Some(name) => name.to_string(),
            None => ref_name_for(case.file_name, case.dst)?,
        };
        let src_dir = lang_dir(case.src_dir, case.src)?;
        let (_, context) = self.parse_file(case.file_name, case.src, Some(&src_dir))?;

        let mut buff = String::new();
        (case.render)(&context, case.dst, &mut buff)?;

        let dst_dir = lang_dir(case.dst_dir, case.dst)?;
        let reference = self.test_dir.join(dst_dir).join(EXPECTED_DIR).join(ref_name);
        self.check_reference(&reference, &buff)
    }

    /// Parses and renders in one language and compares with the reference.
    pub fn parse_with_ref(&self, case: &ParseCase<'_>) -> Result<(), HarnessError> {
        let ref_name = case.ref_file_name.unwrap_or(case.file_name);
        let dir = lang_dir(case.lang_dir, case.language)?;
        let (_, context) = self.parse_file(case.file_name, case.language, Some(&dir))?;

        let mut buff = String::new();
        (case.render)(&context, case.language, &mut buff)?;

        let reference = self.test_dir.join(dir).join(EXPECTED_DIR).join(ref_name);
        self.check_reference(&reference, &buff)
    }

    fn check_reference(&self, reference: &Path, actual: &str) -> Result<(), HarnessError> {
        if self.update_golden {
            compare::update_reference(reference, actual)
        } else {
            compare::compare_with_reference(reference, actual)
        }
    }
}

/// Builds the external converter bridge named in `config`, if any.
pub fn command_parser(config: &HarnessConfig) -> Option<CommandParser> {
    config
        .parser
        .as_ref()
        .map(|p| CommandParser::new(&p.command).args(p.args.iter().cloned()))
}

/// Loads `hdlconv.toml` from `base_dir` (or defaults) and builds a harness
/// that reads JSON natively and routes HDL input to the configured bridge.
///
/// [`UPDATE_GOLDEN_ENV`](hdlconv_config::UPDATE_GOLDEN_ENV) is honored.
pub fn load_harness(base_dir: &Path) -> Result<HdlParseTc<RoutingParser>, HarnessError> {
    let mut config = hdlconv_config::load_config_or_default(base_dir)?;
    config.apply_env();
    let mut parser = RoutingParser::new();
    if let Some(bridge) = command_parser(&config) {
        parser = parser.with_bridge(bridge);
    }
    Ok(HdlParseTc::from_config(&config, base_dir, parser))
}
