//! Configuration types deserialized from `hdlconv.toml`.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable that turns on golden-update mode for one run.
pub const UPDATE_GOLDEN_ENV: &str = "HDLCONV_UPDATE_GOLDEN";

/// The top-level harness configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HarnessConfig {
    /// Where fixtures live and how the parser is invoked on them.
    #[serde(default)]
    pub fixtures: FixtureConfig,
    /// Golden reference maintenance.
    #[serde(default)]
    pub golden: GoldenConfig,
    /// External converter used for HDL sources.
    #[serde(default)]
    pub parser: Option<ParserConfig>,
}

/// Fixture location and parser flags.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FixtureConfig {
    /// Fixture root; relative paths are resolved against the config directory.
    #[serde(default = "default_root")]
    pub root: PathBuf,
    /// Debug flag forwarded to every parse.
    #[serde(default = "default_debug")]
    pub debug: bool,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            debug: default_debug(),
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from("tests")
}

fn default_debug() -> bool {
    true
}

/// Golden reference settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GoldenConfig {
    /// Write rendered output to the reference files instead of comparing.
    #[serde(default)]
    pub update: bool,
}

/// An external converter command.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ParserConfig {
    /// The executable to run.
    pub command: String,
    /// Fixed arguments placed before the generated ones.
    #[serde(default)]
    pub args: Vec<String>,
}

impl HarnessConfig {
    /// Returns the fixture root, resolved against `base_dir` when relative.
    pub fn fixture_root(&self, base_dir: &Path) -> PathBuf {
        if self.fixtures.root.is_absolute() {
            self.fixtures.root.clone()
        } else {
            base_dir.join(&self.fixtures.root)
        }
    }

    /// Applies [`UPDATE_GOLDEN_ENV`] from the process environment.
    pub fn apply_env(&mut self) {
        let value = std::env::var(UPDATE_GOLDEN_ENV).ok();
        self.apply_update_golden_env(value.as_deref());
    }

    /// Turns golden-update mode on when `value` is a truthy setting.
    ///
    /// An unset or falsy value leaves the file setting untouched.
    pub fn apply_update_golden_env(&mut self, value: Option<&str>) {
        if let Some(v) = value {
            if matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes") {
                tracing::info!("{UPDATE_GOLDEN_ENV} set, golden files will be rewritten");
                self.golden.update = true;
            }
        }
    }
}
