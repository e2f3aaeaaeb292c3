//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::HarnessConfig;
use std::path::Path;

/// The configuration file name looked up in a directory.
pub const CONFIG_FILE_NAME: &str = "hdlconv.toml";

/// Loads and validates `<dir>/hdlconv.toml`.
pub fn load_config(dir: &Path) -> Result<HarnessConfig, ConfigError> {
    let content = std::fs::read_to_string(dir.join(CONFIG_FILE_NAME))?;
    load_config_from_str(&content)
}

/// Loads `<dir>/hdlconv.toml`, falling back to defaults when the file is absent.
///
/// Any other I/O error, and any parse or validation error, is still reported.
pub fn load_config_or_default(dir: &Path) -> Result<HarnessConfig, ConfigError> {
    match load_config(dir) {
        Err(ConfigError::IoError(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(dir = %dir.display(), "no {CONFIG_FILE_NAME}, using defaults");
            Ok(HarnessConfig::default())
        }
        other => other,
    }
}

/// Parses and validates a configuration from a string.
pub fn load_config_from_str(content: &str) -> Result<HarnessConfig, ConfigError> {
    let config: HarnessConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &HarnessConfig) -> Result<(), ConfigError> {
    if config.fixtures.root.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "fixtures.root must not be empty".to_string(),
        ));
    }
    if let Some(parser) = &config.parser {
        if parser.command.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "parser.command must not be empty".to_string(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn empty_file_is_default() {
        let config = load_config_from_str("").unwrap();
        assert_eq!(config, HarnessConfig::default());
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
[fixtures]
root = "fixtures"
debug = false

[golden]
update = true

[parser]
command = "hdlconvertor-json"
args = ["--std", "2008"]
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.fixtures.root, PathBuf::from("fixtures"));
        assert!(!config.fixtures.debug);
        assert!(config.golden.update);
        let parser = config.parser.unwrap();
        assert_eq!(parser.command, "hdlconvertor-json");
        assert_eq!(parser.args, vec!["--std", "2008"]);
    }

    #[test]
    fn partial_fixture_section_keeps_defaults() {
        let config = load_config_from_str("[fixtures]\nroot = \"t\"\n").unwrap();
        assert!(config.fixtures.debug);
    }

    #[test]
    fn empty_root_errors() {
        let err = load_config_from_str("[fixtures]\nroot = \"\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn empty_command_errors() {
        let err = load_config_from_str("[parser]\ncommand = \"  \"\n").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn invalid_toml_errors() {
        let err = load_config_from_str("this is not valid toml {{{}}}").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn load_from_dir() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "[golden]\nupdate = true\n",
        )
        .unwrap();
        let config = load_config(dir.path()).unwrap();
        assert!(config.golden.update);
    }

    #[test]
    fn missing_file_falls_back_to_default() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            load_config(dir.path()).unwrap_err(),
            ConfigError::IoError(_)
        ));
        let config = load_config_or_default(dir.path()).unwrap();
        assert_eq!(config, HarnessConfig::default());
    }
}
