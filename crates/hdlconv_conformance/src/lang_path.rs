//! Fixture directory and reference-file suffix per language.

use crate::error::HarnessError;
use hdlconv_ast::Language;
use std::path::{Path, PathBuf};

/// Name of the directory holding golden references beneath a language directory.
pub const EXPECTED_DIR: &str = "expected";

/// Returns the fixture directory for `language`, relative to the fixture root.
///
/// An explicit directory is returned unchanged. Otherwise the language
/// family decides: SystemVerilog maps to `sv_test/others`, Verilog to
/// `verilog`, VHDL to `vhdl`, and the interchange format to `json`.
pub fn lang_dir(explicit: Option<&Path>, language: Language) -> Result<PathBuf, HarnessError> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    let dir = if language.is_system_verilog() {
        Path::new("sv_test").join("others")
    } else if language.is_verilog() {
        PathBuf::from("verilog")
    } else if language.is_vhdl() {
        PathBuf::from("vhdl")
    } else if language == Language::HdlConvertorJson {
        PathBuf::from("json")
    } else {
        return Err(HarnessError::UnsupportedLanguage(language));
    };
    Ok(dir)
}

/// Returns the file suffix of references rendered in `language`.
///
/// Only the generic tags carry a suffix; revision tags are rejected so a
/// derived reference name never silently picks a dialect's extension.
pub fn lang_suffix(language: Language) -> Result<&'static str, HarnessError> {
    match language {
        Language::Vhdl => Ok(".vhd"),
        Language::Verilog => Ok(".v"),
        Language::SystemVerilog => Ok(".sv"),
        Language::HdlConvertorJson => Ok(".json"),
        other => Err(HarnessError::UnsupportedLanguage(other)),
    }
}

/// Derives a reference file name: strips the extension of `file_name` and
/// appends the suffix of `language`.
pub fn ref_name_for(file_name: &str, language: Language) -> Result<String, HarnessError> {
    let suffix = lang_suffix(language)?;
    let path = Path::new(file_name);
    let stem = match path.extension() {
        Some(ext) => &file_name[..file_name.len() - ext.len() - 1],
        None => file_name,
    };
    Ok(format!("{stem}{suffix}"))
}
