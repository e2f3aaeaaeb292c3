//! Language tags for HDL dialects and the structural interchange format.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A concrete HDL dialect or the JSON interchange format.
///
/// Generic tags (`Vhdl`, `Verilog`, `SystemVerilog`) stand for "any revision";
/// revision tags pin a standard. Dialect-family queries group them. Outside
/// this crate every match needs a fallback arm, and harness code treats that
/// arm as an unsupported language.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Language {
    /// VHDL (any revision).
    Vhdl,
    /// VHDL-2008.
    Vhdl2008,
    /// Verilog (IEEE 1364, any revision).
    Verilog,
    /// Verilog-2001.
    Verilog2001,
    /// Verilog-2005.
    Verilog2005,
    /// SystemVerilog (IEEE 1800, any revision).
    SystemVerilog,
    /// SystemVerilog-2012.
    SystemVerilog2012,
    /// SystemVerilog-2017.
    SystemVerilog2017,
    /// The JSON serialization of an [`HdlContext`](crate::HdlContext).
    #[serde(rename = "json")]
    HdlConvertorJson,
}

impl Language {
    /// All language tags, in declaration order.
    pub const ALL: [Language; 9] = [
        Language::Vhdl,
        Language::Vhdl2008,
        Language::Verilog,
        Language::Verilog2001,
        Language::Verilog2005,
        Language::SystemVerilog,
        Language::SystemVerilog2012,
        Language::SystemVerilog2017,
        Language::HdlConvertorJson,
    ];

    /// Returns `true` for every Verilog and SystemVerilog tag.
    pub fn is_verilog(self) -> bool {
        matches!(
            self,
            Language::Verilog | Language::Verilog2001 | Language::Verilog2005
        ) || self.is_system_verilog()
    }

    /// Returns `true` for SystemVerilog tags only.
    pub fn is_system_verilog(self) -> bool {
        matches!(
            self,
            Language::SystemVerilog | Language::SystemVerilog2012 | Language::SystemVerilog2017
        )
    }

    /// Returns `true` for VHDL tags.
    pub fn is_vhdl(self) -> bool {
        matches!(self, Language::Vhdl | Language::Vhdl2008)
    }

    /// Returns the stable lowercase tag, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Vhdl => "vhdl",
            Language::Vhdl2008 => "vhdl2008",
            Language::Verilog => "verilog",
            Language::Verilog2001 => "verilog2001",
            Language::Verilog2005 => "verilog2005",
            Language::SystemVerilog => "system_verilog",
            Language::SystemVerilog2012 => "system_verilog2012",
            Language::SystemVerilog2017 => "system_verilog2017",
            Language::HdlConvertorJson => "json",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a known [`Language`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown language tag: '{input}'")]
pub struct ParseLanguageError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseLanguageError {
                input: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verilog_family() {
        assert!(Language::Verilog.is_verilog());
        assert!(Language::Verilog2005.is_verilog());
        assert!(Language::SystemVerilog.is_verilog());
        assert!(Language::SystemVerilog2017.is_verilog());
        assert!(!Language::Vhdl.is_verilog());
        assert!(!Language::HdlConvertorJson.is_verilog());
    }

    #[test]
    fn system_verilog_is_narrower_than_verilog() {
        assert!(Language::SystemVerilog.is_system_verilog());
        assert!(Language::SystemVerilog2012.is_system_verilog());
        assert!(!Language::Verilog.is_system_verilog());
        assert!(!Language::Verilog2001.is_system_verilog());
    }

    #[test]
    fn vhdl_family() {
        assert!(Language::Vhdl.is_vhdl());
        assert!(Language::Vhdl2008.is_vhdl());
        assert!(!Language::Verilog.is_vhdl());
        assert!(!Language::HdlConvertorJson.is_vhdl());
    }

    #[test]
    fn every_tag_has_exactly_one_family_or_is_json() {
        for lang in Language::ALL {
            let families = [lang.is_vhdl(), lang.is_verilog()]
                .into_iter()
                .filter(|&f| f)
                .count();
            let expected = usize::from(lang != Language::HdlConvertorJson);
            assert_eq!(families, expected, "{lang}");
        }
    }

    #[test]
    fn display_matches_from_str() {
        for lang in Language::ALL {
            let parsed: Language = lang.to_string().parse().unwrap();
            assert_eq!(parsed, lang);
        }
    }

    #[test]
    fn from_str_is_case_insensitive() {
        assert_eq!("VHDL".parse::<Language>().unwrap(), Language::Vhdl);
        assert_eq!(" json ".parse::<Language>().unwrap(), Language::HdlConvertorJson);
    }

    #[test]
    fn from_str_rejects_unknown() {
        let err = "vhdl2019".parse::<Language>().unwrap_err();
        assert_eq!(format!("{err}"), "unknown language tag: 'vhdl2019'");
    }

    #[test]
    fn serde_uses_tags() {
        for lang in Language::ALL {
            let json = serde_json::to_string(&lang).unwrap();
            assert_eq!(json, format!("\"{lang}\""));
        }
        let back: Language = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(back, Language::HdlConvertorJson);
    }
}
