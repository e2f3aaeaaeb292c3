//! Typed identifiers, values, and association items.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The direction of a port on a module boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Data flows into the module.
    In,
    /// Data flows out of the module.
    Out,
    /// Bidirectional.
    Inout,
}

/// The subset of HDL types the context model carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HdlType {
    /// A single bit (`wire` / `STD_LOGIC`).
    Bit,
    /// A descending or ascending bit vector with inclusive bounds.
    Vector {
        /// Left bound.
        msb: i64,
        /// Right bound.
        lsb: i64,
    },
    /// An integer-valued type.
    Integer,
    /// Any other type, referenced by name and emitted verbatim.
    Named {
        /// The type name.
        name: String,
    },
}

/// A literal or identifier used as a default value or an association actual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum HdlValue {
    /// An integer literal.
    Int(i64),
    /// A string literal (without quotes).
    Str(String),
    /// A reference to a named object.
    Id(String),
}

impl fmt::Display for HdlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HdlValue::Int(v) => write!(f, "{v}"),
            HdlValue::Str(s) => write!(f, "\"{s}\""),
            HdlValue::Id(name) => f.write_str(name),
        }
    }
}

/// A named, typed object: a port, a parameter/generic, a signal, or a constant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HdlIdDef {
    /// The declared name.
    pub name: String,
    /// The declared type.
    #[serde(rename = "type")]
    pub ty: HdlType,
    /// The default or initial value, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<HdlValue>,
    /// Port direction; `None` for anything that is not a port.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    /// Whether the object is a constant rather than a signal.
    #[serde(default)]
    pub is_const: bool,
}

impl HdlIdDef {
    /// Creates a plain signal declaration.
    pub fn signal(name: impl Into<String>, ty: HdlType) -> Self {
        Self {
            name: name.into(),
            ty,
            value: None,
            direction: None,
            is_const: false,
        }
    }

    /// Creates a port declaration.
    pub fn port(name: impl Into<String>, direction: Direction, ty: HdlType) -> Self {
        Self {
            direction: Some(direction),
            ..Self::signal(name, ty)
        }
    }

    /// Creates a constant (or parameter) with a value.
    pub fn constant(name: impl Into<String>, ty: HdlType, value: HdlValue) -> Self {
        Self {
            value: Some(value),
            is_const: true,
            ..Self::signal(name, ty)
        }
    }
}

/// One `formal => actual` association in a parameter or port map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HdlMapItem {
    /// The name on the instantiated module.
    pub formal: String,
    /// The connected value or signal.
    pub actual: HdlValue,
}

impl HdlMapItem {
    /// Creates an association.
    pub fn new(formal: impl Into<String>, actual: HdlValue) -> Self {
        Self {
            formal: formal.into(),
            actual,
        }
    }
}
