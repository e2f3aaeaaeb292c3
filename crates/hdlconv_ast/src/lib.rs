//! Generic in-memory HDL design representation.
//!
//! This crate defines the [`Language`] tag used to select parsers and
//! serializers, and the [`HdlContext`] produced by one parser invocation:
//! an ordered list of top-level [`HdlObj`] design units. The same types
//! double as the JSON interchange schema through their serde derives.

#![warn(missing_docs)]

pub mod context;
pub mod language;
pub mod structural;
pub mod value;

pub use context::HdlContext;
pub use language::{Language, ParseLanguageError};
pub use structural::{
    HdlCompInst, HdlImport, HdlLibrary, HdlModuleDec, HdlModuleDef, HdlObj, ObjKind,
};
pub use value::{Direction, HdlIdDef, HdlMapItem, HdlType, HdlValue};
