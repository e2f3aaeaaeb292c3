//! Design units: libraries, imports, module declarations and definitions.
//!
//! A module can appear in two shapes. Verilog produces a single
//! [`HdlModuleDef`] whose `dec` holds the interface. VHDL produces a bare
//! [`HdlModuleDec`] (the entity) followed by an [`HdlModuleDef`] (the
//! architecture) with `dec` set to `None` and `module_name` naming the
//! entity. Code matching modules by name has to accept both shapes.

use crate::value::{HdlIdDef, HdlMapItem};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A `library` clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HdlLibrary {
    /// The library name.
    pub name: String,
}

/// A `use` clause or package import, stored as its dotted path segments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HdlImport {
    /// Path segments, e.g. `["ieee", "std_logic_1164", "all"]`.
    pub path: Vec<String>,
}

/// A module interface: name, parameters (generics) and ports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HdlModuleDec {
    /// The module (entity) name.
    pub name: String,
    /// Parameters in Verilog, generics in VHDL.
    #[serde(default)]
    pub params: Vec<HdlIdDef>,
    /// The external port list, in declaration order.
    #[serde(default)]
    pub ports: Vec<HdlIdDef>,
}

impl HdlModuleDec {
    /// Creates an interface with no parameters or ports.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            ports: Vec::new(),
        }
    }
}

/// A module body, optionally carrying its own interface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HdlModuleDef {
    /// The body name (the architecture name in VHDL).
    #[serde(default)]
    pub name: Option<String>,
    /// The name of the module this body implements, when `dec` is absent.
    #[serde(default)]
    pub module_name: Option<String>,
    /// The interface, when the body and interface were declared together.
    #[serde(default)]
    pub dec: Option<HdlModuleDec>,
    /// Declarations and instances inside the body, in source order.
    #[serde(default)]
    pub objs: Vec<HdlObj>,
}

impl HdlModuleDef {
    /// Returns the implemented module's name, preferring the inner declaration.
    pub fn module_name(&self) -> Option<&str> {
        self.dec
            .as_ref()
            .map(|dec| dec.name.as_str())
            .or(self.module_name.as_deref())
    }
}

/// An instance of another module inside a module body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HdlCompInst {
    /// The instance label.
    pub name: String,
    /// The instantiated module.
    pub module_name: String,
    /// Parameter (generic) associations.
    #[serde(default)]
    pub param_map: Vec<HdlMapItem>,
    /// Port associations.
    #[serde(default)]
    pub port_map: Vec<HdlMapItem>,
}

/// A node in an [`HdlContext`](crate::HdlContext) or a module body.
///
/// Serialized with an internal `__class__` tag naming the node kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "__class__")]
pub enum HdlObj {
    /// A library clause.
    HdlLibrary(HdlLibrary),
    /// A use clause or import.
    HdlImport(HdlImport),
    /// A bare module interface.
    HdlModuleDec(HdlModuleDec),
    /// A module body with an optional interface.
    HdlModuleDef(HdlModuleDef),
    /// A signal, constant, or port.
    HdlIdDef(HdlIdDef),
    /// A module instance.
    HdlCompInst(HdlCompInst),
}

/// The kind of an [`HdlObj`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjKind {
    /// [`HdlObj::HdlLibrary`]
    Library,
    /// [`HdlObj::HdlImport`]
    Import,
    /// [`HdlObj::HdlModuleDec`]
    ModuleDec,
    /// [`HdlObj::HdlModuleDef`]
    ModuleDef,
    /// [`HdlObj::HdlIdDef`]
    IdDef,
    /// [`HdlObj::HdlCompInst`]
    CompInst,
}

impl fmt::Display for ObjKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ObjKind::Library => "HdlLibrary",
            ObjKind::Import => "HdlImport",
            ObjKind::ModuleDec => "HdlModuleDec",
            ObjKind::ModuleDef => "HdlModuleDef",
            ObjKind::IdDef => "HdlIdDef",
            ObjKind::CompInst => "HdlCompInst",
        };
        f.write_str(name)
    }
}

impl HdlObj {
    /// Returns the node kind.
    pub fn kind(&self) -> ObjKind {
        match self {
            HdlObj::HdlLibrary(_) => ObjKind::Library,
            HdlObj::HdlImport(_) => ObjKind::Import,
            HdlObj::HdlModuleDec(_) => ObjKind::ModuleDec,
            HdlObj::HdlModuleDef(_) => ObjKind::ModuleDef,
            HdlObj::HdlIdDef(_) => ObjKind::IdDef,
            HdlObj::HdlCompInst(_) => ObjKind::CompInst,
        }
    }

    /// Returns the node's own `name` attribute.
    ///
    /// Imports have no name, and a module definition's name is its body name
    /// (which may be absent), not the name of the module it implements.
    pub fn name(&self) -> Option<&str> {
        match self {
            HdlObj::HdlLibrary(lib) => Some(&lib.name),
            HdlObj::HdlImport(_) => None,
            HdlObj::HdlModuleDec(dec) => Some(&dec.name),
            HdlObj::HdlModuleDef(def) => def.name.as_deref(),
            HdlObj::HdlIdDef(id) => Some(&id.name),
            HdlObj::HdlCompInst(inst) => Some(&inst.name),
        }
    }

    /// Returns the module interface this node carries, if any.
    ///
    /// A bare declaration returns itself; a definition returns its inner
    /// declaration, which may be absent.
    pub fn module_dec(&self) -> Option<&HdlModuleDec> {
        match self {
            HdlObj::HdlModuleDec(dec) => Some(dec),
            HdlObj::HdlModuleDef(def) => def.dec.as_ref(),
            _ => None,
        }
    }
}

impl From<HdlLibrary> for HdlObj {
    fn from(v: HdlLibrary) -> Self {
        HdlObj::HdlLibrary(v)
    }
}

impl From<HdlImport> for HdlObj {
    fn from(v: HdlImport) -> Self {
        HdlObj::HdlImport(v)
    }
}

impl From<HdlModuleDec> for HdlObj {
    fn from(v: HdlModuleDec) -> Self {
        HdlObj::HdlModuleDec(v)
    }
}

impl From<HdlModuleDef> for HdlObj {
    fn from(v: HdlModuleDef) -> Self {
        HdlObj::HdlModuleDef(v)
    }
}

impl From<HdlIdDef> for HdlObj {
    fn from(v: HdlIdDef) -> Self {
        HdlObj::HdlIdDef(v)
    }
}

impl From<HdlCompInst> for HdlObj {
    fn from(v: HdlCompInst) -> Self {
        HdlObj::HdlCompInst(v)
    }
}
