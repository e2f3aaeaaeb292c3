//! VHDL-2008 serializer.

use super::{write_list, IndentWriter, ToHdl};
use crate::error::SerializeError;
use hdlconv_ast::{
    Direction, HdlCompInst, HdlContext, HdlIdDef, HdlImport, HdlMapItem, HdlModuleDec,
    HdlModuleDef, HdlObj, HdlType,
};
use std::fmt;
use tracing::trace;

/// Renders a context as VHDL-2008.
///
/// A module definition that carries its own declaration (the Verilog shape)
/// becomes an entity followed by an architecture; an unnamed body is called
/// `rtl`. Consecutive library and use clauses are kept together, and every
/// other top-level unit is separated by a blank line.
pub struct ToVhdl2008<'w> {
    w: IndentWriter<'w>,
}

const DEFAULT_ARCH_NAME: &str = "rtl";

impl<'w> ToVhdl2008<'w> {
    /// Creates a serializer writing to `out`.
    pub fn new(out: &'w mut dyn fmt::Write) -> Self {
        Self {
            w: IndentWriter::new(out),
        }
    }

    fn visit_library(&mut self, name: &str) -> fmt::Result {
        self.w.line(format_args!("LIBRARY {name};"))
    }

    fn visit_import(&mut self, import: &HdlImport) -> fmt::Result {
        let path: Vec<&str> = import
            .path
            .iter()
            .map(|seg| {
                if seg.eq_ignore_ascii_case("all") {
                    "ALL"
                } else {
                    seg.as_str()
                }
            })
            .collect();
        self.w.line(format_args!("USE {};", path.join(".")))
    }

    fn visit_entity(&mut self, dec: &HdlModuleDec) -> fmt::Result {
        self.w.line(format_args!("ENTITY {} IS", dec.name))?;
        self.w.indent();
        if !dec.params.is_empty() {
            self.w.line(format_args!("GENERIC("))?;
            self.w.indent();
            write_list(&mut self.w, &dec.params, ";", |g| {
                format!("{} : {}{}", g.name, vhdl_type(&g.ty), initializer(g))
            })?;
            self.w.dedent();
            self.w.line(format_args!(");"))?;
        }
        if !dec.ports.is_empty() {
            self.w.line(format_args!("PORT("))?;
            self.w.indent();
            write_list(&mut self.w, &dec.ports, ";", |p| {
                let dir = match p.direction {
                    Some(Direction::In) => "IN",
                    Some(Direction::Out) => "OUT",
                    Some(Direction::Inout) | None => "INOUT",
                };
                format!("{} : {dir} {}{}", p.name, vhdl_type(&p.ty), initializer(p))
            })?;
            self.w.dedent();
            self.w.line(format_args!(");"))?;
        }
        self.w.dedent();
        self.w.line(format_args!("END ENTITY;"))
    }

    fn visit_architecture(&mut self, def: &HdlModuleDef) -> Result<(), SerializeError> {
        let entity = def
            .module_name()
            .ok_or_else(|| SerializeError::MissingModuleName(def.name.clone()))?;
        let name = def.name.as_deref().unwrap_or(DEFAULT_ARCH_NAME);
        self.w.line(format_args!("ARCHITECTURE {name} OF {entity} IS"))?;

        self.w.indent();
        for obj in &def.objs {
            if let HdlObj::HdlIdDef(id) = obj {
                self.visit_id_def(id)?;
            }
        }
        self.w.dedent();
        self.w.line(format_args!("BEGIN"))?;
        self.w.indent();
        for obj in &def.objs {
            match obj {
                HdlObj::HdlIdDef(_) => {}
                HdlObj::HdlCompInst(inst) => self.visit_comp_inst(inst)?,
                other => trace!(kind = %other.kind(), "skipping nested object"),
            }
        }
        self.w.dedent();
        self.w.line(format_args!("END ARCHITECTURE;"))?;
        Ok(())
    }

    fn visit_id_def(&mut self, id: &HdlIdDef) -> fmt::Result {
        let keyword = if id.is_const { "CONSTANT" } else { "SIGNAL" };
        self.w.line(format_args!(
            "{keyword} {} : {}{};",
            id.name,
            vhdl_type(&id.ty),
            initializer(id)
        ))
    }

    fn visit_comp_inst(&mut self, inst: &HdlCompInst) -> fmt::Result {
        let head = format!("{}: ENTITY work.{}", inst.name, inst.module_name);
        match (inst.param_map.is_empty(), inst.port_map.is_empty()) {
            (true, true) => self.w.line(format_args!("{head};")),
            (true, false) => {
                self.w.line(format_args!("{head} PORT MAP("))?;
                self.visit_map(&inst.port_map)?;
                self.w.line(format_args!(");"))
            }
            (false, true) => {
                self.w.line(format_args!("{head} GENERIC MAP("))?;
                self.visit_map(&inst.param_map)?;
                self.w.line(format_args!(");"))
            }
            (false, false) => {
                self.w.line(format_args!("{head} GENERIC MAP("))?;
                self.visit_map(&inst.param_map)?;
                self.w.line(format_args!(") PORT MAP("))?;
                self.visit_map(&inst.port_map)?;
                self.w.line(format_args!(");"))
            }
        }
    }

    fn visit_map(&mut self, items: &[HdlMapItem]) -> fmt::Result {
        self.w.indent();
        write_list(&mut self.w, items, ",", |m| format!("{} => {}", m.formal, m.actual))?;
        self.w.dedent();
        Ok(())
    }
}

impl ToHdl for ToVhdl2008<'_> {
    fn visit_hdl_context(&mut self, context: &HdlContext) -> Result<(), SerializeError> {
        let mut prev_was_clause: Option<bool> = None;
        for obj in context {
            let is_clause = matches!(obj, HdlObj::HdlLibrary(_) | HdlObj::HdlImport(_));
            if prev_was_clause.is_some_and(|prev| !(prev && is_clause)) {
                self.w.blank()?;
            }
            prev_was_clause = Some(is_clause);

            match obj {
                HdlObj::HdlLibrary(lib) => self.visit_library(&lib.name)?,
                HdlObj::HdlImport(import) => self.visit_import(import)?,
                HdlObj::HdlModuleDec(dec) => self.visit_entity(dec)?,
                HdlObj::HdlModuleDef(def) => {
                    if let Some(dec) = &def.dec {
                        self.visit_entity(dec)?;
                        self.w.blank()?;
                    }
                    self.visit_architecture(def)?;
                }
                HdlObj::HdlIdDef(id) => self.visit_id_def(id)?,
                HdlObj::HdlCompInst(inst) => self.visit_comp_inst(inst)?,
            }
        }
        Ok(())
    }
}

fn vhdl_type(ty: &HdlType) -> String {
    match ty {
        HdlType::Bit => "STD_LOGIC".to_string(),
        HdlType::Vector { msb, lsb } if msb >= lsb => {
            format!("STD_LOGIC_VECTOR({msb} DOWNTO {lsb})")
        }
        HdlType::Vector { msb, lsb } => format!("STD_LOGIC_VECTOR({msb} TO {lsb})"),
        HdlType::Integer => "INTEGER".to_string(),
        HdlType::Named { name } => name.clone(),
    }
}

fn initializer(id: &HdlIdDef) -> String {
    id.value
        .as_ref()
        .map(|v| format!(" := {v}"))
        .unwrap_or_default()
}
