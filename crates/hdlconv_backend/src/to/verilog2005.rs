//! Verilog-2005 serializer.

use super::{pair_split_modules, write_list, IndentWriter, ToHdl};
use crate::error::SerializeError;
use hdlconv_ast::{
    Direction, HdlCompInst, HdlContext, HdlIdDef, HdlMapItem, HdlModuleDec, HdlObj, HdlType,
};
use std::fmt;
use tracing::trace;

/// Renders a context as Verilog-2005.
///
/// A VHDL entity and its architecture become one `module`, emitted where
/// the first of the two appears. Library and use clauses have no Verilog
/// counterpart and are dropped.
pub struct ToVerilog2005<'w> {
    w: IndentWriter<'w>,
}

impl<'w> ToVerilog2005<'w> {
    /// Creates a serializer writing to `out`.
    pub fn new(out: &'w mut dyn fmt::Write) -> Self {
        Self {
            w: IndentWriter::new(out),
        }
    }

    fn visit_module(
        &mut self,
        name: &str,
        dec: Option<&HdlModuleDec>,
        body: &[HdlObj],
    ) -> Result<(), SerializeError> {
        let (params, ports) = dec.map_or((&[][..], &[][..]), |d| (&d.params[..], &d.ports[..]));
        match (params.is_empty(), ports.is_empty()) {
            (true, true) => self.w.line(format_args!("module {name};"))?,
            (false, true) => {
                self.w.line(format_args!("module {name} #("))?;
                self.visit_params(params)?;
                self.w.line(format_args!(");"))?;
            }
            (true, false) => {
                self.w.line(format_args!("module {name} ("))?;
                self.visit_ports(ports)?;
                self.w.line(format_args!(");"))?;
            }
            (false, false) => {
                self.w.line(format_args!("module {name} #("))?;
                self.visit_params(params)?;
                self.w.line(format_args!(") ("))?;
                self.visit_ports(ports)?;
                self.w.line(format_args!(");"))?;
            }
        }
        self.w.indent();
        for obj in body {
            self.visit_body_item(obj)?;
        }
        self.w.dedent();
        self.w.line(format_args!("endmodule"))?;
        Ok(())
    }

    fn visit_params(&mut self, params: &[HdlIdDef]) -> fmt::Result {
        self.w.indent();
        write_list(&mut self.w, params, ",", |p| {
            format!("parameter {}{}{}", param_type(&p.ty), p.name, initializer(p))
        })?;
        self.w.dedent();
        Ok(())
    }

    fn visit_ports(&mut self, ports: &[HdlIdDef]) -> fmt::Result {
        self.w.indent();
        write_list(&mut self.w, ports, ",", |p| {
            let dir = match p.direction {
                Some(Direction::In) => "input",
                Some(Direction::Out) => "output",
                Some(Direction::Inout) | None => "inout",
            };
            format!("{dir} {}{}", net_type(&p.ty), p.name)
        })?;
        self.w.dedent();
        Ok(())
    }

    fn visit_body_item(&mut self, obj: &HdlObj) -> Result<(), SerializeError> {
        match obj {
            HdlObj::HdlIdDef(id) => self.visit_id_def(id)?,
            HdlObj::HdlCompInst(inst) => self.visit_comp_inst(inst)?,
            other => trace!(kind = %other.kind(), "skipping nested object"),
        }
        Ok(())
    }

    fn visit_id_def(&mut self, id: &HdlIdDef) -> fmt::Result {
        if id.is_const {
            self.w.line(format_args!(
                "localparam {}{}{};",
                param_type(&id.ty),
                id.name,
                initializer(id)
            ))
        } else {
            self.w.line(format_args!(
                "{}{}{};",
                net_type(&id.ty),
                id.name,
                initializer(id)
            ))
        }
    }

    fn visit_comp_inst(&mut self, inst: &HdlCompInst) -> fmt::Result {
        let HdlCompInst {
            name,
            module_name,
            param_map,
            port_map,
        } = inst;
        let opener = if param_map.is_empty() {
            format!("{module_name} {name} (")
        } else {
            self.w.line(format_args!("{module_name} #("))?;
            self.visit_map(param_map)?;
            format!(") {name} (")
        };
        if port_map.is_empty() {
            self.w.line(format_args!("{opener});"))
        } else {
            self.w.line(format_args!("{opener}"))?;
            self.visit_map(port_map)?;
            self.w.line(format_args!(");"))
        }
    }

    fn visit_map(&mut self, items: &[HdlMapItem]) -> fmt::Result {
        self.w.indent();
        write_list(&mut self.w, items, ",", |m| {
            format!(".{}({})", m.formal, m.actual)
        })?;
        self.w.dedent();
        Ok(())
    }
}

impl ToHdl for ToVerilog2005<'_> {
    fn visit_hdl_context(&mut self, context: &HdlContext) -> Result<(), SerializeError> {
        let partner = pair_split_modules(context);
        let mut first = true;
        for (i, obj) in context.iter().enumerate() {
            if partner.get(&i).is_some_and(|&j| j < i) {
                continue;
            }
            if matches!(obj, HdlObj::HdlLibrary(_) | HdlObj::HdlImport(_)) {
                trace!(kind = %obj.kind(), "dropping clause with no Verilog counterpart");
                continue;
            }
            if !first {
                self.w.blank()?;
            }
            first = false;

            match obj {
                HdlObj::HdlModuleDec(dec) => {
                    let body = partner.get(&i).map(|&j| &context.objs[j]);
                    self.visit_module(&dec.name, Some(dec), body_of(body))?;
                }
                HdlObj::HdlModuleDef(def) => match (&def.dec, partner.get(&i)) {
                    (Some(dec), _) => self.visit_module(&dec.name, Some(dec), &def.objs)?,
                    (None, Some(&j)) => {
                        let dec = context.objs[j].module_dec();
                        let name = def.module_name().unwrap_or_default();
                        self.visit_module(name, dec, &def.objs)?;
                    }
                    (None, None) => {
                        let name = def
                            .module_name()
                            .ok_or_else(|| SerializeError::MissingModuleName(def.name.clone()))?;
                        self.visit_module(name, None, &def.objs)?;
                    }
                },
                other => self.visit_body_item(other)?,
            }
        }
        Ok(())
    }
}

fn body_of(obj: Option<&HdlObj>) -> &[HdlObj] {
    match obj {
        Some(HdlObj::HdlModuleDef(def)) => &def.objs,
        _ => &[],
    }
}

fn net_type(ty: &HdlType) -> String {
    match ty {
        HdlType::Bit => "wire ".to_string(),
        HdlType::Vector { msb, lsb } => format!("wire[{msb}:{lsb}] "),
        HdlType::Integer => "integer ".to_string(),
        HdlType::Named { name } => format!("{name} "),
    }
}

fn param_type(ty: &HdlType) -> String {
    match ty {
        HdlType::Bit => String::new(),
        HdlType::Vector { msb, lsb } => format!("[{msb}:{lsb}] "),
        HdlType::Integer => "integer ".to_string(),
        HdlType::Named { name } => format!("{name} "),
    }
}

fn initializer(id: &HdlIdDef) -> String {
    id.value
        .as_ref()
        .map(|v| format!(" = {v}"))
        .unwrap_or_default()
}
