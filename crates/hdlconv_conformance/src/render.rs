//! Serializer selection by language family.

use crate::error::HarnessError;
use hdlconv_ast::{HdlContext, Language};
use hdlconv_backend::{ToHdl, ToVerilog2005, ToVhdl2008};
use std::fmt;
use tracing::debug;

/// A borrowed rendering function; [`render`] is the default.
///
/// Tests that need non-default output (a sub-tree, another dialect
/// revision) pass their own function or closure with the same shape.
pub type RenderFn<'a> =
    &'a dyn Fn(&HdlContext, Language, &mut dyn fmt::Write) -> Result<(), HarnessError>;

/// Renders `context` into `sink` with the serializer for `language`'s family.
///
/// Verilog and SystemVerilog share the Verilog-2005 serializer; VHDL uses
/// VHDL-2008. The interchange format has no serializer here.
pub fn render(
    context: &HdlContext,
    language: Language,
    sink: &mut dyn fmt::Write,
) -> Result<(), HarnessError> {
    debug!(%language, objs = context.len(), "rendering context");
    if language.is_verilog() {
        ToVerilog2005::new(sink).visit_hdl_context(context)?;
    } else if language.is_vhdl() {
        ToVhdl2008::new(sink).visit_hdl_context(context)?;
    } else {
        return Err(HarnessError::RenderNotImplemented(language));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hdlconv_ast::{HdlModuleDec, HdlModuleDef, HdlObj};

    fn ctx() -> HdlContext {
        [HdlObj::from(HdlModuleDef {
            name: None,
            module_name: None,
            dec: Some(HdlModuleDec::new("top")),
            objs: vec![],
        })]
        .into_iter()
        .collect()
    }

    fn render_to_string(lang: Language) -> Result<String, HarnessError> {
        let mut out = String::new();
        render(&ctx(), lang, &mut out)?;
        Ok(out)
    }

    #[test]
    fn system_verilog_shares_verilog_serializer() {
        let v = render_to_string(Language::Verilog).unwrap();
        assert_eq!(v, "module top;\nendmodule\n");
        assert_eq!(render_to_string(Language::SystemVerilog).unwrap(), v);
        assert_eq!(render_to_string(Language::Verilog2005).unwrap(), v);
    }

    #[test]
    fn vhdl_family_uses_vhdl_serializer() {
        let out = render_to_string(Language::Vhdl2008).unwrap();
        assert!(out.starts_with("ENTITY top IS\n"));
        assert_eq!(render_to_string(Language::Vhdl).unwrap(), out);
    }

    #[test]
    fn json_rendering_not_implemented() {
        assert!(matches!(
            render_to_string(Language::HdlConvertorJson),
            Err(HarnessError::RenderNotImplemented(Language::HdlConvertorJson))
        ));
    }
}
