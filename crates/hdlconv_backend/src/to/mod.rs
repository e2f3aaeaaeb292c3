//! Serializers rendering an [`HdlContext`] as HDL text.
//!
//! Each serializer is constructed bound to a text sink and exposes a single
//! traversal entry point, [`ToHdl::visit_hdl_context`]. Output order follows
//! context order.

mod verilog2005;
mod vhdl2008;

pub use verilog2005::ToVerilog2005;
pub use vhdl2008::ToVhdl2008;

use crate::error::SerializeError;
use hdlconv_ast::{HdlContext, HdlObj};
use std::collections::HashMap;
use std::fmt;

/// A dialect-specific serializer bound to a sink.
pub trait ToHdl {
    /// Writes the full textual rendering of `context` to the sink.
    fn visit_hdl_context(&mut self, context: &HdlContext) -> Result<(), SerializeError>;
}

/// Line-oriented writer with four-space indentation.
pub(crate) struct IndentWriter<'w> {
    out: &'w mut dyn fmt::Write,
    level: usize,
}

impl<'w> IndentWriter<'w> {
    pub(crate) fn new(out: &'w mut dyn fmt::Write) -> Self {
        Self { out, level: 0 }
    }

    /// Writes one indented line followed by `\n`.
    pub(crate) fn line(&mut self, args: fmt::Arguments<'_>) -> fmt::Result {
        for _ in 0..self.level {
            self.out.write_str("    ")?;
        }
        self.out.write_fmt(args)?;
        self.out.write_str("\n")
    }

    pub(crate) fn blank(&mut self) -> fmt::Result {
        self.out.write_str("\n")
    }

    pub(crate) fn indent(&mut self) {
        self.level += 1;
    }

    pub(crate) fn dedent(&mut self) {
        self.level = self.level.saturating_sub(1);
    }
}

/// Writes `items` one per line, separating all but the last with `sep`.
pub(crate) fn write_list<T>(
    w: &mut IndentWriter<'_>,
    items: &[T],
    sep: &str,
    mut render: impl FnMut(&T) -> String,
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        let tail = if i + 1 < items.len() { sep } else { "" };
        w.line(format_args!("{}{tail}", render(item)))?;
    }
    Ok(())
}

/// Pairs each bare module declaration with the first later-or-earlier
/// definition that names it and carries no declaration of its own.
///
/// The returned map is symmetric: both indices map to their partner.
pub(crate) fn pair_split_modules(context: &HdlContext) -> HashMap<usize, usize> {
    let mut partner = HashMap::new();
    for (i, obj) in context.iter().enumerate() {
        let HdlObj::HdlModuleDec(dec) = obj else {
            continue;
        };
        let body = context.iter().enumerate().find(|(j, other)| {
            !partner.contains_key(j)
                && matches!(other, HdlObj::HdlModuleDef(def)
                    if def.dec.is_none() && def.module_name.as_deref() == Some(dec.name.as_str()))
        });
        if let Some((j, _)) = body {
            partner.insert(i, j);
            partner.insert(j, i);
        }
    }
    partner
}
