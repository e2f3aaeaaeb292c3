//! Structural lookups over a parsed context.
//!
//! Module declarations are special: a module may be a bare declaration or
//! a definition wrapping one, and both count as the same logical entity
//! when looking a module up by name.

use crate::error::HarnessError;
use hdlconv_ast::{HdlContext, HdlModuleDec, HdlObj, ObjKind};
use tracing::trace;

/// Returns the names of top-level objects of `kind`, in context order.
///
/// For [`ObjKind::ModuleDec`] only definitions that carry an inner
/// declaration contribute, under the declaration's name. For other kinds
/// every object of the kind contributes one entry, `None` when it has no
/// name, so the length always equals the number of matching objects.
pub fn names_of_kind(context: &HdlContext, kind: ObjKind) -> Vec<Option<&str>> {
    if kind == ObjKind::ModuleDec {
        context
            .iter()
            .filter_map(|obj| match obj {
                HdlObj::HdlModuleDef(def) => def.dec.as_ref().map(|dec| Some(dec.name.as_str())),
                _ => None,
            })
            .collect()
    } else {
        context
            .iter()
            .filter(|obj| obj.kind() == kind)
            .map(HdlObj::name)
            .collect()
    }
}

/// Finds the first top-level object of `kind` named `name`.
///
/// For [`ObjKind::ModuleDec`] a bare declaration or a definition whose inner
/// declaration has the name both match; definitions lacking a declaration
/// never do. The top-level object is returned, so a match through a
/// definition yields the definition (with its body), not the inner
/// declaration; use [`find_module_dec`] for the declaration itself.
/// Returns `None` when nothing matches.
pub fn find_by_name<'c>(context: &'c HdlContext, kind: ObjKind, name: &str) -> Option<&'c HdlObj> {
    let found = if kind == ObjKind::ModuleDec {
        context
            .iter()
            .find(|obj| obj.module_dec().is_some_and(|dec| dec.name == name))
    } else {
        context
            .iter()
            .find(|obj| obj.kind() == kind && obj.name() == Some(name))
    };
    trace!(%kind, lookup = name, found = found.is_some(), "lookup by name");
    found
}

/// Finds the first module interface named `name`: a bare declaration, or
/// the inner declaration of a definition.
pub fn find_module_dec<'c>(context: &'c HdlContext, name: &str) -> Option<&'c HdlModuleDec> {
    let found = context.module_dec(name);
    trace!(lookup = name, found = found.is_some(), "module declaration lookup");
    found
}

/// Checks that the names of `kind` are exactly `expected`, in order.
///
/// An unnamed object of the kind never matches an expected name.
pub fn check_obj_names(
    context: &HdlContext,
    kind: ObjKind,
    expected: &[&str],
) -> Result<(), HarnessError> {
    let actual = names_of_kind(context, kind);
    let same = actual.len() == expected.len()
        && actual.iter().zip(expected).all(|(a, e)| *a == Some(*e));
    if same {
        return Ok(());
    }
    Err(HarnessError::NamesMismatch {
        kind,
        expected: expected.iter().map(|s| s.to_string()).collect(),
        actual: actual.into_iter().map(|n| n.map(str::to_string)).collect(),
    })
}
