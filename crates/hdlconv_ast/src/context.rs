//! The parsed context returned by one parser invocation.

use crate::structural::{HdlModuleDec, HdlObj};
use serde::{Deserialize, Serialize};

/// An ordered collection of top-level design units.
///
/// Order is the order in which the parser encountered the units and is
/// preserved by every consumer; serializers emit in this order and the
/// inspector reports names in this order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HdlContext {
    /// Top-level objects in source order.
    #[serde(default)]
    pub objs: Vec<HdlObj>,
}

impl HdlContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of top-level objects.
    pub fn len(&self) -> usize {
        self.objs.len()
    }

    /// Returns `true` if the context holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objs.is_empty()
    }

    /// Iterates over top-level objects in order.
    pub fn iter(&self) -> std::slice::Iter<'_, HdlObj> {
        self.objs.iter()
    }

    /// Finds the first module interface named `name`.
    ///
    /// Matches a bare declaration or a definition whose inner declaration
    /// carries the name. Definitions without a declaration are skipped.
    pub fn module_dec(&self, name: &str) -> Option<&HdlModuleDec> {
        self.objs
            .iter()
            .filter_map(HdlObj::module_dec)
            .find(|dec| dec.name == name)
    }

    /// Appends all objects of `other`, keeping their order.
    pub fn extend(&mut self, other: HdlContext) {
        self.objs.extend(other.objs);
    }
}

impl FromIterator<HdlObj> for HdlContext {
    fn from_iter<I: IntoIterator<Item = HdlObj>>(iter: I) -> Self {
        Self {
            objs: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a HdlContext {
    type Item = &'a HdlObj;
    type IntoIter = std::slice::Iter<'a, HdlObj>;

    fn into_iter(self) -> Self::IntoIter {
        self.objs.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structural::{HdlLibrary, HdlModuleDef};

    fn sample() -> HdlContext {
        [
            HdlObj::from(HdlLibrary {
                name: "ieee".into(),
            }),
            HdlModuleDef {
                name: Some("rtl".into()),
                module_name: Some("top".into()),
                dec: None,
                objs: Vec::new(),
            }
            .into(),
            HdlModuleDec::new("top").into(),
            HdlModuleDef {
                name: None,
                module_name: None,
                dec: Some(HdlModuleDec::new("sub")),
                objs: Vec::new(),
            }
            .into(),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn module_dec_skips_defs_without_dec() {
        let ctx = sample();
        assert_eq!(ctx.module_dec("top"), Some(&HdlModuleDec::new("top")));
        assert_eq!(ctx.module_dec("sub"), Some(&HdlModuleDec::new("sub")));
        assert!(ctx.module_dec("rtl").is_none());
    }

    #[test]
    fn extend_keeps_order() {
        let mut a = sample();
        let b = sample();
        a.extend(b);
        assert_eq!(a.len(), 8);
        assert_eq!(a.objs[4].name(), Some("ieee"));
    }

    #[test]
    fn empty_context_from_json() {
        let ctx: HdlContext = serde_json::from_str("{}").unwrap();
        assert!(ctx.is_empty());
    }
}
