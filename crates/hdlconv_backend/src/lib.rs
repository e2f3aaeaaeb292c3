//! Parser and serializer capabilities for the hdlconv harness.
//!
//! The harness treats HDL parsing and code generation as black boxes. This
//! crate defines the two capability boundaries and ships implementations
//! for them:
//!
//! - [`HdlParser`]: turns source files into an [`HdlContext`]. [`JsonParser`]
//!   reads the JSON interchange format natively; [`CommandParser`] bridges to
//!   an external converter executable that emits the same JSON;
//!   [`RoutingParser`] picks between them by language.
//! - [`ToHdl`]: renders an [`HdlContext`] into a text sink. [`ToVerilog2005`]
//!   and [`ToVhdl2008`] cover the structural subset of the model.
//!
//! [`HdlContext`]: hdlconv_ast::HdlContext

#![warn(missing_docs)]

pub mod command;
pub mod error;
pub mod json;
pub mod parser;
pub mod routing;
pub mod to;

pub use command::CommandParser;
pub use error::{ParseError, SerializeError};
pub use json::{parse_interchange, JsonParser};
pub use parser::HdlParser;
pub use routing::RoutingParser;
pub use to::{ToHdl, ToVerilog2005, ToVhdl2008};
