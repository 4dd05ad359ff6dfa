//! Parsers for OpenGL registry specification files.
//!
//! Three independent line grammars feed the pipeline:
//!
//! - `enum.spec` / `enumext.spec`: enumerant values per API ([`parse_enum_spec`])
//! - `gl.spec` / `wglext.spec`: function declarations per API ([`parse_func_spec`])
//! - `gl.tm`: spec type to C type translation ([`parse_type_map`])
//!
//! Every grammar is permissive: comments are stripped with [`clean_line`] and
//! lines that match no known shape are skipped.
//!
//! # Usage
//!
//! ```ignore
//! use glex::parser::{parse_enum_spec, parse_func_spec, parse_type_map};
//!
//! let types = parse_type_map(&std::fs::read_to_string("gl.tm")?);
//! let funcs = parse_func_spec(&std::fs::read_to_string("gl.spec")?, &types);
//! let enums = parse_enum_spec(&std::fs::read_to_string("enumext.spec")?);
//! ```

pub mod enum_spec;
pub mod func_spec;
pub mod line;
pub mod type_map;

pub use enum_spec::{parse_enum_spec, qualify_enum_name, EnumLine};
pub use func_spec::{parse_func_spec, Dialect, FuncLine};
pub use line::{check_line_widths, clean_line};
pub use type_map::parse_type_map;
