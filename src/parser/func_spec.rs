//! Function specification parser.
//!
//! Parses `gl.spec`/`wglext.spec` style files into a `FuncTable`. Each
//! function is a header line followed by indented property lines:
//!
//! ```text
//! CullFace(mode)
//!     return      void
//!     param       mode        CullFaceMode in value
//!     category    VERSION_1_0     # old: drawing-control
//! ```
//!
//! Types are translated through the `TypeMap` while parsing.

use indexmap::IndexMap;
use log::{debug, trace};

use crate::types::{vendor, FuncRecord, FuncTable, Param, TypeMap, VOID_PARAMS};

use super::line::{clean_line, contains_word, is_word_char, split_word};

/// Which registry file family the input comes from.
///
/// Detected from the first line of the input, which in registry files names
/// the file (`# wglext.spec file`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Gl,
    Wgl,
    Glx,
}

impl Dialect {
    pub fn detect(first_line: &str) -> Self {
        let lower = first_line.to_ascii_lowercase();
        if lower.contains("wgl") {
            Dialect::Wgl
        } else if lower.contains("glx") {
            Dialect::Glx
        } else {
            Dialect::Gl
        }
    }

    /// Prefix prepended to every function name.
    pub fn function_prefix(self) -> &'static str {
        match self {
            Dialect::Gl => "gl",
            Dialect::Wgl => "wgl",
            Dialect::Glx => "glX",
        }
    }

    /// Prefix prepended to vendor categories (`ARB_pbuffer` becomes
    /// `WGL_ARB_pbuffer`).
    pub fn category_prefix(self) -> Option<&'static str> {
        match self {
            Dialect::Gl => None,
            Dialect::Wgl => Some("WGL_"),
            Dialect::Glx => Some("GLX_"),
        }
    }
}

/// The recognized shapes of a func spec line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FuncLine<'a> {
    /// `required-props:`, `param: retval retained`, ...
    Directive,
    /// `CullFace(mode)`
    Header(&'a str),
    /// `<key> <value> [<type>] [<modifiers>]`
    Field {
        key: &'a str,
        value: &'a str,
        ty: &'a str,
        modifiers: &'a str,
    },
}

impl<'a> FuncLine<'a> {
    /// Classify a cleaned line, trying each shape in priority order.
    pub fn classify(line: &'a str) -> Option<Self> {
        let directive_end = line
            .find(|c: char| !(is_word_char(c) || c == '-'))
            .unwrap_or(line.len());
        if directive_end > 0 && line[directive_end..].starts_with(':') {
            return Some(FuncLine::Directive);
        }

        let (key, rest) = split_word(line);
        if key.is_empty() {
            return None;
        }

        if rest.starts_with('(') && rest.ends_with(')') {
            return Some(FuncLine::Header(key));
        }

        if !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let (value, rest) = split_word(rest.trim_start());
        if value.is_empty() {
            return None;
        }
        let (ty, modifiers) = split_word(rest.trim_start());

        Some(FuncLine::Field {
            key,
            value,
            ty,
            modifiers,
        })
    }
}

#[derive(Debug, Default)]
struct FuncBlock {
    category: Option<String>,
    return_type: Option<String>,
    params: Vec<Param>,
}

/// Translate a parameter type and decorate it from its modifiers.
///
/// `array` or `reference` make it a pointer; a pointer passed `in` is also
/// made `const`.
pub fn param_type(ty: &str, modifiers: &str, types: &TypeMap) -> String {
    let mut token = types.translate(ty).to_string();
    if contains_word(modifiers, "array") || contains_word(modifiers, "reference") {
        token.push('*');
        if contains_word(modifiers, "in") {
            token = format!("const {}", token);
        }
    }
    token
}

/// Parse a func spec into function records grouped by category.
///
/// Functions without a `category` are dropped. A function without `param`
/// lines gets a `GLvoid` parameter list at emission time, and one without a
/// `return` line returns `GLvoid`.
pub fn parse_func_spec(source: &str, types: &TypeMap) -> FuncTable {
    let dialect = source
        .lines()
        .next()
        .map(Dialect::detect)
        .unwrap_or(Dialect::Gl);
    debug!("Parsing func spec as {:?} dialect", dialect);

    let mut blocks: IndexMap<String, FuncBlock> = IndexMap::new();
    let mut current: Option<String> = None;

    for raw in source.lines() {
        let line = clean_line(raw);
        if line.is_empty() {
            continue;
        }

        let Some(parsed) = FuncLine::classify(&line) else {
            trace!("Skipping func spec line: {}", line);
            continue;
        };

        match parsed {
            FuncLine::Directive => {}
            FuncLine::Header(name) => {
                let name = format!("{}{}", dialect.function_prefix(), name);
                blocks.insert(name.clone(), FuncBlock::default());
                current = Some(name);
            }
            FuncLine::Field {
                key,
                value,
                ty,
                modifiers,
            } => {
                let Some(block) = current.as_ref().and_then(|name| blocks.get_mut(name)) else {
                    trace!("Field {} outside of a function, skipping", key);
                    continue;
                };

                match key {
                    "category" => {
                        let category = match dialect.category_prefix() {
                            Some(prefix) if vendor::has_vendor_prefix(value) => {
                                format!("{}{}", prefix, value)
                            }
                            _ => value.to_string(),
                        };
                        block.category = Some(category);
                    }
                    "return" => {
                        block.return_type = Some(types.translate(value).to_string());
                    }
                    "param" => {
                        let param = if ty.is_empty() {
                            Param::new("", value)
                        } else {
                            Param::new(param_type(ty, modifiers, types), value)
                        };
                        block.params.push(param);
                    }
                    _ => {}
                }
            }
        }
    }

    let mut table = FuncTable::new();
    for (name, block) in blocks {
        let Some(category) = block.category else {
            debug!("Function {} has no category, dropping it", name);
            continue;
        };
        let return_type = block
            .return_type
            .unwrap_or_else(|| VOID_PARAMS.to_string());
        table.push(&category, FuncRecord::new(return_type, name, block.params));
    }

    table
}
