//! Enumerant specification parser.
//!
//! Parses `enum.spec`/`enumext.spec` style files into an `EnumTable`:
//!
//! ```text
//! passthru: /* AttribMask */
//! VERSION_1_1 enum:
//!     DEPTH_BUFFER_BIT        = 0x00000100    # AttribMask
//!     use ARB_depth_buffer_float  DEPTH_COMPONENT32F
//! ```

use log::{debug, trace};

use crate::types::{EnumTable, EnumValue};

use super::line::{cleaned_lines, is_word};

/// Prefix added to every enumerant that has no platform prefix of its own.
pub const ENUM_PREFIX: &str = "GL_";

/// Prefixes that mark an enumerant as already namespaced.
pub const PLATFORM_PREFIXES: &[&str] = &["WGL", "GLX"];

/// The recognized shapes of an enum spec line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumLine<'a> {
    /// `passthru: ...`, verbatim C content that carries no enumerants.
    Passthru,
    /// `<api> enum:`
    Section(&'a str),
    /// `<name> = <value>`
    Literal { name: &'a str, value: &'a str },
    /// `use <api> <name>`
    Use { api: &'a str, name: &'a str },
}

impl<'a> EnumLine<'a> {
    /// Classify a cleaned line, trying each shape in priority order.
    pub fn classify(line: &'a str) -> Option<Self> {
        if line.starts_with("passthru:") {
            return Some(EnumLine::Passthru);
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();

        if let &[api, "enum:"] = tokens.as_slice() {
            if is_word(api) {
                return Some(EnumLine::Section(api));
            }
        }

        if let Some((name, value)) = line.split_once('=') {
            let (name, value) = (name.trim(), value.trim());
            if is_word(name) && is_word(value) {
                return Some(EnumLine::Literal { name, value });
            }
        }

        if let &["use", api, name] = tokens.as_slice() {
            if is_word(api) && is_word(name) {
                return Some(EnumLine::Use { api, name });
            }
        }

        None
    }
}

/// Apply the `GL_` namespace to an enumerant name unless it already carries
/// a platform prefix.
pub fn qualify_enum_name(name: &str) -> String {
    let first = name.split('_').next().unwrap_or(name);
    if PLATFORM_PREFIXES.contains(&first) && name.len() > first.len() {
        name.to_string()
    } else {
        format!("{}{}", ENUM_PREFIX, name)
    }
}

/// Parse an enum spec into a table of literals and unresolved references.
///
/// Lines that match no known shape are skipped, as are enumerant lines that
/// appear before the first section header.
pub fn parse_enum_spec(source: &str) -> EnumTable {
    let mut table = EnumTable::new();
    let mut current: Option<String> = None;

    for line in cleaned_lines(source) {
        let Some(parsed) = EnumLine::classify(&line) else {
            trace!("Skipping enum spec line: {}", line);
            continue;
        };

        match parsed {
            EnumLine::Passthru => {}
            EnumLine::Section(api) => {
                table.open_section(api);
                current = Some(api.to_string());
            }
            EnumLine::Literal { name, value } => {
                let Some(api) = &current else {
                    debug!("Enumerant {} appears before any section, skipping", name);
                    continue;
                };
                table.insert(
                    api,
                    qualify_enum_name(name),
                    EnumValue::Literal(value.to_string()),
                );
            }
            EnumLine::Use { api: target, name } => {
                let Some(api) = &current else {
                    debug!("use {} {} appears before any section, skipping", target, name);
                    continue;
                };
                table.insert(
                    api,
                    qualify_enum_name(name),
                    EnumValue::Reference(target.to_string()),
                );
            }
        }
    }

    table
}
