//! Function-pointer table (`<ns>_funcs.inl`).
//!
//! The table is meant to be included with different definitions of
//! `GLEX_FUNC(t,n,a)`: once to declare the pointers, once to define them,
//! once to look them up.

use std::fmt::Write;

use crate::types::{FuncRecord, FuncTable};

use super::{Scope, MACRO_PREFIX};

fn groups<'a>(funcs: &'a FuncTable, scope: Scope<'_>) -> Vec<(&'a str, &'a [FuncRecord])> {
    match scope {
        Scope::All => funcs
            .iter()
            .map(|(api, records)| (api.as_str(), records.as_slice()))
            .filter(|(_, records)| !records.is_empty())
            .collect(),
        Scope::Api(api) => funcs
            .iter()
            .find(|(name, _)| name.as_str() == api)
            .map(|(name, records)| (name.as_str(), records.as_slice()))
            .filter(|(_, records)| !records.is_empty())
            .into_iter()
            .collect(),
    }
}

/// Render the function table for `scope`, or `None` if it has no functions.
///
/// The return type and name slots are padded to the widest entry so the
/// table reads as columns.
pub fn render_function_table(funcs: &FuncTable, scope: Scope<'_>) -> Option<String> {
    let groups = groups(funcs, scope);
    if groups.is_empty() {
        return None;
    }

    let records = groups.iter().flat_map(|(_, records)| records.iter());
    let return_width = records
        .clone()
        .map(|r| r.return_type.len() + 1)
        .max()
        .unwrap_or(0);
    let name_width = records.map(|r| r.name.len()).max().unwrap_or(0);

    let mut out = String::new();
    for (api, records) in groups {
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = writeln!(out, "// {}", api);

        for record in records {
            let return_slot = format!("{},", record.return_type);
            let name_slot = format!("{},", record.name);
            let _ = writeln!(
                out,
                "{prefix}FUNC( {return_slot:<rw$} {name_slot:<nw$} ({params}) );",
                prefix = MACRO_PREFIX,
                rw = return_width,
                nw = name_width + 1,
                params = record.params_text(),
            );
            let _ = writeln!(out, "#ifndef {}", record.name);
            let _ = writeln!(
                out,
                "    #define {name:<nw$} {prefix}{name}",
                name = record.name,
                nw = name_width,
                prefix = MACRO_PREFIX,
            );
            out.push_str("#endif\n");
        }
    }

    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Param;
    use pretty_assertions::assert_eq;

    fn table() -> FuncTable {
        let mut funcs = FuncTable::new();
        funcs.push(
            "VERSION_1_3",
            FuncRecord::new("GLvoid", "glActiveTexture", vec![Param::new("GLenum", "texture")]),
        );
        funcs.push(
            "VERSION_1_3",
            FuncRecord::new("GLboolean", "glIsList", vec![Param::new("GLuint", "list")]),
        );
        funcs.push("VERSION_1_4", FuncRecord::new("GLvoid", "glFinish", vec![]));
        funcs
    }

    #[test]
    fn test_single_api_aligned() {
        let out = render_function_table(&table(), Scope::Api("VERSION_1_3")).unwrap();
        let expected = "\
// VERSION_1_3
GLEX_FUNC( GLvoid,    glActiveTexture, (GLenum texture) );
#ifndef glActiveTexture
    #define glActiveTexture GLEX_glActiveTexture
#endif
GLEX_FUNC( GLboolean, glIsList,        (GLuint list) );
#ifndef glIsList
    #define glIsList        GLEX_glIsList
#endif
";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_all_apis_grouped() {
        let out = render_function_table(&table(), Scope::All).unwrap();
        assert!(out.starts_with("// VERSION_1_3\n"));
        assert!(out.contains("#endif\n\n// VERSION_1_4\n"));
        assert!(out.contains("GLEX_FUNC( GLvoid,    glFinish,        (GLvoid) );"));
    }

    #[test]
    fn test_unknown_api_is_none() {
        assert_eq!(render_function_table(&table(), Scope::Api("VERSION_9_9")), None);
        assert_eq!(render_function_table(&FuncTable::new(), Scope::All), None);
    }
}
