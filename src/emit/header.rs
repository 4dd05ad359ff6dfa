//! API header (`<ns>.h`).

use std::fmt::Write;

use indexmap::IndexMap;

use crate::types::ResolvedEnumTable;

use super::{Namespace, Scope, GLOBALS_HEADER, MACRO_PREFIX};

fn groups<'a>(
    enums: &'a ResolvedEnumTable,
    scope: Scope<'_>,
) -> Vec<(&'a str, &'a IndexMap<String, String>)> {
    let selected: Vec<_> = match scope {
        Scope::All => enums.iter().map(|(api, defines)| (api.as_str(), defines)).collect(),
        Scope::Api(api) => enums
            .iter()
            .find(|(name, _)| name.as_str() == api)
            .map(|(name, defines)| (name.as_str(), defines))
            .into_iter()
            .collect(),
    };
    selected
        .into_iter()
        .filter(|(_, defines)| !defines.is_empty())
        .collect()
}

/// One `#define` block per API, names padded to the longest in the block.
fn write_defines(out: &mut String, api: &str, defines: &IndexMap<String, String>) {
    let width = defines.keys().map(|name| name.len()).max().unwrap_or(0);

    let _ = writeln!(out, "// {}", api);
    for (name, value) in defines {
        let _ = writeln!(out, "#define {:<width$} {}", name, value, width = width);
    }
    out.push('\n');
}

fn write_platform_gates(out: &mut String, guard: &str, ignore: &str) {
    let get_proc = format!("{}GET_PROC_ADDRESS", MACRO_PREFIX);

    out.push_str("#ifdef __linux\n");
    out.push_str("    #include <GL/glx.h>\n");
    let _ = writeln!(out, "    #ifndef {}", get_proc);
    let _ = writeln!(
        out,
        "        #define {}(n) glXGetProcAddressARB((const GLubyte*)(n))",
        get_proc
    );
    out.push_str("    #endif\n");
    if guard.contains("_WGL_") {
        out.push_str("\n    // Ignore WGL extensions under Linux.\n");
        let _ = writeln!(out, "    #define {}", ignore);
    }
    out.push_str("#endif\n\n");

    out.push_str("#ifdef _WIN32\n");
    out.push_str("    #ifndef WIN32_LEAN_AND_MEAN\n");
    out.push_str("        #define WIN32_LEAN_AND_MEAN 1\n");
    out.push_str("    #endif\n");
    out.push_str("    #include <windows.h>\n");
    let _ = writeln!(out, "    #ifndef {}", get_proc);
    let _ = writeln!(out, "        #define {}(n) wglGetProcAddress(n)", get_proc);
    out.push_str("    #endif\n");
    if guard.contains("_GLX_") {
        out.push_str("\n    // Ignore GLX extensions under Windows.\n");
        let _ = writeln!(out, "    #define {}", ignore);
    }
    out.push_str("#endif\n\n");

    // Elsewhere the includer supplies the loader macro.
    let _ = writeln!(out, "#ifndef {}", get_proc);
    let _ = writeln!(
        out,
        "    #error \"Define {}(name) for this platform before including this header.\"",
        get_proc
    );
    out.push_str("#endif\n\n");

    out.push_str("#ifndef APIENTRY\n");
    out.push_str("    #define APIENTRY\n");
    out.push_str("#endif\n\n");
}

fn write_extern_block(out: &mut String, namespace: &Namespace) {
    out.push_str("#ifdef __cplusplus\n");
    out.push_str("extern \"C\"\n{\n");
    out.push_str("#endif\n\n");

    let _ = writeln!(out, "extern GLboolean {}(void);", namespace.init_function());
    let _ = writeln!(out, "extern GLboolean {};\n", namespace.name());

    out.push_str("// List the pointer prototypes for all functions of this API.\n");
    let _ = writeln!(
        out,
        "#define {p}FUNC(t,n,a) extern t (APIENTRY *{p}##n) a",
        p = MACRO_PREFIX
    );
    let _ = writeln!(out, "    #include \"{}\"", namespace.funcs_file());
    let _ = writeln!(out, "#undef {}FUNC\n", MACRO_PREFIX);

    out.push_str("#ifdef __cplusplus\n");
    out.push_str("} // extern \"C\"\n");
    out.push_str("#endif\n\n");
}

/// Render the header for `scope`.
///
/// `has_funcs` says whether a function table was generated for the same
/// scope; only then are the loader declarations written. Returns `None`
/// when there are neither enumerants nor functions.
pub fn render_header(enums: &ResolvedEnumTable, scope: Scope<'_>, has_funcs: bool) -> Option<String> {
    let mut body = String::new();
    for (api, defines) in groups(enums, scope) {
        write_defines(&mut body, api, defines);
    }

    let namespace = Namespace::for_scope(scope);
    if has_funcs {
        write_extern_block(&mut body, &namespace);
    }

    if body.is_empty() {
        return None;
    }

    let guard = namespace.include_guard();
    let ignore = namespace.ignore_macro();

    let mut out = String::new();
    let _ = writeln!(out, "#ifndef {}", guard);
    let _ = writeln!(out, "#define {}\n", guard);

    write_platform_gates(&mut out, &guard, &ignore);

    let _ = writeln!(out, "#ifndef {}\n", ignore);
    out.push_str("#include <GL/gl.h>\n");
    let _ = writeln!(out, "#include \"{}\"\n", GLOBALS_HEADER);

    out.push_str(&body);

    let _ = writeln!(out, "#endif // {}\n", ignore);
    let _ = writeln!(out, "#endif // {}", guard);

    Some(out)
}
