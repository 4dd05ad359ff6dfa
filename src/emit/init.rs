//! Init code (`<ns>.c`).

use std::fmt::Write;

use super::{Namespace, Scope, MACRO_PREFIX};

/// Render the pointer definitions and the loader function for `scope`.
///
/// The loader starts the "loaded" flag at `GL_TRUE` and ANDs in one
/// non-null check per looked-up address, so it reports failure if any
/// single function is missing.
pub fn render_init_code(scope: Scope<'_>) -> String {
    let namespace = Namespace::for_scope(scope);
    let name = namespace.name();
    let ignore = namespace.ignore_macro();
    let p = MACRO_PREFIX;

    let mut out = String::new();
    let _ = writeln!(out, "#include \"{}\"\n", namespace.header_file());
    let _ = writeln!(out, "#ifndef {}\n", ignore);

    out.push_str("// Initialize all function pointers to 0.\n");
    let _ = writeln!(out, "#define {p}FUNC(t,n,a) t (APIENTRY *{p}##n) a=0");
    let _ = writeln!(out, "    #include \"{}\"", namespace.funcs_file());
    let _ = writeln!(out, "#undef {p}FUNC\n");

    let _ = writeln!(out, "GLboolean {}=GL_FALSE;\n", name);

    out.push_str("// Get the addresses for all functions of this API.\n");
    let _ = writeln!(out, "GLboolean {}(void)", namespace.init_function());
    out.push_str("{\n");
    let _ = writeln!(out, "    {}=GL_TRUE;\n", name);
    let _ = writeln!(
        out,
        "#define {p}FUNC(t,n,a) {name}&=((*((void**)&{p}##n)=(void*){p}GET_PROC_ADDRESS(#n))!=0)"
    );
    let _ = writeln!(out, "    #include \"{}\"", namespace.funcs_file());
    let _ = writeln!(out, "#undef {p}FUNC\n");
    let _ = writeln!(out, "    return {};", name);
    out.push_str("}\n\n");

    let _ = writeln!(out, "#endif // {}", ignore);
    out
}
