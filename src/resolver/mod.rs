//! `use` directive resolution.
//!
//! Enum specs let one API borrow another API's value for the same
//! enumerant (`use VERSION_1_2 TEXTURE_3D`). The resolver replaces every such
//! reference with a literal.
//!
//! # Lookup tiers
//!
//! ```text
//! 1. direct          target API, same name
//! 2. vendor suffix   target API, name without a known vendor suffix (_ARB, _EXT, ...)
//! 3. global          every API in table order, original then shortened name,
//!                    first numeric literal wins
//! ```
//!
//! References are resolved in a single pass against the unresolved table.
//! If the target API defines a candidate name as another `use`, the chain is
//! not followed: the other candidate may still match a literal in the target,
//! but the global tier is skipped and the reference stays unresolved. Unresolved references become
//! `NULL` and produce a diagnostic.

use std::fmt;

use indexmap::IndexMap;
use log::debug;

use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::types::{
    is_numeric_literal, strip_vendor_suffix, ApiName, EnumTable, EnumValue, ResolvedEnumTable,
    UNRESOLVED_SENTINEL,
};

/// Which lookup tier produced a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Direct,
    VendorSuffix,
    Global,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Direct => write!(f, "direct"),
            Tier::VendorSuffix => write!(f, "vendor suffix"),
            Tier::Global => write!(f, "global"),
        }
    }
}

/// Why a reference could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unresolved {
    /// The target API defines the name as another `use` pointing at `next`.
    Chained { through: ApiName, next: ApiName },
    /// No tier found a value.
    NotFound,
}

/// Result of looking up one reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved {
        value: String,
        tier: Tier,
        /// API the value was taken from.
        source: ApiName,
    },
    Unresolved(Unresolved),
}

enum Hit<'a> {
    Literal(&'a str),
    Chained(&'a str),
    Missing,
}

fn hit<'a>(section: &'a IndexMap<String, EnumValue>, name: &str) -> Hit<'a> {
    match section.get(name) {
        Some(EnumValue::Literal(value)) => Hit::Literal(value),
        Some(EnumValue::Reference(api)) => Hit::Chained(api),
        None => Hit::Missing,
    }
}

/// Look up the value `target` defines for `name`, falling back through the
/// vendor-suffix and global tiers.
pub fn lookup(table: &EnumTable, target: &str, name: &str) -> Resolution {
    let shortened = strip_vendor_suffix(name);

    let mut chained = None;
    match table.section(target) {
        Some(section) => {
            let candidates = [Some((name, Tier::Direct)), shortened.map(|s| (s, Tier::VendorSuffix))];
            for (candidate, tier) in candidates.into_iter().flatten() {
                match hit(section, candidate) {
                    Hit::Literal(value) => {
                        return Resolution::Resolved {
                            value: value.to_string(),
                            tier,
                            source: target.to_string(),
                        };
                    }
                    Hit::Chained(next) => {
                        debug!("{} in {} is another use of {}", candidate, target, next);
                        chained.get_or_insert(next);
                    }
                    Hit::Missing => {
                        debug!("Unable to resolve {} in {}", candidate, target);
                    }
                }
            }
        }
        None => debug!("{} is not a known API, searching all APIs for {}", target, name),
    }

    // A chain in the target API rules out the global tier.
    if let Some(next) = chained {
        return Resolution::Unresolved(Unresolved::Chained {
            through: target.to_string(),
            next: next.to_string(),
        });
    }

    for (api, section) in table.iter() {
        for candidate in [Some(name), shortened].into_iter().flatten() {
            if let Some(EnumValue::Literal(value)) = section.get(candidate) {
                if is_numeric_literal(value) {
                    return Resolution::Resolved {
                        value: value.clone(),
                        tier: Tier::Global,
                        source: api.clone(),
                    };
                }
            }
        }
    }

    Resolution::Unresolved(Unresolved::NotFound)
}

fn unresolved_diagnostic(api: &str, name: &str, target: &str, reason: &Unresolved) -> Diagnostic {
    match reason {
        Unresolved::Chained { through, next } => Diagnostic::error(
            "glex::resolve::chained",
            format!(
                "{} in {}: {} defines it as another use of {}, chains are not followed",
                name, api, through, next
            ),
        )
        .with_help(format!("Point the use directive at {} directly", next)),
        Unresolved::NotFound => Diagnostic::warning(
            "glex::resolve::unresolved",
            format!("{} in {}: no value found via {}", name, api, target),
        )
        .with_help(format!("Defaulting to {}", UNRESOLVED_SENTINEL)),
    }
}

/// Resolve every reference in `table`.
///
/// Literals are copied unchanged. References that cannot be resolved become
/// `NULL` and add a diagnostic naming the API and enumerant.
pub fn resolve(table: &EnumTable, diagnostics: &mut Diagnostics) -> ResolvedEnumTable {
    let mut resolved = ResolvedEnumTable::new();

    for (api, section) in table.iter() {
        resolved.open_section(api);

        for (name, value) in section {
            let literal = match value {
                EnumValue::Literal(literal) => literal.clone(),
                EnumValue::Reference(target) => match lookup(table, target, name) {
                    Resolution::Resolved {
                        value,
                        tier,
                        source,
                    } => {
                        if tier != Tier::Direct {
                            debug!("Resolved {} in {} from {} ({} lookup)", name, api, source, tier);
                        }
                        value
                    }
                    Resolution::Unresolved(reason) => {
                        debug!("Ultimately did not find {} for {}", name, api);
                        diagnostics.push(unresolved_diagnostic(api, name, target, &reason));
                        UNRESOLVED_SENTINEL.to_string()
                    }
                },
            };
            resolved.insert(api, name.clone(), literal);
        }
    }

    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Severity;
    use crate::parser::parse_enum_spec;

    fn resolve_source(source: &str) -> (ResolvedEnumTable, Diagnostics) {
        let table = parse_enum_spec(source);
        let mut diagnostics = Diagnostics::new();
        let resolved = resolve(&table, &mut diagnostics);
        (resolved, diagnostics)
    }

    #[test]
    fn test_direct_lookup() {
        let (resolved, diagnostics) =
            resolve_source("VERSION_1_0 enum:\n\tFOO = 0x1\nEXT_bar enum:\n\tuse VERSION_1_0 FOO\n");

        assert_eq!(resolved.get("EXT_bar", "GL_FOO"), Some("0x1"));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_literals_copied_unchanged() {
        let (resolved, _) = resolve_source("A enum:\n\tX = 0x0001\n\tY = 10\n");
        assert_eq!(resolved.get("A", "GL_X"), Some("0x0001"));
        assert_eq!(resolved.get("A", "GL_Y"), Some("10"));
    }

    #[test]
    fn test_two_hop_chain_is_not_followed() {
        let source = "\
VERSION_1_0 enum:
\tFOO = 0x1
EXT_bar enum:
\tuse VERSION_1_0 FOO
EXT_baz enum:
\tuse EXT_bar FOO
";
        let (resolved, diagnostics) = resolve_source(source);

        assert_eq!(resolved.get("EXT_bar", "GL_FOO"), Some("0x1"));
        assert_eq!(resolved.get("EXT_baz", "GL_FOO"), Some("NULL"));
        assert_eq!(diagnostics.len(), 1);

        let d = diagnostics.iter().next().unwrap();
        assert_eq!(d.code, "glex::resolve::chained");
        assert_eq!(d.severity, Severity::Error);
        assert!(d.message.contains("GL_FOO in EXT_baz"));
    }

    #[test]
    fn test_chained_direct_name_still_tries_shortened_name() {
        let source = "\
X enum:
\tFOO = 0x9
VERSION_3_0 enum:
\tuse X FOO_ARB
\tFOO = 0x5
";
        let table = parse_enum_spec(source);
        assert_eq!(
            lookup(&table, "VERSION_3_0", "GL_FOO_ARB"),
            Resolution::Resolved {
                value: "0x5".into(),
                tier: Tier::VendorSuffix,
                source: "VERSION_3_0".into()
            }
        );
    }

    #[test]
    fn test_chained_name_skips_global_search() {
        let source = "\
X enum:
\tFOO_ARB = 0x9
VERSION_3_0 enum:
\tuse X FOO_ARB
";
        let table = parse_enum_spec(source);
        assert_eq!(
            lookup(&table, "VERSION_3_0", "GL_FOO_ARB"),
            Resolution::Unresolved(Unresolved::Chained {
                through: "VERSION_3_0".into(),
                next: "X".into()
            })
        );
    }

    #[test]
    fn test_chain_lookup_result() {
        let table = parse_enum_spec(
            "A enum:\n\tFOO = 0x1\nB enum:\n\tuse A FOO\nC enum:\n\tuse B FOO\n",
        );
        assert_eq!(
            lookup(&table, "B", "GL_FOO"),
            Resolution::Unresolved(Unresolved::Chained {
                through: "B".into(),
                next: "A".into()
            })
        );
    }

    #[test]
    fn test_vendor_suffix_stripped() {
        let table = parse_enum_spec(
            "VERSION_3_0 enum:\n\tDEPTH_COMPONENT32F = 0x8CAC\nARB_depth_buffer_float enum:\n\tuse VERSION_3_0 DEPTH_COMPONENT32F_ARB\n",
        );
        assert_eq!(
            lookup(&table, "VERSION_3_0", "GL_DEPTH_COMPONENT32F_ARB"),
            Resolution::Resolved {
                value: "0x8CAC".into(),
                tier: Tier::VendorSuffix,
                source: "VERSION_3_0".into()
            }
        );
    }

    #[test]
    fn test_made_up_suffix_falls_through_to_global() {
        let source = "\
A enum:
\tFOO = 0x1
C enum:
\tFOO_ACME = 0x5
B enum:
\tuse A FOO_ACME
";
        let table = parse_enum_spec(source);
        assert_eq!(
            lookup(&table, "A", "GL_FOO_ACME"),
            Resolution::Resolved {
                value: "0x5".into(),
                tier: Tier::Global,
                source: "C".into()
            }
        );
    }

    #[test]
    fn test_made_up_suffix_without_global_match_is_sentinel() {
        let (resolved, diagnostics) =
            resolve_source("A enum:\n\tFOO = 0x1\nB enum:\n\tuse A FOO_ACME\n");

        assert_eq!(resolved.get("B", "GL_FOO_ACME"), Some("NULL"));
        assert_eq!(diagnostics.with_code("glex::resolve::unresolved").count(), 1);
        assert_eq!(diagnostics.warning_count(), 1);
        assert_eq!(diagnostics.error_count(), 0);
    }

    #[test]
    fn test_wrong_api_name_uses_global_search() {
        let (resolved, diagnostics) = resolve_source(
            "VERSION_1_2 enum:\n\tTEXTURE_3D = 0x806F\nEXT_texture3D enum:\n\tuse VERSION_1_3 TEXTURE_3D\n",
        );
        assert_eq!(resolved.get("EXT_texture3D", "GL_TEXTURE_3D"), Some("0x806F"));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_global_search_follows_table_order() {
        let table = parse_enum_spec(
            "FIRST enum:\n\tFOO = 0x1\nSECOND enum:\n\tFOO = 0x2\nTHIRD enum:\n\tuse MISSING FOO\n",
        );
        match lookup(&table, "MISSING", "GL_FOO") {
            Resolution::Resolved { value, source, .. } => {
                assert_eq!(value, "0x1");
                assert_eq!(source, "FIRST");
            }
            other => panic!("expected resolution, got {:?}", other),
        }
    }

    #[test]
    fn test_global_search_skips_non_numeric() {
        let table = parse_enum_spec(
            "FIRST enum:\n\tFOO = BAR\nSECOND enum:\n\tFOO = 7\nTHIRD enum:\n\tuse MISSING FOO\n",
        );
        match lookup(&table, "MISSING", "GL_FOO") {
            Resolution::Resolved { value, .. } => assert_eq!(value, "7"),
            other => panic!("expected resolution, got {:?}", other),
        }
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let source = "\
A enum:
\tFOO = 0x1
B enum:
\tuse A FOO
\tuse A MISSING
C enum:
\tuse B FOO
";
        let (first, first_diagnostics) = resolve_source(source);
        let (second, second_diagnostics) = resolve_source(source);

        assert_eq!(first, second);
        assert_eq!(first_diagnostics.len(), second_diagnostics.len());
    }

    #[test]
    fn test_empty_sections_kept() {
        let (resolved, _) = resolve_source("EMPTY enum:\nA enum:\n\tX = 1\n");
        let apis: Vec<&str> = resolved.api_names().collect();
        assert_eq!(apis, ["EMPTY", "A"]);
    }
}
