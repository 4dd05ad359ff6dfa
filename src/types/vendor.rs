//! Known vendor and organization tokens.

/// Suffixes the resolver may strip from an enumerant name when a `use`
/// directive points at an API that only defines the unsuffixed name.
pub const VENDOR_SUFFIXES: &[&str] = &[
    "3DFX", "3DL", "AMD", "APPLE", "ARB", "ATI", "EXT", "GREMEDY", "HP", "I3D", "IBM", "INGR",
    "INTEL", "MESA", "MESAX", "NV", "OES", "OML", "PGI", "REND", "S3", "SGI", "SGIS", "SGIX",
    "SUN", "SUNX", "WIN",
];

pub fn is_vendor(token: &str) -> bool {
    VENDOR_SUFFIXES.contains(&token)
}

/// Split a trailing vendor suffix off `name`.
///
/// `GL_DEPTH_COMPONENT32F_ARB` gives `Some("GL_DEPTH_COMPONENT32F")`; a
/// suffix outside the vendor set gives `None`.
pub fn strip_vendor_suffix(name: &str) -> Option<&str> {
    let (stem, suffix) = name.rsplit_once('_')?;
    if stem.is_empty() || !is_vendor(suffix) {
        return None;
    }
    Some(stem)
}

/// Whether the first `_`-delimited token of `name` is a vendor
/// (`ARB_pbuffer`, `EXT_swap_control`).
pub fn has_vendor_prefix(name: &str) -> bool {
    name.split('_').next().is_some_and(is_vendor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_known_suffix() {
        assert_eq!(strip_vendor_suffix("GL_FOO_ARB"), Some("GL_FOO"));
        assert_eq!(strip_vendor_suffix("GL_TEXTURE_3D_EXT"), Some("GL_TEXTURE_3D"));
    }

    #[test]
    fn test_made_up_suffix_is_kept() {
        assert_eq!(strip_vendor_suffix("GL_FOO_ACME"), None);
    }

    #[test]
    fn test_no_underscore() {
        assert_eq!(strip_vendor_suffix("ARB"), None);
        assert_eq!(strip_vendor_suffix("_ARB"), None);
    }

    #[test]
    fn test_vendor_prefix() {
        assert!(has_vendor_prefix("ARB_pbuffer"));
        assert!(has_vendor_prefix("EXT_swap_control"));
        assert!(!has_vendor_prefix("VERSION_1_0"));
    }
}
