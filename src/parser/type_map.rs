//! Type map parser.
//!
//! Parses `gl.tm` style files. Each row has six comma-separated fields; the
//! first is the spec type and the fourth the C type:
//!
//! ```text
//! AccumOp,*,*,            GLenum,*,*
//! void,*,*,               *,*,*
//! ```

use log::trace;

use crate::types::TypeMap;

use super::line::cleaned_lines;

/// Target field value meaning "no translation".
pub const WILDCARD: &str = "*";

/// Parse a type map. Rows with fewer than four fields are skipped.
///
/// `void` always maps to `GLvoid`.
pub fn parse_type_map(source: &str) -> TypeMap {
    let mut map = TypeMap::new();

    for line in cleaned_lines(source) {
        let compact: String = line.chars().filter(|c| *c != ' ' && *c != '\t').collect();
        let fields: Vec<&str> = compact.split(',').collect();

        if fields.len() < 4 {
            trace!("Skipping type map row: {}", line);
            continue;
        }

        let (source_type, target_type) = (fields[0], fields[3]);
        if source_type.is_empty() || target_type.is_empty() || target_type == WILDCARD {
            continue;
        }

        map.insert(source_type, target_type);
    }

    map.insert("void", "GLvoid");
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rows() {
        let map = parse_type_map("AccumOp,*,*,\t\t\tGLenum,*,*\nInt32,*,*,  GLint,*,*\n");
        assert_eq!(map.get("AccumOp"), Some("GLenum"));
        assert_eq!(map.get("Int32"), Some("GLint"));
    }

    #[test]
    fn test_wildcard_target_not_recorded() {
        let map = parse_type_map("Foo,*,*,\t*,*,*\n");
        assert_eq!(map.get("Foo"), None);
        assert_eq!(map.translate("Foo"), "Foo");
    }

    #[test]
    fn test_void_always_mapped() {
        let map = parse_type_map("void,*,*,\t*,*,*\n");
        assert_eq!(map.get("void"), Some("GLvoid"));
    }

    #[test]
    fn test_last_row_wins() {
        let map = parse_type_map("Int32,*,*,GLint,*,*\nInt32,*,*,int,*,*\n");
        assert_eq!(map.get("Int32"), Some("int"));
    }

    #[test]
    fn test_short_rows_and_comments_skipped() {
        let map = parse_type_map("# type map\nBroken,*\n\nSizei,*,*,GLsizei,*,*\n");
        assert_eq!(map.get("Broken"), None);
        assert_eq!(map.get("Sizei"), Some("GLsizei"));
        // Sizei + void
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_inner_whitespace_removed() {
        let map = parse_type_map("Char ARB,*,*,  GLchar ARB,*,*\n");
        assert_eq!(map.get("CharARB"), Some("GLcharARB"));
    }
}
