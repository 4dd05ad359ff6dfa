//! Line normalization shared by all spec grammars.

use std::borrow::Cow;

use log::debug;

use crate::diagnostics::Diagnostics;

/// Strip comments and surrounding whitespace from one physical line.
///
/// Removes everything from the first `#` that is not preceded by a
/// backslash, then a `/* ... */` block spanning from the first `/*` to the
/// last `*/`. An empty result means the line carries nothing to parse.
pub fn clean_line(raw: &str) -> Cow<'_, str> {
    let line = strip_line_comment(raw);
    match strip_block_comment(line) {
        Some(joined) => Cow::Owned(joined.trim().to_string()),
        None => Cow::Borrowed(line.trim()),
    }
}

fn strip_line_comment(line: &str) -> &str {
    let bytes = line.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'#' && (i == 0 || bytes[i - 1] != b'\\') {
            return &line[..i];
        }
    }
    line
}

fn strip_block_comment(line: &str) -> Option<String> {
    let start = line.find("/*")?;
    let end = line.rfind("*/")?;
    if end < start + 2 {
        return None;
    }
    Some(format!("{}{}", &line[..start], &line[end + 2..]))
}

/// Iterate over the non-empty cleaned lines of `source`.
pub(crate) fn cleaned_lines(source: &str) -> impl Iterator<Item = Cow<'_, str>> {
    source
        .lines()
        .map(clean_line)
        .filter(|line| !line.is_empty())
}

/// Record a warning for every raw line wider than `max_width` characters.
pub fn check_line_widths(
    resource: &str,
    source: &str,
    max_width: usize,
    diagnostics: &mut Diagnostics,
) {
    for (index, line) in source.lines().enumerate() {
        let width = line.trim_end_matches('\r').chars().count();
        if width > max_width {
            let message = format!(
                "{}:{}: line is {} characters wide (maximum {})",
                resource,
                index + 1,
                width,
                max_width
            );
            debug!("{}", message);
            diagnostics.warning("glex::parse::line-width", message);
        }
    }
}

pub(crate) fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// A non-empty run of `[A-Za-z0-9_]`.
pub(crate) fn is_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_word_char)
}

/// Split the leading word off `s`. The word may be empty.
pub(crate) fn split_word(s: &str) -> (&str, &str) {
    let end = s.find(|c: char| !is_word_char(c)).unwrap_or(s.len());
    s.split_at(end)
}

/// Whether `text` contains `word` delimited by non-word characters.
pub(crate) fn contains_word(text: &str, word: &str) -> bool {
    text.split(|c: char| !is_word_char(c)).any(|w| w == word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_trailing_comment() {
        assert_eq!(
            clean_line("\tDEPTH_BUFFER_BIT\t\t= 0x00000100\t# AttribMask"),
            "DEPTH_BUFFER_BIT\t\t= 0x00000100"
        );
    }

    #[test]
    fn test_comment_only_line_is_empty() {
        assert_eq!(clean_line("# AttribMask enum:"), "");
        assert_eq!(clean_line("   "), "");
    }

    #[test]
    fn test_escaped_hash_is_kept() {
        assert_eq!(clean_line(r"passthru: \#include <x.h>"), r"passthru: \#include <x.h>");
    }

    #[test]
    fn test_strip_block_comment() {
        assert_eq!(clean_line("passthru: /* AttribMask */"), "passthru:");
        assert_eq!(clean_line("A /* x */ = /* y */ 1"), "A  1");
    }

    #[test]
    fn test_unterminated_block_is_kept() {
        assert_eq!(clean_line("A /* open"), "A /* open");
        assert_eq!(clean_line("A /*/ B"), "A /*/ B");
    }

    #[test]
    fn test_no_delimiters_is_noop() {
        assert_eq!(clean_line("CullFace(mode)"), "CullFace(mode)");
    }

    #[test]
    fn test_cleaned_lines_skips_blank() {
        let lines: Vec<_> = cleaned_lines("a\n\n# c\n  b  \n").collect();
        assert_eq!(lines, ["a", "b"]);
    }

    #[test]
    fn test_line_width_warning() {
        let mut diagnostics = Diagnostics::new();
        check_line_widths("gl.spec", "short\nthis line is too long\n", 10, &mut diagnostics);

        assert_eq!(diagnostics.warning_count(), 1);
        let d = diagnostics.iter().next().unwrap();
        assert!(d.message.starts_with("gl.spec:2:"));
    }

    #[test]
    fn test_word_helpers() {
        assert!(is_word("VERSION_1_0"));
        assert!(!is_word("a-b"));
        assert!(!is_word(""));
        assert_eq!(split_word("Int32 in value"), ("Int32", " in value"));
        assert_eq!(split_word(" x"), ("", " x"));
        assert!(contains_word("in array [COMPSIZE(n)]", "array"));
        assert!(!contains_word("in arrays", "array"));
    }
}
