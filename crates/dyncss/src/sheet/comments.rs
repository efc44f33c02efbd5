//! Block comment stripping.

/// Removes `/* ... */` comments.
///
/// Newlines inside a comment are kept so line numbers in syntax errors still
/// point at the original source. Quoted strings are copied verbatim, so
/// `a[href^="/*"]` survives. An unterminated comment runs to the end of the
/// input.
pub fn strip_comments(source: &str) -> String {
    let mut clean = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    let mut quote: Option<char> = None;

    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            clean.push(c);
            if c == '\\' {
                if let Some(escaped) = chars.next() {
                    clean.push(escaped);
                }
            } else if c == q {
                quote = None;
            }
            continue;
        }

        if c == '"' || c == '\'' {
            quote = Some(c);
            clean.push(c);
            continue;
        }

        if c == '/' && chars.peek() == Some(&'*') {
            chars.next();
            while let Some(inner) = chars.next() {
                if inner == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    break;
                }
                if inner == '\n' {
                    clean.push('\n');
                }
            }
            continue;
        }
        clean.push(c);
    }

    clean
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_comment() {
        assert_eq!(strip_comments("a /* b */ c"), "a  c");
    }

    #[test]
    fn test_multiline_comment_keeps_newlines() {
        assert_eq!(strip_comments("a /* b\nc\n*/ d"), "a \n\n d");
    }

    #[test]
    fn test_unterminated_comment() {
        assert_eq!(strip_comments("a /* b"), "a ");
    }

    #[test]
    fn test_quoted_markers_are_kept() {
        assert_eq!(
            strip_comments(r#"a[href^="/*"] /* x */ b['*/']"#),
            r#"a[href^="/*"]  b['*/']"#
        );
        assert_eq!(strip_comments(r#"[t="a\"/*"] /**/"#), r#"[t="a\"/*"] "#);
    }

    #[test]
    fn test_no_comments() {
        assert_eq!(strip_comments("color { .a; }"), "color { .a; }");
    }
}
