//! Selector list splitting.

/// Splits `text` on any of `separators` that appear outside parentheses and
/// brackets, so `:is(.a, .b)` and `[title="a,b"]` stay intact.
///
/// Each selector is trimmed; empty entries are dropped.
pub fn split_selectors<'a>(text: &'a str, separators: &[char]) -> Vec<&'a str> {
    let mut selectors = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (i, c) in text.char_indices() {
        match c {
            '(' | '[' => depth += 1,
            ')' | ']' => depth = depth.saturating_sub(1),
            c if depth == 0 && separators.contains(&c) => {
                selectors.push(&text[start..i]);
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }
    selectors.push(&text[start..]);

    selectors
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Collapses every run of whitespace outside quoted strings to one space.
///
/// Sheets may wrap a long prelude or selector over several lines; rendered
/// rules must stay on one.
pub fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut quote: Option<char> = None;
    let mut pending_space = false;

    for c in text.trim().chars() {
        if quote.is_none() && c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        match quote {
            Some(q) if c == q => quote = None,
            None if c == '"' || c == '\'' => quote = Some(c),
            _ => {}
        }
        out.push(c);
    }

    out
}
