//! Anchor substitution into the rendered fragment.
//!
//! Matching happens on plain text but links are written into HTML, so the
//! literal has to be found again in the fragment. Only an occurrence that is
//! preceded by whitespace, is word-bounded, and sits in text content (not
//! inside a tag or an existing anchor) is replaced.

use super::boundary::is_whole_word;

/// Escape a value for a double-quoted HTML attribute
pub fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// `<a href="…">literal</a>`, with an optional class attribute
pub fn anchor_markup(literal: &str, href: &str, class: Option<&str>) -> String {
    match class {
        Some(class) => format!(
            r#"<a href="{}" class="{}">{}</a>"#,
            escape_attribute(href),
            escape_attribute(class),
            literal
        ),
        None => format!(r#"<a href="{}">{}</a>"#, escape_attribute(href), literal),
    }
}

/// True if `idx` falls inside a tag (`<p class="…|…">`) or inside the text
/// of an `<a>` element.
pub fn is_inside_markup(fragment: &str, idx: usize) -> bool {
    inside_markup(&fragment.to_ascii_lowercase(), idx)
}

/// `lowered` is the ASCII-lowercased fragment; byte offsets are unchanged
fn inside_markup(lowered: &str, idx: usize) -> bool {
    let Some(head) = lowered.get(..idx) else {
        return true;
    };

    let last_open = head.rfind('<');
    let last_close = head.rfind('>');
    if last_open > last_close {
        return true;
    }

    let anchor_open = ["<a ", "<a>", "<a\n", "<a\t"]
        .iter()
        .filter_map(|tag| head.rfind(tag))
        .max();
    let anchor_close = head.rfind("</a>");
    anchor_open > anchor_close
}

/// Replace the first eligible occurrence of `literal` (together with the one
/// whitespace character before it) by a space and `anchor`.
///
/// Returns `None` when no eligible occurrence exists.
pub fn substitute_first(fragment: &str, literal: &str, anchor: &str) -> Option<String> {
    if literal.is_empty() {
        return None;
    }
    let mut lowered: Option<String> = None;

    for (start, _) in fragment.match_indices(literal) {
        let end = start + literal.len();
        let Some(prev) = fragment[..start].chars().next_back() else {
            continue;
        };
        if !prev.is_whitespace() || !is_whole_word(fragment, start, end) {
            continue;
        }
        let lowered = lowered.get_or_insert_with(|| fragment.to_ascii_lowercase());
        if inside_markup(lowered, start) {
            continue;
        }

        let ws_start = start - prev.len_utf8();
        let mut out = String::with_capacity(fragment.len() + anchor.len());
        out.push_str(&fragment[..ws_start]);
        out.push(' ');
        out.push_str(anchor);
        out.push_str(&fragment[end..]);
        return Some(out);
    }

    None
}
