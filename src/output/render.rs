//! List-literal rendering of label names.
//!
//! Labels are rendered as a Python-style list literal, e.g.
//! `['bug', 'needs-review']`, so downstream workflow expressions keep
//! matching on the same text. Characters that are not printable are written
//! as `\xNN`, `\uNNNN` or `\UNNNNNNNN` escapes.

use std::fmt::Write as _;

/// Renders `labels` as a bracketed, comma-separated list of quoted strings.
///
/// An empty slice renders as `[]`.
#[must_use]
pub fn render_label_list(labels: &[String]) -> String {
    let mut rendered = String::from("[");
    for (index, label) in labels.iter().enumerate() {
        if index > 0 {
            rendered.push_str(", ");
        }
        push_quoted(&mut rendered, label);
    }
    rendered.push(']');
    rendered
}

/// Appends `value` in single quotes, or double quotes when it contains a
/// single quote but no double quote.
fn push_quoted(out: &mut String, value: &str) {
    let quote = if value.contains('\'') && !value.contains('"') {
        '"'
    } else {
        '\''
    };

    out.push(quote);
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if is_printable(c) => out.push(c),
            c => push_code_point_escape(out, c),
        }
    }
    out.push(quote);
}

/// Whether `ch` is shown literally.
///
/// Controls, separators other than the ASCII space, common format characters
/// and private-use code points are escaped. Unassigned code points are kept.
fn is_printable(ch: char) -> bool {
    if ch == ' ' {
        return true;
    }
    !(ch.is_control() || ch.is_whitespace() || is_format(ch) || is_private_use(ch))
}

const fn is_format(ch: char) -> bool {
    matches!(
        ch,
        '\u{ad}'
            | '\u{600}'..='\u{605}'
            | '\u{61c}'
            | '\u{6dd}'
            | '\u{70f}'
            | '\u{180e}'
            | '\u{200b}'..='\u{200f}'
            | '\u{202a}'..='\u{202e}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206f}'
            | '\u{feff}'
            | '\u{fff9}'..='\u{fffb}'
            | '\u{e0001}'
            | '\u{e0020}'..='\u{e007f}'
    )
}

const fn is_private_use(ch: char) -> bool {
    matches!(
        ch,
        '\u{e000}'..='\u{f8ff}' | '\u{f0000}'..='\u{ffffd}' | '\u{100000}'..='\u{10fffd}'
    )
}

fn push_code_point_escape(out: &mut String, ch: char) {
    let code = u32::from(ch);
    // Writing to a String cannot fail.
    let _written = if code <= 0xff {
        write!(out, "\\x{code:02x}")
    } else if code <= 0xffff {
        write!(out, "\\u{code:04x}")
    } else {
        write!(out, "\\U{code:08x}")
    };
}
