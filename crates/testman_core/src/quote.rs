//! Quote strings for failure messages.
//!
//! ## Notes
//! - Output is a double-quoted literal using Go `strconv.Quote` escapes, so `"a\tb"` renders as `"a\tb"`
//!   rather than with a literal tab.
//! - Printable non-ASCII characters are kept as-is.

use std::fmt::Write as _;

/// Quote `s` as a double-quoted, escaped string literal.
///
/// ## Parameters
/// - `s`: the text to quote.
///
/// ## Returns
/// - (`String`): `s` wrapped in `"` with quotes, backslashes and non-printable characters escaped.
///
/// ## Examples
/// ```rust
/// use testman_core::quote;
/// assert_eq!(quote("some string"), "\"some string\"");
/// assert_eq!(quote("say \"hi\"\n"), r#""say \"hi\"\n""#);
/// ```
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for ch in s.chars() {
        push_escaped(&mut out, ch);
    }
    out.push('"');
    out
}

fn push_escaped(out: &mut String, ch: char) {
    match ch {
        '"' => out.push_str("\\\""),
        '\\' => out.push_str("\\\\"),
        '\u{07}' => out.push_str("\\a"),
        '\u{08}' => out.push_str("\\b"),
        '\u{0C}' => out.push_str("\\f"),
        '\n' => out.push_str("\\n"),
        '\r' => out.push_str("\\r"),
        '\t' => out.push_str("\\t"),
        '\u{0B}' => out.push_str("\\v"),
        c if is_printable(c) => out.push(c),
        // Writing to String cannot fail.
        c if (c as u32) < 0x80 => {
            let _ = write!(out, "\\x{:02x}", c as u32);
        }
        c if (c as u32) < 0x10000 => {
            let _ = write!(out, "\\u{:04x}", c as u32);
        }
        c => {
            let _ = write!(out, "\\U{:08x}", c as u32);
        }
    }
}

/// Only the ASCII space counts as printable whitespace.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    !c.is_control() && !c.is_whitespace() && !is_format(c) && !is_private_use(c)
}

/// Invisible format characters (general category Cf).
fn is_format(c: char) -> bool {
    matches!(
        c,
        '\u{00AD}'
            | '\u{0600}'..='\u{0605}'
            | '\u{061C}'
            | '\u{06DD}'
            | '\u{070F}'
            | '\u{0890}'..='\u{0891}'
            | '\u{08E2}'
            | '\u{180E}'
            | '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206F}'
            | '\u{FEFF}'
            | '\u{FFF9}'..='\u{FFFB}'
            | '\u{110BD}'
            | '\u{110CD}'
            | '\u{13430}'..='\u{1343F}'
            | '\u{1BCA0}'..='\u{1BCA3}'
            | '\u{1D173}'..='\u{1D17A}'
            | '\u{E0000}'..='\u{E007F}'
    )
}

/// Private use characters (general category Co).
fn is_private_use(c: char) -> bool {
    matches!(c, '\u{E000}'..='\u{F8FF}' | '\u{F0000}'..='\u{FFFFD}' | '\u{100000}'..='\u{10FFFD}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_plain() {
        assert_eq!(quote("some string"), "\"some string\"");
        assert_eq!(quote(""), "\"\"");
    }

    #[test]
    fn test_quote_escapes() {
        assert_eq!(quote("a\"b"), r#""a\"b""#);
        assert_eq!(quote(r"\d{3}"), r#""\\d{3}""#);
        assert_eq!(quote("line\nnext\ttab\r"), r#""line\nnext\ttab\r""#);
        assert_eq!(quote("\u{07}\u{08}\u{0B}\u{0C}"), r#""\a\b\v\f""#);
    }

    #[test]
    fn test_quote_control_and_unicode() {
        assert_eq!(quote("\u{0}"), r#""\x00""#);
        assert_eq!(quote("\u{7f}"), r#""\x7f""#);
        assert_eq!(quote("\u{a0}"), r#""\u00a0""#);
        assert_eq!(quote("\u{feff}"), r#""\ufeff""#);
        assert_eq!(quote("🦀"), "\"🦀\"");
        assert_eq!(quote("héllo 世界"), "\"héllo 世界\"");
        assert_eq!(quote("\u{e0001}"), r#""\U000e0001""#);
        assert_eq!(quote("\u{ad}"), r#""\u00ad""#);
        assert_eq!(quote("\u{2060}"), r#""\u2060""#);
        assert_eq!(quote("\u{202e}"), r#""\u202e""#);
        assert_eq!(quote("\u{600}"), r#""\u0600""#);
        assert_eq!(quote("\u{e000}"), r#""\ue000""#);
        assert_eq!(quote("\u{f0000}"), r#""\U000f0000""#);
        assert_eq!(quote("soft\u{ad}hyphen"), r#""soft\u00adhyphen""#);
    }
}
