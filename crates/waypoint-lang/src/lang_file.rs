//! Language file format.
//!
//! One file per locale (`<locale>.lang`), UTF-8, line oriented:
//!
//! ```text
//! # comment
//! ! also a comment
//! ui.button.back = Back
//! ui.title.servers: %s Servers
//! ui.content.long = first part \
//!     continued here
//! ```
//!
//! Keys end at the first unescaped `=`, `:` or whitespace. Leading whitespace
//! of a value is dropped. Escapes: `\n`, `\t`, `\r`, `\f`, `\uXXXX` (UTF-16
//! surrogate pairs allowed), and `\<c>` for any other `c`. A line ending in an
//! odd number of backslashes continues on the next line.

use std::{collections::HashMap, fmt::Write as _};

use thiserror::Error;

/// A language file line could not be decoded.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("line {line}: {reason}")]
pub struct LineError {
    /// 1-based line number where the entry starts.
    pub line: usize,
    /// What was wrong.
    pub reason: String,
}

/// Parse a language file into key → template entries.
///
/// Later duplicates of a key override earlier ones.
pub fn parse(source: &str) -> Result<HashMap<String, String>, LineError> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    let mut entries = HashMap::new();
    let mut lines = source.lines().enumerate();

    while let Some((index, raw)) = lines.next() {
        let trimmed = raw.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('!') {
            continue;
        }

        let mut logical = trimmed.to_string();
        while ends_with_continuation(&logical) {
            logical.pop();
            match lines.next() {
                Some((_, next)) => logical.push_str(next.trim_start()),
                None => break,
            }
        }

        let (key, value) = split_entry(&logical);
        let line = index + 1;
        let key = unescape(key).map_err(|reason| LineError { line, reason })?;
        let value = unescape(value).map_err(|reason| LineError { line, reason })?;
        entries.insert(key, value);
    }

    Ok(entries)
}

/// Render entries as a language file with a `#` header, keys sorted.
pub fn render<'a>(header: &str, entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    let mut sorted: Vec<_> = entries.into_iter().collect();
    sorted.sort_unstable_by_key(|(k, _)| *k);

    let mut out = String::new();
    for line in header.lines() {
        let _ = writeln!(out, "# {line}");
    }
    for (key, value) in sorted {
        let _ = writeln!(out, "{}={}", escape(key, true), escape(value, false));
    }
    out
}

fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|c| *c == '\\').count() % 2 == 1
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c')
}

/// Split a logical line into raw (still escaped) key and value.
fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let mut end = line.len();

    for (i, c) in line.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '=' || c == ':' || is_blank(c) {
            end = i;
            break;
        }
    }

    let key = &line[..end];
    let mut rest = line[end..].trim_start_matches(is_blank);
    if let Some(stripped) = rest.strip_prefix(['=', ':']) {
        rest = stripped.trim_start_matches(is_blank);
    }
    (key, rest)
}

fn unescape(raw: &str) -> Result<String, String> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }

        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('f') => out.push('\x0c'),
            Some('u') => {
                let unit = read_hex4(&mut chars)?;
                let code = if (0xD800..0xDC00).contains(&unit) {
                    if chars.next() != Some('\\') || chars.next() != Some('u') {
                        return Err(format!("unpaired surrogate \\u{unit:04X}"));
                    }
                    let low = read_hex4(&mut chars)?;
                    if !(0xDC00..0xE000).contains(&low) {
                        return Err(format!("invalid low surrogate \\u{low:04X}"));
                    }
                    0x10000 + ((unit - 0xD800) << 10) + (low - 0xDC00)
                } else {
                    unit
                };
                let decoded =
                    char::from_u32(code).ok_or_else(|| format!("invalid code point {code:#X}"))?;
                out.push(decoded);
            },
            Some(other) => out.push(other),
            None => {},
        }
    }

    Ok(out)
}

fn read_hex4(chars: &mut std::str::Chars<'_>) -> Result<u32, String> {
    let digits: String = chars.by_ref().take(4).collect();
    if digits.len() != 4 {
        return Err(format!("truncated \\u escape \"{digits}\""));
    }
    u32::from_str_radix(&digits, 16).map_err(|_| format!("malformed \\u escape \"{digits}\""))
}

fn escape(text: &str, is_key: bool) -> String {
    let mut out = String::with_capacity(text.len());

    for (i, c) in text.chars().enumerate() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\x0c' => out.push_str("\\f"),
            '=' | ':' if is_key => {
                out.push('\\');
                out.push(c);
            },
            '#' | '!' if is_key && i == 0 => {
                out.push('\\');
                out.push(c);
            },
            ' ' if is_key || i == 0 => out.push_str("\\ "),
            _ => out.push(c),
        }
    }

    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parses_separators_and_comments() {
        let source = "\
# header
! bang comment

ui.button.back=Back
ui.button.yes = Yes
ui.button.no:No
ui.title.notice    Notice
";
        let entries = parse(source).unwrap();

        assert_eq!(entries.len(), 4);
        assert_eq!(entries["ui.button.back"], "Back");
        assert_eq!(entries["ui.button.yes"], "Yes");
        assert_eq!(entries["ui.button.no"], "No");
        assert_eq!(entries["ui.title.notice"], "Notice");
    }

    #[test]
    fn value_keeps_inner_separators() {
        let entries = parse("url=https://example.net/a=b").unwrap();
        assert_eq!(entries["url"], "https://example.net/a=b");
    }

    #[test]
    fn key_without_value_is_empty() {
        let entries = parse("ui.title.empty").unwrap();
        assert_eq!(entries["ui.title.empty"], "");
    }

    #[test]
    fn continuation_lines_join() {
        let entries = parse("long = first \\\n     second\nnext=x").unwrap();

        assert_eq!(entries["long"], "first second");
        assert_eq!(entries["next"], "x");
    }

    #[test]
    fn even_backslashes_do_not_continue() {
        let entries = parse("path=C:\\\\\nnext=x").unwrap();

        assert_eq!(entries["path"], "C:\\");
        assert_eq!(entries["next"], "x");
    }

    #[test]
    fn unicode_escapes() {
        let entries = parse("a=caf\\u00e9\nb=\\uD83D\\uDE00\nc=déjà").unwrap();

        assert_eq!(entries["a"], "café");
        assert_eq!(entries["b"], "😀");
        assert_eq!(entries["c"], "déjà");
    }

    #[test]
    fn malformed_unicode_escape_reports_line() {
        let err = parse("ok=1\nbad=\\u12G4").unwrap_err();
        assert_eq!(err.line, 2);
    }

    #[test]
    fn unpaired_surrogate_is_error() {
        assert!(parse("bad=\\uD83D").is_err());
    }

    #[test]
    fn leading_bom_is_ignored() {
        let entries = parse("\u{feff}ui.button.back=Back").unwrap();
        assert_eq!(entries["ui.button.back"], "Back");
    }

    #[test]
    fn render_sorts_and_escapes() {
        let rendered = render("Test File", [("b.key", " padded"), ("a key", "x\ny")]);

        assert_eq!(rendered, "# Test File\na\\ key=x\\ny\nb.key=\\ padded\n");
    }

    #[test]
    fn rendered_file_parses_back() {
        let original = [("ui.title.servers", "%s Servers"), ("odd:key", "  a\\b\tc")];
        let parsed = parse(&render("h", original)).unwrap();

        for (key, value) in original {
            assert_eq!(parsed[key], value);
        }
    }
}
