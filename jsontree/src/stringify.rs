// SPDX-License-Identifier: Apache-2.0

//! Text rendering of [`Value`] trees.
//!
//! Two layouts are supported:
//! - pretty: one element or member per line, two spaces per nesting level;
//! - lean: a single line with no insignificant whitespace.
//!
//! `Display` renders lean, and the alternate flag (`{:#}`) renders pretty.

use alloc::string::String;
use core::fmt::{self, Write};

use crate::value::Value;

const INDENT: &str = "  ";

#[derive(Debug, Clone, Copy, PartialEq)]
enum Layout {
    Pretty,
    Lean,
}

impl Value {
    /// Multi-line rendering with two-space indentation.
    pub fn stringify(&self) -> String {
        alloc::format!("{self:#}")
    }

    /// Single-line rendering without insignificant whitespace.
    pub fn stringify_lean(&self) -> String {
        alloc::format!("{self}")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layout = if f.alternate() {
            Layout::Pretty
        } else {
            Layout::Lean
        };
        write_value(f, self, layout, 0)
    }
}

fn write_value<W: Write>(out: &mut W, value: &Value, layout: Layout, depth: usize) -> fmt::Result {
    match value {
        Value::Array(items) => {
            if items.is_empty() {
                return out.write_str("[]");
            }
            out.write_char('[')?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.write_char(',')?;
                }
                write_line_break(out, layout, depth + 1)?;
                write_value(out, item, layout, depth + 1)?;
            }
            write_line_break(out, layout, depth)?;
            out.write_char(']')
        }
        Value::Object(members) => {
            if members.is_empty() {
                return out.write_str("{}");
            }
            out.write_char('{')?;
            for (i, (key, member)) in members.iter().enumerate() {
                if i > 0 {
                    out.write_char(',')?;
                }
                write_line_break(out, layout, depth + 1)?;
                write_string(out, key)?;
                out.write_str(match layout {
                    Layout::Pretty => ": ",
                    Layout::Lean => ":",
                })?;
                write_value(out, member, layout, depth + 1)?;
            }
            write_line_break(out, layout, depth)?;
            out.write_char('}')
        }
        Value::String(s) => write_string(out, s),
        Value::Bool(b) => out.write_str(if *b { "true" } else { "false" }),
        Value::Integer(i) => write!(out, "{i}"),
        Value::Number(n) => write_number(out, *n),
        Value::Null => out.write_str("null"),
    }
}

fn write_line_break<W: Write>(out: &mut W, layout: Layout, depth: usize) -> fmt::Result {
    if layout == Layout::Lean {
        return Ok(());
    }
    out.write_char('\n')?;
    for _ in 0..depth {
        out.write_str(INDENT)?;
    }
    Ok(())
}

// Debug formatting is the shortest representation that round-trips and always
// carries a '.' or an exponent, so the text re-parses as a Number.
fn write_number<W: Write>(out: &mut W, n: f64) -> fmt::Result {
    if n.is_finite() {
        write!(out, "{n:?}")
    } else {
        out.write_str("null")
    }
}

fn write_string<W: Write>(out: &mut W, s: &str) -> fmt::Result {
    out.write_char('"')?;
    let bytes = s.as_bytes();
    let mut start = 0;
    for (i, &byte) in bytes.iter().enumerate() {
        let escape = match byte {
            b'"' => "\\\"",
            b'\\' => "\\\\",
            b'\n' => "\\n",
            b'\r' => "\\r",
            b'\t' => "\\t",
            0x08 => "\\b",
            0x0C => "\\f",
            0x00..=0x1F => "",
            _ => continue,
        };
        // Escaped bytes are all ASCII, so these are char boundaries.
        out.write_str(&s[start..i])?;
        if escape.is_empty() {
            write!(out, "\\u{byte:04x}")?;
        } else {
            out.write_str(escape)?;
        }
        start = i + 1;
    }
    out.write_str(&s[start..])?;
    out.write_char('"')
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_scalars() {
        assert_eq!(Value::Null.stringify(), "null");
        assert_eq!(Value::from(true).stringify(), "true");
        assert_eq!(Value::from(false).stringify_lean(), "false");
        assert_eq!(Value::from(-42).stringify(), "-42");
        assert_eq!(Value::from("hi").stringify(), "\"hi\"");
    }

    #[test]
    fn test_numbers_keep_float_shape() {
        assert_eq!(Value::from(1.0).stringify(), "1.0");
        assert_eq!(Value::from(0.1).stringify(), "0.1");
        assert_eq!(Value::from(-2.5).stringify(), "-2.5");
        assert_eq!(Value::from(1e300).stringify(), "1e300");
        assert_eq!(Value::from(f64::NAN).stringify(), "null");
        assert_eq!(Value::from(f64::INFINITY).stringify(), "null");
    }

    #[test]
    fn test_string_escaping() {
        let value = Value::from("a\"b\\c\nd\te\u{1}f\u{8}\u{c}\r");
        assert_eq!(
            value.stringify(),
            r#""a\"b\\c\nd\te\u0001f\b\f\r""#
        );
        assert_eq!(Value::from("héllo ☃").stringify(), "\"héllo ☃\"");
    }

    #[test]
    fn test_empty_containers() {
        assert_eq!(Value::array().stringify(), "[]");
        assert_eq!(Value::object().stringify(), "{}");
        assert_eq!(Value::array().stringify_lean(), "[]");
    }

    #[test]
    fn test_pretty_layout() {
        let value = Value::from([
            ("list", Value::from(vec![1, 2])),
            ("name", Value::from("x")),
            ("empty", Value::object()),
        ]);
        let expected = "{\n  \"empty\": {},\n  \"list\": [\n    1,\n    2\n  ],\n  \"name\": \"x\"\n}";
        assert_eq!(value.stringify(), expected);
    }

    #[test]
    fn test_lean_layout_is_single_line() {
        let value = Value::from([
            ("a", Value::from(vec![Value::from(1), Value::from([("b", Value::Null)])])),
            ("c", Value::from(true)),
        ]);
        assert_eq!(value.stringify_lean(), r#"{"a":[1,{"b":null}],"c":true}"#);
        assert_eq!(alloc::format!("{value}"), value.stringify_lean());
        assert_eq!(alloc::format!("{value:#}"), value.stringify());
    }

    #[test]
    fn test_nested_array_pretty() {
        let value = Value::from(vec![Value::from(vec![1]), Value::array()]);
        assert_eq!(value.stringify(), "[\n  [\n    1\n  ],\n  []\n]");
    }
}
