//! Deterministic pretty-printing of value trees.
//!
//! The rendered form is for display, not for re-parsing: strings, numbers,
//! and booleans appear as their literal text (no quotes), `null` as `null`,
//! and objects/arrays as indented `key: value` / element lines. The same
//! value always renders to the same text.

use std::collections::BTreeMap;
use std::fmt;

use crate::value::Value;

/// One level of indentation.
const INDENT: &str = "    ";

/// Render a value tree as deterministic, indented text.
///
/// This operation never fails.
///
/// # Examples
///
/// ```
/// use jsonpick::{parse, render};
///
/// let value = parse(r#"{"A": "a"}"#).unwrap();
/// assert_eq!(render(&value), "{\n    A: a\n}");
/// ```
pub fn render(value: &Value) -> String {
    let mut out = String::new();
    render_value(value, &mut out, 0);
    out
}

fn render_value(value: &Value, out: &mut String, depth: usize) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) => out.push_str(s),
        Value::Array(items) => render_array(items, out, depth),
        Value::Object(map) => render_object(map, out, depth),
    }
}

fn render_object(map: &BTreeMap<String, Value>, out: &mut String, depth: usize) {
    if map.is_empty() {
        out.push_str("{}");
        return;
    }

    out.push('{');
    let inner = INDENT.repeat(depth + 1);
    let mut first = true;
    for (key, value) in map {
        if !first {
            out.push(',');
        }
        out.push('\n');
        out.push_str(&inner);
        out.push_str(key);
        out.push_str(": ");
        render_value(value, out, depth + 1);
        first = false;
    }
    out.push('\n');
    out.push_str(&INDENT.repeat(depth));
    out.push('}');
}

fn render_array(items: &[Value], out: &mut String, depth: usize) {
    if items.is_empty() {
        out.push_str("[]");
        return;
    }

    out.push('[');
    let inner = INDENT.repeat(depth + 1);
    let mut first = true;
    for value in items {
        if !first {
            out.push(',');
        }
        out.push('\n');
        out.push_str(&inner);
        render_value(value, out, depth + 1);
        first = false;
    }
    out.push('\n');
    out.push_str(&INDENT.repeat(depth));
    out.push(']');
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
