use regex::Regex;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        };
        f.write_str(name)
    }
}

pub fn kind_of(value: &Value) -> ValueKind {
    match value {
        Value::Null => ValueKind::Null,
        Value::Bool(_) => ValueKind::Bool,
        Value::Number(_) => ValueKind::Number,
        Value::String(_) => ValueKind::String,
        Value::Array(_) => ValueKind::Array,
        Value::Object(_) => ValueKind::Object,
    }
}

pub fn is_string(value: &Value) -> bool {
    value.is_string()
}

pub fn is_array(value: &Value) -> bool {
    value.is_array()
}

/// True only for keyed mappings; arrays and null are not objects.
pub fn is_object(value: &Value) -> bool {
    value.is_object()
}

fn float_prefix() -> &'static Regex {
    static FLOAT_PREFIX: OnceLock<Regex> = OnceLock::new();
    FLOAT_PREFIX.get_or_init(|| {
        Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?")
            .expect("float prefix pattern is valid")
    })
}

/// Whitespace skipped before a number: space separators (Zs), tab, vertical
/// tab, form feed, line terminators and the byte-order mark.
fn is_str_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{b}'
            | '\u{c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// Parses the longest numeric prefix of `text`, the way `parseFloat` does.
///
/// Leading whitespace is skipped and trailing garbage ignored, so `"3px"`
/// gives `3.0`. A leading `Infinity` yields an infinite value. Returns
/// `None` when no digits start the text.
pub fn parse_float_prefix(text: &str) -> Option<f64> {
    let trimmed = text.trim_start_matches(is_str_whitespace);

    let unsigned = trimmed.trim_start_matches(['+', '-']);
    if unsigned.len() + 1 >= trimmed.len() && unsigned.starts_with("Infinity") {
        let negative = trimmed.starts_with('-');
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let matched = float_prefix().find(trimmed)?;
    matched.as_str().parse::<f64>().ok()
}

/// The finite number a numeric-like value stands for.
pub fn as_number_like(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_float_prefix(s),
        _ => None,
    }?;
    number.is_finite().then_some(number)
}

/// A finite number, or text whose numeric prefix parses to one.
pub fn is_number_like(value: &Value) -> bool {
    as_number_like(value).is_some()
}

/// First numeric-like value in order, returned as given.
pub fn first_number_like<'a, I>(values: I) -> Option<&'a Value>
where
    I: IntoIterator<Item = &'a Value>,
{
    values.into_iter().find(|value| is_number_like(value))
}
