//! `{name}` placeholder substitution.

use std::collections::HashMap;
use std::fmt;

/// Placeholder name (without braces) → value.
pub type Replacements = HashMap<String, ReplacementValue>;

/// A value substituted for a placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum ReplacementValue {
    Text(String),
    Integer(i64),
    /// Only for unsigned values above `i64::MAX`; smaller ones are `Integer`.
    Unsigned(u64),
    Float(f64),
}

impl fmt::Display for ReplacementValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Unsigned(value) => write!(f, "{value}"),
            Self::Float(value) if value.is_infinite() => {
                f.write_str(if value.is_sign_positive() { "Infinity" } else { "-Infinity" })
            }
            Self::Float(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for ReplacementValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ReplacementValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for ReplacementValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

/// Implements `From<int>` for the integer types that fit in `i64`.
macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ReplacementValue {
                fn from(value: $ty) -> Self {
                    Self::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for ReplacementValue {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Self::Unsigned(value), Self::Integer)
    }
}

impl From<usize> for ReplacementValue {
    fn from(value: usize) -> Self {
        u64::try_from(value).map_or_else(|_| Self::Text(value.to_string()), Self::from)
    }
}

impl From<isize> for ReplacementValue {
    fn from(value: isize) -> Self {
        i64::try_from(value).map_or_else(|_| Self::Text(value.to_string()), Self::Integer)
    }
}

/// Replaces every `{name}` whose `name` is in `replacements`.
///
/// Single left-to-right pass: substituted values are never scanned again, and
/// placeholders without a replacement are kept as written.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn interpolate(template: &str, replacements: &Replacements) -> String {
    if replacements.is_empty() {
        return template.to_string();
    }

    let mut result = String::with_capacity(template.len());
    let mut rest = template;

    while let Some((before, after_open)) = rest.split_once('{') {
        result.push_str(before);

        let substitution = after_open
            .split_once('}')
            .and_then(|(name, tail)| replacements.get(name).map(|value| (value, tail)));

        match substitution {
            Some((value, tail)) => {
                result.push_str(&value.to_string());
                rest = tail;
            }
            None => {
                // Keep the brace and rescan from the next character so that
                // `{{name}}` still matches the inner `{name}`.
                result.push('{');
                rest = after_open;
            }
        }
    }

    result.push_str(rest);
    result
}
