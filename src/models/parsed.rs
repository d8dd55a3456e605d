// file: src/models/parsed.rs
// description: numeric parse outcome that keeps defaulted values observable
// reference: https://doc.rust-lang.org/std/str/trait.FromStr.html

use std::fmt::Display;
use std::str::FromStr;

/// Result of parsing a numeric field out of hand-authored text.
///
/// Parsing never aborts the run: a value that does not fit falls back to
/// `fallback` and is marked as defaulted so callers can count it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parsed<T> {
    Value(T),
    Defaulted { fallback: T },
}

impl<T: Copy> Parsed<T> {
    pub fn value(&self) -> T {
        match self {
            Parsed::Value(value) => *value,
            Parsed::Defaulted { fallback } => *fallback,
        }
    }

    pub fn is_defaulted(&self) -> bool {
        matches!(self, Parsed::Defaulted { .. })
    }
}

impl<T> Parsed<T>
where
    T: FromStr + Copy,
    T::Err: Display,
{
    /// Parses `raw` as a decimal number, falling back to `fallback` and
    /// logging a warning tagged with `field` when it does not parse.
    pub fn parse_or(raw: &str, fallback: T, field: &str) -> Self {
        match raw.parse::<T>() {
            Ok(value) => Parsed::Value(value),
            Err(e) => {
                tracing::warn!("Could not parse {} from {:?} ({}), defaulting", field, raw, e);
                Parsed::Defaulted { fallback }
            }
        }
    }
}
