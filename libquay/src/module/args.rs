//! Coercion of module arguments.
//!
//! Templated task arguments reach a binary module as strings, so integer and
//! boolean parameters also accept the string forms Ansible converts.

use serde::Deserialize;
use serde::de::{self, Deserializer};
use std::fmt::Display;
use std::str::FromStr;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawInt<T> {
    Native(T),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawBool {
    Native(bool),
    Int(i64),
    Text(String),
}

/// Integer parameter given as a number or a numeric string.
pub(super) fn int<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    match Option::<RawInt<T>>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawInt::Native(value)) => Ok(Some(value)),
        Some(RawInt::Text(text)) => text.trim().parse().map(Some).map_err(|e| {
            de::Error::custom(format!("'{}' is not a valid integer: {}", text, e))
        }),
    }
}

/// Boolean parameter given as a JSON bool, 0/1, or one of Ansible's words.
pub(super) fn boolean<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RawBool>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawBool::Native(value)) => Ok(Some(value)),
        Some(RawBool::Int(1)) => Ok(Some(true)),
        Some(RawBool::Int(0)) => Ok(Some(false)),
        Some(RawBool::Int(other)) => Err(de::Error::custom(format!(
            "'{}' is not a valid boolean",
            other
        ))),
        Some(RawBool::Text(text)) => parse_bool(&text)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("'{}' is not a valid boolean", text))),
    }
}

fn parse_bool(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" | "true" | "t" | "on" | "1" => Some(true),
        "no" | "n" | "false" | "f" | "off" | "0" => Some(false),
        _ => None,
    }
}
