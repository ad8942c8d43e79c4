//! JSON content transforms offered in diff mode
//!
//! These rewrite a whole buffer (pretty-print, minify, wrap in or peel off a
//! JSON string literal) so that two versions can be compared in the same
//! shape. They never try to repair malformed input.

use crate::constant::MAX_PARSE_DEPTH;
use serde_json::Value;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransformError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Content is not a JSON string literal")]
    NotAString,

    #[error("Content is empty")]
    Empty,

    #[error("Content is still a string after {0} nested parses")]
    TooDeep(usize),

    #[error("Unknown transform: {0}")]
    Unknown(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentTransform {
    /// Pretty-print with two-space indentation
    Format,
    /// Encode the whole text as one JSON string literal
    Escape,
    /// Decode a JSON string literal back to its text
    Unescape,
    /// Minify
    Compact,
    /// Peel nested string literals until a non-string value appears, then pretty-print it
    Parse,
}

impl ContentTransform {
    pub const ALL: [ContentTransform; 5] = [
        ContentTransform::Format,
        ContentTransform::Escape,
        ContentTransform::Unescape,
        ContentTransform::Compact,
        ContentTransform::Parse,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ContentTransform::Format => "format",
            ContentTransform::Escape => "escape",
            ContentTransform::Unescape => "unescape",
            ContentTransform::Compact => "compact",
            ContentTransform::Parse => "parse",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(name))
    }

    pub fn apply(&self, content: &str) -> Result<String, TransformError> {
        match self {
            ContentTransform::Format => {
                let value: Value = serde_json::from_str(content)?;
                Ok(serde_json::to_string_pretty(&value)?)
            }
            ContentTransform::Escape => Ok(serde_json::to_string(content)?),
            ContentTransform::Unescape => match serde_json::from_str::<Value>(content)? {
                Value::String(text) => Ok(text),
                _ => Err(TransformError::NotAString),
            },
            ContentTransform::Compact => {
                let value: Value = serde_json::from_str(content)?;
                Ok(serde_json::to_string(&value)?)
            }
            ContentTransform::Parse => parse_nested(content),
        }
    }
}

impl FromStr for ContentTransform {
    type Err = TransformError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::from_name(name).ok_or_else(|| TransformError::Unknown(name.to_string()))
    }
}

fn parse_nested(content: &str) -> Result<String, TransformError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(TransformError::Empty);
    }

    let mut current = Value::String(trimmed.to_string());
    let mut depth = 0;
    while let Value::String(text) = &current {
        if depth >= MAX_PARSE_DEPTH {
            return Err(TransformError::TooDeep(depth));
        }
        match serde_json::from_str::<Value>(text) {
            Ok(next) => {
                current = next;
                depth += 1;
            }
            Err(e) if depth == 0 => return Err(e.into()),
            // the innermost layer is plain text
            Err(_) => break,
        }
    }

    match current {
        Value::String(text) => Ok(text),
        value => Ok(serde_json::to_string_pretty(&value)?),
    }
}

/// Whether the text parses as JSON
pub fn can_parse(content: &str) -> bool {
    serde_json::from_str::<Value>(content).is_ok()
}
