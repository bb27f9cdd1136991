//! Error taxonomy: malformed input text, malformed schema, and
//! schema/data mismatches.

use std::fmt;

use json_typed_path::Path;
use serde_json::Value;
use thiserror::Error;

use crate::schema::PrimitiveKind;

/// Kind of a JSON node, as reported by decode errors.
///
/// `Missing` stands for a node that is not there at all, which is a
/// different situation from a present `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
    Missing,
}

impl JsonKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(_) => Self::Boolean,
            Value::Number(_) => Self::Number,
            Value::String(_) => Self::String,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    pub fn of_opt(value: Option<&Value>) -> Self {
        value.map_or(Self::Missing, Self::of)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
            Self::Missing => "missing",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The input text is not valid JSON.
#[derive(Debug, Error)]
#[error("invalid JSON at line {line}, column {column}: {source}")]
pub struct JsonSyntaxError {
    /// The offending input.
    pub text: String,
    pub line: usize,
    pub column: usize,
    pub source: serde_json::Error,
}

impl JsonSyntaxError {
    pub fn new(text: &str, source: serde_json::Error) -> Self {
        Self {
            text: text.to_string(),
            line: source.line(),
            column: source.column(),
            source,
        }
    }
}

/// The schema or schema descriptor is malformed. Raised once, at setup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("unsupported type `{kind}` at {path}")]
    UnsupportedKind { kind: String, path: Path },
    #[error("map key at {path} must be a string, got `{key_kind}`")]
    NonStringMapKey { key_kind: String, path: Path },
    #[error("list example at {path} has no element to take the element type from")]
    EmptyListExample { path: Path },
    #[error("list example element at {path} does not match the first element")]
    HeterogeneousList { path: Path },
    #[error("struct at {path} has a field with an empty name")]
    EmptyFieldName { path: Path },
    #[error("struct at {path} declares field `{field_name}` twice")]
    DuplicateField { field_name: String, path: Path },
    #[error("invalid type descriptor at byte {position}: {message}")]
    Syntax { position: usize, message: String },
}

/// The JSON does not have the shape the schema asks for.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("expected {expected} at {path}, found {found}")]
    TypeMismatch {
        expected: PrimitiveKind,
        found: JsonKind,
        path: Path,
    },
    #[error("expected {expected} at {path}, found {found}")]
    ShapeMismatch {
        expected: &'static str,
        found: JsonKind,
        path: Path,
    },
    #[error("missing field `{field_name}` at {path}")]
    MissingField { field_name: String, path: Path },
    #[error("unknown field `{field_name}` at {path}")]
    UnknownField { field_name: String, path: Path },
}

impl DecodeError {
    /// Where the mismatch was detected.
    pub fn path(&self) -> &Path {
        match self {
            Self::TypeMismatch { path, .. }
            | Self::ShapeMismatch { path, .. }
            | Self::MissingField { path, .. }
            | Self::UnknownField { path, .. } => path,
        }
    }

    /// Stable short identifier of the error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::TypeMismatch { .. } => "TYPE_MISMATCH",
            Self::ShapeMismatch { .. } => "SHAPE_MISMATCH",
            Self::MissingField { .. } => "MISSING_FIELD",
            Self::UnknownField { .. } => "UNKNOWN_FIELD",
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Json(#[from] JsonSyntaxError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_kind_of_every_variant() {
        assert_eq!(JsonKind::of(&json!(null)), JsonKind::Null);
        assert_eq!(JsonKind::of(&json!(true)), JsonKind::Boolean);
        assert_eq!(JsonKind::of(&json!(1.5)), JsonKind::Number);
        assert_eq!(JsonKind::of(&json!("x")), JsonKind::String);
        assert_eq!(JsonKind::of(&json!([])), JsonKind::Array);
        assert_eq!(JsonKind::of(&json!({})), JsonKind::Object);
        assert_eq!(JsonKind::of_opt(None), JsonKind::Missing);
    }

    #[test]
    fn decode_error_messages() {
        let err = DecodeError::TypeMismatch {
            expected: PrimitiveKind::String,
            found: JsonKind::Number,
            path: Path::root().field("tags").index(0),
        };
        assert_eq!(err.to_string(), "expected string at $.tags[0], found number");
        assert_eq!(err.code(), "TYPE_MISMATCH");

        let err = DecodeError::MissingField {
            field_name: "score".into(),
            path: Path::root().field("score"),
        };
        assert_eq!(err.to_string(), "missing field `score` at $.score");
        assert_eq!(err.path().to_string(), "$.score");
    }

    #[test]
    fn json_syntax_error_keeps_text_and_position() {
        let text = "{\"a\":\n  }";
        let source = serde_json::from_str::<Value>(text).unwrap_err();
        let err = JsonSyntaxError::new(text, source);
        assert_eq!(err.text, text);
        assert_eq!(err.line, 2);
        assert!(err.column > 0);
        assert!(err.to_string().starts_with("invalid JSON at line 2"));
    }

    #[test]
    fn umbrella_error_is_transparent() {
        let err: Error = SchemaError::EmptyFieldName { path: Path::root() }.into();
        assert_eq!(err.to_string(), "struct at $ has a field with an empty name");
    }
}
