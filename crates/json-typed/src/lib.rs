//! json-typed - schema-directed decoding of JSON into typed value trees.
//!
//! A [`SchemaNode`] describes the target shape (string, boolean, double and
//! bigint leaves, structs of named fields, homogeneous lists). [`decode`]
//! walks a parsed [`serde_json::Value`] under that schema and returns a
//! [`TypedValue`] of exactly that shape, or the first [`DecodeError`] with
//! the [`Path`] where the data and the schema disagree.
//!
//! ```
//! use json_typed::{decode, SchemaNode, TypedValue};
//! use serde_json::json;
//!
//! let schema: SchemaNode = "struct<actor:string,actionList:array<string>>".parse().unwrap();
//! let value = decode(&json!({"actor": "jerome", "actionList": ["LIKE"]}), &schema).unwrap();
//! assert_eq!(
//!     value,
//!     TypedValue::Record(vec![
//!         TypedValue::Str("jerome".into()),
//!         TypedValue::List(vec![TypedValue::Str("LIKE".into())]),
//!     ])
//! );
//! ```
//!
//! [`FromJson`] bundles a validated schema with a [`DecoderConfig`] for use
//! across many rows.

pub mod decode;
pub mod error;
pub mod schema;
pub mod session;
pub mod value;

pub use decode::{decode, decode_node, decode_with, DecoderConfig, UnknownFieldStrategy};
pub use error::{DecodeError, Error, JsonKind, JsonSyntaxError, Result, SchemaError};
pub use json_typed_path::{Path, PathSegment};
pub use schema::{
    validate_schema, FieldSchema, ListSchema, PrimitiveKind, SchemaBuilder, SchemaNode,
    SchemaStats, StructSchema, S,
};
pub use session::FromJson;
pub use value::TypedValue;
