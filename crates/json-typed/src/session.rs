//! Decoding session.
//!
//! A [`FromJson`] is built once per query from the caller's schema and then
//! used for every input row. It holds no per-row state, so one session (or
//! clones of it) can be shared by any number of worker threads.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::decode::{decode_node, decode_with, DecoderConfig};
use crate::error::{DecodeError, Error, JsonSyntaxError, SchemaError};
use crate::schema::{validate_schema, SchemaNode, SchemaStats};
use crate::value::TypedValue;

#[derive(Debug, Clone)]
pub struct FromJson {
    schema: Arc<SchemaNode>,
    config: DecoderConfig,
}

impl FromJson {
    pub fn new(schema: SchemaNode) -> Result<Self, SchemaError> {
        validate_schema(&schema)?;
        let stats = SchemaStats::of(&schema);
        debug!(
            schema = %schema,
            nodes = stats.nodes,
            leaves = stats.leaves,
            max_depth = stats.max_depth,
            "from_json session created"
        );
        Ok(Self {
            schema: Arc::new(schema),
            config: DecoderConfig::default(),
        })
    }

    /// Session whose schema is described by an example value.
    pub fn from_example(example: &Value) -> Result<Self, SchemaError> {
        Self::new(SchemaNode::from_example(example)?)
    }

    /// Session whose schema is described by a type descriptor.
    pub fn from_type(descriptor: &str) -> Result<Self, SchemaError> {
        Self::new(SchemaNode::parse_type(descriptor)?)
    }

    pub fn with_config(mut self, config: DecoderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn schema(&self) -> &SchemaNode {
        &self.schema
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    pub fn decode_value(&self, json: &Value) -> Result<TypedValue, DecodeError> {
        decode_with(json, &self.schema, &self.config)
    }

    /// Parse `text` as JSON and decode it.
    pub fn decode_str(&self, text: &str) -> Result<TypedValue, Error> {
        let json: Value = serde_json::from_str(text).map_err(|e| {
            let err = JsonSyntaxError::new(text, e);
            debug!(line = err.line, column = err.column, error = %err.source, "from_json input is not JSON");
            err
        })?;
        self.decode_value(&json).map_err(|err| {
            debug!(path = %err.path(), code = err.code(), error = %err, "from_json decode failed");
            err.into()
        })
    }

    /// Like [`decode_str`](Self::decode_str), for a host value that may be
    /// absent (a SQL `NULL` input). An absent input fails like any other
    /// mismatch, with the node reported as missing.
    pub fn decode_opt_str(&self, text: Option<&str>) -> Result<TypedValue, Error> {
        match text {
            Some(text) => self.decode_str(text),
            None => decode_node(None, &self.schema, &self.config).map_err(|err| {
                debug!(code = err.code(), error = %err, "from_json input is absent");
                err.into()
            }),
        }
    }
}
