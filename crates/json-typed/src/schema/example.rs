//! Schema from an example value.
//!
//! The caller describes the target shape by writing one value of it:
//! `{"actor": "", "score": 0.0, "actionList": [""]}` asks for a struct of a
//! string, a double and a list of strings.

use json_typed_path::LazyPath;
use serde_json::Value;

use super::builder::S;
use super::schema::*;
use super::validate::validate_schema;
use crate::error::SchemaError;

impl SchemaNode {
    /// Build a schema from an example value.
    ///
    /// - strings, booleans map to `string`, `boolean`;
    /// - numbers written with a fraction or exponent map to `double`, integer
    ///   literals to `bigint`;
    /// - objects map to structs, keeping the example's key order;
    /// - arrays map to lists typed by their first element; any further
    ///   elements must describe the same type;
    /// - `null` and empty arrays carry no type and are rejected.
    pub fn from_example(example: &Value) -> Result<SchemaNode, SchemaError> {
        let schema = from_example_at(example, &LazyPath::root())?;
        validate_schema(&schema)?;
        Ok(schema)
    }
}

fn from_example_at(example: &Value, path: &LazyPath<'_>) -> Result<SchemaNode, SchemaError> {
    match example {
        Value::String(_) => Ok(S.str()),
        Value::Bool(_) => Ok(S.bool()),
        Value::Number(n) if n.is_f64() => Ok(S.dbl()),
        Value::Number(_) => Ok(S.long()),
        Value::Object(map) => map
            .iter()
            .map(|(name, value)| {
                let node = from_example_at(value, &path.push_field(name))?;
                Ok(FieldSchema::new(name.clone(), node))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|fields| S.obj(fields)),
        Value::Array(items) => {
            let Some((first, rest)) = items.split_first() else {
                return Err(SchemaError::EmptyListExample {
                    path: path.to_path(),
                });
            };
            let element = from_example_at(first, &path.push_index(0))?;
            for (i, item) in rest.iter().enumerate() {
                let item_path = path.push_index(i + 1);
                if from_example_at(item, &item_path)? != element {
                    return Err(SchemaError::HeterogeneousList {
                        path: item_path.to_path(),
                    });
                }
            }
            Ok(S.list(element))
        }
        Value::Null => Err(SchemaError::UnsupportedKind {
            kind: "null".into(),
            path: path.to_path(),
        }),
    }
}
