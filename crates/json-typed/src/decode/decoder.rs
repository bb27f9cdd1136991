//! Schema-directed walk over a parsed JSON value.

use json_typed_path::LazyPath;
use serde_json::{Map, Number, Value};

use super::config::{DecoderConfig, UnknownFieldStrategy};
use crate::error::{DecodeError, JsonKind};
use crate::schema::{ListSchema, PrimitiveKind, SchemaNode, StructSchema};
use crate::value::TypedValue;

/// Decode `json` into a value shaped exactly like `schema`.
///
/// Struct fields are decoded in schema order and list elements in array
/// order; the first mismatch aborts the whole decode.
pub fn decode(json: &Value, schema: &SchemaNode) -> Result<TypedValue, DecodeError> {
    decode_with(json, schema, &DecoderConfig::default())
}

pub fn decode_with(
    json: &Value,
    schema: &SchemaNode,
    config: &DecoderConfig,
) -> Result<TypedValue, DecodeError> {
    decode_node(Some(json), schema, config)
}

/// Like [`decode_with`], with `None` standing for an absent input node.
///
/// An absent node never matches a schema; the error reports it as
/// [`JsonKind::Missing`].
pub fn decode_node(
    json: Option<&Value>,
    schema: &SchemaNode,
    config: &DecoderConfig,
) -> Result<TypedValue, DecodeError> {
    Decoder { config }.node(json, schema, &LazyPath::root())
}

struct Decoder<'c> {
    config: &'c DecoderConfig,
}

impl Decoder<'_> {
    fn node(
        &self,
        json: Option<&Value>,
        schema: &SchemaNode,
        path: &LazyPath<'_>,
    ) -> Result<TypedValue, DecodeError> {
        match schema {
            SchemaNode::Primitive(kind) => primitive(json, *kind, path),
            SchemaNode::Struct(s) => self.record(json, s, path),
            SchemaNode::List(l) => self.list(json, l, path),
        }
    }

    fn record(
        &self,
        json: Option<&Value>,
        schema: &StructSchema,
        path: &LazyPath<'_>,
    ) -> Result<TypedValue, DecodeError> {
        let Some(Value::Object(object)) = json else {
            return Err(DecodeError::ShapeMismatch {
                expected: "object",
                found: JsonKind::of_opt(json),
                path: path.to_path(),
            });
        };
        let mut values = Vec::with_capacity(schema.len());
        for field in &schema.fields {
            let field_path = path.push_field(&field.name);
            let Some(value) = object.get(&field.name) else {
                return Err(DecodeError::MissingField {
                    field_name: field.name.clone(),
                    path: field_path.to_path(),
                });
            };
            values.push(self.node(Some(value), &field.node, &field_path)?);
        }
        if self.config.unknown_fields == UnknownFieldStrategy::Reject {
            reject_unknown(object, schema, path)?;
        }
        Ok(TypedValue::Record(values))
    }

    fn list(
        &self,
        json: Option<&Value>,
        schema: &ListSchema,
        path: &LazyPath<'_>,
    ) -> Result<TypedValue, DecodeError> {
        let Some(Value::Array(items)) = json else {
            return Err(DecodeError::ShapeMismatch {
                expected: "array",
                found: JsonKind::of_opt(json),
                path: path.to_path(),
            });
        };
        items
            .iter()
            .enumerate()
            .map(|(i, item)| self.node(Some(item), &schema.element, &path.push_index(i)))
            .collect::<Result<Vec<_>, _>>()
            .map(TypedValue::List)
    }
}

fn primitive(
    json: Option<&Value>,
    kind: PrimitiveKind,
    path: &LazyPath<'_>,
) -> Result<TypedValue, DecodeError> {
    let value = match (kind, json) {
        (PrimitiveKind::String, Some(Value::String(s))) => Some(TypedValue::Str(s.clone())),
        (PrimitiveKind::Boolean, Some(Value::Bool(b))) => Some(TypedValue::Bool(*b)),
        (PrimitiveKind::Double, Some(Value::Number(n))) => n.as_f64().map(TypedValue::Dbl),
        (PrimitiveKind::Long, Some(Value::Number(n))) => as_long(n).map(TypedValue::Long),
        _ => None,
    };
    value.ok_or_else(|| DecodeError::TypeMismatch {
        expected: kind,
        found: JsonKind::of_opt(json),
        path: path.to_path(),
    })
}

/// `n` as an `i64`, accepting float literals with no fractional part.
fn as_long(n: &Number) -> Option<i64> {
    if let Some(l) = n.as_i64() {
        return Some(l);
    }
    let f = n.as_f64()?;
    // i64::MIN is exactly representable; the upper bound 2^63 is exclusive.
    let lo = i64::MIN as f64;
    if f.fract() == 0.0 && f >= lo && f < -lo {
        Some(f as i64)
    } else {
        None
    }
}

fn reject_unknown(
    object: &Map<String, Value>,
    schema: &StructSchema,
    path: &LazyPath<'_>,
) -> Result<(), DecodeError> {
    match object.keys().find(|key| schema.field(key).is_none()) {
        Some(key) => Err(DecodeError::UnknownField {
            field_name: key.clone(),
            path: path.push_field(key).to_path(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::S;
    use serde_json::json;

    #[test]
    fn primitives_round_trip() {
        assert_eq!(decode(&json!("x"), &S.str()), Ok(TypedValue::Str("x".into())));
        assert_eq!(decode(&json!(false), &S.bool()), Ok(TypedValue::Bool(false)));
        assert_eq!(decode(&json!(57.0), &S.dbl()), Ok(TypedValue::Dbl(57.0)));
        assert_eq!(decode(&json!(57), &S.long()), Ok(TypedValue::Long(57)));
    }

    #[test]
    fn numbers_follow_schema_kind_not_literal() {
        assert_eq!(decode(&json!(57), &S.dbl()), Ok(TypedValue::Dbl(57.0)));
        assert_eq!(decode(&json!(57.0), &S.long()), Ok(TypedValue::Long(57)));
        assert_eq!(decode(&json!(-3.0), &S.long()), Ok(TypedValue::Long(-3)));
    }

    #[test]
    fn long_rejects_fractions_and_overflow() {
        for value in [json!(1.5), json!(u64::MAX), json!(1e300)] {
            let err = decode(&value, &S.long()).unwrap_err();
            assert_eq!(
                err,
                DecodeError::TypeMismatch {
                    expected: PrimitiveKind::Long,
                    found: JsonKind::Number,
                    path: "$".parse().unwrap(),
                }
            );
        }
        assert_eq!(decode(&json!(i64::MIN), &S.long()), Ok(TypedValue::Long(i64::MIN)));
        assert_eq!(decode(&json!(i64::MAX), &S.long()), Ok(TypedValue::Long(i64::MAX)));
    }

    #[test]
    fn null_is_a_type_mismatch() {
        for schema in [S.str(), S.bool(), S.dbl(), S.long()] {
            match decode(&json!(null), &schema) {
                Err(DecodeError::TypeMismatch { found, .. }) => assert_eq!(found, JsonKind::Null),
                other => panic!("expected TypeMismatch, got {other:?}"),
            }
        }
    }

    #[test]
    fn string_schema_does_not_stringify() {
        let err = decode(&json!(12), &S.str()).unwrap_err();
        assert_eq!(err.code(), "TYPE_MISMATCH");
    }

    #[test]
    fn absent_node_reports_missing() {
        let config = DecoderConfig::default();
        match decode_node(None, &S.str(), &config) {
            Err(DecodeError::TypeMismatch { found, .. }) => assert_eq!(found, JsonKind::Missing),
            other => panic!("expected TypeMismatch, got {other:?}"),
        }
        match decode_node(None, &S.list(S.str()), &config) {
            Err(DecodeError::ShapeMismatch { expected, found, .. }) => {
                assert_eq!(expected, "array");
                assert_eq!(found, JsonKind::Missing);
            }
            other => panic!("expected ShapeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn struct_requires_object() {
        let schema = S.obj(vec![S.field("a", S.str())]);
        let err = decode(&json!(["a"]), &schema).unwrap_err();
        assert_eq!(
            err,
            DecodeError::ShapeMismatch {
                expected: "object",
                found: JsonKind::Array,
                path: "$".parse().unwrap(),
            }
        );
    }

    #[test]
    fn zero_field_struct_accepts_any_object() {
        assert_eq!(
            decode(&json!({"x": 1}), &S.obj(vec![])),
            Ok(TypedValue::Record(vec![]))
        );
        assert_eq!(decode(&json!({}), &S.obj(vec![])), Ok(TypedValue::Record(vec![])));
    }

    #[test]
    fn first_missing_field_in_schema_order_wins() {
        let schema = S.obj(vec![S.field("b", S.str()), S.field("a", S.str())]);
        let err = decode(&json!({}), &schema).unwrap_err();
        assert_eq!(
            err,
            DecodeError::MissingField {
                field_name: "b".into(),
                path: "$.b".parse().unwrap(),
            }
        );
    }

    #[test]
    fn nested_paths() {
        let schema = S.obj(vec![S.field(
            "events",
            S.list(S.obj(vec![S.field("score", S.dbl())])),
        )]);
        let err = decode(
            &json!({"events": [{"score": 1}, {"score": "high"}]}),
            &schema,
        )
        .unwrap_err();
        assert_eq!(err.path().to_string(), "$.events[1].score");
    }

    #[test]
    fn reject_reports_first_unknown_key() {
        let schema = S.obj(vec![S.field("a", S.long())]);
        let config = DecoderConfig::new().with_unknown_fields(UnknownFieldStrategy::Reject);
        let err = decode_with(&json!({"a": 1, "zz": 2, "b": 3}), &schema, &config).unwrap_err();
        assert_eq!(
            err,
            DecodeError::UnknownField {
                field_name: "zz".into(),
                path: "$.zz".parse().unwrap(),
            }
        );
        assert_eq!(
            decode_with(&json!({"a": 1}), &schema, &config),
            Ok(TypedValue::Record(vec![TypedValue::Long(1)]))
        );
    }

    #[test]
    fn reject_checks_declared_fields_first() {
        let schema = S.obj(vec![S.field("a", S.long())]);
        let config = DecoderConfig::new().with_unknown_fields(UnknownFieldStrategy::Reject);
        let err = decode_with(&json!({"zz": 2}), &schema, &config).unwrap_err();
        assert_eq!(err.code(), "MISSING_FIELD");
    }
}
