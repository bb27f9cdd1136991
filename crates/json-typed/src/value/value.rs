//! Decoder output tree.

use serde_json::{Map, Number, Value};

use crate::schema::{PrimitiveKind, SchemaNode};

/// A decoded value, shaped like the schema it was decoded against.
///
/// A `Record` carries one element per struct field, in the schema's field
/// order; field names are not repeated here.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedValue {
    Str(String),
    Bool(bool),
    Dbl(f64),
    Long(i64),
    Record(Vec<TypedValue>),
    List(Vec<TypedValue>),
}

impl TypedValue {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Str(_) => "string",
            Self::Bool(_) => "boolean",
            Self::Dbl(_) => "double",
            Self::Long(_) => "bigint",
            Self::Record(_) => "struct",
            Self::List(_) => "array",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Dbl(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Long(l) => Some(*l),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&[TypedValue]> {
        match self {
            Self::Record(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[TypedValue]> {
        match self {
            Self::List(values) => Some(values),
            _ => None,
        }
    }

    /// Re-attach field names from `schema` and render as JSON.
    ///
    /// Returns `None` when the value does not have the schema's shape, or a
    /// double is not finite.
    pub fn to_json(&self, schema: &SchemaNode) -> Option<Value> {
        match (self, schema) {
            (Self::Str(s), SchemaNode::Primitive(PrimitiveKind::String)) => {
                Some(Value::String(s.clone()))
            }
            (Self::Bool(b), SchemaNode::Primitive(PrimitiveKind::Boolean)) => Some(Value::Bool(*b)),
            (Self::Dbl(d), SchemaNode::Primitive(PrimitiveKind::Double)) => {
                Number::from_f64(*d).map(Value::Number)
            }
            (Self::Long(l), SchemaNode::Primitive(PrimitiveKind::Long)) => Some(Value::from(*l)),
            (Self::Record(values), SchemaNode::Struct(s)) if values.len() == s.len() => {
                let mut map = Map::with_capacity(values.len());
                for (value, field) in values.iter().zip(&s.fields) {
                    map.insert(field.name.clone(), value.to_json(&field.node)?);
                }
                Some(Value::Object(map))
            }
            (Self::List(values), SchemaNode::List(l)) => values
                .iter()
                .map(|v| v.to_json(&l.element))
                .collect::<Option<Vec<_>>>()
                .map(Value::Array),
            _ => None,
        }
    }
}

impl From<&str> for TypedValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for TypedValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<bool> for TypedValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for TypedValue {
    fn from(d: f64) -> Self {
        Self::Dbl(d)
    }
}

impl From<i64> for TypedValue {
    fn from(l: i64) -> Self {
        Self::Long(l)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::S;
    use serde_json::json;

    #[test]
    fn accessors_match_variant() {
        assert_eq!(TypedValue::from("a").as_str(), Some("a"));
        assert_eq!(TypedValue::from(true).as_bool(), Some(true));
        assert_eq!(TypedValue::from(1.5).as_f64(), Some(1.5));
        assert_eq!(TypedValue::from(7i64).as_i64(), Some(7));
        assert_eq!(TypedValue::from(7i64).as_f64(), None);
        assert_eq!(TypedValue::Record(vec![]).as_record(), Some(&[][..]));
        assert_eq!(TypedValue::List(vec![]).as_list(), Some(&[][..]));
        assert_eq!(TypedValue::List(vec![]).as_record(), None);
    }

    #[test]
    fn kind_names() {
        assert_eq!(TypedValue::from("a").kind_name(), "string");
        assert_eq!(TypedValue::Long(1).kind_name(), "bigint");
        assert_eq!(TypedValue::Record(vec![]).kind_name(), "struct");
        assert_eq!(TypedValue::List(vec![]).kind_name(), "array");
    }

    #[test]
    fn to_json_zips_field_names() {
        let schema = S.obj(vec![
            S.field("actor", S.str()),
            S.field("score", S.dbl()),
            S.field("tags", S.list(S.long())),
        ]);
        let value = TypedValue::Record(vec![
            "jerome".into(),
            57.0.into(),
            TypedValue::List(vec![1i64.into(), 2i64.into()]),
        ]);
        assert_eq!(
            value.to_json(&schema),
            Some(json!({"actor": "jerome", "score": 57.0, "tags": [1, 2]}))
        );
    }

    #[test]
    fn to_json_rejects_shape_drift() {
        let schema = S.obj(vec![S.field("a", S.str())]);
        assert_eq!(TypedValue::Record(vec![]).to_json(&schema), None);
        assert_eq!(TypedValue::Long(1).to_json(&S.dbl()), None);
        assert_eq!(TypedValue::Dbl(f64::NAN).to_json(&S.dbl()), None);
    }
}
