//! Schema integrity validator.

use std::collections::HashSet;

use json_typed_path::LazyPath;

use super::schema::*;
use crate::error::SchemaError;

/// Validate a schema for structural integrity.
///
/// Struct field names must be non-empty and unique within their struct.
pub fn validate_schema(schema: &SchemaNode) -> Result<(), SchemaError> {
    validate_node(schema, &LazyPath::root())
}

fn validate_node(schema: &SchemaNode, path: &LazyPath<'_>) -> Result<(), SchemaError> {
    match schema {
        SchemaNode::Primitive(_) => Ok(()),
        SchemaNode::List(l) => validate_node(&l.element, &path.push_index(0)),
        SchemaNode::Struct(s) => validate_struct(s, path),
    }
}

fn validate_struct(s: &StructSchema, path: &LazyPath<'_>) -> Result<(), SchemaError> {
    let mut seen = HashSet::with_capacity(s.len());
    for field in &s.fields {
        if field.name.is_empty() {
            return Err(SchemaError::EmptyFieldName {
                path: path.to_path(),
            });
        }
        if !seen.insert(field.name.as_str()) {
            return Err(SchemaError::DuplicateField {
                field_name: field.name.clone(),
                path: path.to_path(),
            });
        }
        validate_node(&field.node, &path.push_field(&field.name))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::S;

    #[test]
    fn validate_primitives_ok() {
        for schema in [S.str(), S.bool(), S.dbl(), S.long()] {
            assert!(validate_schema(&schema).is_ok());
        }
    }

    #[test]
    fn validate_empty_struct_ok() {
        assert!(validate_schema(&S.obj(vec![])).is_ok());
    }

    #[test]
    fn validate_duplicate_field() {
        let schema = S.obj(vec![S.field("a", S.str()), S.field("a", S.long())]);
        assert_eq!(
            validate_schema(&schema),
            Err(SchemaError::DuplicateField {
                field_name: "a".into(),
                path: "$".parse().unwrap(),
            })
        );
    }

    #[test]
    fn validate_empty_field_name_nested_in_list() {
        let schema = S.obj(vec![S.field(
            "items",
            S.list(S.obj(vec![S.field("", S.str())])),
        )]);
        assert_eq!(
            validate_schema(&schema),
            Err(SchemaError::EmptyFieldName {
                path: "$.items[0]".parse().unwrap(),
            })
        );
    }

    #[test]
    fn same_name_in_different_structs_ok() {
        let schema = S.obj(vec![
            S.field("a", S.obj(vec![S.field("a", S.str())])),
            S.field("b", S.obj(vec![S.field("a", S.str())])),
        ]);
        assert!(validate_schema(&schema).is_ok());
    }
}
