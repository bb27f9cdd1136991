//! Fluent constructors for schema trees.

use super::schema::*;

/// Builder for constructing schema values.
///
/// ```
/// use json_typed::schema::S;
///
/// let schema = S.obj(vec![
///     S.field("actor", S.str()),
///     S.field("actionList", S.list(S.str())),
/// ]);
/// assert_eq!(schema.to_string(), "struct<actor:string,actionList:array<string>>");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaBuilder;

impl SchemaBuilder {
    pub fn new() -> Self {
        Self
    }

    pub fn str(&self) -> SchemaNode {
        SchemaNode::Primitive(PrimitiveKind::String)
    }

    pub fn bool(&self) -> SchemaNode {
        SchemaNode::Primitive(PrimitiveKind::Boolean)
    }

    pub fn dbl(&self) -> SchemaNode {
        SchemaNode::Primitive(PrimitiveKind::Double)
    }

    pub fn long(&self) -> SchemaNode {
        SchemaNode::Primitive(PrimitiveKind::Long)
    }

    pub fn list(&self, element: SchemaNode) -> SchemaNode {
        SchemaNode::List(ListSchema::new(element))
    }

    pub fn obj(&self, fields: Vec<FieldSchema>) -> SchemaNode {
        SchemaNode::Struct(StructSchema::new(fields))
    }

    pub fn field(&self, name: impl Into<String>, node: SchemaNode) -> FieldSchema {
        FieldSchema::new(name, node)
    }
}

/// Global default schema builder.
pub static S: SchemaBuilder = SchemaBuilder;
