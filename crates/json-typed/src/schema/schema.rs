use std::fmt;

use json_typed_path::is_identifier;

/// The four scalar kinds a schema leaf can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    String,
    Boolean,
    Double,
    Long,
}

impl PrimitiveKind {
    /// Type-descriptor keyword for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Double => "double",
            Self::Long => "bigint",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named field of a struct schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    pub name: String,
    pub node: SchemaNode,
}

impl FieldSchema {
    pub fn new(name: impl Into<String>, node: SchemaNode) -> Self {
        Self {
            name: name.into(),
            node,
        }
    }
}

/// Represents a record of named fields.
///
/// Field order fixes the positions of the decoded record; JSON keys are
/// matched by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructSchema {
    pub fields: Vec<FieldSchema>,
}

impl StructSchema {
    pub fn new(fields: Vec<FieldSchema>) -> Self {
        Self { fields }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Record position of the field called `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}

/// Represents a homogeneous list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSchema {
    pub element: Box<SchemaNode>,
}

impl ListSchema {
    pub fn new(element: SchemaNode) -> Self {
        Self {
            element: Box::new(element),
        }
    }
}

/// The target shape of a decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaNode {
    Primitive(PrimitiveKind),
    Struct(StructSchema),
    List(ListSchema),
}

impl SchemaNode {
    /// Returns the "kind" string identifier for this schema node.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Primitive(kind) => kind.as_str(),
            Self::Struct(_) => "struct",
            Self::List(_) => "array",
        }
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, Self::Primitive(_))
    }

    pub fn as_primitive(&self) -> Option<PrimitiveKind> {
        match self {
            Self::Primitive(kind) => Some(*kind),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&StructSchema> {
        match self {
            Self::Struct(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&ListSchema> {
        match self {
            Self::List(s) => Some(s),
            _ => None,
        }
    }
}

impl From<PrimitiveKind> for SchemaNode {
    fn from(kind: PrimitiveKind) -> Self {
        Self::Primitive(kind)
    }
}

impl From<StructSchema> for SchemaNode {
    fn from(s: StructSchema) -> Self {
        Self::Struct(s)
    }
}

impl From<ListSchema> for SchemaNode {
    fn from(s: ListSchema) -> Self {
        Self::List(s)
    }
}

/// Renders the type descriptor accepted by [`SchemaNode::parse_type`],
/// e.g. `struct<actor:string,tags:array<string>>`.
impl fmt::Display for SchemaNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(kind) => f.write_str(kind.as_str()),
            Self::List(list) => write!(f, "array<{}>", list.element),
            Self::Struct(s) => {
                f.write_str("struct<")?;
                for (i, field) in s.fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    if is_identifier(&field.name) {
                        f.write_str(&field.name)?;
                    } else {
                        write!(f, "`{}`", field.name.replace('`', "``"))?;
                    }
                    write!(f, ":{}", field.node)?;
                }
                f.write_str(">")
            }
        }
    }
}
