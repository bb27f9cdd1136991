//! Schema from a host type descriptor.
//!
//! Grammar (keywords are case-insensitive, whitespace between tokens is
//! ignored):
//!
//! ```text
//! type   := "string" | "boolean" | "double" | "bigint" | "long"
//!         | "array" "<" type ">"
//!         | "struct" "<" [ field { "," field } ] ">"
//! field  := name ":" type
//! name   := [A-Za-z0-9_]+ | "`" { any char, "``" for a backtick } "`"
//! ```
//!
//! Other host types (`map`, `uniontype`, `int`, `float`, `timestamp`, ...)
//! are recognised so they can be reported as unsupported rather than as
//! syntax errors.

use std::str::FromStr;

use json_typed_path::LazyPath;

use super::builder::S;
use super::schema::*;
use super::validate::validate_schema;
use crate::error::SchemaError;

/// Host types with no schema counterpart.
const UNSUPPORTED: &[&str] = &[
    "uniontype",
    "int",
    "integer",
    "tinyint",
    "smallint",
    "float",
    "decimal",
    "numeric",
    "timestamp",
    "date",
    "interval",
    "binary",
    "char",
    "varchar",
    "void",
];

/// Deepest `array<..>`/`struct<..>` nesting a descriptor may use.
const MAX_DEPTH: usize = 128;

impl SchemaNode {
    /// Parse a type descriptor such as
    /// `struct<actor:string,score:double,actionList:array<string>>`.
    pub fn parse_type(descriptor: &str) -> Result<SchemaNode, SchemaError> {
        let mut parser = DescriptorParser::new(descriptor);
        let schema = parser.node(&LazyPath::root())?;
        parser.ws();
        if !parser.eof() {
            return Err(parser.error("unexpected trailing input"));
        }
        validate_schema(&schema)?;
        Ok(schema)
    }
}

impl FromStr for SchemaNode {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_type(s)
    }
}

struct DescriptorParser<'a> {
    input: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> DescriptorParser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            depth: 0,
        }
    }

    fn eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn ws(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn error(&self, message: impl Into<String>) -> SchemaError {
        SchemaError::Syntax {
            position: self.pos,
            message: message.into(),
        }
    }

    /// Consume `c` if it is the next token.
    fn eat(&mut self, c: char) -> bool {
        self.ws();
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, c: char) -> Result<(), SchemaError> {
        if self.eat(c) {
            return Ok(());
        }
        match self.peek() {
            Some(found) => Err(self.error(format!("expected `{c}`, found `{found}`"))),
            None => Err(self.error(format!("expected `{c}`, found end of input"))),
        }
    }

    fn ident(&mut self) -> Result<&'a str, SchemaError> {
        self.ws();
        let input = self.input;
        let start = self.pos;
        let rest = &input[start..];
        let len = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .unwrap_or(rest.len());
        if len == 0 {
            return match self.peek() {
                Some(found) => Err(self.error(format!("expected a name, found `{found}`"))),
                None => Err(self.error("expected a name, found end of input")),
            };
        }
        self.pos += len;
        Ok(&input[start..start + len])
    }

    fn field_name(&mut self) -> Result<String, SchemaError> {
        if !self.eat('`') {
            return self.ident().map(str::to_string);
        }
        let mut name = String::new();
        loop {
            match self.peek() {
                None => return Err(self.error("unterminated quoted name")),
                Some('`') => {
                    self.pos += 1;
                    if self.peek() == Some('`') {
                        name.push('`');
                        self.pos += 1;
                    } else {
                        return Ok(name);
                    }
                }
                Some(c) => {
                    name.push(c);
                    self.pos += c.len_utf8();
                }
            }
        }
    }

    fn enter(&mut self) -> Result<(), SchemaError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(self.error("type nesting too deep"));
        }
        Ok(())
    }

    fn node(&mut self, path: &LazyPath<'_>) -> Result<SchemaNode, SchemaError> {
        self.ws();
        let start = self.pos;
        let keyword = self.ident()?.to_ascii_lowercase();
        match keyword.as_str() {
            "string" => Ok(S.str()),
            "boolean" => Ok(S.bool()),
            "double" => Ok(S.dbl()),
            "bigint" | "long" => Ok(S.long()),
            "array" => {
                self.enter()?;
                self.expect('<')?;
                let element = self.node(&path.push_index(0))?;
                self.expect('>')?;
                self.depth -= 1;
                Ok(S.list(element))
            }
            "struct" => {
                self.enter()?;
                self.expect('<')?;
                let mut fields = Vec::new();
                if self.eat('>') {
                    self.depth -= 1;
                    return Ok(S.obj(fields));
                }
                loop {
                    let name = self.field_name()?;
                    self.expect(':')?;
                    let node = self.node(&path.push_field(&name))?;
                    fields.push(FieldSchema::new(name, node));
                    if !self.eat(',') {
                        break;
                    }
                }
                self.expect('>')?;
                self.depth -= 1;
                Ok(S.obj(fields))
            }
            "map" => {
                self.expect('<')?;
                let key = self.ident()?.to_ascii_lowercase();
                if key == "string" {
                    Err(SchemaError::UnsupportedKind {
                        kind: "map".into(),
                        path: path.to_path(),
                    })
                } else {
                    Err(SchemaError::NonStringMapKey {
                        key_kind: key,
                        path: path.to_path(),
                    })
                }
            }
            other if UNSUPPORTED.contains(&other) => Err(SchemaError::UnsupportedKind {
                kind: other.to_string(),
                path: path.to_path(),
            }),
            _ => Err(SchemaError::Syntax {
                position: start,
                message: format!("unknown type `{keyword}`"),
            }),
        }
    }
}
