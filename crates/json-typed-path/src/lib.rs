//! Location breadcrumbs for schema-directed JSON decoding.
//!
//! A [`Path`] names a node relative to the document root using the
//! `$`-rooted dot/bracket notation: `$`, `$.actor`, `$.tags[0]`,
//! `$["first name"]`. [`LazyPath`] is the stack-linked form threaded through
//! a recursive walk; it is only turned into an owned [`Path`] when a caller
//! actually needs one (usually when reporting an error).

mod lazy;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

pub use lazy::LazyPath;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("path must start with `$`")]
    MissingRoot,
    #[error("unexpected character {found:?} at byte {position}")]
    Unexpected { position: usize, found: char },
    #[error("unexpected end of path")]
    UnexpectedEnd,
    #[error("invalid array index at byte {position}")]
    InvalidIndex { position: usize },
    #[error("invalid quoted field name at byte {position}")]
    InvalidQuoted { position: usize },
}

/// One step of a [`Path`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}

/// An owned, root-relative location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    /// The document root, rendered as `$`.
    pub fn root() -> Self {
        Self::default()
    }

    pub fn from_segments(segments: Vec<PathSegment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn push_field(&mut self, name: impl Into<String>) {
        self.segments.push(PathSegment::Field(name.into()));
    }

    pub fn push_index(&mut self, index: usize) {
        self.segments.push(PathSegment::Index(index));
    }

    /// Builder-style [`Path::push_field`].
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.push_field(name);
        self
    }

    /// Builder-style [`Path::push_index`].
    pub fn index(mut self, index: usize) -> Self {
        self.push_index(index);
        self
    }

    /// The last segment, if any.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    /// The location one step up, or `None` at the root.
    pub fn parent(&self) -> Option<Path> {
        let (_, rest) = self.segments.split_last()?;
        Some(Path::from_segments(rest.to_vec()))
    }

    /// Render as an RFC 6901 JSON Pointer (`""` for the root).
    ///
    /// Examples:
    /// - `$ -> ""`
    /// - `$.a/b[0] -> "/a~1b/0"`
    pub fn to_json_pointer(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            match segment {
                PathSegment::Field(name) => out.push_str(&escape_component(name)),
                PathSegment::Index(index) => out.push_str(&index.to_string()),
            }
        }
        out
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in &self.segments {
            match segment {
                PathSegment::Field(name) if is_identifier(name) => write!(f, ".{name}")?,
                PathSegment::Field(name) => {
                    let quoted = serde_json::to_string(name).map_err(|_| fmt::Error)?;
                    write!(f, "[{quoted}]")?;
                }
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl FromStr for Path {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_path(s)
    }
}

impl<'a> From<&LazyPath<'a>> for Path {
    fn from(lazy: &LazyPath<'a>) -> Self {
        lazy.to_path()
    }
}

/// Escapes one JSON Pointer token component.
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}

/// Whether `name` can be written after a `.` without quoting.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Parse the dot/bracket notation produced by `Path`'s `Display`.
pub fn parse_path(input: &str) -> Result<Path, PathError> {
    let bytes = input.as_bytes();
    if bytes.first() != Some(&b'$') {
        return Err(PathError::MissingRoot);
    }
    let mut path = Path::root();
    let mut pos = 1;
    while pos < bytes.len() {
        match bytes[pos] {
            b'.' => {
                let start = pos + 1;
                let len = input[start..]
                    .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
                    .unwrap_or(input.len() - start);
                let name = &input[start..start + len];
                if !is_identifier(name) {
                    return match input[start..].chars().next() {
                        Some(found) => Err(PathError::Unexpected {
                            position: start,
                            found,
                        }),
                        None => Err(PathError::UnexpectedEnd),
                    };
                }
                path.push_field(name);
                pos = start + len;
            }
            b'[' => {
                let start = pos + 1;
                match bytes.get(start) {
                    Some(b'"') => {
                        let end = closing_quote(bytes, start + 1)
                            .ok_or(PathError::InvalidQuoted { position: start })?;
                        let name: String = serde_json::from_str(&input[start..=end])
                            .map_err(|_| PathError::InvalidQuoted { position: start })?;
                        path.push_field(name);
                        pos = end + 1;
                    }
                    Some(b) if b.is_ascii_digit() => {
                        let len = input[start..]
                            .find(|c: char| !c.is_ascii_digit())
                            .unwrap_or(input.len() - start);
                        let index = input[start..start + len]
                            .parse()
                            .map_err(|_| PathError::InvalidIndex { position: start })?;
                        path.push_index(index);
                        pos = start + len;
                    }
                    Some(_) => return Err(PathError::InvalidIndex { position: start }),
                    None => return Err(PathError::UnexpectedEnd),
                }
                match bytes.get(pos) {
                    Some(b']') => pos += 1,
                    Some(_) => {
                        return Err(PathError::Unexpected {
                            position: pos,
                            found: input[pos..].chars().next().unwrap_or(']'),
                        })
                    }
                    None => return Err(PathError::UnexpectedEnd),
                }
            }
            _ => {
                return Err(PathError::Unexpected {
                    position: pos,
                    found: input[pos..].chars().next().unwrap_or('$'),
                })
            }
        }
    }
    Ok(path)
}

/// Byte offset of the first unescaped `"` at or after `from`.
fn closing_quote(bytes: &[u8], from: usize) -> Option<usize> {
    let mut escaped = false;
    for (offset, &b) in bytes.get(from..)?.iter().enumerate() {
        match b {
            _ if escaped => escaped = false,
            b'\\' => escaped = true,
            b'"' => return Some(from + offset),
            _ => {}
        }
    }
    None
}
