use crate::{Path, PathSegment};

/// A location built on the stack while recursing.
///
/// Each level borrows its parent, so extending the path costs nothing until
/// [`LazyPath::to_path`] walks the chain back to the root.
#[derive(Debug, Clone, Copy)]
pub enum LazyPath<'a> {
    Root,
    Field {
        parent: &'a LazyPath<'a>,
        name: &'a str,
    },
    Index {
        parent: &'a LazyPath<'a>,
        index: usize,
    },
}

impl<'a> LazyPath<'a> {
    pub fn root() -> Self {
        LazyPath::Root
    }

    pub fn push_field(&'a self, name: &'a str) -> LazyPath<'a> {
        LazyPath::Field { parent: self, name }
    }

    pub fn push_index(&'a self, index: usize) -> LazyPath<'a> {
        LazyPath::Index {
            parent: self,
            index,
        }
    }

    /// Number of segments between this node and the root.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut node = self;
        while let LazyPath::Field { parent, .. } | LazyPath::Index { parent, .. } = node {
            depth += 1;
            node = *parent;
        }
        depth
    }

    pub fn to_path(&self) -> Path {
        let mut segments = Vec::with_capacity(self.depth());
        let mut node = self;
        loop {
            match node {
                LazyPath::Root => break,
                LazyPath::Field { parent, name } => {
                    segments.push(PathSegment::Field((*name).to_string()));
                    node = *parent;
                }
                LazyPath::Index { parent, index } => {
                    segments.push(PathSegment::Index(*index));
                    node = *parent;
                }
            }
        }
        segments.reverse();
        Path::from_segments(segments)
    }
}
