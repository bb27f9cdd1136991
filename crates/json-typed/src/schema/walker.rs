//! Schema walker.

use super::schema::SchemaNode;

/// Walks every node in a schema tree, calling the visitor for each node.
pub struct Walker;

impl Walker {
    /// Walk the entire schema tree rooted at `schema` in pre-order, calling
    /// `on_type` with every node and its depth (the root is at depth 1).
    pub fn walk(schema: &SchemaNode, on_type: &mut dyn FnMut(&SchemaNode, usize)) {
        Self::walk_node(schema, 1, on_type);
    }

    fn walk_node(schema: &SchemaNode, depth: usize, on_type: &mut dyn FnMut(&SchemaNode, usize)) {
        on_type(schema, depth);
        match schema {
            SchemaNode::Primitive(_) => {}
            SchemaNode::List(l) => Self::walk_node(&l.element, depth + 1, on_type),
            SchemaNode::Struct(s) => {
                for field in &s.fields {
                    Self::walk_node(&field.node, depth + 1, on_type);
                }
            }
        }
    }
}

/// Size of a schema tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchemaStats {
    pub nodes: usize,
    pub leaves: usize,
    pub max_depth: usize,
}

impl SchemaStats {
    pub fn of(schema: &SchemaNode) -> Self {
        let mut stats = Self::default();
        Walker::walk(schema, &mut |node, depth| {
            stats.nodes += 1;
            if node.is_primitive() {
                stats.leaves += 1;
            }
            stats.max_depth = stats.max_depth.max(depth);
        });
        stats
    }
}
