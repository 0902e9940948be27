//! Outline flattening for comparison.

use serde::{Deserialize, Serialize};

use crate::model::{HeadingLevel, OutlineNode};

/// One heading as a comparable `(text, level, page)` tuple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FlatHeading {
    pub text: String,
    pub level: HeadingLevel,
    pub page: u32,
}

impl FlatHeading {
    pub fn new(text: impl Into<String>, level: HeadingLevel, page: u32) -> Self {
        Self {
            text: text.into(),
            level,
            page,
        }
    }
}

impl From<&OutlineNode> for FlatHeading {
    fn from(node: &OutlineNode) -> Self {
        Self::new(node.text.clone(), node.level, node.page)
    }
}

/// Pre-order traversal: each node, then its children, then the next sibling.
pub fn flatten_outline(outline: &[OutlineNode]) -> Vec<FlatHeading> {
    fn walk(nodes: &[OutlineNode], out: &mut Vec<FlatHeading>) {
        for node in nodes {
            out.push(FlatHeading::from(node));
            walk(&node.children, out);
        }
    }

    let mut flat = Vec::new();
    walk(outline, &mut flat);
    flat
}
